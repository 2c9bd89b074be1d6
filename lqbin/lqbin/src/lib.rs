//! Reads `lqc.lqbin` config-table containers and decodes their sheets.
//!
//! The container itself is a protobuf message ([`proto::ConfigTables`]).
//! Its table schemas are flattened into per-sheet schemas and paired by
//! position with the sheet data records, producing one [`Sheet`] each.
//! [`LqbinReader`] then decodes sheets in parallel with `lqbin-core`.

mod container;
mod error;
pub mod proto;
mod reader;

pub use container::{Container, Sheet};
pub use error::LqbinError;
pub use lqbin_core as core;
pub use reader::{LqbinReader, LqbinReaderBuilder};
