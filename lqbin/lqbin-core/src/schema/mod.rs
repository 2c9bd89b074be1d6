//! Field descriptors that fix the byte layout of a sheet's rows.

mod format;
mod types;

pub use format::format_sheet_schema;
pub use types::{FieldSchema, FieldType, SheetSchema};
