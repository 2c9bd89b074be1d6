//! Error types for the container reader.

use lqbin_core::SheetError;

/// Errors produced by [`LqbinReader`](crate::LqbinReader) and
/// [`Container`](crate::Container).
#[derive(Debug, thiserror::Error)]
pub enum LqbinError {
    /// I/O error while opening or memory-mapping a file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The outer protobuf container could not be decoded.
    #[error("invalid container: {0}")]
    Container(#[from] prost::DecodeError),

    /// The flattened sheet schemas and the sheet data records cannot be
    /// paired by position.
    #[error("container has {schemas} sheet schema(s) but {sheets} sheet data record(s)")]
    SchemaDataCountMismatch { schemas: usize, sheets: usize },

    /// A requested sheet name is not present in the container.
    #[error("sheet '{sheet}' not found")]
    SheetNotFound { sheet: String },

    /// The worker pool for parallel decoding could not be created.
    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// A sheet failed to decode.
    #[error(transparent)]
    Sheet(#[from] SheetError),
}
