//! Error types for the cursor, row and sheet layers.

/// Error returned by the [`RowCursor`](crate::RowCursor) primitives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CursorError {
    /// A read would consume bytes past the end of the row buffer.
    #[error("read of {requested} byte(s) at offset {offset} exceeds buffer ({remaining} remaining)")]
    OutOfBounds {
        offset: usize,
        requested: usize,
        remaining: usize,
    },

    /// A varint kept its continuation bit set past the group limit.
    #[error("varint starting at offset {offset} does not terminate")]
    MalformedVarint { offset: usize },
}

/// Error returned by [`decode_row`](crate::decode_row) and
/// [`decode_field`](crate::decode_field). Decoding stops at the first error;
/// no partial row is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowDecodeError {
    /// The field's declared type has no decoding rule.
    #[error("unsupported type '{type_name}' for field '{field}'")]
    UnsupportedFieldType { field: String, type_name: String },

    /// A primitive read failed while decoding the named field.
    #[error("field '{field}': {source}")]
    Field {
        field: String,
        #[source]
        source: CursorError,
    },
}

impl RowDecodeError {
    /// The underlying cursor error, if any.
    pub fn cursor_error(&self) -> Option<&CursorError> {
        match self {
            RowDecodeError::Field { source, .. } => Some(source),
            RowDecodeError::UnsupportedFieldType { .. } => None,
        }
    }
}

/// Error returned by [`decode_sheet`](crate::decode_sheet).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to decode row {row} of sheet '{sheet}': {source}")]
pub struct SheetError {
    pub sheet: String,
    pub row: usize,
    #[source]
    pub source: RowDecodeError,
}

