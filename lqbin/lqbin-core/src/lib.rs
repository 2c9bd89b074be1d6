//! Container-agnostic core of `lqbin`: the byte cursor, the schema-driven row
//! decoder and the sheet serializer.
//!
//! Rows are opaque byte buffers whose layout is fixed by a [`SheetSchema`].
//! [`decode_row`] turns one buffer into a list of [`Value`]s and
//! [`decode_sheet`] renders a whole sheet into comma-separated text lines.

mod cursor;
mod error;
mod options;
mod row;
mod schema;
mod sheet;
mod value;

pub use cursor::{MAX_VARINT_GROUPS, RowCursor};
pub use error::{CursorError, RowDecodeError, SheetError};
pub use options::{DecodeOptions, QuoteStyle, RenderOptions, SheetOptions, TextEncoding};
pub use row::{decode_field, decode_row};
pub use schema::{FieldSchema, FieldType, SheetSchema, format_sheet_schema};
pub use sheet::{SheetOutput, decode_sheet, render_header, render_row};
pub use value::{RenderedValue, Value};
