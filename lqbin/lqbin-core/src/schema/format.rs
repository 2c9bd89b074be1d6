use std::fmt::{Error, Write as _};

use super::FieldSchema;

/// Format field descriptors one per line:
/// `name: { type: uint32, pb_index: 1 }`, with `array_length` added for arrays.
pub fn format_sheet_schema(fields: impl AsRef<[FieldSchema]>) -> Result<String, Error> {
    let mut out = String::new();

    for field in fields.as_ref() {
        write!(out, "{}: {{ type: {}", field.name, field.field_type)?;
        if field.is_array() {
            write!(out, ", array_length: {}", field.array_length)?;
        }
        writeln!(out, ", pb_index: {} }}", field.wire_index)?;
    }

    Ok(out)
}
