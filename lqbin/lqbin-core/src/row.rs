//! Schema-driven decoding of one raw row.
//!
//! Row layout, per field in schema order:
//! - scalar: `tag value`
//! - non-string array: `tag marker value*N`
//! - string array: `(tag string)*N`
//!
//! `tag` is a varint and `marker` a single byte. Both are framing only and
//! are skipped without inspection.

use std::sync::Arc;

use crate::{
    cursor::RowCursor,
    error::{CursorError, RowDecodeError},
    options::{DecodeOptions, TextEncoding},
    schema::{FieldSchema, FieldType, SheetSchema},
    value::Value,
};

/// Decode one row into one [`Value`] per schema field.
pub fn decode_row(
    schema: &SheetSchema,
    row: &[u8],
    options: &DecodeOptions,
) -> Result<Vec<Value>, RowDecodeError> {
    let mut cursor = RowCursor::new(row);
    schema
        .iter()
        .map(|field| decode_field(&mut cursor, field, options))
        .collect()
}

/// Decode a single field at the cursor position, advancing past it.
pub fn decode_field(
    cursor: &mut RowCursor<'_>,
    field: &FieldSchema,
    options: &DecodeOptions,
) -> Result<Value, RowDecodeError> {
    let element = Element::of(field)?;
    let encoding = options.text_encoding;
    let at_field = |source: CursorError| RowDecodeError::Field {
        field: field.name.clone(),
        source,
    };

    if !field.is_array() {
        cursor.read_var_u32().map_err(at_field)?;
        return element.read(cursor, encoding).map_err(at_field);
    }

    let len = field.array_length as usize;
    let mut items = Vec::with_capacity(len.min(cursor.remaining()));
    match element {
        Element::String => {
            for _ in 0..len {
                cursor.read_var_u32().map_err(at_field)?;
                items.push(element.read(cursor, encoding).map_err(at_field)?);
            }
        }
        Element::VarUint | Element::Float => {
            cursor.read_var_u32().map_err(at_field)?;
            cursor.skip(1).map_err(at_field)?;
            for _ in 0..len {
                items.push(element.read(cursor, encoding).map_err(at_field)?);
            }
        }
    }
    Ok(Value::Array(items))
}

#[derive(Debug, Clone, Copy)]
enum Element {
    VarUint,
    String,
    Float,
}

impl Element {
    fn of(field: &FieldSchema) -> Result<Self, RowDecodeError> {
        match &field.field_type {
            FieldType::UInt32 | FieldType::Int32 => Ok(Self::VarUint),
            FieldType::String => Ok(Self::String),
            FieldType::Float => Ok(Self::Float),
            FieldType::Unknown(type_name) => Err(RowDecodeError::UnsupportedFieldType {
                field: field.name.clone(),
                type_name: type_name.clone(),
            }),
        }
    }

    fn read(self, cursor: &mut RowCursor<'_>, encoding: TextEncoding) -> Result<Value, CursorError> {
        Ok(match self {
            Self::VarUint => Value::U32(cursor.read_var_u32()?),
            Self::String => Value::String(Arc::from(cursor.read_string(encoding)?)),
            Self::Float => Value::F32(cursor.read_f32()?),
        })
    }
}
