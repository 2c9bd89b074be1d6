//! Typed values produced by the row decoder.

use std::{fmt, sync::Arc};

use crate::options::QuoteStyle;

/// Value decoded from one field of a row.
///
/// Arrays are one level deep; the schema has no way to describe nesting.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    U32(u32),
    F32(f32),
    String(Arc<str>),
    Array(Vec<Value>),
}

impl Value {
    pub fn string(s: impl AsRef<str>) -> Self {
        Self::String(Arc::from(s.as_ref()))
    }

    /// Text form used in sheet output.
    pub fn display(&self, quote_style: QuoteStyle) -> RenderedValue<'_> {
        RenderedValue {
            value: self,
            quote_style,
        }
    }
}

/// [`Display`](fmt::Display) adapter returned by [`Value::display`].
///
/// Integers print as plain decimal digits, floats use the shortest text that
/// round-trips, strings are wrapped in double quotes and arrays are bracketed
/// with `", "` between elements.
#[derive(Debug, Clone, Copy)]
pub struct RenderedValue<'a> {
    value: &'a Value,
    quote_style: QuoteStyle,
}

impl fmt::Display for RenderedValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::U32(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::String(s) => match self.quote_style {
                QuoteStyle::Verbatim => write!(f, "\"{s}\""),
                QuoteStyle::Escaped => write!(f, "\"{}\"", s.replace('"', "\"\"")),
            },
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item.display(self.quote_style))?;
                }
                f.write_str("]")
            }
        }
    }
}
