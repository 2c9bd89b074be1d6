//! Rendering of whole sheets as comma-separated text.

use std::io::{self, Write};

use crate::{
    error::SheetError,
    options::{RenderOptions, SheetOptions},
    row::decode_row,
    schema::SheetSchema,
    value::Value,
};

const SEPARATOR: &str = ", ";

/// Text rendering of one sheet: a header line followed by one line per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetOutput {
    pub name: String,
    pub lines: Vec<String>,
}

impl SheetOutput {
    pub fn header(&self) -> &str {
        self.lines.first().map(String::as_str).unwrap_or_default()
    }

    pub fn rows(&self) -> &[String] {
        self.lines.get(1..).unwrap_or_default()
    }

    /// All lines, each terminated by `\n`.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }

    /// Write all lines, each terminated by `\n`.
    pub fn write_to<W: Write>(&self, mut dest: W) -> io::Result<()> {
        for line in &self.lines {
            dest.write_all(line.as_bytes())?;
            dest.write_all(b"\n")?;
        }
        dest.flush()
    }
}

/// Field names in schema order, joined with `", "`.
pub fn render_header(schema: &SheetSchema) -> String {
    schema.field_names().collect::<Vec<_>>().join(SEPARATOR)
}

/// Decoded values joined with `", "`.
pub fn render_row(values: &[Value], options: &RenderOptions) -> String {
    values
        .iter()
        .map(|v| v.display(options.quote_style).to_string())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Decode every row of a sheet and render the result.
///
/// The first row that fails to decode aborts the sheet.
pub fn decode_sheet<I>(
    name: &str,
    schema: &SheetSchema,
    rows: I,
    options: &SheetOptions,
) -> Result<SheetOutput, SheetError>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let rows = rows.into_iter();
    let mut lines = Vec::with_capacity(rows.size_hint().0 + 1);
    lines.push(render_header(schema));

    for (index, row) in rows.enumerate() {
        let values =
            decode_row(schema, row.as_ref(), &options.decode).map_err(|source| SheetError {
                sheet: name.to_string(),
                row: index,
                source,
            })?;
        lines.push(render_row(&values, &options.render));
    }

    Ok(SheetOutput {
        name: name.to_string(),
        lines,
    })
}
