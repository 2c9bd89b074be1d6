//! Flattened, decoder-ready view of a config-table container.

use lqbin_core::{FieldSchema, FieldType, SheetSchema};
use prost::Message;

use crate::{error::LqbinError, proto};

/// One sheet: its schema paired with its raw rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub table: String,
    pub name: String,
    pub schema: SheetSchema,
    pub rows: Vec<Vec<u8>>,
}

impl Sheet {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Decoded container with schemas and data already paired per sheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Container {
    pub version: String,
    pub sheets: Vec<Sheet>,
}

impl Container {
    /// Decode a serialized `ConfigTables` message.
    pub fn decode(bytes: &[u8]) -> Result<Self, LqbinError> {
        let tables = proto::ConfigTables::decode(bytes)?;
        Self::from_proto(tables)
    }

    /// Flatten table schemas into sheet schemas, in table order, and pair the
    /// n-th sheet schema with the n-th sheet data record.
    pub fn from_proto(tables: proto::ConfigTables) -> Result<Self, LqbinError> {
        let schemas: Vec<proto::SheetSchema> = tables
            .schemas
            .into_iter()
            .flat_map(|table| table.sheets)
            .collect();

        if schemas.len() != tables.datas.len() {
            return Err(LqbinError::SchemaDataCountMismatch {
                schemas: schemas.len(),
                sheets: tables.datas.len(),
            });
        }

        let sheets = schemas
            .into_iter()
            .zip(tables.datas)
            .map(|(schema, data)| {
                if schema.name != data.sheet {
                    tracing::warn!(
                        schema = %schema.name,
                        sheet = %data.sheet,
                        "sheet schema name differs from sheet data name"
                    );
                }
                Sheet {
                    table: data.table,
                    name: data.sheet,
                    schema: schema.fields.iter().map(proto::Field::to_field_schema).collect(),
                    rows: data.data,
                }
            })
            .collect();

        Ok(Self {
            version: tables.version,
            sheets,
        })
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Keep only the named sheets, in container order.
    ///
    /// Fails if any name does not match a sheet.
    pub fn retain_sheets<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), LqbinError> {
        if let Some(missing) = names.iter().find(|n| self.sheet(n.as_ref()).is_none()) {
            return Err(LqbinError::SheetNotFound {
                sheet: missing.as_ref().to_string(),
            });
        }
        self.sheets
            .retain(|s| names.iter().any(|n| n.as_ref() == s.name));
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.sheets.iter().map(Sheet::row_count).sum()
    }
}

impl proto::Field {
    pub fn to_field_schema(&self) -> FieldSchema {
        FieldSchema::new(
            self.field_name.clone(),
            FieldType::from(self.pb_type.as_str()),
            self.array_length,
        )
        .with_wire_index(self.pb_index)
    }
}
