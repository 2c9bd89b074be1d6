//! Shared helpers for building `ConfigTables` containers in tests.

#![allow(dead_code)]

use std::path::PathBuf;

use lqbin::proto::{ConfigTables, Field, SheetData, SheetSchema, TableSchema};
use prost::Message;

pub fn field(name: &str, pb_type: &str, array_length: u32, pb_index: u32) -> Field {
    Field {
        field_name: name.to_string(),
        array_length,
        pb_type: pb_type.to_string(),
        pb_index,
    }
}

pub fn sheet_schema(name: &str, fields: Vec<Field>) -> SheetSchema {
    SheetSchema {
        name: name.to_string(),
        fields,
    }
}

pub fn table(name: &str, sheets: Vec<SheetSchema>) -> TableSchema {
    TableSchema {
        name: name.to_string(),
        sheets,
    }
}

pub fn sheet_data(table: &str, sheet: &str, rows: Vec<Vec<u8>>) -> SheetData {
    SheetData {
        table: table.to_string(),
        sheet: sheet.to_string(),
        data: rows,
    }
}

/// Row of a `{ id: uint32, name: string }` sheet.
pub fn id_name_row(id: u8, name: &str) -> Vec<u8> {
    let mut row = vec![0x08, id, 0x12, name.len() as u8];
    row.extend(name.as_bytes());
    row
}

/// Two tables: `item` with sheets `item_a` and `item_b`, `desc` with `desc_a`.
pub fn sample_tables() -> ConfigTables {
    let id_name = || {
        vec![
            field("id", "uint32", 0, 1),
            field("name", "string", 0, 2),
        ]
    };
    ConfigTables {
        version: "0.10.83.w".to_string(),
        schemas: vec![
            table(
                "item",
                vec![
                    sheet_schema("item_a", id_name()),
                    sheet_schema("item_b", id_name()),
                ],
            ),
            table(
                "desc",
                vec![sheet_schema(
                    "desc_a",
                    vec![field("weights", "float", 2, 1)],
                )],
            ),
        ],
        datas: vec![
            sheet_data(
                "item",
                "item_a",
                vec![id_name_row(1, "one"), id_name_row(2, "two")],
            ),
            sheet_data("item", "item_b", vec![id_name_row(3, "three")]),
            sheet_data("desc", "desc_a", vec![float_pair_row(0.5, 2.0)]),
        ],
    }
}

/// Row of a `{ weights: float[2] }` sheet.
pub fn float_pair_row(a: f32, b: f32) -> Vec<u8> {
    let mut row = vec![0x0A, 0x08];
    row.extend(a.to_le_bytes());
    row.extend(b.to_le_bytes());
    row
}

/// Serialize `tables` into a fresh file under the system temp directory.
pub fn write_container(tag: &str, tables: &ConfigTables) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("lqbin-test-{}-{tag}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("lqc.lqbin");
    std::fs::write(&path, tables.encode_to_vec()).unwrap();
    path
}
