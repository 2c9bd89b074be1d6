//! Protobuf messages of the outer container (`lq.config` package).

/// Descriptor of one column of a sheet.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Field {
    #[prost(string, tag = "1")]
    pub field_name: String,
    #[prost(uint32, tag = "2")]
    pub array_length: u32,
    #[prost(string, tag = "3")]
    pub pb_type: String,
    #[prost(uint32, tag = "4")]
    pub pb_index: u32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SheetSchema {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, repeated, tag = "3")]
    pub fields: Vec<Field>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct TableSchema {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, repeated, tag = "2")]
    pub sheets: Vec<SheetSchema>,
}

/// Raw rows of one sheet. Each entry of `data` is one row.
#[derive(Clone, PartialEq, prost::Message)]
pub struct SheetData {
    #[prost(string, tag = "1")]
    pub table: String,
    #[prost(string, tag = "2")]
    pub sheet: String,
    #[prost(bytes = "vec", repeated, tag = "3")]
    pub data: Vec<Vec<u8>>,
}

/// Root message of `lqc.lqbin`.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ConfigTables {
    #[prost(string, tag = "1")]
    pub version: String,
    #[prost(message, repeated, tag = "3")]
    pub schemas: Vec<TableSchema>,
    #[prost(message, repeated, tag = "4")]
    pub datas: Vec<SheetData>,
}
