use std::{
    fmt::{Display, Formatter, Result},
    ops::Deref,
};

/// Declared element type of a field, as named in the container (`pb_type`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// `uint32`
    UInt32,
    /// `int32` (read as an unsigned varint, like `uint32`)
    Int32,
    /// `string`
    String,
    /// `float`
    Float,
    /// Any other type name; decoding such a field fails.
    Unknown(String),
}

impl FieldType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::UInt32 => "uint32",
            Self::Int32 => "int32",
            Self::String => "string",
            Self::Float => "float",
            Self::Unknown(s) => s,
        }
    }
}

impl From<&str> for FieldType {
    fn from(s: &str) -> Self {
        match s {
            "uint32" => Self::UInt32,
            "int32" => Self::Int32,
            "string" => Self::String,
            "float" => Self::Float,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}

/// One field of a sheet schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: String,
    pub field_type: FieldType,
    /// Protobuf field number recorded by the container. Not used for decoding.
    pub wire_index: u32,
    /// `0` for a scalar, otherwise the fixed number of array elements.
    pub array_length: u32,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, field_type: FieldType, array_length: u32) -> Self {
        Self {
            name: name.into(),
            field_type,
            wire_index: 0,
            array_length,
        }
    }

    pub fn with_wire_index(mut self, wire_index: u32) -> Self {
        self.wire_index = wire_index;
        self
    }

    pub fn is_array(&self) -> bool {
        self.array_length > 0
    }
}

/// Ordered field list of one sheet. The order is the byte order of every row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SheetSchema(pub Vec<FieldSchema>);

impl SheetSchema {
    pub fn new(fields: Vec<FieldSchema>) -> Self {
        Self(fields)
    }

    pub fn as_slice(&self) -> &[FieldSchema] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSchema> {
        self.0.iter()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|f| f.name.as_str())
    }
}

impl From<Vec<FieldSchema>> for SheetSchema {
    fn from(value: Vec<FieldSchema>) -> Self {
        Self(value)
    }
}

impl FromIterator<FieldSchema> for SheetSchema {
    fn from_iter<I: IntoIterator<Item = FieldSchema>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl AsRef<[FieldSchema]> for SheetSchema {
    fn as_ref(&self) -> &[FieldSchema] {
        self.as_slice()
    }
}

impl Deref for SheetSchema {
    type Target = [FieldSchema];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl Display for SheetSchema {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = super::format_sheet_schema(self.as_slice())?;
        f.write_str(&text)
    }
}
