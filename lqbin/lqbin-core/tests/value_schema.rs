use lqbin_core::{FieldSchema, FieldType, SheetSchema, Value, format_sheet_schema};

#[test]
fn value_string_creates_arc_str_value() {
    let value = Value::string("hello");
    assert!(matches!(&value, Value::String(s) if s.as_ref() == "hello"));
    assert_eq!(value, Value::String("hello".into()));
}

#[test]
fn field_type_known_mappings() {
    assert_eq!(FieldType::from("uint32"), FieldType::UInt32);
    assert_eq!(FieldType::from("int32"), FieldType::Int32);
    assert_eq!(FieldType::from("string"), FieldType::String);
    assert_eq!(FieldType::from("float"), FieldType::Float);
}

#[test]
fn field_type_unknown_passthrough() {
    let ty = FieldType::from("double");
    assert_eq!(ty, FieldType::Unknown("double".to_string()));
    assert_eq!(ty.as_str(), "double");
}

#[test]
fn field_type_display_matches_as_str() {
    let values = [
        FieldType::UInt32,
        FieldType::Int32,
        FieldType::String,
        FieldType::Float,
        FieldType::Unknown("x".to_string()),
    ];
    for value in values {
        assert_eq!(value.to_string(), value.as_str());
    }
}

#[test]
fn field_schema_new_sets_all_fields() {
    let field = FieldSchema::new("ids", FieldType::UInt32, 3).with_wire_index(5);
    assert_eq!(field.name, "ids");
    assert_eq!(field.field_type, FieldType::UInt32);
    assert_eq!(field.array_length, 3);
    assert_eq!(field.wire_index, 5);
    assert!(field.is_array());
    assert!(!FieldSchema::new("id", FieldType::UInt32, 0).is_array());
}

#[test]
fn sheet_schema_formats_one_field_per_line() {
    let schema: SheetSchema = vec![
        FieldSchema::new("id", FieldType::UInt32, 0).with_wire_index(1),
        FieldSchema::new("names", FieldType::String, 2).with_wire_index(2),
    ]
    .into();

    let text = format_sheet_schema(&schema).unwrap();
    assert_eq!(
        text,
        "id: { type: uint32, pb_index: 1 }\nnames: { type: string, array_length: 2, pb_index: 2 }\n"
    );
    assert_eq!(schema.to_string(), text);
    assert_eq!(schema.field_names().collect::<Vec<_>>(), ["id", "names"]);
}
