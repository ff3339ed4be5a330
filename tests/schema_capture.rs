use rowcursor::{CursorResult, DataType, DefaultDataConverter, ResultCursor, RowCursor, Schema, VecRowSource, row};

#[test]
fn test_schema_from_json() -> CursorResult<()> {
    let json = r#"{
        "columns": [
            { "name": "id", "data_type": "BigInt" },
            { "name": "price", "data_type": { "Decimal": { "precision": 8, "scale": 3 } } }
        ]
    }"#;
    let schema: Schema = serde_json::from_str(json).expect("valid schema json");
    assert_eq!(schema.data_type(1), Some(&DataType::decimal(8, 3)));

    let cursor = RowCursor::new(VecRowSource::new(schema, vec![row![5i64, 12i32]]), DefaultDataConverter::new());
    assert_eq!(cursor.schema().column_count(), 2);

    cursor.advance()?;
    assert_eq!(cursor.get_long_by_name("id")?, 5);
    assert_eq!(cursor.get_decimal(2)?.map(|d| d.to_string()), Some("12.000".to_string()));
    Ok(())
}

#[test]
fn test_schema_round_trips_through_json() {
    let schema = Schema::new()
        .with_column("tags", DataType::Array(Box::new(DataType::Varchar(8))))
        .with_column("ok", DataType::Boolean);

    let json = serde_json::to_string(&schema).expect("serializable");
    let back: Schema = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back, schema);
}
