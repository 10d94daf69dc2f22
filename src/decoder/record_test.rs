use crate::decoder::{DecodeError, Record, ResolvedRow};
use serde_json::json;

fn wire_order_row() -> ResolvedRow {
    // Original slot order: region, city, neighborhood, id, hijri date,
    // gregorian date, classification, price, space, property count.
    ResolvedRow::new(vec![
        json!("Riyadh"),
        json!("Riyadh City"),
        json!("Al Olaya"),
        json!(900123),
        json!("1445/11/06"),
        json!("2024/05/14"),
        json!("Residential"),
        json!(1_500_000),
        json!(625.5),
        json!(1),
    ])
}

#[test]
fn applies_the_swap_then_reverse_permutation_bit_for_bit() {
    let record = Record::from_resolved(wire_order_row()).expect("record maps");
    assert_eq!(record.space, json!(625.5));
    assert_eq!(record.price, json!(1_500_000));
    assert_eq!(record.number_of_properties, json!(1));
    assert_eq!(record.classification, json!("Residential"));
    assert_eq!(record.islamic_date, json!("1445/11/06"));
    assert_eq!(record.date, "2024/05/14");
    assert_eq!(record.id, json!(900123));
    assert_eq!(record.city_neighborhood, json!("Al Olaya"));
    assert_eq!(record.city, json!("Riyadh City"));
    assert_eq!(record.region, json!("Riyadh"));
}

#[test]
fn hand_computed_example_of_the_permutation() {
    // [a0..a9] must come out as [a8, a7, a9, a6, a4, a5, a3, a2, a1, a0]
    // when read back in field order.
    let row = ResolvedRow::new((0..10).map(|i| json!(format!("a{i}"))).collect());
    let mut row = row.into_values();
    row[5] = json!("2024/05/01");
    let record = Record::from_resolved(ResolvedRow::new(row)).expect("record maps");
    assert_eq!(record.space, json!("a8"));
    assert_eq!(record.price, json!("a7"));
    assert_eq!(record.number_of_properties, json!("a9"));
    assert_eq!(record.classification, json!("a6"));
    assert_eq!(record.islamic_date, json!("a4"));
    assert_eq!(record.date, "2024/05/01");
    assert_eq!(record.id, json!("a3"));
    assert_eq!(record.city_neighborhood, json!("a2"));
    assert_eq!(record.city, json!("a1"));
    assert_eq!(record.region, json!("a0"));
}

#[test]
fn serializes_with_the_output_field_names() {
    let record = Record::from_resolved(wire_order_row()).expect("record maps");
    let value = serde_json::to_value(&record).expect("record serializes");
    assert_eq!(value["space"], json!(625.5));
    assert_eq!(value["number_of_properties"], json!(1));
    assert_eq!(value["islamic_date"], json!("1445/11/06"));
    assert_eq!(value["city_neighborhood"], json!("Al Olaya"));
    assert_eq!(value["date"], json!("2024/05/14"));
}

#[test]
fn rejects_rows_of_the_wrong_width() {
    let err = Record::from_resolved(ResolvedRow::new(vec![json!(1); 7]))
        .expect_err("short row must fail");
    assert!(matches!(
        err,
        DecodeError::RowWidth {
            expected: 10,
            supplied: 7
        }
    ));
}

#[test]
fn rejects_a_non_text_date_field() {
    let mut values = wire_order_row().into_values();
    values[5] = json!(20240514);
    let err = Record::from_resolved(ResolvedRow::new(values)).expect_err("numeric date must fail");
    assert!(matches!(err, DecodeError::NonTextDate(v) if v == json!(20240514)));
}
