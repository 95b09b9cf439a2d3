//! Tests for CSV reading and field classification

use crate::app::models::TableValue;
use crate::app::services::series_extractor::{parse_table_value, read_tabular_rows};

#[test]
fn test_field_classification() {
    assert_eq!(parse_table_value("2.5"), TableValue::Number(2.5));
    assert_eq!(parse_table_value("  1e3 "), TableValue::Number(1000.0));
    assert_eq!(parse_table_value("-4.2E-2"), TableValue::Number(-0.042));
    assert_eq!(parse_table_value(""), TableValue::Missing);
    assert_eq!(parse_table_value("   "), TableValue::Missing);
    assert_eq!(parse_table_value("null"), TableValue::Missing);
    assert_eq!(parse_table_value("NULL"), TableValue::Missing);
    assert_eq!(
        parse_table_value("EXFOR"),
        TableValue::Text("EXFOR".to_string())
    );
}

#[test]
fn test_non_finite_tokens_kept_as_text() {
    // "inf"/"NaN" parse as floats but are useless as data points
    assert_eq!(parse_table_value("inf"), TableValue::Text("inf".to_string()));
    assert_eq!(parse_table_value("NaN"), TableValue::Text("NaN".to_string()));
}

#[test]
fn test_read_rows_with_mixed_fields() {
    let text = "EN (EV) 1.1,DATA (B) 0.1,DATA-ERR (B) 0.911,Reference\n\
                1000,2.5,0.1,Macklin 1998\n\
                2000,3.1,null,Macklin 1998\n";

    let rows = read_tabular_rows(text).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["EN (EV) 1.1"], TableValue::Number(1000.0));
    assert_eq!(rows[0]["DATA (B) 0.1"], TableValue::Number(2.5));
    assert_eq!(
        rows[0]["Reference"],
        TableValue::Text("Macklin 1998".to_string())
    );
    assert_eq!(rows[1]["DATA-ERR (B) 0.911"], TableValue::Missing);
}

#[test]
fn test_read_ragged_rows() {
    let text = "a,b,c\n1,2\n1,2,3,4\n";

    let rows = read_tabular_rows(text).unwrap();

    assert_eq!(rows.len(), 2);
    // Short record: missing trailing column is simply absent
    assert_eq!(rows[0].len(), 2);
    assert!(!rows[0].contains_key("c"));
    // Long record: field beyond the header width is dropped
    assert_eq!(rows[1].len(), 3);
}

#[test]
fn test_read_empty_payload() {
    let rows = read_tabular_rows("").unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_read_header_only() {
    let rows = read_tabular_rows("EN (EV) 1.1,DATA (B) 0.1\n").unwrap();
    assert!(rows.is_empty());
}
