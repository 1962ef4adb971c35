#![allow(clippy::unwrap_used)]

use super::*;
use crate::billing::total_for_period;
use crate::models::Period;
use rust_decimal_macros::dec;
use std::io::Write;

fn make_json_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_json_rows_supabase_shape() {
    let file = make_json_file(
        r#"[
            {"id": 1, "project_id": 9, "amount": 120, "billing_type": "mensal",
             "date": "2024-11-01", "category": "hosting"},
            {"id": 2, "amount": "500", "billing_type": "semanal",
             "expense_date": "2025-01-01"}
        ]"#,
    );
    let rows = json_rows(file.path()).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(
        total_for_period(&rows, Period::new(2025, 1).unwrap()),
        dec!(2620)
    );
}

#[test]
fn test_json_rows_empty_array() {
    let file = make_json_file("[]");
    assert!(json_rows(file.path()).unwrap().is_empty());
}

#[test]
fn test_json_rows_not_an_array_fails() {
    let file = make_json_file(r#"{"amount": 120}"#);
    assert!(json_rows(file.path()).is_err());
}

#[test]
fn test_json_rows_missing_file_fails() {
    assert!(json_rows(std::path::Path::new("/nonexistent.json")).is_err());
}
