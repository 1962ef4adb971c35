#![allow(clippy::unwrap_used)]

use super::*;
use crate::billing::total_for_period;
use crate::models::{BillingType, Period};
use rust_decimal_macros::dec;
use std::io::Write;

fn make_csv_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
    raw.iter()
        .map(|r| r.iter().map(|s| s.to_string()).collect())
        .collect()
}

// ── preview ───────────────────────────────────────────────────

#[test]
fn test_preview_with_header() {
    let file = make_csv_file("amount,date,billing_type\n120,2025-01-01,mensal\n");
    let (headers, data) = CsvImporter::preview(file.path()).unwrap();
    assert_eq!(headers, vec!["amount", "date", "billing_type"]);
    assert_eq!(data.len(), 1);
    assert_eq!(data[0][0], "120");
}

#[test]
fn test_preview_without_header_generates_column_names() {
    let file = make_csv_file("120,2025-01-01,mensal\n64.9,2025-02-01,mensal\n");
    let (headers, data) = CsvImporter::preview(file.path()).unwrap();
    assert_eq!(headers[0], "Column 1");
    assert_eq!(data.len(), 2);
}

#[test]
fn test_preview_empty_file_fails() {
    let file = make_csv_file("");
    assert!(CsvImporter::preview(file.path()).is_err());
}

#[test]
fn test_preview_missing_file_fails() {
    assert!(CsvImporter::preview(std::path::Path::new("/nonexistent.csv")).is_err());
}

// ── parse ─────────────────────────────────────────────────────

#[test]
fn test_parse_default_profile() {
    let data = rows(&[
        &["120", "2025-01-01", "mensal"],
        &["500", "2025-01-01", "semanal"],
    ]);
    let expenses = CsvImporter::parse(&data, &CsvProfile::default());
    assert_eq!(expenses.len(), 2);
    assert_eq!(expenses[0].amount(), dec!(120));
    assert_eq!(expenses[0].billing_type(), BillingType::Mensal);
    assert_eq!(expenses[1].anchor_date().unwrap().weekday(), 3);
}

#[test]
fn test_parse_skips_blank_rows() {
    let data = rows(&[&["120", "2025-01-01", "mensal"], &["", "", ""]]);
    let expenses = CsvImporter::parse(&data, &CsvProfile::default());
    assert_eq!(expenses.len(), 1);
}

#[test]
fn test_parse_keeps_malformed_cells_raw() {
    // Coercion is the billing core's job; the load must not fail
    let data = rows(&[&["not-a-number", "garbage", "mensal"]]);
    let expenses = CsvImporter::parse(&data, &CsvProfile::default());
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].amount(), rust_decimal::Decimal::ZERO);
    assert!(expenses[0].anchor_date().is_none());
}

#[test]
fn test_parse_with_category_and_description() {
    let profile = CsvProfile {
        description_column: Some(3),
        category_column: Some(4),
        ..CsvProfile::default()
    };
    let data = rows(&[&["120", "2025-01-01", "mensal", "VPS", "hosting"]]);
    let expenses = CsvImporter::parse(&data, &profile);
    assert_eq!(expenses[0].description.as_deref(), Some("VPS"));
    assert_eq!(expenses[0].category.as_deref(), Some("hosting"));
}

#[test]
fn test_parse_short_row_does_not_panic() {
    let data = rows(&[&["120"]]);
    let expenses = CsvImporter::parse(&data, &CsvProfile::default());
    assert_eq!(expenses.len(), 1);
    assert!(expenses[0].date.is_none());
}

// ── csv_rows (end to end) ─────────────────────────────────────

#[test]
fn test_csv_rows_detects_legacy_export() {
    let file = make_csv_file(
        "descricao,valor,tipo_cobranca,data,categoria\n\
         VPS,120,mensal,2024-11-01,hosting\n\
         Designer,500,semanal,2025-01-01,servicos\n",
    );
    let expenses = csv_rows(file.path()).unwrap();
    assert_eq!(expenses.len(), 2);
    assert_eq!(
        total_for_period(&expenses, Period::new(2025, 1).unwrap()),
        dec!(2620)
    );
}

#[test]
fn test_csv_rows_plain_export_with_expense_date() {
    let file = make_csv_file(
        "amount,expense_date,billing_type\n300,2025-05-15,unica\n",
    );
    let expenses = csv_rows(file.path()).unwrap();
    assert_eq!(expenses.len(), 1);
    assert_eq!(
        total_for_period(&expenses, Period::new(2025, 5).unwrap()),
        dec!(300)
    );
}

#[test]
fn test_csv_rows_headerless_falls_back_to_default_profile() {
    let file = make_csv_file("120,2025-01-01,mensal\n");
    let expenses = csv_rows(file.path()).unwrap();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].billing_type(), BillingType::Mensal);
}
