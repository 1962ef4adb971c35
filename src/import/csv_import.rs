use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde_json::Value;
use std::path::Path;
use std::str::FromStr;

use crate::models::{CalendarDate, ExpenseRow};

/// Column mapping for an expense CSV.
#[derive(Debug, Clone)]
pub struct CsvProfile {
    pub name: String,
    pub amount_column: usize,
    pub date_column: Option<usize>,
    pub billing_type_column: Option<usize>,
    pub description_column: Option<usize>,
    pub category_column: Option<usize>,
}

impl Default for CsvProfile {
    fn default() -> Self {
        Self {
            name: "Custom".into(),
            amount_column: 0,
            date_column: Some(1),
            billing_type_column: Some(2),
            description_column: None,
            category_column: None,
        }
    }
}

pub struct CsvImporter;

impl CsvImporter {
    /// Read the CSV and return headers + all rows as strings.
    pub fn preview(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>)> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_path(path)
            .context("Failed to open CSV file")?;

        let mut all_rows: Vec<Vec<String>> = Vec::new();
        for result in rdr.records() {
            let record = result.context("Failed to read CSV record")?;
            all_rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        if all_rows.is_empty() {
            anyhow::bail!("CSV file is empty");
        }

        // Try to detect if first row is a header
        let first_row = &all_rows[0];
        let looks_like_header = first_row.iter().all(|field| {
            let trimmed = field.trim();
            // Headers typically don't parse as dates or numbers
            Decimal::from_str(trimmed.replace(['$', ','], "").trim()).is_err()
                && CalendarDate::parse(trimmed).is_none()
        });

        if looks_like_header {
            let headers = all_rows.remove(0);
            Ok((headers, all_rows))
        } else {
            // Generate generic column names
            let headers: Vec<String> = (0..first_row.len())
                .map(|i| format!("Column {}", i + 1))
                .collect();
            Ok((headers, all_rows))
        }
    }

    /// Convert string rows into expense rows using the given profile.
    ///
    /// Cell values are carried through raw; coercion — and the
    /// degrade-to-zero policy for anything malformed — happens in the
    /// billing core, so a bad cell never aborts a load. Rows whose every
    /// mapped cell is empty are skipped.
    pub fn parse(rows: &[Vec<String>], profile: &CsvProfile) -> Vec<ExpenseRow> {
        let cell = |row: &[String], col: Option<usize>| -> Option<String> {
            col.and_then(|c| row.get(c))
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let mut expenses = Vec::new();
        for row in rows {
            let amount = cell(row, Some(profile.amount_column));
            let date = cell(row, profile.date_column);
            let billing_type = cell(row, profile.billing_type_column);
            if amount.is_none() && date.is_none() && billing_type.is_none() {
                continue;
            }

            expenses.push(ExpenseRow {
                amount: amount.map(Value::String),
                billing_type,
                date,
                expense_date: None,
                description: cell(row, profile.description_column),
                category: cell(row, profile.category_column),
                extra: serde_json::Map::new(),
            });
        }
        expenses
    }
}

/// Load expense rows from a CSV file, auto-detecting the export layout and
/// falling back to the default column order.
pub fn csv_rows(path: &Path) -> Result<Vec<ExpenseRow>> {
    let (headers, rows) = CsvImporter::preview(path)?;
    let profile = super::detect_export_format(&headers).unwrap_or_default();
    Ok(CsvImporter::parse(&rows, &profile))
}

#[cfg(test)]
#[path = "csv_import_tests.rs"]
mod tests;
