use super::CsvProfile;

/// Known expense-export header layouts.
/// Recognizes the legacy system's Portuguese export and the plain English
/// shape; returns None for anything else.
pub fn detect_export_format(headers: &[String]) -> Option<CsvProfile> {
    let h: Vec<String> = headers
        .iter()
        .map(|s| s.to_lowercase().trim().to_string())
        .collect();

    // Legacy export (pt-BR): "valor" + "tipo_cobranca"
    if h.contains(&"valor".into()) {
        return Some(CsvProfile {
            name: "Legacy export (pt-BR)".into(),
            amount_column: col_index(&h, "valor")?,
            date_column: col_index(&h, "data").or_else(|| col_index(&h, "data_despesa")),
            billing_type_column: col_index(&h, "tipo_cobranca").or_else(|| col_index(&h, "tipo")),
            description_column: col_index(&h, "descricao"),
            category_column: col_index(&h, "categoria"),
        });
    }

    // Plain export: "amount" with "date" or the legacy "expense_date"
    if h.contains(&"amount".into()) {
        return Some(CsvProfile {
            name: "Expense export".into(),
            amount_column: col_index(&h, "amount")?,
            date_column: col_index(&h, "date").or_else(|| col_index(&h, "expense_date")),
            billing_type_column: col_index(&h, "billing_type"),
            description_column: col_index(&h, "description"),
            category_column: col_index(&h, "category"),
        });
    }

    None
}

fn col_index(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

#[cfg(test)]
#[path = "detect_tests.rs"]
mod tests;
