use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

use super::{BillingType, CalendarDate};

/// One expense row, as fetched from storage or a file export.
///
/// Rows arrive in whatever shape the code path that created them used:
/// `amount` may be a JSON number or a string, the anchor date may live in
/// `date` or in the legacy `expense_date` column, and `billing_type` may be
/// absent entirely. The resolution methods below normalize all of that.
/// Columns this module has no use for (`id`, `project_id`, ...) are carried
/// in `extra` untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenseRow {
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default)]
    pub billing_type: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub expense_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ExpenseRow {
    pub fn new(amount: Decimal, billing_type: BillingType, date: &str) -> Self {
        Self {
            amount: Some(Value::String(amount.to_string())),
            billing_type: Some(billing_type.as_str().to_string()),
            date: Some(date.to_string()),
            ..Self::default()
        }
    }

    /// Raw amount coerced to a decimal. Missing or unparsable values count
    /// as zero — one bad row must not take down a whole report.
    pub fn amount(&self) -> Decimal {
        match &self.amount {
            Some(Value::Number(n)) => Decimal::from_str(&n.to_string()).unwrap_or(Decimal::ZERO),
            Some(Value::String(s)) => parse_amount(s),
            _ => Decimal::ZERO,
        }
    }

    /// Billing type, defaulting to one-time when the column is absent.
    pub fn billing_type(&self) -> BillingType {
        self.billing_type
            .as_deref()
            .map(BillingType::parse)
            .unwrap_or(BillingType::Unica)
    }

    /// Anchor date, preferring `date` and falling back to the legacy
    /// `expense_date` column name.
    pub fn anchor_date(&self) -> Option<CalendarDate> {
        self.date
            .as_deref()
            .or(self.expense_date.as_deref())
            .and_then(CalendarDate::parse)
    }
}

/// Strip currency decoration before parsing, e.g. `"R$ 1,234.56"` → `1234.56`.
fn parse_amount(s: &str) -> Decimal {
    let cleaned = s.replace("R$", "").replace(['$', ','], "");
    Decimal::from_str(cleaned.trim()).unwrap_or(Decimal::ZERO)
}
