//! Report assembly over the billing core: the in-crate stand-in for the
//! dashboard code that turns raw expense rows into monthly figures.

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::billing::{row_contribution, total_for_period};
use crate::models::{BillingType, ExpenseRow, Period};

/// One month's amortized figures, ready for display. Amounts are rounded to
/// cents once, here at the end — contributions stay exact until assembly.
#[derive(Debug, Clone)]
pub struct MonthlySummary {
    pub period: Period,
    pub total: Decimal,
    /// Rows that made a non-zero contribution to this month.
    pub contributing: usize,
    pub by_billing_type: Vec<(BillingType, Decimal)>,
    pub by_category: Vec<(String, Decimal)>,
}

impl MonthlySummary {
    pub fn compute(rows: &[ExpenseRow], period: Period) -> Self {
        let mut total = Decimal::ZERO;
        let mut contributing = 0;
        let mut by_type: Vec<(BillingType, Decimal)> = Vec::new();
        let mut by_category: HashMap<String, Decimal> = HashMap::new();

        for row in rows {
            let contribution = row_contribution(row, period);
            total += contribution;
            if contribution == Decimal::ZERO {
                continue;
            }
            contributing += 1;

            let billing = row.billing_type();
            match by_type.iter_mut().find(|(b, _)| *b == billing) {
                Some((_, sum)) => *sum += contribution,
                None => by_type.push((billing, contribution)),
            }

            let category = row
                .category
                .clone()
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| "Uncategorized".into());
            *by_category.entry(category).or_insert(Decimal::ZERO) += contribution;
        }

        let mut by_category: Vec<(String, Decimal)> = by_category.into_iter().collect();
        // Largest first; ties broken by name so output is stable
        by_category.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        by_type.sort_by(|a, b| b.1.cmp(&a.1));

        Self {
            period,
            total: total.round_dp(2),
            contributing,
            by_billing_type: by_type
                .into_iter()
                .map(|(b, d)| (b, d.round_dp(2)))
                .collect(),
            by_category: by_category
                .into_iter()
                .map(|(c, d)| (c, d.round_dp(2)))
                .collect(),
        }
    }
}

/// Trailing monthly totals ending at `end`, oldest first. Feeds the trend
/// output in the CLI.
pub fn trend(rows: &[ExpenseRow], end: Period, months: usize) -> Vec<(Period, Decimal)> {
    let mut periods = Vec::with_capacity(months);
    let mut cursor = end;
    for _ in 0..months {
        periods.push(cursor);
        cursor = cursor.prev();
    }
    periods.reverse();
    periods
        .into_iter()
        .map(|p| (p, total_for_period(rows, p).round_dp(2)))
        .collect()
}

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"R$1,234,567.89"`
pub fn format_amount(val: Decimal) -> String {
    let abs = val.abs();
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if val < Decimal::ZERO {
        format!("-R${with_commas}.{dec_part}")
    } else {
        format!("R${with_commas}.{dec_part}")
    }
}
