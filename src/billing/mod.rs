//! The amortization core: converts a recurring expense into the contribution
//! it makes to one calendar month.
//!
//! Everything here is pure and deterministic — no clock reads, no I/O, no
//! shared state — so identical arguments always produce the identical
//! decimal, and report code can call in from any number of request contexts
//! without coordination.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{BillingType, CalendarDate, ExpenseRow, Period};

/// Number of times `weekday` (0 = Sunday .. 6 = Saturday) occurs in the
/// given month.
///
/// Walks every day of the month; always 4 or 5 for a real calendar month.
/// A month outside 1-12 is a caller contract violation — `Period` enforces
/// the range at the API boundary, and the walk simply yields 0 here.
pub fn count_weekday_occurrences(year: i32, month: u32, weekday: u32) -> u32 {
    let mut count = 0;
    for day in 1..=31 {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            break;
        };
        if date.weekday().num_days_from_sunday() == weekday {
            count += 1;
        }
    }
    count
}

/// Contribution of one expense to the target month.
///
/// - `mensal`: the full amount, every month.
/// - `anual`: amount ÷ 12 every month — the annual charge is smoothed
///   continuously, never booked whole in its anniversary month.
/// - `semanal`: amount × the number of times the anchor's weekday occurs in
///   the target month ("every Wednesday" billing, so 4 or 5 per month).
/// - `unica`: the full amount in the anchor's year/month, zero everywhere
///   else. The day of month is ignored.
///
/// A missing anchor date where one is needed contributes zero, extending the
/// malformed-amount degrade policy; negative amounts are propagated, since
/// domain validation belongs to the caller.
pub fn amortize_to_month(
    amount: Decimal,
    billing: BillingType,
    anchor: Option<CalendarDate>,
    period: Period,
) -> Decimal {
    match billing {
        BillingType::Mensal => amount,
        BillingType::Anual => amount / Decimal::from(12),
        BillingType::Semanal => match anchor {
            Some(date) => {
                let hits = count_weekday_occurrences(period.year(), period.month(), date.weekday());
                amount * Decimal::from(hits)
            }
            None => Decimal::ZERO,
        },
        BillingType::Unica => match anchor {
            Some(date) if date.year() == period.year() && date.month() == period.month() => amount,
            _ => Decimal::ZERO,
        },
    }
}

/// Contribution of one raw row, after resolving its fields: amount coercion
/// (unparsable ⇒ 0), billing-type default (`unica`), and the
/// `date`/`expense_date` column-name fallback.
pub fn row_contribution(row: &ExpenseRow, period: Period) -> Decimal {
    amortize_to_month(row.amount(), row.billing_type(), row.anchor_date(), period)
}

/// Sum of every row's contribution to the period. One read-only pass over
/// exact decimals; an empty slice totals zero, and a malformed row
/// contributes zero instead of failing the report.
pub fn total_for_period(rows: &[ExpenseRow], period: Period) -> Decimal {
    rows.iter().map(|row| row_contribution(row, period)).sum()
}
