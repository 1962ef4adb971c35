//! Recurring-expense amortization: converts weekly, monthly, annual, and
//! one-time expenses into normalized monthly contributions, and assembles
//! the monthly summaries and trends built on them.
//!
//! The billing core is a single shared implementation — pure, synchronous,
//! clock-free — so a server endpoint and a report generator compute the
//! same figures from the same rows.

pub mod billing;
pub mod import;
pub mod models;
pub mod report;
pub mod run;
