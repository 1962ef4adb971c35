use anyhow::{Context, Result};
use chrono::Datelike;

/// A target reporting period: one calendar month.
///
/// Construction is the precondition gate for the whole billing core — a
/// month outside 1..=12 is rejected here, so the arithmetic functions never
/// see one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        anyhow::ensure!(
            (1..=12).contains(&month),
            "month {month} out of range (expected 1-12)"
        );
        Ok(Self { year, month })
    }

    /// Parse a `YYYY-MM` string.
    pub fn parse(s: &str) -> Result<Self> {
        let (y, m) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| anyhow::anyhow!("invalid period '{s}' (expected YYYY-MM)"))?;
        let year = y
            .parse()
            .with_context(|| format!("invalid year in period '{s}'"))?;
        let month = m
            .parse()
            .with_context(|| format!("invalid month in period '{s}'"))?;
        Self::new(year, month)
    }

    /// The current local month. Callers that default to "this month" resolve
    /// it here; the core functions always take an explicit period.
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The month immediately before this one.
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
