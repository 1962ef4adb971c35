use chrono::{Datelike, NaiveDate};

/// A plain calendar date with no time-of-day or timezone component.
///
/// Parsing splits the `YYYY-MM-DD` string into integer components directly
/// rather than going through a timestamp constructor, so a date can never
/// shift across a day boundary from a UTC/local conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse a `YYYY-MM-DD` string. Returns `None` for anything malformed;
    /// callers degrade a missing anchor date to a zero contribution rather
    /// than failing a whole report over one bad row.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.trim().splitn(3, '-');
        let year = parts.next()?.parse().ok()?;
        let month = parts.next()?.parse().ok()?;
        let day = parts.next()?.parse().ok()?;
        Self::new(year, month, day)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Weekday index, 0 = Sunday through 6 = Saturday. The same convention
    /// the occurrence counter uses, so the two always agree.
    pub fn weekday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            self.month(),
            self.day()
        )
    }
}
