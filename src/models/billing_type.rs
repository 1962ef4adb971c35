#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingType {
    /// One-time cost, booked in the anchor date's month only.
    Unica,
    /// Recurs every week on the anchor date's weekday.
    Semanal,
    /// Flat recurring monthly charge.
    Mensal,
    /// Annual charge smoothed evenly across twelve months.
    Anual,
}

impl BillingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unica => "unica",
            Self::Semanal => "semanal",
            Self::Mensal => "mensal",
            Self::Anual => "anual",
        }
    }

    /// Anything outside the closed enumeration falls back to one-time
    /// semantics. Legacy rows carry free-form strings here and must still
    /// render, so this is a documented policy, not an error.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "semanal" => Self::Semanal,
            "mensal" => Self::Mensal,
            "anual" => Self::Anual,
            _ => Self::Unica,
        }
    }

    pub fn all() -> &'static [BillingType] {
        &[Self::Unica, Self::Semanal, Self::Mensal, Self::Anual]
    }

    /// Human-readable label for report output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unica => "One-time",
            Self::Semanal => "Weekly",
            Self::Mensal => "Monthly",
            Self::Anual => "Annual",
        }
    }
}

impl std::fmt::Display for BillingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
