use anyhow::{Context, Result};
use std::path::Path;

use crate::models::ExpenseRow;

/// Load expense rows from a JSON array file — the shape a Supabase/PostgREST
/// fetch of the expenses table returns. Unknown columns deserialize into the
/// row's `extra` map untouched.
pub fn json_rows(path: &Path) -> Result<Vec<ExpenseRow>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON array of expense rows", path.display()))
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
