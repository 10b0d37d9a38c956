use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const UNIVERSAL_CHECKLIST: &str = "universal-checklist";
pub const UNIVERSAL_RATING_CATEGORIES: &str = "universal-rating-categories";

/// Canonical `YYYY-MM-DD` form of a calendar date. Every per-date key is
/// built from this, so two spellings of the same day always hit the same key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    pub fn parse(raw: &str) -> Result<Self, chrono::ParseError> {
        let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")?;
        Ok(Self::from_date(date))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }

    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn overlay_key(date: &DateKey, suffix: &str) -> String {
    format!("{date}-{suffix}")
}

pub fn journal_key(date: &DateKey) -> String {
    date.as_str().to_string()
}
