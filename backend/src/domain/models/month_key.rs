//! Calendar month used to group expenses.
use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Label format, e.g. "October 2026"
const LABEL_FORMAT: &str = "%B %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MonthKeyError {
    #[error("Month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),
    #[error("Not a month label like \"October 2026\": {0}")]
    InvalidLabel(String),
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, MonthKeyError> {
        if !(1..=12).contains(&month) {
            return Err(MonthKeyError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    fn first_day(&self) -> NaiveDate {
        // Month is validated on construction, so day 1 always exists.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// The month `count` months before this one
    pub fn months_before(&self, count: u32) -> Self {
        let date = self
            .first_day()
            .checked_sub_months(Months::new(count))
            .unwrap_or(NaiveDate::MIN);
        Self::from_date(date)
    }

    pub fn label(&self) -> String {
        self.first_day().format(LABEL_FORMAT).to_string()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        NaiveDate::parse_from_str(&format!("1 {}", trimmed), "%d %B %Y")
            .map(Self::from_date)
            .map_err(|_| MonthKeyError::InvalidLabel(trimmed.to_string()))
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}
