use anyhow::{anyhow, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar-month key for affiliate rows, stored as the first day of the
/// month ("YYYY-MM-01"). Parsing is the ingestion boundary: a string that
/// is not a first-of-month date never becomes a `MonthKey`, so a bad row
/// cannot end up misordered inside a series later.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey(NaiveDate);

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| anyhow!("Invalid year/month: {}-{}", year, month))?;
        Ok(MonthKey(date))
    }

    /// The key of the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        // Day 1 of an existing date's year/month always exists.
        MonthKey(NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap())
    }

    /// Accepts the stored form "YYYY-MM-01" and the shorthand "YYYY-MM".
    /// A parseable date that is not the first of a month is rejected
    /// rather than silently shifted.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            if date.day() != 1 {
                return Err(anyhow!(
                    "Month key must be the first of the month: {}",
                    input
                ));
            }
            return Ok(MonthKey(date));
        }
        if let Some((y, m)) = input.split_once('-') {
            if let (Ok(year), Ok(month)) = (y.parse::<i32>(), m.parse::<u32>()) {
                return Self::new(year, month);
            }
        }
        Err(anyhow!("Unparseable month key: {}", input))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl TryFrom<String> for MonthKey {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}
