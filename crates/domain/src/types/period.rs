//! Reporting periods
//!
//! Periods match entries by prefix on the ISO date string, so a month is
//! `YYYY-MM`, a year `YYYY`, and a day the full `YYYY-MM-DD`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, WorkpaceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Period {
    Day { date: NaiveDate },
    Month { year: i32, month: u32 },
    Year { year: i32 },
    All,
}

impl Period {
    /// Calendar month containing `today`.
    pub fn current_month(today: NaiveDate) -> Self {
        Self::Month { year: today.year(), month: today.month() }
    }

    /// # Errors
    /// Returns `WorkpaceError::InvalidInput` when `month` is outside 1..=12.
    pub fn month(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(WorkpaceError::InvalidInput(format!("month out of range: {month}")));
        }
        Ok(Self::Month { year, month })
    }

    /// ISO date prefix entries must start with.
    pub fn prefix(&self) -> String {
        match self {
            Self::Day { date } => date.format("%Y-%m-%d").to_string(),
            Self::Month { year, month } => format!("{year:04}-{month:02}"),
            Self::Year { year } => format!("{year:04}"),
            Self::All => String::new(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.format("%Y-%m-%d").to_string().starts_with(&self.prefix())
    }
}
