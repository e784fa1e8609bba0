//! Compensation history parsing.
//!
//! BambooHR answers the compensation table request with a loosely shaped
//! document (XML converted to JSON upstream, so single rows collapse into
//! objects). Both that document and the CSV export are reduced to an ordered
//! list of [`CompensationRecord`]s, or to an explicit [`HistoryStatus`]
//! describing why nothing usable was found.

mod aliases;
mod export;
mod json;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use export::parse_history_csv;
pub use json::parse_history;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PayPeriod {
    Hour,
    Day,
    Week,
    #[default]
    Month,
    Year,
}

impl PayPeriod {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "hour" | "hourly" => Some(Self::Hour),
            "day" | "daily" => Some(Self::Day),
            "week" | "weekly" => Some(Self::Week),
            "month" | "monthly" => Some(Self::Month),
            "year" | "yearly" | "annual" | "annually" => Some(Self::Year),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Hour => "Hour",
            Self::Day => "Day",
            Self::Week => "Week",
            Self::Month => "Month",
            Self::Year => "Year",
        }
    }
}

/// One row of the compensation table that carried both a date and a rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompensationRecord {
    pub effective_date: NaiveDate,
    /// Amount exactly as BambooHR rendered it.
    pub rate: String,
    pub currency: String,
    pub pay_period: PayPeriod,
}

impl CompensationRecord {
    /// `"<rate> <currency>"`, the shape used for comparisons with the webhook rate.
    pub fn display_rate(&self) -> String {
        format!("{} {}", self.rate, self.currency)
    }
}

/// Outcome of reading a history response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HistoryStatus {
    /// No history was supplied, or it carried no table.
    Missing,
    /// Usable records sorted ascending by effective date. May be empty.
    Parsed { records: Vec<CompensationRecord> },
    /// The response had a table but not one this parser understands.
    Unrecognized { reason: String },
}

impl HistoryStatus {
    pub fn records(&self) -> &[CompensationRecord] {
        match self {
            Self::Parsed { records } => records,
            Self::Missing | Self::Unrecognized { .. } => &[],
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Parsed { .. } => "parsed",
            Self::Unrecognized { .. } => "unrecognized",
        }
    }
}

impl From<HistoryShapeError> for HistoryStatus {
    fn from(err: HistoryShapeError) -> Self {
        Self::Unrecognized {
            reason: err.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HistoryShapeError {
    #[error("`table` must be an object, found {found}")]
    Table { found: &'static str },
    #[error("`table.row` must be an object or an array, found {found}")]
    Rows { found: &'static str },
    #[error("row {index} must be an object, found {found}")]
    Row { index: usize, found: &'static str },
    #[error("row {index}: `field` must be an object or an array, found {found}")]
    Fields { index: usize, found: &'static str },
    #[error("row {index}: field entries must be objects, found {found}")]
    FieldEntry { index: usize, found: &'static str },
    #[error("invalid compensation export: {0}")]
    Export(#[from] csv::Error),
}
