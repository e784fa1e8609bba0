use super::event::ChangeEvent;
use super::history::CompensationRecord;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviousRateSource {
    /// Latest record dated strictly before the effective date.
    EarlierRecord,
    /// No earlier record; the newest record overall was used instead.
    MostRecentFallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviousRate {
    pub rate: String,
    pub currency: String,
    pub effective_date: NaiveDate,
    pub source: PreviousRateSource,
}

impl PreviousRate {
    fn from_record(record: &CompensationRecord, source: PreviousRateSource) -> Self {
        Self {
            rate: record.rate.clone(),
            currency: record.currency.clone(),
            effective_date: record.effective_date,
            source,
        }
    }
}

impl fmt::Display for PreviousRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rate, self.currency)
    }
}

/// Finds the rate in force before `event` took effect.
///
/// `records` must be sorted ascending by date. When nothing precedes the
/// effective date, the newest record is returned as long as it is not dated
/// on the effective date itself; that record may be later than the change.
pub fn previous_rate(records: &[CompensationRecord], event: &ChangeEvent) -> Option<PreviousRate> {
    let effective_on = event.effective_on();

    if let Some(effective_on) = effective_on {
        if let Some(record) = records
            .iter()
            .rev()
            .find(|record| record.effective_date < effective_on)
        {
            return Some(PreviousRate::from_record(
                record,
                PreviousRateSource::EarlierRecord,
            ));
        }
    }

    let latest = records.last()?;
    let same_day = match effective_on {
        Some(effective_on) => latest.effective_date == effective_on,
        None => latest.effective_date.format("%Y-%m-%d").to_string() == event.effective_date,
    };

    (!same_day).then(|| PreviousRate::from_record(latest, PreviousRateSource::MostRecentFallback))
}
