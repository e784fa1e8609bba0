use super::aliases::RawRecord;
use super::{CompensationRecord, HistoryShapeError, HistoryStatus};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use tracing::{debug, warn};

/// Reads a compensation history CSV export (`Effective Date`, `Pay Rate`,
/// `Currency`, `Pay Per`).
pub fn parse_history_csv<R: Read>(reader: R) -> HistoryStatus {
    match parse_records(reader) {
        Ok(records) => {
            debug!(records = records.len(), "parsed compensation export");
            HistoryStatus::Parsed { records }
        }
        Err(err) => {
            warn!(error = %err, "compensation export could not be read");
            err.into()
        }
    }
}

fn parse_records<R: Read>(reader: R) -> Result<Vec<CompensationRecord>, HistoryShapeError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<ExportRow>() {
        let row = row?;
        let raw = RawRecord {
            date: row.effective_date,
            rate: row.pay_rate,
            currency: row.currency,
            pay_period: row.pay_per,
        };
        if let Some(record) = raw.into_record() {
            records.push(record);
        }
    }

    records.sort_by_key(|record| record.effective_date);
    Ok(records)
}

#[derive(Debug, Deserialize)]
struct ExportRow {
    #[serde(
        rename = "Effective Date",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    effective_date: Option<String>,
    #[serde(rename = "Pay Rate", default, deserialize_with = "empty_string_as_none")]
    pay_rate: Option<String>,
    #[serde(rename = "Currency", default, deserialize_with = "empty_string_as_none")]
    currency: Option<String>,
    #[serde(rename = "Pay Per", default, deserialize_with = "empty_string_as_none")]
    pay_per: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
