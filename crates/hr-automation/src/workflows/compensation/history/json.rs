use super::aliases::RawRecord;
use super::{CompensationRecord, HistoryShapeError, HistoryStatus};
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Reads `table.row[].field[]` out of a BambooHR compensation table response.
///
/// Shape problems are logged and reported as [`HistoryStatus::Unrecognized`];
/// they never escape as errors.
pub fn parse_history(response: Option<&Value>) -> HistoryStatus {
    let Some(table) = response.and_then(|value| value.get("table")) else {
        return HistoryStatus::Missing;
    };
    if table.is_null() {
        return HistoryStatus::Missing;
    }

    match collect_records(table) {
        Ok(records) => {
            debug!(records = records.len(), "parsed compensation history");
            HistoryStatus::Parsed { records }
        }
        Err(err) => {
            warn!(error = %err, "compensation history has an unrecognized shape");
            err.into()
        }
    }
}

fn collect_records(table: &Value) -> Result<Vec<CompensationRecord>, HistoryShapeError> {
    let table = table.as_object().ok_or(HistoryShapeError::Table {
        found: kind_of(table),
    })?;

    let rows = match table.get("row") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(value) => one_or_many(value).ok_or(HistoryShapeError::Rows {
            found: kind_of(value),
        })?,
    };

    let mut records = Vec::new();
    for (index, row) in rows.into_iter().enumerate() {
        let row = row.as_object().ok_or(HistoryShapeError::Row {
            index,
            found: kind_of(row),
        })?;

        let Some(fields) = row_fields(index, row)? else {
            continue;
        };

        if let Some(record) = RawRecord::from_fields(&fields).into_record() {
            records.push(record);
        }
    }

    records.sort_by_key(|record| record.effective_date);
    Ok(records)
}

/// `None` when the row has no `field` entry at all.
fn row_fields(
    index: usize,
    row: &Map<String, Value>,
) -> Result<Option<HashMap<String, String>>, HistoryShapeError> {
    let entries = match row.get("field") {
        None | Some(Value::Null) => return Ok(None),
        Some(value) => one_or_many(value).ok_or(HistoryShapeError::Fields {
            index,
            found: kind_of(value),
        })?,
    };

    let mut fields = HashMap::with_capacity(entries.len());
    for entry in entries {
        let entry = entry.as_object().ok_or(HistoryShapeError::FieldEntry {
            index,
            found: kind_of(entry),
        })?;

        let Some(id) = entry.get("@id").and_then(scalar_text) else {
            continue;
        };
        let value = entry
            .get("#text")
            .and_then(scalar_text)
            .filter(|text| !text.is_empty())
            .or_else(|| entry.get("$").and_then(scalar_text));

        if let Some(value) = value {
            fields.insert(id, value);
        }
    }

    Ok(Some(fields))
}

fn one_or_many(value: &Value) -> Option<Vec<&Value>> {
    match value {
        Value::Array(items) => Some(items.iter().collect()),
        Value::Object(_) => Some(vec![value]),
        _ => None,
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
