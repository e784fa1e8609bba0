//! BambooHR list fields (`GET /meta/lists`) that must already offer the
//! employee's department, division and job title before the record is created.

use super::employee::EmployeePayload;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ListField {
    Department,
    Division,
    JobTitle,
}

impl ListField {
    const ALL: [ListField; 3] = [ListField::Department, ListField::Division, ListField::JobTitle];

    fn alias(self) -> &'static str {
        match self {
            ListField::Department => "department",
            ListField::Division => "division",
            ListField::JobTitle => "jobtitle",
        }
    }

    fn value(self, employee: &EmployeePayload) -> Option<&str> {
        match self {
            ListField::Department => employee.department.as_deref(),
            ListField::Division => employee.division.as_deref(),
            ListField::JobTitle => Some(employee.job_title.as_str()),
        }
    }
}

/// A list option to create before posting the employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingOption {
    pub field: ListField,
    pub field_id: u64,
    pub value: String,
}

/// Compares the employee against the list metadata, which may be a bare array
/// or wrapped in `{ "lists": [...] }`. Only `manageable: "yes"` lists count.
/// Matching is case-insensitive on either the option value or its name.
pub fn missing_list_options(employee: &EmployeePayload, lists: &Value) -> Vec<MissingOption> {
    let lists: Vec<&Value> = match lists {
        Value::Array(items) => items.iter().collect(),
        other => other
            .get("lists")
            .and_then(Value::as_array)
            .map(|items| items.iter().collect())
            .unwrap_or_default(),
    };
    let manageable: Vec<&Value> = lists
        .into_iter()
        .filter(|list| list.get("manageable").and_then(Value::as_str) == Some("yes"))
        .collect();

    ListField::ALL
        .into_iter()
        .filter_map(|field| {
            let value = field.value(employee).map(str::trim).filter(|v| !v.is_empty())?;
            let list = find_list(&manageable, field)?;
            let field_id = field_id(list)?;
            (!has_option(list, value)).then(|| MissingOption {
                field,
                field_id,
                value: value.to_string(),
            })
        })
        .collect()
}

/// Alias match first; job title also matches a list named "Job Title".
fn find_list<'a>(lists: &[&'a Value], field: ListField) -> Option<&'a Value> {
    let text = |list: &Value, key: &str| {
        list.get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_lowercase()
    };

    lists
        .iter()
        .copied()
        .find(|list| text(list, "alias") == field.alias())
        .or_else(|| match field {
            ListField::JobTitle => lists
                .iter()
                .copied()
                .find(|list| text(list, "name") == "job title"),
            ListField::Department | ListField::Division => None,
        })
        .filter(|list| field_id(list).is_some())
}

fn field_id(list: &Value) -> Option<u64> {
    match list.get("fieldId")? {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
    .filter(|id| *id > 0)
}

fn has_option(list: &Value, value: &str) -> bool {
    let wanted = value.to_lowercase();
    list.get("options")
        .and_then(Value::as_array)
        .map(|options| {
            options.iter().any(|option| {
                ["value", "name"].iter().any(|key| {
                    option
                        .get(*key)
                        .and_then(Value::as_str)
                        .is_some_and(|text| text.to_lowercase() == wanted)
                })
            })
        })
        .unwrap_or(false)
}
