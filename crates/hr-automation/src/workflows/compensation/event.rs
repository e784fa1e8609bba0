use crate::workflows::dates::parse_date;
use super::locale::Locale;
use chrono::NaiveDate;
use serde_json::Value;

pub const NAME_FIELD: &str = "First name Last name";
pub const PAY_RATE_FIELD: &str = "Compensation - Pay Rate";
pub const EFFECTIVE_DATE_FIELD: &str = "Compensation - Effective Date";
pub const CHANGE_REASON_FIELD: &str = "Compensation - Change Reason";
pub const COMMENT_FIELD: &str = "Compensation - Comment";
pub const DEPARTMENT_FIELD: &str = "Job Information - Department";
pub const JOB_TITLE_FIELD: &str = "Job Information - Job Title";

static NO_EMPLOYEE: Value = Value::Null;

/// A pay-rate change reported by the BambooHR webhook.
///
/// Missing values degrade to empty strings (or the locale's placeholder for the
/// change reason); extraction never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub employee_id: String,
    pub employee_name: String,
    pub new_rate: String,
    /// Effective date as sent, used verbatim in messages.
    pub effective_date: String,
    pub change_reason: String,
    pub comment: Option<String>,
    pub department: Option<String>,
    pub job_title: Option<String>,
}

impl ChangeEvent {
    /// Reads the first entry of `employees`, either at the top level or under
    /// the `body` key added by webhook trigger nodes.
    pub fn from_webhook(payload: &Value, locale: Locale) -> Self {
        let root = payload
            .get("body")
            .filter(|body| body.get("employees").is_some())
            .unwrap_or(payload);
        let employee = root
            .get("employees")
            .and_then(|employees| match employees {
                Value::Array(items) => items.first(),
                Value::Object(_) => Some(employees),
                _ => None,
            })
            .unwrap_or(&NO_EMPLOYEE);
        let fields = employee
            .get("fields")
            .filter(|fields| fields.is_object())
            .unwrap_or(employee);

        let text = |key: &str| fields.get(key).and_then(scalar_text);

        Self {
            employee_id: employee.get("id").and_then(scalar_text).unwrap_or_default(),
            employee_name: text(NAME_FIELD).unwrap_or_default(),
            new_rate: text(PAY_RATE_FIELD).unwrap_or_default(),
            effective_date: text(EFFECTIVE_DATE_FIELD).unwrap_or_default(),
            change_reason: text(CHANGE_REASON_FIELD)
                .unwrap_or_else(|| locale.not_specified().to_string()),
            comment: text(COMMENT_FIELD),
            department: text(DEPARTMENT_FIELD),
            job_title: text(JOB_TITLE_FIELD),
        }
    }

    pub fn effective_on(&self) -> Option<NaiveDate> {
        parse_date(&self.effective_date)
    }

    /// `"Department - Job Title"`, or whichever half is present.
    pub fn position(&self) -> Option<String> {
        let parts: Vec<&str> = [self.department.as_deref(), self.job_title.as_deref()]
            .into_iter()
            .flatten()
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" - "))
        }
    }
}

/// Blank strings count as absent.
fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}
