use serde::Deserialize;
use serde_json::Value;

pub const HIRE_EVENT: &str = "job_application.update";
pub const HIRED_STAGE: &str = "Hired";

/// TeamTailor job-application webhook body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApplicationWebhook {
    pub event_name: Option<String>,
    pub stage_name: Option<String>,
    pub job_id: Option<Value>,
    pub job_title: Option<String>,
    pub updated_at: Option<String>,
    pub candidate: Candidate,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Candidate {
    pub id: Option<Value>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub updated_at: Option<String>,
}

impl ApplicationWebhook {
    /// Accepts the bare body or the `{ "body": ... }` envelope added by
    /// webhook trigger nodes.
    pub fn from_payload(payload: &Value) -> Result<Self, serde_json::Error> {
        let body = payload
            .get("body")
            .filter(|body| body.is_object())
            .unwrap_or(payload);
        Self::deserialize(body)
    }

    /// Only an application moved into the `Hired` stage starts onboarding.
    pub fn is_hire(&self) -> bool {
        self.event_name.as_deref() == Some(HIRE_EVENT)
            && self.stage_name.as_deref() == Some(HIRED_STAGE)
    }

    /// Candidate timestamp first, then the application's.
    pub fn hired_at(&self) -> Option<&str> {
        [
            self.candidate.updated_at.as_deref(),
            self.updated_at.as_deref(),
        ]
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
    }

    pub fn candidate_id(&self) -> Option<String> {
        self.candidate.id.as_ref().and_then(id_text)
    }

    pub fn job_id(&self) -> Option<String> {
        self.job_id.as_ref().and_then(id_text)
    }
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
