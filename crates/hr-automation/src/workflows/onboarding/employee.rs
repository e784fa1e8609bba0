use super::context::{DepartmentDocument, RequisitionDocument};
use super::meta::{missing_list_options, MissingOption};
use super::webhook::ApplicationWebhook;
use crate::config::OnboardingConfig;
use crate::workflows::clock::{Clock, SystemClock};
use crate::workflows::dates::parse_date;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

const SANDBOX_NAME_PREFIX: &str = "TEST_";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OnboardingError {
    #[error("application update is not a hire (event '{event}', stage '{stage}')")]
    NotHired { event: String, stage: String },
}

/// `POST /api/v1/employees` body for BambooHR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_email: Option<String>,
    pub hire_date: NaiveDate,
    pub job_title: String,
    pub employment_history_status: String,
    pub pay_type: String,
    pub pay_per: String,
    pub exempt: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Team name from the requisition form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,
}

/// Employee record plus the list options BambooHR does not offer yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Onboarding {
    pub employee: EmployeePayload,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_options: Vec<MissingOption>,
}

/// Maps a hired TeamTailor candidate onto a BambooHR employee record.
#[derive(Debug, Clone)]
pub struct EmployeeAssembler {
    config: OnboardingConfig,
    clock: Arc<dyn Clock>,
}

impl EmployeeAssembler {
    pub fn new(config: OnboardingConfig, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    pub fn with_system_clock(config: OnboardingConfig) -> Self {
        Self::new(config, Arc::new(SystemClock))
    }

    pub fn config(&self) -> &OnboardingConfig {
        &self.config
    }

    /// [`assemble`](Self::assemble), then checks list metadata when supplied.
    pub fn onboard(
        &self,
        webhook: &ApplicationWebhook,
        requisition: &RequisitionDocument,
        department: Option<&DepartmentDocument>,
        lists: Option<&Value>,
    ) -> Result<Onboarding, OnboardingError> {
        let employee = self.assemble(webhook, requisition, department)?;
        let missing_options = lists
            .map(|lists| missing_list_options(&employee, lists))
            .unwrap_or_default();

        Ok(Onboarding {
            employee,
            missing_options,
        })
    }

    pub fn assemble(
        &self,
        webhook: &ApplicationWebhook,
        requisition: &RequisitionDocument,
        department: Option<&DepartmentDocument>,
    ) -> Result<EmployeePayload, OnboardingError> {
        if !webhook.is_hire() {
            debug!(
                event = webhook.event_name.as_deref().unwrap_or("-"),
                stage = webhook.stage_name.as_deref().unwrap_or("-"),
                "ignoring application update"
            );
            return Err(OnboardingError::NotHired {
                event: webhook.event_name.clone().unwrap_or_default(),
                stage: webhook.stage_name.clone().unwrap_or_default(),
            });
        }

        let candidate = &webhook.candidate;
        let first_name = candidate.first_name.clone().unwrap_or_default();
        let (first_name, work_email) = if self.config.sandbox {
            (
                format!("{SANDBOX_NAME_PREFIX}{first_name}"),
                Some(self.sandbox_email(webhook)),
            )
        } else {
            (first_name, present(candidate.email.as_deref()))
        };

        let employee = EmployeePayload {
            first_name,
            last_name: candidate.last_name.clone().unwrap_or_default(),
            work_email,
            hire_date: self.hire_date(webhook),
            job_title: leveled_title(
                requisition.candidate_level(),
                webhook.job_title.as_deref().unwrap_or_default(),
            ),
            employment_history_status: self.config.employment_status.clone(),
            pay_type: self.config.pay_type.clone(),
            pay_per: self.config.pay_per.clone(),
            exempt: self.config.exempt.clone(),
            location: self.config.location.clone(),
            department: present(department.and_then(DepartmentDocument::name)),
            division: present(requisition.team()),
            mobile_phone: present(candidate.phone.as_deref()),
        };

        info!(
            candidate_id = webhook.candidate_id().as_deref().unwrap_or("-"),
            job_id = webhook.job_id().as_deref().unwrap_or("-"),
            hire_date = %employee.hire_date,
            sandbox = self.config.sandbox,
            "assembled employee payload"
        );

        Ok(employee)
    }

    /// Falls back to today when no usable timestamp was sent.
    fn hire_date(&self, webhook: &ApplicationWebhook) -> NaiveDate {
        webhook
            .hired_at()
            .and_then(parse_date)
            .unwrap_or_else(|| self.clock.now().date_naive())
    }

    fn sandbox_email(&self, webhook: &ApplicationWebhook) -> String {
        let suffix = webhook
            .candidate_id()
            .unwrap_or_else(|| self.clock.now().timestamp().to_string());
        format!("test.{suffix}@example.com")
    }
}

/// `"Senior Backend Developer"`; the level is only applied to a non-empty title.
fn leveled_title(level: Option<&str>, title: &str) -> String {
    match level.map(str::trim).filter(|level| !level.is_empty()) {
        Some(level) if !title.trim().is_empty() => format!("{level} {title}").trim().to_string(),
        _ => title.to_string(),
    }
}

fn present(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::clock::FixedClock;
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};

    fn assembler(sandbox: bool) -> EmployeeAssembler {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 5, 20, 12, 0, 0).unwrap());
        let config = OnboardingConfig {
            sandbox,
            ..OnboardingConfig::default()
        };
        EmployeeAssembler::new(config, Arc::new(clock))
    }

    fn webhook(overrides: Value) -> ApplicationWebhook {
        let mut body = json!({
            "event_name": "job_application.update",
            "stage_name": "Hired",
            "job_title": "Backend Developer",
            "candidate": {
                "id": 5521,
                "first_name": "Iryna",
                "last_name": "Bondar",
                "email": "iryna@example.org",
                "updated_at": "2024-04-02T21:30:00+03:00"
            }
        });
        if let (Some(body), Some(overrides)) = (body.as_object_mut(), overrides.as_object()) {
            for (key, value) in overrides {
                body.insert(key.clone(), value.clone());
            }
        }
        ApplicationWebhook::from_payload(&body).expect("webhook parses")
    }

    #[test]
    fn level_prefix_needs_both_parts() {
        assert_eq!(leveled_title(Some("Senior"), "Designer"), "Senior Designer");
        assert_eq!(leveled_title(Some(" "), "Designer"), "Designer");
        assert_eq!(leveled_title(None, "Designer"), "Designer");
        assert_eq!(leveled_title(Some("Senior"), ""), "");
    }

    #[test]
    fn hire_date_keeps_the_sender_calendar_day() {
        let employee = assembler(false)
            .assemble(&webhook(json!({})), &RequisitionDocument::default(), None)
            .expect("hire assembles");
        assert_eq!(employee.hire_date, NaiveDate::from_ymd_opt(2024, 4, 2).unwrap());
    }

    #[test]
    fn unusable_timestamps_default_to_today() {
        let mut hire = webhook(json!({ "updated_at": "not a date" }));
        hire.candidate.updated_at = None;
        let employee = assembler(false)
            .assemble(&hire, &RequisitionDocument::default(), None)
            .expect("hire assembles");
        assert_eq!(employee.hire_date, NaiveDate::from_ymd_opt(2024, 5, 20).unwrap());
    }

    #[test]
    fn sandbox_marks_name_and_replaces_email() {
        let employee = assembler(true)
            .assemble(&webhook(json!({})), &RequisitionDocument::default(), None)
            .expect("hire assembles");
        assert_eq!(employee.first_name, "TEST_Iryna");
        assert_eq!(employee.work_email.as_deref(), Some("test.5521@example.com"));

        let live = assembler(false)
            .assemble(&webhook(json!({})), &RequisitionDocument::default(), None)
            .expect("hire assembles");
        assert_eq!(live.first_name, "Iryna");
        assert_eq!(live.work_email.as_deref(), Some("iryna@example.org"));
    }

    #[test]
    fn non_hire_updates_are_rejected() {
        let err = assembler(false)
            .assemble(
                &webhook(json!({ "stage_name": "Offer" })),
                &RequisitionDocument::default(),
                None,
            )
            .expect_err("not a hire");
        assert_eq!(
            err,
            OnboardingError::NotHired {
                event: "job_application.update".to_string(),
                stage: "Offer".to_string(),
            }
        );
    }
}
