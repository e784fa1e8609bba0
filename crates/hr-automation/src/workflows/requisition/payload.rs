use super::country::iso_country;
use super::salary::{Amount, SalaryInput};
use super::source::{ReasonProperty, RequisitionLookups, RequisitionSource};
use crate::config::RequisitionConfig;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

const RESOURCE_TYPE: &str = "requisitions";
const INITIAL_STATUS: &str = "pending";

/// Request body plus routing hints for the requisition API call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequisitionRequest {
    pub payload: RequisitionPayload,
    /// `true` when the page already references a requisition, i.e. PATCH instead of POST.
    pub is_update: bool,
    pub tt_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequisitionPayload {
    pub data: RequisitionData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequisitionData {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub attributes: RequisitionAttributes,
    pub relationships: Relationships,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RequisitionAttributes {
    pub job_title: String,
    pub job_description: String,
    pub country: String,
    pub min_salary: Option<Amount>,
    pub max_salary: Option<Amount>,
    pub currency: String,
    pub salary_time_unit: String,
    pub number_of_openings: Value,
    pub custom_form_answers: CustomFormAnswers,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomFormAnswers {
    pub desire_start_day: Option<String>,
    pub priority_of_position: Value,
    pub level_of_candidate: Value,
    pub team: Option<String>,
    pub reason: String,
    pub will_there_be_a_test_task: Value,
    pub please_define_hiring_stages: String,
    pub key_competencies_for_position: String,
    pub additional_comments_for_recruiter_or_approval: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relationships {
    pub location: Relationship,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<Relationship>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Relationship>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Relationship>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relationship {
    pub data: ResourceRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceRef {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl Relationship {
    fn new(id: String, kind: &'static str) -> Self {
        Self {
            data: ResourceRef { id, kind },
        }
    }
}

/// Maps requisition pages to applicant-tracking API requests.
#[derive(Debug, Clone, Default)]
pub struct RequisitionAssembler {
    config: RequisitionConfig,
}

impl RequisitionAssembler {
    pub fn new(config: RequisitionConfig) -> Self {
        Self { config }
    }

    pub fn assemble(
        &self,
        source: &RequisitionSource,
        lookups: &RequisitionLookups,
    ) -> RequisitionRequest {
        let tt_id = present(source.requisition_id.as_deref());
        let is_update = tt_id.is_some();
        let (min_salary, max_salary) = salary_bounds(source);

        let relationships = Relationships {
            location: Relationship::new(self.config.location_id.clone(), "locations"),
            department: present(lookups.department_id.as_deref())
                .map(|id| Relationship::new(id, "departments")),
            role: present(lookups.role_id.as_deref()).map(|id| Relationship::new(id, "roles")),
            user: present(lookups.user_id.as_deref()).map(|id| Relationship::new(id, "users")),
        };

        let custom_form_answers = CustomFormAnswers {
            desire_start_day: source
                .desired_start
                .as_ref()
                .and_then(|date| date.start.clone()),
            priority_of_position: passthrough(source.priority.as_ref()),
            level_of_candidate: passthrough(source.candidate_level.as_ref()),
            team: lookups
                .team_name
                .clone()
                .filter(|name| !name.trim().is_empty()),
            reason: source
                .reason
                .as_ref()
                .map(ReasonProperty::joined)
                .unwrap_or_default(),
            will_there_be_a_test_task: passthrough(source.test_task.as_ref()),
            please_define_hiring_stages: source.hiring_stages.clone().unwrap_or_default(),
            key_competencies_for_position: source.key_competencies.clone().unwrap_or_default(),
            additional_comments_for_recruiter_or_approval: source
                .additional_comments
                .clone()
                .unwrap_or_default(),
        };

        let attributes = RequisitionAttributes {
            job_title: source.job_title.clone().unwrap_or_default(),
            job_description: source.job_description.clone().unwrap_or_default(),
            country: iso_country(source.country.as_deref().unwrap_or_default()),
            min_salary,
            max_salary,
            currency: self.config.currency.clone(),
            salary_time_unit: source
                .salary_period
                .as_deref()
                .unwrap_or_default()
                .to_lowercase(),
            number_of_openings: passthrough(source.expected_hires.as_ref()),
            custom_form_answers,
            status: INITIAL_STATUS,
        };

        info!(
            is_update,
            requisition_id = tt_id.as_deref().unwrap_or("-"),
            "assembled requisition payload"
        );

        RequisitionRequest {
            payload: RequisitionPayload {
                data: RequisitionData {
                    kind: RESOURCE_TYPE,
                    id: tt_id.clone(),
                    attributes,
                    relationships,
                },
            },
            is_update,
            tt_id,
        }
    }
}

/// A fixed salary becomes `(fixed - 1, fixed)`; the API rejects equal bounds.
fn salary_bounds(source: &RequisitionSource) -> (Option<Amount>, Option<Amount>) {
    if source.need_salary_range.unwrap_or(true) {
        return (
            source.min_salary.as_ref().and_then(SalaryInput::amount),
            source.max_salary.as_ref().and_then(SalaryInput::amount),
        );
    }

    match source.fixed_salary.as_ref().and_then(SalaryInput::amount) {
        Some(Amount(fixed)) => (Some(Amount(fixed - 1.0)), Some(Amount(fixed))),
        None => (None, None),
    }
}

fn present(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn passthrough(value: Option<&Value>) -> Value {
    value.cloned().unwrap_or(Value::Null)
}
