use super::salary::SalaryInput;
use serde::Deserialize;
use serde_json::Value;

/// Requisition page as emitted by the simplified Notion "get page" output.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RequisitionSource {
    #[serde(rename = "property_tt_requisition_id")]
    pub requisition_id: Option<String>,
    #[serde(rename = "property_name")]
    pub job_title: Option<String>,
    #[serde(rename = "property_job_description")]
    pub job_description: Option<String>,
    #[serde(rename = "property_country")]
    pub country: Option<String>,
    /// Absent means a range is wanted.
    #[serde(rename = "property_need_salary_range")]
    pub need_salary_range: Option<bool>,
    #[serde(rename = "property_min_salary")]
    pub min_salary: Option<SalaryInput>,
    #[serde(rename = "property_max_salary")]
    pub max_salary: Option<SalaryInput>,
    #[serde(rename = "property_fixed_salary")]
    pub fixed_salary: Option<SalaryInput>,
    #[serde(rename = "property_salary_period")]
    pub salary_period: Option<String>,
    #[serde(rename = "property_expected_number_of_hires")]
    pub expected_hires: Option<Value>,
    #[serde(rename = "property_desire_start_day_of_newcomer")]
    pub desired_start: Option<DateProperty>,
    #[serde(rename = "property_priority_of_position")]
    pub priority: Option<Value>,
    #[serde(rename = "property_level_of_candidate")]
    pub candidate_level: Option<Value>,
    #[serde(rename = "property_reason")]
    pub reason: Option<ReasonProperty>,
    #[serde(rename = "property_will_there_be_a_test_task")]
    pub test_task: Option<Value>,
    #[serde(rename = "property_please_define_hiring_stages")]
    pub hiring_stages: Option<String>,
    #[serde(rename = "property_key_competencies_for_position")]
    pub key_competencies: Option<String>,
    #[serde(rename = "property_additional_comments_for_recruiter_or_approval")]
    pub additional_comments: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DateProperty {
    pub start: Option<String>,
}

/// Multi-select or plain text reason.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ReasonProperty {
    Many(Vec<String>),
    One(String),
}

impl ReasonProperty {
    pub fn joined(&self) -> String {
        match self {
            Self::Many(items) => items.join(", "),
            Self::One(text) => text.clone(),
        }
    }
}

/// Ids and names resolved by upstream look-up steps.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequisitionLookups {
    pub department_id: Option<String>,
    pub role_id: Option<String>,
    pub team_name: Option<String>,
    pub user_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_simplified_page() {
        let source: RequisitionSource = serde_json::from_value(json!({
            "property_name": "Backend Developer",
            "property_need_salary_range": false,
            "property_fixed_salary": 5000,
            "property_reason": ["Growth", "Replacement"],
            "property_desire_start_day_of_newcomer": { "start": "2024-05-01", "end": "2024-05-31" },
            "unrelated": true
        }))
        .expect("page deserializes");

        assert_eq!(source.job_title.as_deref(), Some("Backend Developer"));
        assert_eq!(source.need_salary_range, Some(false));
        assert_eq!(source.fixed_salary, Some(SalaryInput::Amount(5000.0)));
        assert_eq!(
            source.reason.as_ref().map(ReasonProperty::joined).as_deref(),
            Some("Growth, Replacement")
        );
        assert_eq!(
            source.desired_start.and_then(|date| date.start).as_deref(),
            Some("2024-05-01")
        );
    }

    #[test]
    fn null_properties_are_absent() {
        let source: RequisitionSource = serde_json::from_value(json!({
            "property_tt_requisition_id": null,
            "property_reason": null
        }))
        .expect("page deserializes");
        assert!(source.requisition_id.is_none());
        assert!(source.reason.is_none());
    }
}
