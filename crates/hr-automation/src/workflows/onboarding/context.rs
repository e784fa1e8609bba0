//! TeamTailor documents fetched for the hired application's job.

use serde::Deserialize;

/// `GET /jobs/{id}/requisition` response; only the form answers are read.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RequisitionDocument {
    pub data: RequisitionResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RequisitionResource {
    pub attributes: RequisitionResourceAttributes,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RequisitionResourceAttributes {
    pub custom_form_answers: Option<HiringAnswers>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HiringAnswers {
    pub team: Option<String>,
    pub level_of_candidate: Option<String>,
}

/// Department linked from the requisition.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DepartmentDocument {
    pub data: DepartmentResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DepartmentResource {
    pub attributes: DepartmentAttributes,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DepartmentAttributes {
    pub name: Option<String>,
}

impl RequisitionDocument {
    pub fn answers(&self) -> Option<&HiringAnswers> {
        self.data.attributes.custom_form_answers.as_ref()
    }

    pub fn team(&self) -> Option<&str> {
        self.answers().and_then(|answers| answers.team.as_deref())
    }

    pub fn candidate_level(&self) -> Option<&str> {
        self.answers()
            .and_then(|answers| answers.level_of_candidate.as_deref())
    }
}

impl DepartmentDocument {
    pub fn name(&self) -> Option<&str> {
        self.data.attributes.name.as_deref()
    }
}
