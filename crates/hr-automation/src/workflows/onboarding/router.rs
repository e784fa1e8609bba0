use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::Value;

use super::context::{DepartmentDocument, RequisitionDocument};
use super::employee::{EmployeeAssembler, Onboarding};
use super::webhook::ApplicationWebhook;
use crate::error::AppError;

/// Webhook plus the TeamTailor and BambooHR documents fetched for it.
#[derive(Debug, Deserialize)]
pub struct OnboardingRequest {
    pub webhook: Value,
    #[serde(default)]
    pub requisition: RequisitionDocument,
    #[serde(default)]
    pub department: Option<DepartmentDocument>,
    /// BambooHR `meta/lists` response.
    #[serde(default)]
    pub lists: Option<Value>,
}

/// Router builder exposing the hired-candidate onboarding endpoint.
pub fn onboarding_router(assembler: Arc<EmployeeAssembler>) -> Router {
    Router::new()
        .route("/api/v1/onboarding/employee", post(employee_handler))
        .with_state(assembler)
}

pub(crate) async fn employee_handler(
    State(assembler): State<Arc<EmployeeAssembler>>,
    Json(request): Json<OnboardingRequest>,
) -> Result<Json<Onboarding>, AppError> {
    let webhook = ApplicationWebhook::from_payload(&request.webhook)?;
    let onboarding = assembler.onboard(
        &webhook,
        &request.requisition,
        request.department.as_ref(),
        request.lists.as_ref(),
    )?;
    Ok(Json(onboarding))
}
