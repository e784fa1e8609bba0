use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use hr_automation::workflows::compensation::{compensation_router, CompensationChangeFormatter};
use hr_automation::workflows::onboarding::{onboarding_router, EmployeeAssembler};
use hr_automation::workflows::requisition::{requisition_router, RequisitionAssembler};
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;

pub(crate) fn with_workflow_routes(
    formatter: Arc<CompensationChangeFormatter>,
    assembler: Arc<RequisitionAssembler>,
    onboarding: Arc<EmployeeAssembler>,
) -> Router {
    compensation_router(formatter)
        .merge(requisition_router(assembler))
        .merge(onboarding_router(onboarding))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let (status, label) = if ready {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "initializing")
    };

    (status, Json(json!({ "status": label })))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
