use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;

use super::payload::{RequisitionAssembler, RequisitionRequest};
use super::source::{RequisitionLookups, RequisitionSource};

#[derive(Debug, Deserialize)]
pub struct RequisitionPayloadRequest {
    pub page: RequisitionSource,
    #[serde(default)]
    pub lookups: RequisitionLookups,
}

/// Router builder exposing the requisition payload endpoint.
pub fn requisition_router(assembler: Arc<RequisitionAssembler>) -> Router {
    Router::new()
        .route("/api/v1/requisitions/payload", post(payload_handler))
        .with_state(assembler)
}

pub(crate) async fn payload_handler(
    State(assembler): State<Arc<RequisitionAssembler>>,
    Json(request): Json<RequisitionPayloadRequest>,
) -> Json<RequisitionRequest> {
    Json(assembler.assemble(&request.page, &request.lookups))
}
