use std::io::Cursor;
use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::Value;

use super::formatter::CompensationChangeFormatter;
use super::history::{parse_history, parse_history_csv};
use super::message::NotificationMessage;

/// Body accepted by the notification endpoint.
#[derive(Debug, Deserialize)]
pub struct NotificationRequest {
    pub webhook: Value,
    #[serde(default)]
    pub history: Option<Value>,
    /// CSV export used instead of `history` when present.
    #[serde(default)]
    pub history_csv: Option<String>,
}

/// Router builder exposing the compensation notification endpoint.
pub fn compensation_router(formatter: Arc<CompensationChangeFormatter>) -> Router {
    Router::new()
        .route(
            "/api/v1/compensation/notifications",
            post(notification_handler),
        )
        .with_state(formatter)
}

pub(crate) async fn notification_handler(
    State(formatter): State<Arc<CompensationChangeFormatter>>,
    Json(request): Json<NotificationRequest>,
) -> Json<NotificationMessage> {
    let NotificationRequest {
        webhook,
        history,
        history_csv,
    } = request;

    let history = match history_csv {
        Some(csv) => parse_history_csv(Cursor::new(csv.into_bytes())),
        None => parse_history(history.as_ref()),
    };

    Json(formatter.format_with_history(&webhook, &history))
}
