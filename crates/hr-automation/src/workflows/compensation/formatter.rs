use crate::workflows::clock::{Clock, SystemClock};
use super::event::ChangeEvent;
use super::history::{parse_history, HistoryStatus};
use super::lookup::{previous_rate, PreviousRate};
use super::message::{
    strip_emphasis, Block, ChangeKind, NotificationMessage, NotificationMetadata,
};
use crate::config::NotificationConfig;
use chrono::SecondsFormat;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Builds Slack notifications for BambooHR pay-rate changes.
#[derive(Debug, Clone)]
pub struct CompensationChangeFormatter {
    config: NotificationConfig,
    clock: Arc<dyn Clock>,
}

impl CompensationChangeFormatter {
    pub fn new(config: NotificationConfig, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    pub fn with_system_clock(config: NotificationConfig) -> Self {
        Self::new(config, Arc::new(SystemClock))
    }

    pub fn config(&self) -> &NotificationConfig {
        &self.config
    }

    /// Formats a notification from the raw webhook payload and the raw
    /// compensation table response. Never fails: unusable history simply
    /// means no previous rate is shown.
    pub fn format(&self, webhook: &Value, history: Option<&Value>) -> NotificationMessage {
        let history = parse_history(history);
        self.format_with_history(webhook, &history)
    }

    /// Same as [`format`](Self::format) for history that was already parsed,
    /// e.g. from a CSV export.
    pub fn format_with_history(
        &self,
        webhook: &Value,
        history: &HistoryStatus,
    ) -> NotificationMessage {
        let event = ChangeEvent::from_webhook(webhook, self.config.locale);
        let previous = previous_rate(history.records(), &event);
        self.compose(&event, previous.as_ref(), history)
    }

    fn compose(
        &self,
        event: &ChangeEvent,
        previous: Option<&PreviousRate>,
        history: &HistoryStatus,
    ) -> NotificationMessage {
        let locale = self.config.locale;
        let previous_text = previous.map(ToString::to_string);
        let kind = classify(previous_text.as_deref(), &event.new_rate);
        let heading = locale.heading(kind);
        let profile_url = format!("{}{}", self.config.profile_base_url, event.employee_id);

        let headline = format!(
            "{} {}\n{}\n<{}|{}>",
            kind.emoji(),
            heading,
            locale.transition_line(
                kind,
                previous_text.as_deref(),
                &event.new_rate,
                &event.employee_name
            ),
            profile_url,
            locale.profile_link_label()
        );

        let mut blocks = vec![Block::section(headline.clone())];

        let mut context = vec![
            format!(
                "📅 *{}:* {}",
                locale.effective_date_label(),
                event.effective_date
            ),
            format!("📝 *{}:* {}", locale.reason_label(), event.change_reason),
        ];
        if let Some(position) = event.position() {
            context.push(format!("💼 *{}:* {}", locale.position_label(), position));
        }
        blocks.push(Block::context(context));

        if let Some(comment) = event.comment.as_deref() {
            blocks.push(Block::section(format!(
                "💬 *{}:* {}",
                locale.comment_label(),
                comment
            )));
        }

        let now = self.clock.now();
        let local_time = now
            .with_timezone(&self.config.utc_offset)
            .format(locale.timestamp_format());

        blocks.push(Block::Divider);
        blocks.push(Block::context([format!(
            "🔍 ID: {} | {}: {} | {}: {}",
            event.employee_id,
            locale.previous_label(),
            previous_text.as_deref().unwrap_or(locale.not_found()),
            locale.time_label(),
            local_time
        )]));

        info!(
            employee_id = %event.employee_id,
            change_kind = ?kind,
            history = history.label(),
            previous_rate = previous_text.as_deref().unwrap_or("-"),
            "formatted compensation change notification"
        );

        NotificationMessage {
            text: strip_emphasis(&headline),
            blocks,
            metadata: NotificationMetadata {
                employee_id: event.employee_id.clone(),
                employee_name: event.employee_name.clone(),
                previous_rate: previous_text,
                previous_rate_source: previous.map(|rate| rate.source),
                new_rate: event.new_rate.clone(),
                effective_date: event.effective_date.clone(),
                change_reason: event.change_reason.clone(),
                comment: event.comment.clone(),
                department: event.department.clone().unwrap_or_default(),
                job_title: event.job_title.clone().unwrap_or_default(),
                change_kind: kind,
                message_type: heading,
                profile_url,
                history_status: history.label(),
                timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            },
        }
    }
}

/// Compares formatted rates, so `"100 USD"` and `"100.00 USD"` differ.
fn classify(previous: Option<&str>, new_rate: &str) -> ChangeKind {
    match previous {
        Some(previous) if previous != new_rate => ChangeKind::RateChanged,
        Some(_) => ChangeKind::RateUnchanged,
        None => ChangeKind::RateSet,
    }
}
