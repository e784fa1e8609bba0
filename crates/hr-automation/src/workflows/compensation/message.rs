use super::lookup::PreviousRateSource;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    RateChanged,
    RateUnchanged,
    RateSet,
}

impl ChangeKind {
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::RateChanged | Self::RateSet => "🔔",
            Self::RateUnchanged => "ℹ️",
        }
    }
}

/// Text object inside a block. Only Slack `mrkdwn` is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    Mrkdwn { text: String },
}

impl TextObject {
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self::Mrkdwn { text: text.into() }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Mrkdwn { text } => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section { text: TextObject },
    Context { elements: Vec<TextObject> },
    Divider,
}

impl Block {
    pub fn section(text: impl Into<String>) -> Self {
        Self::Section {
            text: TextObject::mrkdwn(text),
        }
    }

    pub fn context<I, S>(elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Context {
            elements: elements.into_iter().map(TextObject::mrkdwn).collect(),
        }
    }
}

/// Flat record for downstream logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationMetadata {
    pub employee_id: String,
    pub employee_name: String,
    pub previous_rate: Option<String>,
    pub previous_rate_source: Option<PreviousRateSource>,
    pub new_rate: String,
    pub effective_date: String,
    pub change_reason: String,
    pub comment: Option<String>,
    pub department: String,
    pub job_title: String,
    pub change_kind: ChangeKind,
    pub message_type: &'static str,
    pub profile_url: String,
    pub history_status: &'static str,
    /// RFC 3339 in UTC.
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationMessage {
    pub text: String,
    pub blocks: Vec<Block>,
    pub metadata: NotificationMetadata,
}

/// Drops Slack emphasis markers for the notification fallback text.
pub(crate) fn strip_emphasis(text: &str) -> String {
    text.replace('*', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blocks_serialize_with_type_tags() {
        let blocks = vec![
            Block::section("*hello*"),
            Block::context(["a", "b"]),
            Block::Divider,
        ];
        let value = serde_json::to_value(&blocks).expect("serializes");
        assert_eq!(
            value,
            json!([
                { "type": "section", "text": { "type": "mrkdwn", "text": "*hello*" } },
                { "type": "context", "elements": [
                    { "type": "mrkdwn", "text": "a" },
                    { "type": "mrkdwn", "text": "b" }
                ] },
                { "type": "divider" }
            ])
        );
    }

    #[test]
    fn strip_emphasis_removes_every_asterisk() {
        assert_eq!(strip_emphasis("*a* and **b**"), "a and b");
    }
}
