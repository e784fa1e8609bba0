use super::message::ChangeKind;
use serde::{Deserialize, Serialize};

/// Language used for notification copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    Ukrainian,
    English,
}

impl Locale {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "uk" | "uk-ua" | "ukrainian" => Some(Self::Ukrainian),
            "en" | "en-us" | "english" => Some(Self::English),
            _ => None,
        }
    }

    pub const fn not_specified(self) -> &'static str {
        match self {
            Self::Ukrainian => "Не вказано",
            Self::English => "Not specified",
        }
    }

    pub const fn not_found(self) -> &'static str {
        match self {
            Self::Ukrainian => "Не знайдено",
            Self::English => "Not found",
        }
    }

    pub const fn heading(self, kind: ChangeKind) -> &'static str {
        match (self, kind) {
            (Self::Ukrainian, ChangeKind::RateChanged) => "Зміна заробітної плати",
            (Self::Ukrainian, ChangeKind::RateUnchanged) => "Оновлення компенсації",
            (Self::Ukrainian, ChangeKind::RateSet) => "Встановлення заробітної плати",
            (Self::English, ChangeKind::RateChanged) => "Pay rate change",
            (Self::English, ChangeKind::RateUnchanged) => "Compensation update",
            (Self::English, ChangeKind::RateSet) => "Pay rate set",
        }
    }

    /// Sentence describing the rate movement, with `*` emphasis around values.
    pub fn transition_line(
        self,
        kind: ChangeKind,
        previous: Option<&str>,
        new_rate: &str,
        employee_name: &str,
    ) -> String {
        match (self, kind, previous) {
            (Self::Ukrainian, ChangeKind::RateChanged, Some(previous)) => format!(
                "Зміна заробітної плати з *{previous}* на *{new_rate}* для *{employee_name}*"
            ),
            (Self::Ukrainian, ChangeKind::RateUnchanged, _) => {
                format!("Компенсація залишилася без змін: *{new_rate}* для *{employee_name}*")
            }
            (Self::Ukrainian, _, _) => {
                format!("Встановлена заробітна плата *{new_rate}* для *{employee_name}*")
            }
            (Self::English, ChangeKind::RateChanged, Some(previous)) => {
                format!("Pay rate changed from *{previous}* to *{new_rate}* for *{employee_name}*")
            }
            (Self::English, ChangeKind::RateUnchanged, _) => {
                format!("Compensation unchanged: *{new_rate}* for *{employee_name}*")
            }
            (Self::English, _, _) => {
                format!("Pay rate set to *{new_rate}* for *{employee_name}*")
            }
        }
    }

    pub const fn profile_link_label(self) -> &'static str {
        match self {
            Self::Ukrainian => "Переглянути профіль працівника",
            Self::English => "View employee profile",
        }
    }

    pub const fn effective_date_label(self) -> &'static str {
        match self {
            Self::Ukrainian => "Дата набуття чинності",
            Self::English => "Effective date",
        }
    }

    pub const fn reason_label(self) -> &'static str {
        match self {
            Self::Ukrainian => "Причина",
            Self::English => "Reason",
        }
    }

    pub const fn position_label(self) -> &'static str {
        match self {
            Self::Ukrainian => "Посада",
            Self::English => "Position",
        }
    }

    pub const fn comment_label(self) -> &'static str {
        match self {
            Self::Ukrainian => "Коментар",
            Self::English => "Comment",
        }
    }

    pub const fn previous_label(self) -> &'static str {
        match self {
            Self::Ukrainian => "Попередня",
            Self::English => "Previous",
        }
    }

    pub const fn time_label(self) -> &'static str {
        match self {
            Self::Ukrainian => "Час",
            Self::English => "Time",
        }
    }

    /// `chrono` format string for the human-readable timestamp.
    pub const fn timestamp_format(self) -> &'static str {
        match self {
            Self::Ukrainian => "%d.%m.%Y, %H:%M:%S",
            Self::English => "%m/%d/%Y, %I:%M:%S %p",
        }
    }
}
