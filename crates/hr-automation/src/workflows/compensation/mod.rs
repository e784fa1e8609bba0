//! BambooHR pay-rate change notifications.
//!
//! The webhook payload and the compensation table response are both loosely
//! shaped; every step here degrades to placeholders instead of failing, so a
//! well-formed [`NotificationMessage`] is always produced.

pub mod event;
mod formatter;
pub mod history;
mod locale;
pub mod lookup;
pub mod message;
pub mod router;

pub use crate::workflows::clock::{Clock, FixedClock, SystemClock};
pub use event::ChangeEvent;
pub use formatter::CompensationChangeFormatter;
pub use history::{
    parse_history, parse_history_csv, CompensationRecord, HistoryShapeError, HistoryStatus,
    PayPeriod,
};
pub use locale::Locale;
pub use lookup::{previous_rate, PreviousRate, PreviousRateSource};
pub use message::{Block, ChangeKind, NotificationMessage, NotificationMetadata, TextObject};
pub use router::{compensation_router, NotificationRequest};
