pub mod clock;
pub mod compensation;
mod dates;
pub mod onboarding;
pub mod requisition;

pub use clock::{Clock, FixedClock, SystemClock};
