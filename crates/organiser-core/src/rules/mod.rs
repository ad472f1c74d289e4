pub mod duration;
pub mod recurrence;
pub mod validation;

pub use duration::{duration_window, is_duration_acceptable, DurationWindow};
pub use recurrence::occurs_on;
pub use validation::PhoneRule;
