//! Advisory duration windows per event category.
//!
//! Nothing here blocks a save; callers surface a failed check as a warning.

use crate::domain::EventCategory;
use chrono::NaiveDateTime;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Inclusive bounds, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationWindow {
    pub min_seconds: i64,
    pub max_seconds: i64,
}

impl DurationWindow {
    const fn between(min_seconds: i64, max_seconds: i64) -> Self {
        Self {
            min_seconds,
            max_seconds,
        }
    }

    const fn exactly(seconds: i64) -> Self {
        Self::between(seconds, seconds)
    }

    pub fn contains(&self, seconds: i64) -> bool {
        (self.min_seconds..=self.max_seconds).contains(&seconds)
    }
}

pub fn duration_window(category: EventCategory) -> DurationWindow {
    match category {
        EventCategory::Other => DurationWindow::between(0, i64::MAX),
        EventCategory::SocialEvent => DurationWindow::between(30 * MINUTE, 12 * HOUR),
        EventCategory::Birthday | EventCategory::Anniversary | EventCategory::BankHoliday => {
            DurationWindow::between(0, DAY)
        }
        EventCategory::Meal => DurationWindow::between(0, HOUR),
        EventCategory::HappyHour => DurationWindow::exactly(HOUR),
        EventCategory::Concert => DurationWindow::between(30 * MINUTE, 5 * HOUR),
        EventCategory::Sports | EventCategory::ClassLecture => {
            DurationWindow::between(30 * MINUTE, 4 * HOUR)
        }
        EventCategory::WorkDeadline
        | EventCategory::BillPayment
        | EventCategory::Accident
        | EventCategory::PreviousPayment => DurationWindow::exactly(0),
        EventCategory::Meeting => DurationWindow::between(10 * MINUTE, 8 * HOUR),
        EventCategory::Appointment => DurationWindow::between(10 * MINUTE, 2 * HOUR),
        EventCategory::Gym => DurationWindow::between(30 * MINUTE, 3 * HOUR),
        EventCategory::Vacation => DurationWindow::between(DAY, 28 * DAY),
    }
}

pub fn is_duration_acceptable(
    category: EventCategory,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> bool {
    let (Some(start), Some(end)) = (start, end) else {
        return false;
    };

    if category == EventCategory::PreviousPayment && start > now {
        return false;
    }

    let seconds = (end - start).num_seconds();
    duration_window(category).contains(seconds)
}
