use crate::domain::Repetition;
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Whether an event starting at `start` and repeating per `repetition`
/// occurs on `day`.
///
/// A start day after `day` never matches, whatever the repetition. This
/// pruning runs before the repetition branch, so a repeating series whose
/// first occurrence is in the future is not matched on any earlier day.
pub fn occurs_on(start: NaiveDateTime, repetition: Repetition, day: NaiveDate) -> bool {
    let first = start.date();
    if first > day {
        return false;
    }

    match repetition {
        Repetition::No => first == day,
        Repetition::Daily => true,
        Repetition::Weekly => first.weekday() == day.weekday(),
        Repetition::Monthly => first.day() == day.day(),
        Repetition::Yearly => first.month() == day.month() && first.day() == day.day(),
    }
}
