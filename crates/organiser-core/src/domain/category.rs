use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    #[default]
    Other,
    SocialEvent,
    Birthday,
    Anniversary,
    Meal,
    HappyHour,
    Concert,
    Sports,
    WorkDeadline,
    Meeting,
    Appointment,
    BankHoliday,
    BillPayment,
    ClassLecture,
    Accident,
    PreviousPayment,
    Gym,
    Vacation,
}

impl EventCategory {
    pub const ALL: [EventCategory; 18] = [
        EventCategory::Other,
        EventCategory::SocialEvent,
        EventCategory::Birthday,
        EventCategory::Anniversary,
        EventCategory::Meal,
        EventCategory::HappyHour,
        EventCategory::Concert,
        EventCategory::Sports,
        EventCategory::WorkDeadline,
        EventCategory::Meeting,
        EventCategory::Appointment,
        EventCategory::BankHoliday,
        EventCategory::BillPayment,
        EventCategory::ClassLecture,
        EventCategory::Accident,
        EventCategory::PreviousPayment,
        EventCategory::Gym,
        EventCategory::Vacation,
    ];

    /// Catalogue label, as written to and read from event files.
    pub fn as_str(self) -> &'static str {
        match self {
            EventCategory::Other => "Other",
            EventCategory::SocialEvent => "Social event",
            EventCategory::Birthday => "Birthday",
            EventCategory::Anniversary => "Anniversary",
            EventCategory::Meal => "Meal",
            EventCategory::HappyHour => "Happy hour",
            EventCategory::Concert => "Concert",
            EventCategory::Sports => "Sports",
            EventCategory::WorkDeadline => "Work deadline",
            EventCategory::Meeting => "Meeting",
            EventCategory::Appointment => "Appointment",
            EventCategory::BankHoliday => "Bank holiday",
            EventCategory::BillPayment => "Bill payment",
            EventCategory::ClassLecture => "Class/Lecture",
            EventCategory::Accident => "Accident",
            EventCategory::PreviousPayment => "Previous Payment",
            EventCategory::Gym => "Gym",
            EventCategory::Vacation => "Vacation",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim();
        EventCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::InvalidCategory(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Repetition {
    #[default]
    No,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Repetition {
    pub const ALL: [Repetition; 5] = [
        Repetition::No,
        Repetition::Daily,
        Repetition::Weekly,
        Repetition::Monthly,
        Repetition::Yearly,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Repetition::No => "No",
            Repetition::Daily => "Daily",
            Repetition::Weekly => "Weekly",
            Repetition::Monthly => "Monthly",
            Repetition::Yearly => "Yearly",
        }
    }
}

impl fmt::Display for Repetition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Repetition {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim();
        Repetition::ALL
            .into_iter()
            .find(|repetition| repetition.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::InvalidRepetition(raw.to_string()))
    }
}
