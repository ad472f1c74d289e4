use crate::domain::category::{EventCategory, Repetition};
use crate::domain::ids::EntityId;
use crate::domain::record::{validated_field, Record};
use crate::rules::{duration, recurrence, validation};
use crate::time::{format_record_datetime, parse_record_datetime};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::str::FromStr;

pub const EVENT_HEADER: [&str; 9] = [
    "Event ID",
    "Title",
    "Category",
    "Starting Date",
    "Ending Date",
    "Location",
    "Repetition",
    "Description",
    "Persons Involved",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    id: EntityId,
    title: String,
    category: EventCategory,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    location: String,
    repetition: Repetition,
    description: String,
    persons_involved: String,
}

impl Default for Event {
    fn default() -> Self {
        Self::new()
    }
}

impl Event {
    pub fn new() -> Self {
        Self {
            id: EntityId::generate(),
            title: String::new(),
            category: EventCategory::default(),
            start: None,
            end: None,
            location: String::new(),
            repetition: Repetition::default(),
            description: String::new(),
            persons_involved: String::new(),
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    validated_field!(title, set_title, validation::validate_title);
    validated_field!(location, set_location, validation::validate_location);
    validated_field!(
        description,
        set_description,
        validation::validate_description
    );
    validated_field!(persons_involved, set_persons_involved, |_| true);

    pub fn category(&self) -> EventCategory {
        self.category
    }

    pub fn set_category(&mut self, category: EventCategory) {
        self.category = category;
    }

    pub fn set_category_label(&mut self, label: &str) -> bool {
        match EventCategory::from_str(label) {
            Ok(category) => {
                self.category = category;
                true
            }
            Err(_) => false,
        }
    }

    pub fn repetition(&self) -> Repetition {
        self.repetition
    }

    pub fn set_repetition(&mut self, repetition: Repetition) {
        self.repetition = repetition;
    }

    pub fn set_repetition_label(&mut self, label: &str) -> bool {
        match Repetition::from_str(label) {
            Ok(repetition) => {
                self.repetition = repetition;
                true
            }
            Err(_) => false,
        }
    }

    pub fn start(&self) -> Option<NaiveDateTime> {
        self.start
    }

    pub fn set_start(&mut self, start: Option<NaiveDateTime>) {
        self.start = start;
    }

    /// Accepts `YYYY-MM-DD HH:MM:SS` or the empty string.
    pub fn set_start_text(&mut self, raw: &str) -> bool {
        match parse_record_datetime(raw) {
            Ok(value) => {
                self.start = value;
                true
            }
            Err(_) => false,
        }
    }

    pub fn end(&self) -> Option<NaiveDateTime> {
        self.end
    }

    pub fn set_end(&mut self, end: Option<NaiveDateTime>) {
        self.end = end;
    }

    pub fn set_end_text(&mut self, raw: &str) -> bool {
        match parse_record_datetime(raw) {
            Ok(value) => {
                self.end = value;
                true
            }
            Err(_) => false,
        }
    }

    pub fn is_duration_acceptable(&self, now: NaiveDateTime) -> bool {
        duration::is_duration_acceptable(self.category, self.start, self.end, now)
    }

    /// Events without a start date never occur.
    pub fn occurs_on(&self, day: NaiveDate) -> bool {
        self.start
            .is_some_and(|start| recurrence::occurs_on(start, self.repetition, day))
    }
}

impl Record for Event {
    const ENTITY: &'static str = "Event";
    const HEADER: &'static [&'static str] = &EVENT_HEADER;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.category.as_str().to_string(),
            format_record_datetime(self.start),
            format_record_datetime(self.end),
            self.location.clone(),
            self.repetition.as_str().to_string(),
            self.description.clone(),
            self.persons_involved.clone(),
        ]
    }

    fn apply_record(&mut self, fields: &[String]) -> bool {
        let setters: [fn(&mut Event, &str) -> bool; 8] = [
            Event::set_title,
            Event::set_category_label,
            Event::set_start_text,
            Event::set_end_text,
            Event::set_location,
            Event::set_repetition_label,
            Event::set_description,
            Event::set_persons_involved,
        ];

        if let Some(id) = fields.first() {
            self.id = EntityId::from_raw(id.as_str());
        }
        for (setter, value) in setters.iter().zip(fields.iter().skip(1)) {
            setter(self, value);
        }
        true
    }

    fn equals_ignoring_id(&self, other: &Self) -> bool {
        self.title == other.title
            && self.category == other.category
            && self.start == other.start
            && self.end == other.end
            && self.location == other.location
            && self.repetition == other.repetition
            && self.description == other.description
            && self.persons_involved == other.persons_involved
    }
}
