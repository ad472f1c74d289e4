use crate::domain::{Contact, EntityId, Event, EventCategory, Repetition};
use crate::time::format_record_datetime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactListItemDto {
    pub id: EntityId,
    pub name: String,
    pub mobile_number: String,
    pub personal_email: String,
}

impl From<&Contact> for ContactListItemDto {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id().clone(),
            name: contact.full_name(),
            mobile_number: contact.mobile_number().to_string(),
            personal_email: contact.personal_email().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventListItemDto {
    pub id: EntityId,
    pub title: String,
    pub category: EventCategory,
    pub start: String,
    pub end: String,
    pub repetition: Repetition,
}

impl From<&Event> for EventListItemDto {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id().clone(),
            title: event.title().to_string(),
            category: event.category(),
            start: format_record_datetime(event.start()),
            end: format_record_datetime(event.end()),
            repetition: event.repetition(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAgendaDto {
    pub date: String,
    pub events: Vec<EventListItemDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetailDto {
    #[serde(flatten)]
    pub item: EventListItemDto,
    pub location: String,
    pub description: String,
    pub persons_involved: String,
    pub duration_acceptable: bool,
}
