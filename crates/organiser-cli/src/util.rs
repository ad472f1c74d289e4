use crate::error::invalid_input;
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use organiser_core::domain::{EntityId, EventCategory, Repetition};
use organiser_core::time::{self, RECORD_DATETIME_FORMAT};
use std::str::FromStr;

pub fn parse_entity_id(raw: &str) -> Result<EntityId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid_input("id cannot be empty"));
    }
    EntityId::from_str(trimmed).map_err(|_| invalid_input(format!("invalid id: {trimmed}")))
}

/// Turns a rejected setter call into an invalid-input error naming the field.
pub fn ensure_accepted(accepted: bool, field: &str, value: &str) -> Result<()> {
    if accepted {
        Ok(())
    } else {
        Err(invalid_input(format!("invalid {field}: {value:?}")))
    }
}

/// An empty value clears the date.
pub fn parse_optional_datetime(raw: &str) -> Result<Option<NaiveDateTime>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(time::parse_datetime_input(raw)?))
}

pub fn parse_day(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(value) => Ok(time::parse_date_input(value)?),
        None => Ok(time::today_local()),
    }
}

pub fn parse_category(raw: &str) -> Result<EventCategory> {
    EventCategory::from_str(raw).map_err(|_| {
        let known = EventCategory::ALL
            .iter()
            .map(|category| category.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        invalid_input(format!("unknown category {raw:?}; expected one of: {known}"))
    })
}

pub fn parse_repetition(raw: &str) -> Result<Repetition> {
    Repetition::from_str(raw).map_err(|_| {
        invalid_input(format!(
            "unknown repetition {raw:?}; expected No|Daily|Weekly|Monthly|Yearly"
        ))
    })
}

pub fn format_datetime(value: Option<NaiveDateTime>) -> String {
    value
        .map(|dt| dt.format(RECORD_DATETIME_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn entity_label(count: usize, singular: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {singular}s")
    }
}
