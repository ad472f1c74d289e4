use chrono::{Datelike, Duration, NaiveDate, Weekday};
use organiser_core::domain::{Event, Repetition};
use organiser_store::repo::{AddMode, EventList};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn event(title: &str, start: &str, repetition: Repetition) -> Event {
    let mut event = Event::new();
    assert!(event.set_title(title));
    assert!(event.set_start_text(start));
    event.set_repetition(repetition);
    event
}

fn titles(list: &EventList) -> Vec<&str> {
    list.iter().map(|event| event.title()).collect()
}

#[test]
fn weekly_event_appears_on_later_mondays_only() {
    let monday = date(2024, 1, 1);
    assert_eq!(monday.weekday(), Weekday::Mon);

    let mut list = EventList::new();
    list.add(
        event("Standup", "2024-01-01 09:00:00", Repetition::Weekly),
        AddMode::Interactive,
    )
    .expect("add");

    for week in 0..10 {
        let later = monday + Duration::weeks(week);
        assert_eq!(list.events_for_day(later).len(), 1);
        assert!(list.events_for_day(later + Duration::days(1)).is_empty());
    }
}

#[test]
fn day_query_preserves_order_and_skips_undated() {
    let mut list = EventList::new();
    list.add(
        event("Gym", "2024-01-01 07:00:00", Repetition::Daily),
        AddMode::Interactive,
    )
    .expect("add");
    list.add(event("Undated", "", Repetition::Daily), AddMode::Interactive)
        .expect("add");
    list.add(
        event("Dentist", "2024-01-10 15:00:00", Repetition::No),
        AddMode::Interactive,
    )
    .expect("add");
    list.add(
        event("Rent", "2023-12-10 00:00:00", Repetition::Monthly),
        AddMode::Interactive,
    )
    .expect("add");

    let day = list.events_for_day(date(2024, 1, 10));
    assert_eq!(titles(&day), ["Gym", "Dentist", "Rent"]);

    let other = list.events_for_day(date(2024, 1, 11));
    assert_eq!(titles(&other), ["Gym"]);
}

#[test]
fn future_series_is_not_matched_before_it_starts() {
    let mut list = EventList::new();
    list.add(
        event("Anniversary", "2030-06-01 00:00:00", Repetition::Yearly),
        AddMode::Interactive,
    )
    .expect("add");

    assert!(list.events_for_day(date(2029, 6, 1)).is_empty());
    assert_eq!(list.events_for_day(date(2030, 6, 1)).len(), 1);
    assert_eq!(list.events_for_day(date(2031, 6, 1)).len(), 1);
}

#[test]
fn day_query_returns_independent_collection() {
    let mut list = EventList::new();
    list.add(
        event("Gym", "2024-01-01 07:00:00", Repetition::Daily),
        AddMode::Interactive,
    )
    .expect("add");

    let mut day = list.events_for_day(date(2024, 2, 1));
    day.clear();
    assert_eq!(list.len(), 1);
}

#[test]
fn agenda_covers_consecutive_days() {
    let mut list = EventList::new();
    list.add(
        event("Lecture", "2024-01-03 10:00:00", Repetition::Weekly),
        AddMode::Interactive,
    )
    .expect("add");

    let agenda = list.agenda(date(2024, 1, 1), 14);
    assert_eq!(agenda.len(), 14);
    assert_eq!(agenda[0].0, date(2024, 1, 1));
    let hits: Vec<NaiveDate> = agenda
        .iter()
        .filter(|(_, events)| !events.is_empty())
        .map(|(day, _)| *day)
        .collect();
    assert_eq!(hits, [date(2024, 1, 3), date(2024, 1, 10)]);
}
