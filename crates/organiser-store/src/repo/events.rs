use crate::repo::collection::Collection;
use chrono::{Days, NaiveDate};
use organiser_core::domain::Event;

pub type EventList = Collection<Event>;

impl Collection<Event> {
    /// Events active on `day`, in collection order.
    pub fn events_for_day(&self, day: NaiveDate) -> EventList {
        self.filtered(|event| event.occurs_on(day))
    }

    /// Day-by-day view over `days` consecutive days starting at `from`.
    pub fn agenda(&self, from: NaiveDate, days: u32) -> Vec<(NaiveDate, EventList)> {
        (0..days)
            .filter_map(|offset| from.checked_add_days(Days::new(u64::from(offset))))
            .map(|day| (day, self.events_for_day(day)))
            .collect()
    }
}
