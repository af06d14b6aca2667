//! Calendar Logic
//!
//! Month grid generation, event queries and the add/edit form state.

use chrono::{Datelike, Months, NaiveDate};

use crate::collection::Collection;
use crate::models::Event;
use crate::storage::KeyValueStore;

/// One cell of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDay {
    pub date: NaiveDate,
    /// False for padding days from the neighbouring months
    pub in_month: bool,
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month `delta` months away
pub fn shift_month(month: NaiveDate, delta: i32) -> NaiveDate {
    let start = month_start(month);
    let shifted = if delta >= 0 {
        start.checked_add_months(Months::new(delta.unsigned_abs()))
    } else {
        start.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.unwrap_or(start)
}

/// Last day of the month containing `date`
pub fn month_end(date: NaiveDate) -> NaiveDate {
    shift_month(date, 1).pred_opt().unwrap_or(date)
}

pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Sunday-first grid covering the whole month in complete weeks
pub fn month_grid(month: NaiveDate) -> Vec<GridDay> {
    let first = month_start(month);
    let last = month_end(month);
    let lead = first.weekday().num_days_from_sunday() as u64;
    let trail = 6 - last.weekday().num_days_from_sunday() as u64;

    let start = first - chrono::Days::new(lead);
    let end = last + chrono::Days::new(trail);

    start
        .iter_days()
        .take_while(|day| *day <= end)
        .map(|date| GridDay { date, in_month: same_month(date, first) })
        .collect()
}

/// Events falling in `month`, in list order
pub fn events_in_month(events: &[Event], month: NaiveDate) -> impl Iterator<Item = &Event> {
    events.iter().filter(move |event| same_month(event.date, month))
}

/// Whether any event falls on `day`
pub fn has_event_on(events: &[Event], day: NaiveDate) -> bool {
    events.iter().any(|event| event.date == day)
}

/// Header text, e.g. "May 2024"
pub fn month_title(month: NaiveDate) -> String {
    month.format("%B %Y").to_string()
}

/// Event entry form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDraft {
    pub selected: Option<NaiveDate>,
    pub title: String,
    /// Id of the event being edited; `None` when adding
    pub editing: Option<i64>,
}

impl EventDraft {
    pub fn select(&mut self, date: NaiveDate) {
        self.selected = Some(date);
    }

    /// Pre-fill the form from an existing event
    pub fn edit(&mut self, event: &Event) {
        self.editing = Some(event.id);
        self.title = event.title.clone();
        self.selected = Some(event.date);
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add or update depending on mode.
    ///
    /// Needs a selected date and a non-blank title; otherwise nothing
    /// changes. Clears the form once the event is written.
    pub fn confirm<S: KeyValueStore>(&mut self, events: &mut Collection<Event, S>, now_millis: i64) -> bool {
        let Some(date) = self.selected else {
            return false;
        };
        if self.title.trim().is_empty() {
            return false;
        }
        let title = self.title.clone();

        let written = match self.editing {
            Some(id) => events.update(id, |event| {
                event.date = date;
                event.title = title;
            }),
            None => {
                let id = events.next_id(now_millis);
                events.push(Event { id, date, title });
                true
            }
        };
        if !written {
            log::debug!("event {:?} vanished while editing", self.editing);
        }
        self.reset();
        written
    }

    /// Forget the edit if its event was deleted
    pub fn forget(&mut self, id: i64) {
        if self.editing == Some(id) {
            self.reset();
        }
    }
}
