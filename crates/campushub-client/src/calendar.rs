use std::collections::BTreeMap;

use campushub_types::models::{Event, Holiday};
use chrono::NaiveDate;

use crate::favorites::FavoriteSet;

/// The event dot a calendar cell shows. A favorited event outranks a
/// plain event on the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventMark {
    None,
    Event,
    Favorite,
}

/// Presentation markers for one calendar cell.
///
/// The holiday marker and the event/favorite marker are independent:
/// a date can carry both, and neither suppresses the other.
#[derive(Debug, Clone, PartialEq)]
pub struct DayMarks {
    /// Local name of the holiday falling on this date, if any.
    pub holiday: Option<String>,
    pub event_mark: EventMark,
}

impl DayMarks {
    pub fn is_empty(&self) -> bool {
        self.holiday.is_none() && self.event_mark == EventMark::None
    }
}

/// Markers for a single date, cross-referencing the three
/// independently-sourced collections.
pub fn mark_day(
    date: NaiveDate,
    holidays: &[Holiday],
    events: &[Event],
    favorites: &FavoriteSet,
) -> DayMarks {
    let holiday = holidays
        .iter()
        .find(|h| h.date == date)
        .map(|h| h.local_name.clone());

    let mut event_mark = EventMark::None;
    for event in events.iter().filter(|e| e.date == Some(date)) {
        if favorites.contains(event.id) {
            event_mark = EventMark::Favorite;
            break;
        }
        event_mark = EventMark::Event;
    }

    DayMarks { holiday, event_mark }
}

/// Markers for every date that shows at least one dot. The merge is
/// commutative over its inputs: feeding holidays and events in either
/// order produces the same map.
pub fn calendar_marks(
    holidays: &[Holiday],
    events: &[Event],
    favorites: &FavoriteSet,
) -> BTreeMap<NaiveDate, DayMarks> {
    let mut marks: BTreeMap<NaiveDate, DayMarks> = BTreeMap::new();

    for holiday in holidays {
        marks
            .entry(holiday.date)
            .or_insert_with(|| DayMarks { holiday: None, event_mark: EventMark::None })
            .holiday = Some(holiday.local_name.clone());
    }

    for event in events {
        let Some(date) = event.date else { continue };
        let entry = marks
            .entry(date)
            .or_insert_with(|| DayMarks { holiday: None, event_mark: EventMark::None });
        if favorites.contains(event.id) {
            entry.event_mark = EventMark::Favorite;
        } else if entry.event_mark == EventMark::None {
            entry.event_mark = EventMark::Event;
        }
    }

    marks
}
