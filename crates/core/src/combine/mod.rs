//! Batch combiner: parse fully fetched feeds, merge their events, sort,
//! reserialize.
//!
//! This is the non-streaming counterpart of the feed pipeline and defines the
//! ordering contract: events sorted by the raw `DTSTART` property value. The
//! streaming path does NOT share this order; it emits in arrival order, and
//! the two stay separate.

mod error;

pub use error::CombineError;
pub use icalendar::Calendar;

use icalendar::{
    parser::{read_calendar, unfold},
    CalendarComponent, Component, Event,
};

/// Parse raw ICS text into a calendar.
///
/// Folded lines are unfolded first. A malformed feed is an error surfaced to
/// the caller, never an empty calendar.
pub fn parse_calendar(input: &str) -> Result<Calendar, CombineError> {
    let unfolded = unfold(input);
    let parsed = read_calendar(&unfolded).map_err(CombineError::Parse)?;
    Ok(Calendar::from(parsed))
}

/// Merge the events of two calendars into a new calendar ordered by the raw
/// `DTSTART` property value.
///
/// The comparison is plain string ordering, not date parsing. That is correct
/// exactly when all start values share one sortable textual encoding (plain
/// `YYYYMMDD` dates, or the extended ISO forms); holiday feeds do. The sort
/// is stable, so on equal start values events from `first` precede events
/// from `second`. Components other than VEVENT are not carried over, and
/// neither input is mutated. An event without `DTSTART` sorts first.
pub fn combine_calendars(first: &Calendar, second: &Calendar) -> Calendar {
    let mut events: Vec<&Event> = first
        .components
        .iter()
        .chain(second.components.iter())
        .filter_map(|component| match component {
            CalendarComponent::Event(event) => Some(event),
            _ => None,
        })
        .collect();

    events.sort_by(|a, b| start_value(a).cmp(&start_value(b)));

    let mut combined = Calendar::new();
    for event in events {
        combined.push(event.clone());
    }
    combined
}

/// Raw `DTSTART` value used as the sort key.
fn start_value(event: &Event) -> &str {
    event.property_value("DTSTART").unwrap_or("")
}
