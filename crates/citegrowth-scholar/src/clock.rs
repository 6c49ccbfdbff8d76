use chrono::Datelike;

/// Calendar year from the local wall clock.
///
/// Only the adapter reads the clock; the projection model takes the year as
/// an argument.
pub fn current_calendar_year() -> i32 {
    chrono::Local::now().year()
}
