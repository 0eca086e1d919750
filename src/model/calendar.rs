use chrono::DateTime;
use chrono_tz::Tz;

/// Description of one calendar entry to be created, covering a single day's
/// window of a (possibly multi-day) event.
#[derive(Debug, Clone)]
pub struct NewCalendarEntry {
    pub title: String,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub location: Option<String>,
    pub description: Option<String>,
    /// Calendar color classification, picked from the chosen tags.
    pub color_id: Option<&'static str>,
}

/// Identifier and shareable link returned by the calendar service for a
/// created entry. The entry itself is owned by the calendar store; the bot
/// retains only these two fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertedEvent {
    pub id: String,
    pub html_link: Option<String>,
}

/// One upcoming entry returned by the calendar list API, as consumed by the
/// reminder loop and the event listing command.
#[derive(Debug, Clone)]
pub struct UpcomingEvent {
    pub id: String,
    pub title: String,
    /// RFC 3339 start instant; None for all-day entries, which reminders skip.
    pub start_date_time: Option<String>,
    pub html_link: Option<String>,
}
