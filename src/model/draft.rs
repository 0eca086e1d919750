use chrono::DateTime;
use chrono_tz::Tz;

/// Raw operator input collected from the event creation form, before any
/// validation or parsing.
#[derive(Debug, Clone, Default)]
pub struct DraftInput {
    pub title: String,
    pub start_raw: String,
    pub end_raw: String,
    pub location: Option<String>,
    pub details: Option<String>,
}

/// Validated in-progress event description.
///
/// Owned by a single wizard run and discarded when the run finishes, is
/// canceled, or times out. Start/end are civil datetimes resolved against
/// the one configured timezone.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub location: Option<String>,
    pub details: Option<String>,
}

/// One calendar day's concrete start/end window, produced by expanding a
/// draft's date range. The end may fall on the following day when the raw
/// time-of-day window crosses midnight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayWindow {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}
