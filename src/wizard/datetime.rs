//! Civil date/time parsing and per-day expansion.
//!
//! All input is interpreted in the one configured timezone. Two input shapes
//! are accepted: `YYYY-MM-DD HH:MM` (24-hour) and `MM/DD/YYYY h:mm am/pm`.

use chrono::{DateTime, Days, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use crate::error::wizard::WizardError;
use crate::model::draft::{DayWindow, DraftInput, EventDraft};

pub const MAX_TITLE_LEN: usize = 120;
pub const MAX_DETAILS_LEN: usize = 1000;

/// Parses one civil datetime string against the configured timezone.
pub fn parse_civil(raw: &str, tz: Tz) -> Result<DateTime<Tz>, WizardError> {
    let trimmed = raw.trim();

    let naive = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(&trimmed.to_uppercase(), "%m/%d/%Y %I:%M %p"))
        .map_err(|_| {
            WizardError::InvalidInput(format!(
                "Could not read '{}'. Use YYYY-MM-DD HH:MM or MM/DD/YYYY h:mm am/pm.",
                trimmed
            ))
        })?;

    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(first, _) => Ok(first),
        LocalResult::None => Err(WizardError::InvalidInput(format!(
            "'{}' does not exist in timezone {}.",
            trimmed, tz
        ))),
    }
}

/// Validates raw form input into an [`EventDraft`].
///
/// All validation happens here, before any external call: title and details
/// length limits, datetime shape, and the start/end date ordering invariant
/// (at date granularity, so a same-day window ending at an earlier
/// time-of-day is still accepted and handled as overnight later).
pub fn parse_draft(input: &DraftInput, tz: Tz) -> Result<EventDraft, WizardError> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err(WizardError::InvalidInput("Title is required.".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(WizardError::InvalidInput(format!(
            "Title is limited to {} characters.",
            MAX_TITLE_LEN
        )));
    }

    let details = input
        .details
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty());
    if let Some(details) = details {
        if details.chars().count() > MAX_DETAILS_LEN {
            return Err(WizardError::InvalidInput(format!(
                "Details are limited to {} characters.",
                MAX_DETAILS_LEN
            )));
        }
    }

    let start = parse_civil(&input.start_raw, tz)?;
    let end = parse_civil(&input.end_raw, tz)?;

    if end.date_naive() < start.date_naive() {
        return Err(WizardError::InvalidInput(
            "End date is before start date.".to_string(),
        ));
    }

    Ok(EventDraft {
        title: title.to_string(),
        start,
        end,
        location: input
            .location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string),
        details: details.map(str::to_string),
    })
}

/// Expands a draft into one window per calendar day, both ends inclusive.
///
/// Each day carries the time-of-day taken from the original start/end
/// instants. When a day's end would not land after its start (an overnight
/// window), the end is pushed forward by one day.
pub fn expand_days(draft: &EventDraft) -> Vec<DayWindow> {
    let tz = draft.start.timezone();
    let start_time = draft.start.time();
    let end_time = draft.end.time();

    let mut days = Vec::new();
    let mut date = draft.start.date_naive();
    let last = draft.end.date_naive();

    while date <= last {
        let start = resolve_local(tz, date.and_time(start_time));
        let mut end = resolve_local(tz, date.and_time(end_time));
        if end <= start {
            // overnight window
            end = resolve_local(tz, (date + Days::new(1)).and_time(end_time));
        }
        days.push(DayWindow { start, end });
        date = date + Days::new(1);
    }

    days
}

/// Resolves a civil datetime that is expected to be valid, tolerating DST
/// folds and gaps: ambiguous times take the earlier offset and nonexistent
/// times slide forward an hour.
fn resolve_local(tz: Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(first, _) => first,
        LocalResult::None => match tz.from_local_datetime(&(naive + chrono::Duration::hours(1))) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(first, _) => first,
            LocalResult::None => tz.from_utc_datetime(&naive),
        },
    }
}
