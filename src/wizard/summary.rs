//! Summary assembly for the single post that represents a materialized event.

use crate::model::draft::{DayWindow, EventDraft};
use crate::model::summary::EventSummary;

/// Links shown inline before collapsing the remainder into a count.
const MAX_INLINE_LINKS: usize = 3;

/// Date range prefix for forum post titles, `MM/DD` or `MM/DD-MM/DD`.
pub fn title_prefix(days: &[DayWindow]) -> Option<String> {
    let first = days.first()?;
    let last = days.last()?;
    if first.start.date_naive() == last.start.date_naive() {
        Some(first.start.format("%m/%d").to_string())
    } else {
        Some(format!(
            "{}-{}",
            first.start.format("%m/%d"),
            last.start.format("%m/%d")
        ))
    }
}

/// One "When" line per covered day.
pub fn when_lines(days: &[DayWindow]) -> Vec<String> {
    days.iter()
        .map(|day| {
            format!(
                "{}  {}-{}",
                day.start.format("%a %b %d"),
                day.start.format("%H:%M"),
                day.end.format("%H:%M")
            )
        })
        .collect()
}

/// Collapses per-day calendar links into one field value.
///
/// A single link renders unlabeled; multiple links are labeled with their
/// day and joined inline up to [`MAX_INLINE_LINKS`], with the overflow
/// summarized as a count. Links pair with days positionally, so days whose
/// calendar write failed shift later labels; the count stays honest.
pub fn calendar_field(days: &[DayWindow], links: &[String]) -> Option<String> {
    match links {
        [] => None,
        [only] => Some(format!("[Google Calendar]({})", only)),
        _ => {
            let labeled: Vec<String> = days
                .iter()
                .zip(links.iter())
                .take(MAX_INLINE_LINKS)
                .map(|(day, link)| format!("[{}]({})", day.start.format("%a %b %d"), link))
                .collect();
            let mut field = labeled.join(" | ");
            if links.len() > MAX_INLINE_LINKS {
                field.push_str(&format!(" (+{} more)", links.len() - MAX_INLINE_LINKS));
            }
            Some(field)
        }
    }
}

pub fn build_summary(
    draft: &EventDraft,
    days: &[DayWindow],
    links: &[String],
    chosen_tags: &[String],
    date_prefix: bool,
    event_id: Option<String>,
) -> EventSummary {
    let title = if date_prefix {
        match title_prefix(days) {
            Some(prefix) => format!("{} {}", prefix, draft.title),
            None => draft.title.clone(),
        }
    } else {
        draft.title.clone()
    };

    EventSummary {
        title,
        description: draft.details.clone(),
        location: draft.location.clone(),
        tag_names: chosen_tags.to_vec(),
        when_lines: when_lines(days),
        calendar_field: calendar_field(days, links),
        event_id,
    }
}
