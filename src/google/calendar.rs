use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serenity::async_trait;
use tracing::info;

use crate::error::AppError;
use crate::model::calendar::{InsertedEvent, NewCalendarEntry, UpcomingEvent};
use crate::wizard::flow::CalendarWriter;

const CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";

/// Google colorIds keyed by tag keywords, applied to created entries so the
/// calendar itself hints at the kind of event.
const TAG_COLORS: &[(&str, &str)] = &[
    ("yard sale", "10"),
    ("games", "9"),
    ("music", "3"),
    ("food", "6"),
    ("potluck", "6"),
    ("meeting", "8"),
    ("kids", "5"),
];

/// First chosen tag with a known color keyword wins.
pub fn pick_color_id(chosen_tags: &[String]) -> Option<&'static str> {
    for tag in chosen_tags {
        let key = tag.trim().to_lowercase();
        if let Some((_, color)) = TAG_COLORS.iter().find(|(word, _)| key.contains(word)) {
            return Some(color);
        }
    }
    None
}

pub struct GoogleCalendar {
    http: reqwest::Client,
    token: String,
    calendar_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EventDateTime {
    date_time: String,
    time_zone: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InsertEventBody<'a> {
    summary: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    start: EventDateTime,
    end: EventDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    color_id: Option<&'a str>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventTimeResource {
    #[serde(default)]
    date_time: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventResource {
    id: String,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    html_link: Option<String>,
    #[serde(default)]
    start: Option<EventTimeResource>,
}

#[derive(Deserialize)]
struct EventListResponse {
    #[serde(default)]
    items: Vec<EventResource>,
}

impl GoogleCalendar {
    pub fn new(token: String, calendar_id: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            token,
            calendar_id,
        }
    }

    /// Lists upcoming entries in the window, expanded to single instances and
    /// ordered by start time.
    pub async fn list_events(
        &self,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
        max_results: u32,
    ) -> Result<Vec<UpcomingEvent>, AppError> {
        let url = format!(
            "{}/calendars/{}/events",
            CALENDAR_API_BASE,
            urlencoding::encode(&self.calendar_id)
        );
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .query(&[
                ("timeMin", time_min.to_rfc3339_opts(SecondsFormat::Secs, true)),
                ("timeMax", time_max.to_rfc3339_opts(SecondsFormat::Secs, true)),
                ("singleEvents", "true".to_string()),
                ("orderBy", "startTime".to_string()),
                ("maxResults", max_results.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let list: EventListResponse = response.json().await?;
        Ok(list
            .items
            .into_iter()
            .map(|item| UpcomingEvent {
                id: item.id,
                title: item.summary.unwrap_or_else(|| "(untitled)".to_string()),
                start_date_time: item.start.and_then(|s| s.date_time),
                html_link: item.html_link,
            })
            .collect())
    }
}

#[async_trait]
impl CalendarWriter for GoogleCalendar {
    async fn insert_event(&self, entry: &NewCalendarEntry) -> Result<InsertedEvent, AppError> {
        let url = format!(
            "{}/calendars/{}/events",
            CALENDAR_API_BASE,
            urlencoding::encode(&self.calendar_id)
        );
        let time_zone = entry.start.timezone().name().to_string();
        let body = InsertEventBody {
            summary: &entry.title,
            location: entry.location.as_deref(),
            description: entry.description.as_deref(),
            start: EventDateTime {
                date_time: entry.start.to_rfc3339_opts(SecondsFormat::Secs, false),
                time_zone: time_zone.clone(),
            },
            end: EventDateTime {
                date_time: entry.end.to_rfc3339_opts(SecondsFormat::Secs, false),
                time_zone,
            },
            color_id: entry.color_id,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let created: EventResource = response.json().await?;
        info!(
            "created calendar entry {} for '{}'",
            created.id, entry.title
        );

        Ok(InsertedEvent {
            id: created.id,
            html_link: created.html_link,
        })
    }
}
