//! The `/event_list` command: upcoming entries straight from the calendar.

use chrono::{DateTime, Duration, Utc};
use serenity::all::{CommandInteraction, Context, CreateInteractionResponseFollowup};
use tracing::error;

use crate::bot::handler::Handler;
use crate::model::calendar::UpcomingEvent;

const DEFAULT_DAYS: i64 = 14;
const MAX_LISTED: u32 = 25;

pub async fn handle(handler: &Handler, ctx: &Context, command: CommandInteraction) {
    let days = command
        .data
        .options
        .iter()
        .find(|option| option.name == "days")
        .and_then(|option| option.value.as_i64())
        .unwrap_or(DEFAULT_DAYS)
        .clamp(1, 30);

    if let Err(e) = command.defer_ephemeral(&ctx.http).await {
        error!("Failed to defer /event_list: {:?}", e);
        return;
    }

    let now = Utc::now();
    let content = match handler
        .calendar
        .list_events(now, now + Duration::days(days), MAX_LISTED)
        .await
    {
        Ok(events) => format_event_list(&events, days),
        Err(e) => {
            error!("Failed to list calendar events: {:?}", e);
            "The community calendar is unavailable right now.".to_string()
        }
    };

    let followup = CreateInteractionResponseFollowup::new()
        .content(content)
        .ephemeral(true);
    if let Err(e) = command.create_followup(&ctx.http, followup).await {
        error!("Failed to send /event_list reply: {:?}", e);
    }
}

fn format_event_list(events: &[UpcomingEvent], days: i64) -> String {
    if events.is_empty() {
        return format!("No events on the calendar in the next {} days.", days);
    }

    let mut lines = vec![format!("Events in the next {} days:", days)];
    for event in events {
        let when = event
            .start_date_time
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| format!("<t:{}:F>", dt.timestamp()))
            .unwrap_or_else(|| "all day".to_string());
        let line = match &event.html_link {
            Some(link) => format!("- [{}]({}) — {}", event.title, link, when),
            None => format!("- {} — {}", event.title, when),
        };
        lines.push(line);
    }

    lines.join("\n")
}
