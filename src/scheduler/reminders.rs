use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, CreateMessage};
use serenity::http::Http;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};

use crate::config::Config;
use crate::data::{EventIndexRepository, ReminderLogRepository};
use crate::error::AppError;
use crate::google::calendar::GoogleCalendar;
use crate::util::parse::parse_u64_from_string;

/// Starts the reminder scheduler
///
/// Runs every minute, lists calendar entries starting within the configured
/// lead time, and delivers one reminder per entry. Delivery targets the
/// entry's discussion thread when one is recorded, falling back to the event
/// channel. The reminder log gates sending to at most once per entry per
/// lead-time threshold.
pub async fn start_scheduler(
    db: DatabaseConnection,
    discord_http: Arc<Http>,
    calendar: Arc<GoogleCalendar>,
    config: Config,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job_http = discord_http.clone();
    let job_calendar = calendar.clone();
    let job_config = config.clone();

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = job_db.clone();
        let http = job_http.clone();
        let calendar = job_calendar.clone();
        let config = job_config.clone();

        Box::pin(async move {
            if let Err(e) = process_reminders(&db, http, &calendar, &config).await {
                error!("Error processing reminders: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    info!("Reminder scheduler started");

    Ok(())
}

/// One scan: every upcoming entry that is due and not yet reminded gets a
/// message, then a marker. A failed send leaves no marker, so the next scan
/// retries.
async fn process_reminders(
    db: &DatabaseConnection,
    discord_http: Arc<Http>,
    calendar: &GoogleCalendar,
    config: &Config,
) -> Result<(), AppError> {
    let now = Utc::now();
    let threshold_tag = format!("T-{}", config.remind_minutes);

    let upcoming = calendar
        .list_events(now, now + Duration::minutes(config.remind_minutes), 50)
        .await?;

    let reminder_log = ReminderLogRepository::new(db);
    let event_index = EventIndexRepository::new(db);

    for event in upcoming {
        // All-day entries carry no start instant and get no reminder.
        let Some(start) = event
            .start_date_time
            .as_deref()
            .and_then(parse_start_instant)
        else {
            continue;
        };

        if !reminder_due(now, start, config.remind_minutes) {
            continue;
        }
        if reminder_log.was_sent(&event.id, &threshold_tag).await? {
            continue;
        }

        // Prefer the event's discussion thread, then the channel it was
        // posted in, then the default event channel.
        let target = match event_index.find_by_event_id(&event.id).await? {
            Some(record) => record
                .thread_id
                .as_deref()
                .and_then(|raw| parse_u64_from_string(raw).ok())
                .or_else(|| parse_u64_from_string(&record.channel_id).ok())
                .unwrap_or(config.event_channel_id),
            None => config.event_channel_id,
        };

        let content = reminder_message(&event.title, start, event.html_link.as_deref());
        match ChannelId::new(target)
            .send_message(&discord_http, CreateMessage::new().content(content))
            .await
        {
            Ok(_) => {
                info!("Sent reminder for {} ({})", event.title, event.id);
                reminder_log.mark_sent(&event.id, &threshold_tag).await?;
            }
            Err(e) => {
                error!("Failed to send reminder for {}: {:?}", event.id, e);
            }
        }
    }

    Ok(())
}

fn parse_start_instant(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Due means the start has not passed and falls within the lead window. An
/// event starting this very minute still gets its reminder.
fn reminder_due(now: DateTime<Utc>, start: DateTime<Utc>, lead_minutes: i64) -> bool {
    start >= now && start - now <= Duration::minutes(lead_minutes)
}

fn reminder_message(title: &str, start: DateTime<Utc>, link: Option<&str>) -> String {
    match link {
        Some(link) => format!(
            "Reminder: **{}** starts <t:{}:R>. {}",
            title,
            start.timestamp(),
            link
        ),
        None => format!("Reminder: **{}** starts <t:{}:R>.", title, start.timestamp()),
    }
}
