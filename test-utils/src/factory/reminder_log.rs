//! Reminder log factory for creating test reminder markers.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reminder markers with customizable fields.
pub struct ReminderMarkerFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: String,
    tag: String,
}

impl<'a> ReminderMarkerFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - event_id: `"gcal-{id}"`
    /// - tag: `"T-60"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            event_id: format!("gcal-{}", id),
            tag: "T-60".to_string(),
        }
    }

    pub fn event_id(mut self, event_id: impl Into<String>) -> Self {
        self.event_id = event_id.into();
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Builds and inserts the reminder marker into the database.
    pub async fn build(self) -> Result<entity::reminder_log::Model, DbErr> {
        entity::reminder_log::ActiveModel {
            event_id: ActiveValue::Set(self.event_id),
            tag: ActiveValue::Set(self.tag),
            notified_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reminder marker with default values.
pub async fn create_reminder_marker(
    db: &DatabaseConnection,
) -> Result<entity::reminder_log::Model, DbErr> {
    ReminderMarkerFactory::new(db).build().await
}
