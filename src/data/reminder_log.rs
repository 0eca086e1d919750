use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct ReminderLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReminderLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a reminder was already delivered for this entry at
    /// this lead-time threshold. Sending is gated strictly on this marker.
    pub async fn was_sent(&self, event_id: &str, tag: &str) -> Result<bool, DbErr> {
        let existing = entity::prelude::ReminderLog::find()
            .filter(entity::reminder_log::Column::EventId.eq(event_id))
            .filter(entity::reminder_log::Column::Tag.eq(tag))
            .one(self.db)
            .await?;

        Ok(existing.is_some())
    }

    /// Records that a reminder was delivered. Upserting an existing marker
    /// refreshes its timestamp only.
    pub async fn mark_sent(
        &self,
        event_id: &str,
        tag: &str,
    ) -> Result<entity::reminder_log::Model, DbErr> {
        entity::prelude::ReminderLog::insert(entity::reminder_log::ActiveModel {
            event_id: ActiveValue::Set(event_id.to_string()),
            tag: ActiveValue::Set(tag.to_string()),
            notified_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::reminder_log::Column::EventId,
                entity::reminder_log::Column::Tag,
            ])
            .update_columns([entity::reminder_log::Column::NotifiedAt])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }
}
