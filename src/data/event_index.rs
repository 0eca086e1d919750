use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct EventIndexRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventIndexRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts the mapping from a calendar entry to the Discord post that
    /// announced it. Re-posting an event replaces its previous mapping.
    pub async fn upsert(
        &self,
        event_id: &str,
        message_id: Option<u64>,
        channel_id: u64,
        thread_id: Option<u64>,
    ) -> Result<entity::event_index::Model, DbErr> {
        entity::prelude::EventIndex::insert(entity::event_index::ActiveModel {
            event_id: ActiveValue::Set(event_id.to_string()),
            message_id: ActiveValue::Set(message_id.map(|id| id.to_string())),
            channel_id: ActiveValue::Set(channel_id.to_string()),
            thread_id: ActiveValue::Set(thread_id.map(|id| id.to_string())),
        })
        .on_conflict(
            OnConflict::column(entity::event_index::Column::EventId)
                .update_columns([
                    entity::event_index::Column::MessageId,
                    entity::event_index::Column::ChannelId,
                    entity::event_index::Column::ThreadId,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Finds the posted location for a calendar entry.
    ///
    /// Used by the reminder loop to prefer the event's discussion thread and
    /// by RSVP handling to add users to it.
    pub async fn find_by_event_id(
        &self,
        event_id: &str,
    ) -> Result<Option<entity::event_index::Model>, DbErr> {
        entity::prelude::EventIndex::find()
            .filter(entity::event_index::Column::EventId.eq(event_id))
            .one(self.db)
            .await
    }
}
