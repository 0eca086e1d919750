//! Event index factory for creating test calendar-entry mappings.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test event index rows with customizable fields.
pub struct EventIndexFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: String,
    message_id: Option<String>,
    channel_id: String,
    thread_id: Option<String>,
}

impl<'a> EventIndexFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - event_id: `"gcal-{id}"` where id is auto-incremented
    /// - message_id: `Some("{id}")`
    /// - channel_id: `"{id}"`
    /// - thread_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            event_id: format!("gcal-{}", id),
            message_id: Some(id.to_string()),
            channel_id: id.to_string(),
            thread_id: None,
        }
    }

    pub fn event_id(mut self, event_id: impl Into<String>) -> Self {
        self.event_id = event_id.into();
        self
    }

    pub fn message_id(mut self, message_id: Option<String>) -> Self {
        self.message_id = message_id;
        self
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    pub fn thread_id(mut self, thread_id: Option<String>) -> Self {
        self.thread_id = thread_id;
        self
    }

    /// Builds and inserts the event index row into the database.
    pub async fn build(self) -> Result<entity::event_index::Model, DbErr> {
        entity::event_index::ActiveModel {
            event_id: ActiveValue::Set(self.event_id),
            message_id: ActiveValue::Set(self.message_id),
            channel_id: ActiveValue::Set(self.channel_id),
            thread_id: ActiveValue::Set(self.thread_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event index row with default values.
pub async fn create_event_index(
    db: &DatabaseConnection,
) -> Result<entity::event_index::Model, DbErr> {
    EventIndexFactory::new(db).build().await
}
