//! Event tag factory for creating test tag-membership rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test event tag rows with customizable fields.
pub struct EventTagFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: String,
    tag: String,
}

impl<'a> EventTagFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - event_id: `"gcal-{id}"`
    /// - tag: `"Tag {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            event_id: format!("gcal-{}", id),
            tag: format!("Tag {}", id),
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

    /// Builds and inserts the event tag row into the database.
    pub async fn build(self) -> Result<entity::event_tag::Model, DbErr> {
        entity::event_tag::ActiveModel {
            event_id: ActiveValue::Set(self.event_id),
            tag: ActiveValue::Set(self.tag),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event tag row with default values.
pub async fn create_event_tag(db: &DatabaseConnection) -> Result<entity::event_tag::Model, DbErr> {
    EventTagFactory::new(db).build().await
}
