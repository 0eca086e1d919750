//! RSVP factory for creating test RSVP rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test RSVP rows with customizable fields.
pub struct RsvpFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: String,
    user_id: String,
    status: String,
}

impl<'a> RsvpFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - event_id: `"gcal-{id}"`
    /// - user_id: `"{id}"`
    /// - status: `"going"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            event_id: format!("gcal-{}", id),
            user_id: id.to_string(),
            status: "going".to_string(),
        }
    }

    pub fn event_id(mut self, event_id: impl Into<String>) -> Self {
        self.event_id = event_id.into();
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the RSVP row into the database.
    pub async fn build(self) -> Result<entity::rsvp::Model, DbErr> {
        entity::rsvp::ActiveModel {
            event_id: ActiveValue::Set(self.event_id),
            user_id: ActiveValue::Set(self.user_id),
            status: ActiveValue::Set(self.status),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an RSVP row with default values.
pub async fn create_rsvp(db: &DatabaseConnection) -> Result<entity::rsvp::Model, DbErr> {
    RsvpFactory::new(db).build().await
}
