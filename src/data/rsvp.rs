use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct RsvpRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RsvpRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a user's RSVP for a calendar entry, replacing any previous
    /// status for the same (event, user) pair.
    pub async fn set_status(
        &self,
        event_id: &str,
        user_id: u64,
        status: &str,
    ) -> Result<entity::rsvp::Model, DbErr> {
        entity::prelude::Rsvp::insert(entity::rsvp::ActiveModel {
            event_id: ActiveValue::Set(event_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            status: ActiveValue::Set(status.to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::rsvp::Column::EventId,
                entity::rsvp::Column::UserId,
            ])
            .update_columns([entity::rsvp::Column::Status, entity::rsvp::Column::UpdatedAt])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find(
        &self,
        event_id: &str,
        user_id: u64,
    ) -> Result<Option<entity::rsvp::Model>, DbErr> {
        entity::prelude::Rsvp::find()
            .filter(entity::rsvp::Column::EventId.eq(event_id))
            .filter(entity::rsvp::Column::UserId.eq(user_id.to_string()))
            .one(self.db)
            .await
    }

    /// All RSVPs recorded for one calendar entry.
    pub async fn get_for_event(&self, event_id: &str) -> Result<Vec<entity::rsvp::Model>, DbErr> {
        entity::prelude::Rsvp::find()
            .filter(entity::rsvp::Column::EventId.eq(event_id))
            .all(self.db)
            .await
    }
}
