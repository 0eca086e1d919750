use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct EventTagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventTagRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records tag membership for a calendar entry. Re-adding an existing
    /// (event, tag) pair is a no-op.
    pub async fn add_tags(&self, event_id: &str, tags: &[String]) -> Result<(), DbErr> {
        for tag in tags {
            entity::prelude::EventTag::insert(entity::event_tag::ActiveModel {
                event_id: ActiveValue::Set(event_id.to_string()),
                tag: ActiveValue::Set(tag.clone()),
            })
            .on_conflict(
                OnConflict::columns([
                    entity::event_tag::Column::EventId,
                    entity::event_tag::Column::Tag,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;
        }

        Ok(())
    }

    pub async fn get_tags(&self, event_id: &str) -> Result<Vec<String>, DbErr> {
        let rows = entity::prelude::EventTag::find()
            .filter(entity::event_tag::Column::EventId.eq(event_id))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.tag).collect())
    }
}
