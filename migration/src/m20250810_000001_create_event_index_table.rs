use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventIndex::Table)
                    .if_not_exists()
                    .col(string(EventIndex::EventId).primary_key())
                    .col(string_null(EventIndex::MessageId))
                    .col(string(EventIndex::ChannelId))
                    .col(string_null(EventIndex::ThreadId))
                    .to_owned(),
            )
            .await?;

        // Reminder targeting looks posts up by thread, RSVP by message
        manager
            .create_index(
                Index::create()
                    .name("idx_event_index_thread_id")
                    .table(EventIndex::Table)
                    .col(EventIndex::ThreadId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_event_index_thread_id")
                    .table(EventIndex::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EventIndex::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventIndex {
    Table,
    EventId,
    MessageId,
    ChannelId,
    ThreadId,
}
