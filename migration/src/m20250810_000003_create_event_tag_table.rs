use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventTag::Table)
                    .if_not_exists()
                    .col(string(EventTag::EventId))
                    .col(string(EventTag::Tag))
                    .primary_key(
                        Index::create()
                            .name("pk_event_tag")
                            .col(EventTag::EventId)
                            .col(EventTag::Tag),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventTag {
    Table,
    EventId,
    Tag,
}
