use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReminderLog::Table)
                    .if_not_exists()
                    .col(string(ReminderLog::EventId))
                    .col(string(ReminderLog::Tag))
                    .col(
                        timestamp(ReminderLog::NotifiedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_reminder_log")
                            .col(ReminderLog::EventId)
                            .col(ReminderLog::Tag),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReminderLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReminderLog {
    Table,
    EventId,
    Tag,
    NotifiedAt,
}
