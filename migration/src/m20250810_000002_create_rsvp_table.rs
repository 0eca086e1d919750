use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rsvp::Table)
                    .if_not_exists()
                    .col(string(Rsvp::EventId))
                    .col(string(Rsvp::UserId))
                    .col(string(Rsvp::Status))
                    .col(
                        timestamp(Rsvp::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_rsvp")
                            .col(Rsvp::EventId)
                            .col(Rsvp::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rsvp::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Rsvp {
    Table,
    EventId,
    UserId,
    Status,
    UpdatedAt,
}
