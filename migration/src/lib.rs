pub use sea_orm_migration::prelude::*;

mod m20250810_000001_create_event_index_table;
mod m20250810_000002_create_rsvp_table;
mod m20250810_000003_create_event_tag_table;
mod m20250810_000004_create_reminder_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250810_000001_create_event_index_table::Migration),
            Box::new(m20250810_000002_create_rsvp_table::Migration),
            Box::new(m20250810_000003_create_event_tag_table::Migration),
            Box::new(m20250810_000004_create_reminder_log_table::Migration),
        ]
    }
}
