use sea_orm::entity::prelude::*;

/// Marker recording that a reminder was already sent for a calendar entry at
/// a given lead-time threshold. Existence of the row gates sending, so each
/// (entry, threshold) pair is delivered at most once.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reminder_log")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub event_id: String,
    /// Lead-time threshold tag, e.g. "T-60" for the 60-minute reminder.
    #[sea_orm(primary_key, auto_increment = false)]
    pub tag: String,
    pub notified_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
