use sea_orm::entity::prelude::*;

/// Maps one created calendar entry to the Discord post that announced it.
///
/// A multi-day event produces one row per calendar entry, all pointing at the
/// same summary post/thread. The reminder loop and RSVP handling look rows up
/// by `event_id`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event_index")]
pub struct Model {
    /// Calendar entry identifier assigned by the calendar service.
    #[sea_orm(primary_key, auto_increment = false)]
    pub event_id: String,
    /// Discord message carrying the summary embed, if one was captured.
    pub message_id: Option<String>,
    /// Channel or forum the summary was posted to.
    pub channel_id: String,
    /// Discussion thread for the event, preferred target for reminders.
    pub thread_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
