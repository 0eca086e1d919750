pub use super::event_index::Entity as EventIndex;
pub use super::event_tag::Entity as EventTag;
pub use super::reminder_log::Entity as ReminderLog;
pub use super::rsvp::Entity as Rsvp;
