pub mod prelude;

pub mod event_index;
pub mod event_tag;
pub mod reminder_log;
pub mod rsvp;
