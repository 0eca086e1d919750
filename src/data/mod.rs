//! Database operations for the bot's four persistent tables.
//!
//! Each table gets a repository struct borrowing the shared
//! `DatabaseConnection`. All writes are keyed upserts; there are no
//! transactions spanning multiple tables.

pub mod event_index;
pub mod event_tag;
pub mod reminder_log;
pub mod rsvp;

#[cfg(test)]
mod test;

pub use event_index::EventIndexRepository;
pub use event_tag::EventTagRepository;
pub use reminder_log::ReminderLogRepository;
pub use rsvp::RsvpRepository;
