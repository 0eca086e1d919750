mod event_index;
mod event_tag;
mod reminder_log;
mod rsvp;
