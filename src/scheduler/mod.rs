//! Background jobs. The only one today is the minutely reminder scan.

pub mod reminders;
