//! Thin REST clients for the Google Calendar and Sheets v3/v4 APIs.
//!
//! Both clients authenticate with a pre-issued bearer token; token minting
//! and refresh are handled outside the bot.

pub mod calendar;
pub mod sheets;
