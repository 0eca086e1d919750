//! Discord integration: slash commands, the event wizard's interactive
//! surface, and RSVP buttons.
//!
//! All commands are registered per guild on ready. The bot requires only the
//! `GUILDS` and `GUILD_MESSAGES` gateway intents; everything user-facing
//! happens through interactions rather than message content.

pub mod command;
pub mod handler;
pub mod start;
pub mod wizard;
