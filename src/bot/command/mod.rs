//! Slash command definitions and handlers.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

pub mod event_create;
pub mod event_list;
pub mod rsvp;
pub mod subscribe;

pub const EVENT_CREATE: &str = "event_create";
pub const EVENT_LIST: &str = "event_list";
pub const NOTIFY_SUBSCRIBE: &str = "notify_subscribe";
pub const NOTIFY_UNSUBSCRIBE: &str = "notify_unsubscribe";

/// The full guild command set, registered on every ready.
pub fn command_definitions() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new(EVENT_CREATE).description("Create a community event"),
        CreateCommand::new(EVENT_LIST)
            .description("List upcoming events from the community calendar")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "days",
                    "How many days ahead to look (default 14)",
                )
                .min_int_value(1)
                .max_int_value(30)
                .required(false),
            ),
        CreateCommand::new(NOTIFY_SUBSCRIBE)
            .description("Get pinged for events matching an interest")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "interest",
                    "The interest to subscribe to",
                )
                .required(true),
            ),
        CreateCommand::new(NOTIFY_UNSUBSCRIBE)
            .description("Stop getting pinged for an interest")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "interest",
                    "The interest to unsubscribe from",
                )
                .required(true),
            ),
    ]
}
