//! Interaction dispatch: routes slash commands, modal submits, and component
//! clicks to their handlers.

use serenity::all::{Context, Interaction};
use tracing::warn;

use crate::bot::command;
use crate::bot::handler::Handler;

pub async fn handle_interaction(handler: &Handler, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(cmd) => match cmd.data.name.as_str() {
            command::EVENT_CREATE => command::event_create::handle_command(&ctx, cmd).await,
            command::EVENT_LIST => command::event_list::handle(handler, &ctx, cmd).await,
            command::NOTIFY_SUBSCRIBE => {
                command::subscribe::handle(handler, &ctx, cmd, true).await
            }
            command::NOTIFY_UNSUBSCRIBE => {
                command::subscribe::handle(handler, &ctx, cmd, false).await
            }
            other => warn!("Received unknown slash command: {}", other),
        },
        Interaction::Modal(modal) => {
            if modal.data.custom_id == command::event_create::EVENT_MODAL_ID {
                command::event_create::handle_modal(handler, &ctx, modal).await;
            }
        }
        Interaction::Component(component) => {
            if command::rsvp::is_rsvp_interaction(&component.data.custom_id) {
                command::rsvp::handle_component(handler, &ctx, component).await;
            }
            // The wizard's tag picker is consumed by its own collector.
        }
        _ => {}
    }
}
