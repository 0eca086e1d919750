//! RSVP button handling.
//!
//! Buttons carry `rsvp:<status>:<event_id>` custom ids, keyed to the primary
//! calendar entry of the posted event. Clicking records or replaces the
//! user's status and, for forum events, pulls them into the discussion
//! thread.

use serenity::all::{
    ChannelId, ComponentInteraction, Context, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};
use tracing::{error, warn};

use crate::bot::handler::Handler;
use crate::data::{EventIndexRepository, RsvpRepository};
use crate::util::parse::parse_u64_from_string;

const RSVP_PREFIX: &str = "rsvp:";

pub fn is_rsvp_interaction(custom_id: &str) -> bool {
    custom_id.starts_with(RSVP_PREFIX)
}

/// Splits `rsvp:<status>:<event_id>` into its parts, rejecting unknown
/// statuses and empty event ids.
pub fn parse_custom_id(custom_id: &str) -> Option<(&str, &str)> {
    let rest = custom_id.strip_prefix(RSVP_PREFIX)?;
    let (status, event_id) = rest.split_once(':')?;
    if event_id.is_empty() {
        return None;
    }
    match status {
        "going" | "maybe" | "not_going" => Some((status, event_id)),
        _ => None,
    }
}

pub async fn handle_component(handler: &Handler, ctx: &Context, component: ComponentInteraction) {
    let Some((status, event_id)) = parse_custom_id(&component.data.custom_id) else {
        warn!("Malformed RSVP custom id: {}", component.data.custom_id);
        return;
    };

    let rsvps = RsvpRepository::new(&handler.db);
    if let Err(e) = rsvps
        .set_status(event_id, component.user.id.get(), status)
        .await
    {
        error!("Failed to record RSVP: {:?}", e);
        respond(ctx, &component, "Could not record your RSVP right now.").await;
        return;
    }

    // Going/maybe responders join the event's discussion thread so reminders
    // and updates reach them.
    if status != "not_going" {
        add_to_thread(handler, ctx, &component, event_id).await;
    }

    let content = match status {
        "going" => {
            let going = count_going(&rsvps, event_id).await;
            match going {
                Some(n) if n > 1 => format!("You're marked as going, along with {} others.", n - 1),
                _ => "You're marked as going. See you there!".to_string(),
            }
        }
        "maybe" => "You're marked as a maybe.".to_string(),
        _ => "You're marked as not going.".to_string(),
    };
    respond(ctx, &component, &content).await;
}

async fn count_going(rsvps: &RsvpRepository<'_>, event_id: &str) -> Option<usize> {
    match rsvps.get_for_event(event_id).await {
        Ok(records) => Some(records.iter().filter(|r| r.status == "going").count()),
        Err(e) => {
            warn!("Failed to count RSVPs: {:?}", e);
            None
        }
    }
}

async fn add_to_thread(
    handler: &Handler,
    ctx: &Context,
    component: &ComponentInteraction,
    event_id: &str,
) {
    let event_index = EventIndexRepository::new(&handler.db);
    let thread_id = match event_index.find_by_event_id(event_id).await {
        Ok(Some(record)) => record
            .thread_id
            .as_deref()
            .and_then(|raw| parse_u64_from_string(raw).ok()),
        Ok(None) => None,
        Err(e) => {
            error!("Failed to look up event thread: {:?}", e);
            None
        }
    };

    if let Some(thread_id) = thread_id {
        if let Err(e) = ctx
            .http
            .add_thread_channel_member(ChannelId::new(thread_id), component.user.id)
            .await
        {
            warn!("Failed to add RSVP'd user to thread: {:?}", e);
        }
    }
}

async fn respond(ctx: &Context, component: &ComponentInteraction, content: &str) {
    let message = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true);
    if let Err(e) = component
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
    {
        error!("Failed to acknowledge RSVP: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_ids() {
        assert_eq!(
            parse_custom_id("rsvp:going:gcal-abc"),
            Some(("going", "gcal-abc"))
        );
        assert_eq!(
            parse_custom_id("rsvp:not_going:x"),
            Some(("not_going", "x"))
        );
    }

    #[test]
    fn rejects_unknown_statuses_and_shapes() {
        assert_eq!(parse_custom_id("rsvp:attending:gcal-abc"), None);
        assert_eq!(parse_custom_id("rsvp:going:"), None);
        assert_eq!(parse_custom_id("rsvp:going"), None);
        assert_eq!(parse_custom_id("other:going:gcal-abc"), None);
    }

    #[test]
    fn event_ids_containing_colons_survive() {
        assert_eq!(
            parse_custom_id("rsvp:maybe:cal:entry:9"),
            Some(("maybe", "cal:entry:9"))
        );
    }
}
