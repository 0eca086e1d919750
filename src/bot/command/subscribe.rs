//! `/notify_subscribe` and `/notify_unsubscribe`: interest role membership.
//!
//! Interests map to guild roles by name. When a roles sheet is configured the
//! requested name must match a sheet row of type "interest"; otherwise any
//! existing role name is accepted.

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    EditRole, GuildId, Role,
};
use tracing::{error, info};

use crate::bot::handler::Handler;

const INTEREST_CATEGORY: &str = "interest";

pub async fn handle(
    handler: &Handler,
    ctx: &Context,
    command: CommandInteraction,
    subscribe: bool,
) {
    let requested = command
        .data
        .options
        .iter()
        .find(|option| option.name == "interest")
        .and_then(|option| option.value.as_str())
        .unwrap_or_default()
        .trim()
        .to_string();
    if requested.is_empty() {
        respond(ctx, &command, "Name an interest to subscribe to.").await;
        return;
    }

    let content = match apply(handler, ctx, &command, &requested, subscribe).await {
        Ok(content) => content,
        Err(e) => {
            error!("Subscription update failed: {:?}", e);
            "Could not update your subscription right now.".to_string()
        }
    };
    respond(ctx, &command, &content).await;
}

async fn apply(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
    requested: &str,
    subscribe: bool,
) -> Result<String, crate::error::AppError> {
    // Validate against the sheet's interest rows when available.
    let canonical = match &handler.sheets {
        Some(sheets) => {
            let names = sheets.role_names(INTEREST_CATEGORY).await?;
            match names
                .iter()
                .find(|name| name.eq_ignore_ascii_case(requested))
            {
                Some(name) => name.clone(),
                None if names.is_empty() => requested.to_string(),
                None => {
                    return Ok(format!(
                        "Unknown interest '{}'. Available: {}",
                        requested,
                        names.join(", ")
                    ))
                }
            }
        }
        None => requested.to_string(),
    };

    let guild_id = GuildId::new(handler.config.guild_id);
    let roles = guild_id.roles(&ctx.http).await?;
    let existing = roles
        .values()
        .find(|role| role.name.eq_ignore_ascii_case(&canonical))
        .cloned();

    // Known interests get their role created on first subscription.
    let role: Role = match existing {
        Some(role) => role,
        None if subscribe => {
            let role = guild_id
                .create_role(
                    &ctx.http,
                    EditRole::new().name(&canonical).mentionable(true),
                )
                .await?;
            info!("Created interest role {}", role.name);
            role
        }
        None => {
            return Ok(format!("No '{}' role exists in this server.", canonical));
        }
    };

    if subscribe {
        ctx.http
            .add_member_role(
                guild_id,
                command.user.id,
                role.id,
                Some("interest subscription"),
            )
            .await?;
        Ok(format!(
            "You will now be pinged for {} events.",
            role.name
        ))
    } else {
        ctx.http
            .remove_member_role(
                guild_id,
                command.user.id,
                role.id,
                Some("interest unsubscription"),
            )
            .await?;
        Ok(format!(
            "You will no longer be pinged for {} events.",
            role.name
        ))
    }
}

async fn respond(ctx: &Context, command: &CommandInteraction, content: &str) {
    let message = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true);
    if let Err(e) = command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
    {
        error!("Failed to reply to subscription command: {:?}", e);
    }
}
