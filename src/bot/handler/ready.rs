//! Ready event handler: logs the connection and registers the guild's slash
//! commands. Guild-scoped registration makes command changes visible
//! immediately instead of after Discord's global propagation delay.

use serenity::all::{Context, GuildId, Ready};
use tracing::{error, info};

use crate::bot::command;
use crate::config::Config;

pub async fn handle_ready(config: &Config, ctx: Context, ready: Ready) {
    info!("{} is connected to Discord", ready.user.name);

    let guild_id = GuildId::new(config.guild_id);
    match guild_id
        .set_commands(&ctx.http, command::command_definitions())
        .await
    {
        Ok(commands) => info!(
            "Registered {} slash commands in guild {}",
            commands.len(),
            guild_id
        ),
        Err(e) => error!("Failed to register slash commands: {:?}", e),
    }
}
