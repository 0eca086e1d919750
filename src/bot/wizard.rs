//! Discord-facing adapters for the event wizard: destination resolution, the
//! ephemeral tag picker, progress notices, and summary publishing.

use std::time::Duration;

use serenity::all::{
    ButtonStyle, ChannelId, ChannelType, ComponentInteractionDataKind, Context, CreateActionRow,
    CreateButton, CreateEmbed, CreateForumPost, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, CreateMessage,
    CreateSelectMenu, CreateSelectMenuKind, CreateSelectMenuOption, ForumTagId, ModalInteraction,
};
use serenity::async_trait;
use tracing::{error, warn};

use crate::error::AppError;
use crate::model::destination::{Destination, DestinationTag};
use crate::model::summary::{EventSummary, PostedSummary};
use crate::model::tags::TagOption;
use crate::wizard::flow::{SummaryPublisher, TagSelection, WizardPrompt};

const TAG_PICKER_ID: &str = "event_wizard_tags";
const TAG_PICKER_TIMEOUT: Duration = Duration::from_secs(300);
const EMBED_COLOR: u32 = 0x57F287;
/// Select menu option descriptions are capped by Discord.
const MAX_OPTION_DESCRIPTION: usize = 100;

/// Inspects the configured event channel and fixes its capabilities for the
/// rest of the run.
pub async fn resolve_destination(ctx: &Context, channel_id: u64) -> Result<Destination, AppError> {
    let channel = ChannelId::new(channel_id).to_channel(&ctx.http).await?;

    let Some(guild_channel) = channel.guild() else {
        return Err(AppError::NotFound(format!(
            "channel {} is not a guild channel",
            channel_id
        )));
    };

    if guild_channel.kind == ChannelType::Forum {
        let tags = guild_channel
            .available_tags
            .iter()
            .map(|tag| DestinationTag {
                id: tag.id.get(),
                name: tag.name.to_string(),
            })
            .collect();
        Ok(Destination::TaggedForum { channel_id, tags })
    } else {
        Ok(Destination::Plain { channel_id })
    }
}

/// Ephemeral dialog attached to the wizard's modal interaction.
pub struct DiscordPrompt<'a> {
    ctx: &'a Context,
    modal: &'a ModalInteraction,
}

impl<'a> DiscordPrompt<'a> {
    pub fn new(ctx: &'a Context, modal: &'a ModalInteraction) -> Self {
        Self { ctx, modal }
    }
}

#[async_trait]
impl WizardPrompt for DiscordPrompt<'_> {
    async fn select_tags(&mut self, options: &[TagOption], max: usize) -> TagSelection {
        if options.is_empty() {
            // The flow never asks with an empty option set; refuse rather
            // than render an empty menu.
            return TagSelection::Canceled;
        }

        let max_values = max.min(options.len()) as u8;
        let menu_options: Vec<CreateSelectMenuOption> = options
            .iter()
            .map(|option| {
                let mut built = CreateSelectMenuOption::new(&option.name, &option.name);
                if let Some(description) = &option.description {
                    let trimmed: String =
                        description.chars().take(MAX_OPTION_DESCRIPTION).collect();
                    built = built.description(trimmed);
                }
                built
            })
            .collect();

        let menu = CreateSelectMenu::new(
            TAG_PICKER_ID,
            CreateSelectMenuKind::String {
                options: menu_options,
            },
        )
        .placeholder("Choose tags for this event")
        .min_values(1)
        .max_values(max_values);

        let response = CreateInteractionResponseMessage::new()
            .content("Pick the tags that fit this event:")
            .select_menu(menu)
            .ephemeral(true);
        if let Err(e) = self
            .modal
            .create_response(
                &self.ctx.http,
                CreateInteractionResponse::Message(response),
            )
            .await
        {
            error!("Failed to send tag picker: {:?}", e);
            return TagSelection::Canceled;
        }

        let picker_message = match self.modal.get_response(&self.ctx.http).await {
            Ok(message) => message,
            Err(e) => {
                error!("Failed to fetch tag picker message: {:?}", e);
                return TagSelection::Canceled;
            }
        };

        let Some(component) = picker_message
            .await_component_interaction(&self.ctx.shard)
            .timeout(TAG_PICKER_TIMEOUT)
            .await
        else {
            self.notify("Tag selection timed out; event creation canceled.")
                .await;
            return TagSelection::Canceled;
        };

        if let Err(e) = component
            .create_response(&self.ctx.http, CreateInteractionResponse::Acknowledge)
            .await
        {
            warn!("Failed to acknowledge tag selection: {:?}", e);
        }

        match &component.data.kind {
            ComponentInteractionDataKind::StringSelect { values } => {
                TagSelection::Chosen(values.clone())
            }
            _ => TagSelection::Canceled,
        }
    }

    async fn notify(&mut self, message: &str) {
        let followup = CreateInteractionResponseFollowup::new()
            .content(message)
            .ephemeral(true);
        if let Err(e) = self.modal.create_followup(&self.ctx.http, followup).await {
            warn!("Failed to send wizard notice: {:?}", e);
        }
    }
}

/// Posts the summary embed to the resolved destination, as a forum thread
/// with applied tags or a plain channel message.
pub struct DiscordPublisher<'a> {
    ctx: &'a Context,
    destination: Destination,
}

impl<'a> DiscordPublisher<'a> {
    pub fn new(ctx: &'a Context, destination: Destination) -> Self {
        Self { ctx, destination }
    }
}

#[async_trait]
impl SummaryPublisher for DiscordPublisher<'_> {
    async fn publish(
        &mut self,
        summary: &EventSummary,
        applied_tags: &[DestinationTag],
    ) -> Result<PostedSummary, AppError> {
        let channel_id = self.destination.channel_id();

        // RSVP buttons are wired to the primary calendar entry; an event
        // whose entries all failed gets no buttons.
        let mut message = CreateMessage::new().embed(build_event_embed(summary));
        if let Some(event_id) = &summary.event_id {
            message = message.components(vec![rsvp_buttons(event_id)]);
        }

        if self.destination.supports_tags() {
            let post = CreateForumPost::new(&summary.title, message).set_applied_tags(
                applied_tags
                    .iter()
                    .map(|tag| ForumTagId::new(tag.id))
                    .collect::<Vec<_>>(),
            );
            let thread = ChannelId::new(channel_id)
                .create_forum_post(&self.ctx.http, post)
                .await?;
            Ok(PostedSummary {
                channel_id,
                message_id: None,
                thread_id: Some(thread.id.get()),
            })
        } else {
            let sent = ChannelId::new(channel_id)
                .send_message(&self.ctx.http, message)
                .await?;
            Ok(PostedSummary {
                channel_id,
                message_id: Some(sent.id.get()),
                thread_id: None,
            })
        }
    }
}

fn build_event_embed(summary: &EventSummary) -> CreateEmbed {
    let mut embed = CreateEmbed::new().title(&summary.title).colour(EMBED_COLOR);

    if let Some(description) = &summary.description {
        embed = embed.description(description);
    }
    embed = embed.field("When", summary.when_lines.join("\n"), false);
    if let Some(location) = &summary.location {
        embed = embed.field("Where", location, true);
    }
    if !summary.tag_names.is_empty() {
        embed = embed.field("Tags", summary.tag_names.join(", "), true);
    }
    if let Some(calendar) = &summary.calendar_field {
        embed = embed.field("Calendar", calendar, false);
    }

    embed
}

/// One row of Going / Maybe / Can't make it buttons keyed to the primary
/// calendar entry.
pub fn rsvp_buttons(event_id: &str) -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        CreateButton::new(format!("rsvp:going:{}", event_id))
            .label("Going")
            .style(ButtonStyle::Success),
        CreateButton::new(format!("rsvp:maybe:{}", event_id))
            .label("Maybe")
            .style(ButtonStyle::Secondary),
        CreateButton::new(format!("rsvp:not_going:{}", event_id))
            .label("Can't make it")
            .style(ButtonStyle::Danger),
    ])
}
