//! The `/event_create` command: modal launch, modal submit, and the wizard
//! run that follows.

use serenity::all::{
    ActionRowComponent, CommandInteraction, Context, CreateActionRow, CreateInputText,
    CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, CreateModal, InputTextStyle, ModalInteraction,
    ModalInteractionData,
};
use tracing::error;

use crate::bot::handler::Handler;
use crate::bot::wizard::{resolve_destination, DiscordPrompt, DiscordPublisher};
use crate::data::{EventIndexRepository, EventTagRepository};
use crate::error::wizard::WizardError;
use crate::model::draft::DraftInput;
use crate::wizard::flow::{EventWizard, WizardOutcome, WizardReport};

pub const EVENT_MODAL_ID: &str = "event_create_form";

/// Catalog category offered in the tag picker when a roles sheet is
/// configured.
const TAG_CATEGORY: &str = "Interest";

/// Responds to `/event_create` with the five-field event form.
pub async fn handle_command(ctx: &Context, command: CommandInteraction) {
    let modal = CreateModal::new(EVENT_MODAL_ID, "Create an Event").components(vec![
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "Title", "title")
                .required(true)
                .max_length(120),
        ),
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "Start", "start")
                .placeholder("2025-03-10 18:00 or 03/10/2025 6:00 pm")
                .required(true),
        ),
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "End", "end")
                .placeholder("2025-03-10 21:00 or 03/10/2025 9:00 pm")
                .required(true),
        ),
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "Location", "location").required(false),
        ),
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Paragraph, "Details", "details")
                .required(false)
                .max_length(1000),
        ),
    ]);

    if let Err(e) = command
        .create_response(&ctx.http, CreateInteractionResponse::Modal(modal))
        .await
    {
        error!("Failed to open event creation modal: {:?}", e);
    }
}

/// Drives a full wizard run from a submitted event form.
pub async fn handle_modal(handler: &Handler, ctx: &Context, modal: ModalInteraction) {
    let input = draft_from_modal(&modal.data);

    let destination = match resolve_destination(ctx, handler.config.event_channel_id).await {
        Ok(destination) => destination,
        Err(e) => {
            error!("Failed to resolve event channel: {:?}", e);
            let err = WizardError::DestinationUnavailable(
                "The event channel is unavailable right now.".to_string(),
            );
            report(ctx, &modal, &failure_message(&err)).await;
            return;
        }
    };

    let prompt = DiscordPrompt::new(ctx, &modal);
    let publisher = DiscordPublisher::new(ctx, destination.clone());
    let wizard = EventWizard::new(
        &*handler.calendar,
        handler.sheets.as_deref(),
        prompt,
        publisher,
        destination,
        handler.config.timezone,
        TAG_CATEGORY.to_string(),
    );

    match wizard.run(input).await {
        Ok(WizardOutcome::Posted(wizard_report)) => {
            if let Err(e) = persist_run(handler, &wizard_report).await {
                error!("Failed to persist event records: {:?}", e);
            }
            report(ctx, &modal, &success_message(&wizard_report)).await;
        }
        Ok(WizardOutcome::Canceled) => {
            report(ctx, &modal, "Event creation canceled.").await;
        }
        Err(err) => {
            report(ctx, &modal, &failure_message(&err)).await;
        }
    }
}

/// Records the calendar entries, posted location, and chosen tags. One index
/// row per calendar entry, all pointing at the same summary post.
async fn persist_run(handler: &Handler, report: &WizardReport) -> Result<(), sea_orm::DbErr> {
    let event_index = EventIndexRepository::new(&handler.db);
    let event_tags = EventTagRepository::new(&handler.db);

    for entry in &report.entries {
        event_index
            .upsert(
                &entry.id,
                report.posted.message_id,
                report.posted.channel_id,
                report.posted.thread_id,
            )
            .await?;
        event_tags.add_tags(&entry.id, &report.chosen_tags).await?;
    }

    Ok(())
}

fn success_message(report: &WizardReport) -> String {
    let mut message = match report.entries.len() {
        1 => "Created 1 calendar entry".to_string(),
        n => format!("Created {} calendar entries", n),
    };
    if report.failed_days > 0 {
        message.push_str(&format!(" ({} day(s) failed)", report.failed_days));
    }
    match report.posted.thread_id {
        Some(thread_id) => message.push_str(&format!(" and posted <#{}>.", thread_id)),
        None => message.push_str(&format!(
            " and posted in <#{}>.",
            report.posted.channel_id
        )),
    }
    message
}

fn failure_message(err: &WizardError) -> String {
    match err {
        WizardError::InvalidInput(reason) => reason.clone(),
        WizardError::DestinationUnavailable(reason) => reason.clone(),
        WizardError::NoValidTags => {
            "None of the chosen tags exist on the event forum. The calendar entries were created but no summary was posted."
                .to_string()
        }
        WizardError::PostError(reason) => {
            format!("The event summary could not be posted: {}", reason)
        }
    }
}

fn draft_from_modal(data: &ModalInteractionData) -> DraftInput {
    let mut input = DraftInput::default();

    for row in &data.components {
        for component in &row.components {
            if let ActionRowComponent::InputText(text) = component {
                let value = text.value.clone().unwrap_or_default();
                match text.custom_id.as_str() {
                    "title" => input.title = value,
                    "start" => input.start_raw = value,
                    "end" => input.end_raw = value,
                    "location" => input.location = Some(value),
                    "details" => input.details = Some(value),
                    _ => {}
                }
            }
        }
    }

    input
}

/// Ephemeral reply that works whether or not the modal interaction has
/// already been responded to (the tag picker consumes the response slot).
async fn report(ctx: &Context, modal: &ModalInteraction, content: &str) {
    let response = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true);
    if modal
        .create_response(&ctx.http, CreateInteractionResponse::Message(response))
        .await
        .is_err()
    {
        let followup = CreateInteractionResponseFollowup::new()
            .content(content)
            .ephemeral(true);
        if let Err(e) = modal.create_followup(&ctx.http, followup).await {
            error!("Failed to deliver wizard result message: {:?}", e);
        }
    }
}
