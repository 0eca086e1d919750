//! The wizard state machine.
//!
//! One [`EventWizard`] value drives one run from validated draft to posted
//! summary. The run owns its draft outright; nothing about an in-flight
//! wizard is stored globally, so concurrent runs by different operators
//! cannot observe each other.

use serenity::async_trait;
use tracing::{info, warn};

use crate::error::wizard::WizardError;
use crate::error::AppError;
use crate::google::calendar::pick_color_id;
use crate::model::calendar::{InsertedEvent, NewCalendarEntry};
use crate::model::destination::{Destination, DestinationTag};
use crate::model::draft::{DayWindow, DraftInput};
use crate::model::summary::{EventSummary, PostedSummary};
use crate::model::tags::TagOption;

use super::{datetime, summary, tags};

/// Most tag options offered in one picker.
pub const MAX_TAG_OPTIONS: usize = 25;
/// Most tags an operator may choose, and the cap on applied forum tags.
pub const MAX_CHOSEN_TAGS: usize = 5;

/// Writes entries to the external calendar store.
#[async_trait]
pub trait CalendarWriter: Send + Sync {
    async fn insert_event(&self, entry: &NewCalendarEntry) -> Result<InsertedEvent, AppError>;
}

/// Supplies the selectable tag options for the picker step.
#[async_trait]
pub trait TagCatalog: Send + Sync {
    async fn tag_options(&self, category: &str) -> Result<Vec<TagOption>, AppError>;
}

/// Outcome of the tag picker dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagSelection {
    Chosen(Vec<String>),
    /// The operator dismissed the picker or let it time out. Adapters also
    /// report their own delivery failures as a cancel, after logging them.
    Canceled,
}

/// The interactive side of a run: the tag picker and progress notices.
#[async_trait]
pub trait WizardPrompt: Send {
    async fn select_tags(&mut self, options: &[TagOption], max: usize) -> TagSelection;
    async fn notify(&mut self, message: &str);
}

/// Posts the finished summary to the resolved destination.
#[async_trait]
pub trait SummaryPublisher: Send {
    async fn publish(
        &mut self,
        summary: &EventSummary,
        applied_tags: &[DestinationTag],
    ) -> Result<PostedSummary, AppError>;
}

/// Everything a completed run produced, for persistence and the final
/// operator report.
#[derive(Debug)]
pub struct WizardReport {
    pub entries: Vec<InsertedEvent>,
    pub days: Vec<DayWindow>,
    pub chosen_tags: Vec<String>,
    pub matched_tags: Vec<DestinationTag>,
    pub missing_tags: Vec<String>,
    pub failed_days: usize,
    pub posted: PostedSummary,
}

#[derive(Debug)]
pub enum WizardOutcome {
    Posted(WizardReport),
    Canceled,
}

pub struct EventWizard<'a, C, K, P, S> {
    calendar: &'a C,
    catalog: Option<&'a K>,
    prompt: P,
    publisher: S,
    destination: Destination,
    tz: chrono_tz::Tz,
    tag_category: String,
}

impl<'a, C, K, P, S> EventWizard<'a, C, K, P, S>
where
    C: CalendarWriter,
    K: TagCatalog,
    P: WizardPrompt,
    S: SummaryPublisher,
{
    pub fn new(
        calendar: &'a C,
        catalog: Option<&'a K>,
        prompt: P,
        publisher: S,
        destination: Destination,
        tz: chrono_tz::Tz,
        tag_category: String,
    ) -> Self {
        Self {
            calendar,
            catalog,
            prompt,
            publisher,
            destination,
            tz,
            tag_category,
        }
    }

    /// Drives one run to completion.
    ///
    /// Stages: validate input, pick tags, write one calendar entry per day,
    /// resolve the chosen names against the destination's tag set, publish
    /// the summary. Validation failures and a canceled picker terminate
    /// before any external write. Calendar failures are per-day: the run
    /// reports them and carries on with whatever succeeded. Entries already
    /// written are never rolled back on a later failure, including a
    /// resolution that leaves no usable tag.
    pub async fn run(mut self, input: DraftInput) -> Result<WizardOutcome, WizardError> {
        let draft = datetime::parse_draft(&input, self.tz)?;
        let days = datetime::expand_days(&draft);

        // No options at all (plain channel, no catalog) skips the picker and
        // posts untagged rather than presenting an empty menu.
        let options = self.collect_tag_options().await;
        let chosen = if options.is_empty() {
            Vec::new()
        } else {
            match self.prompt.select_tags(&options, MAX_CHOSEN_TAGS).await {
                TagSelection::Chosen(names) if !names.is_empty() => names,
                _ => {
                    info!("event wizard canceled at tag selection: {}", draft.title);
                    return Ok(WizardOutcome::Canceled);
                }
            }
        };

        let color_id = pick_color_id(&chosen);
        let mut entries: Vec<InsertedEvent> = Vec::new();
        let mut links: Vec<String> = Vec::new();
        let mut failed_days = 0;

        for day in &days {
            let entry = NewCalendarEntry {
                title: draft.title.clone(),
                start: day.start,
                end: day.end,
                location: draft.location.clone(),
                description: draft.details.clone(),
                color_id,
            };
            match self.calendar.insert_event(&entry).await {
                Ok(created) => {
                    if let Some(link) = &created.html_link {
                        links.push(link.clone());
                    }
                    entries.push(created);
                }
                Err(err) => {
                    failed_days += 1;
                    warn!(
                        "calendar insert failed for {} on {}: {}",
                        draft.title,
                        day.start.format("%Y-%m-%d"),
                        err
                    );
                    self.prompt
                        .notify(&format!(
                            "Could not create the calendar entry for {}: {}",
                            crate::util::time::display_local(&day.start),
                            err
                        ))
                        .await;
                }
            }
        }

        let (mut matched, missing) = if self.destination.supports_tags() {
            tags::resolve_destination_tags(self.destination.tags(), &chosen)
        } else {
            (Vec::new(), Vec::new())
        };
        if !missing.is_empty() {
            self.prompt
                .notify(&format!(
                    "Skipping tags with no matching forum tag: {}",
                    missing.join(", ")
                ))
                .await;
        }
        if self.destination.supports_tags() && matched.is_empty() {
            warn!(
                "no usable tags for '{}'; {} calendar entries already written",
                draft.title,
                entries.len()
            );
            return Err(WizardError::NoValidTags);
        }
        matched.truncate(MAX_CHOSEN_TAGS);

        let event_summary = summary::build_summary(
            &draft,
            &days,
            &links,
            &chosen,
            self.destination.supports_tags(),
            entries.first().map(|e| e.id.clone()),
        );
        let posted = self
            .publisher
            .publish(&event_summary, &matched)
            .await
            .map_err(|err| WizardError::PostError(err.to_string()))?;

        info!(
            "event wizard posted '{}': {} calendar entries across {} days",
            draft.title,
            entries.len(),
            days.len()
        );

        Ok(WizardOutcome::Posted(WizardReport {
            entries,
            days,
            chosen_tags: chosen,
            matched_tags: matched,
            missing_tags: missing,
            failed_days,
            posted,
        }))
    }

    /// Catalog options when a catalog is configured and reachable, otherwise
    /// the destination's own tags. A catalog failure is reported to the
    /// operator but never aborts the run.
    async fn collect_tag_options(&mut self) -> Vec<TagOption> {
        let mut options = match self.catalog {
            Some(catalog) => match catalog.tag_options(&self.tag_category).await {
                Ok(options) => options,
                Err(err) => {
                    warn!("tag catalog unavailable: {}", err);
                    self.prompt
                        .notify("The tag catalog is unavailable right now.")
                        .await;
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        if options.is_empty() {
            options = self
                .destination
                .tags()
                .iter()
                .map(|tag| TagOption::new(tag.name.clone()))
                .collect();
        }

        options.truncate(MAX_TAG_OPTIONS);
        options
    }
}
