use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Datelike;
use chrono_tz::America::Chicago;
use serenity::async_trait;

use crate::error::wizard::WizardError;
use crate::error::AppError;
use crate::model::calendar::{InsertedEvent, NewCalendarEntry};
use crate::model::destination::{Destination, DestinationTag};
use crate::model::draft::DraftInput;
use crate::model::summary::{EventSummary, PostedSummary};
use crate::model::tags::TagOption;
use crate::wizard::flow::{
    CalendarWriter, EventWizard, SummaryPublisher, TagCatalog, TagSelection, WizardOutcome,
    WizardPrompt,
};

#[derive(Default)]
struct MockCalendar {
    inserted: Mutex<Vec<NewCalendarEntry>>,
    fail_on_days: HashSet<u32>,
    counter: AtomicUsize,
}

#[async_trait]
impl CalendarWriter for MockCalendar {
    async fn insert_event(&self, entry: &NewCalendarEntry) -> Result<InsertedEvent, AppError> {
        if self.fail_on_days.contains(&entry.start.day()) {
            return Err(AppError::InternalError("calendar unavailable".to_string()));
        }
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        self.inserted.lock().unwrap().push(entry.clone());
        Ok(InsertedEvent {
            id: format!("gcal-{}", n),
            html_link: Some(format!("https://calendar.example/{}", n)),
        })
    }
}

/// None stands in for an unreachable catalog.
struct MockCatalog {
    options: Option<Vec<TagOption>>,
}

#[async_trait]
impl TagCatalog for MockCatalog {
    async fn tag_options(&self, _category: &str) -> Result<Vec<TagOption>, AppError> {
        match &self.options {
            Some(options) => Ok(options.clone()),
            None => Err(AppError::InternalError("sheet unreachable".to_string())),
        }
    }
}

struct MockPrompt {
    selection: TagSelection,
    seen_options: Arc<Mutex<Vec<TagOption>>>,
    notices: Arc<Mutex<Vec<String>>>,
}

impl MockPrompt {
    fn choosing(names: &[&str]) -> Self {
        Self {
            selection: TagSelection::Chosen(names.iter().map(|n| n.to_string()).collect()),
            seen_options: Arc::new(Mutex::new(Vec::new())),
            notices: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn canceling() -> Self {
        Self {
            selection: TagSelection::Canceled,
            seen_options: Arc::new(Mutex::new(Vec::new())),
            notices: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl WizardPrompt for MockPrompt {
    async fn select_tags(&mut self, options: &[TagOption], _max: usize) -> TagSelection {
        *self.seen_options.lock().unwrap() = options.to_vec();
        self.selection.clone()
    }

    async fn notify(&mut self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }
}

struct MockPublisher {
    published: Arc<Mutex<Option<(EventSummary, Vec<DestinationTag>)>>>,
    fail: bool,
}

impl MockPublisher {
    fn new() -> Self {
        Self {
            published: Arc::new(Mutex::new(None)),
            fail: false,
        }
    }
}

#[async_trait]
impl SummaryPublisher for MockPublisher {
    async fn publish(
        &mut self,
        summary: &EventSummary,
        applied_tags: &[DestinationTag],
    ) -> Result<PostedSummary, AppError> {
        if self.fail {
            return Err(AppError::InternalError("forum rejected post".to_string()));
        }
        *self.published.lock().unwrap() = Some((summary.clone(), applied_tags.to_vec()));
        Ok(PostedSummary {
            channel_id: 500,
            message_id: Some(900),
            thread_id: Some(901),
        })
    }
}

fn forum_destination() -> Destination {
    Destination::TaggedForum {
        channel_id: 500,
        tags: vec![
            DestinationTag {
                id: 1,
                name: "Games".to_string(),
            },
            DestinationTag {
                id: 2,
                name: "Yard Sale".to_string(),
            },
        ],
    }
}

fn board_game_night() -> DraftInput {
    DraftInput {
        title: "Board Game Night".to_string(),
        start_raw: "2025-03-10 18:00".to_string(),
        end_raw: "2025-03-12 21:00".to_string(),
        location: Some("Community Hall".to_string()),
        details: Some("Bring snacks".to_string()),
    }
}

fn catalog() -> MockCatalog {
    MockCatalog {
        options: Some(vec![
            TagOption::with_description("Games", "Board and card games"),
            TagOption::new("Yard Sale"),
        ]),
    }
}

/// Tests the happy path: a three-day draft posted to a forum.
///
/// Expected: three calendar entries, matched tag applied, date-prefixed
/// title, primary entry id carried into the summary
#[tokio::test]
async fn multi_day_forum_run_posts_summary() {
    let calendar = MockCalendar::default();
    let catalog = catalog();
    let prompt = MockPrompt::choosing(&["Games"]);
    let publisher = MockPublisher::new();
    let published = publisher.published.clone();

    let wizard = EventWizard::new(
        &calendar,
        Some(&catalog),
        prompt,
        publisher,
        forum_destination(),
        Chicago,
        "Interest".to_string(),
    );

    let outcome = wizard.run(board_game_night()).await.unwrap();
    let report = match outcome {
        WizardOutcome::Posted(report) => report,
        WizardOutcome::Canceled => panic!("expected a posted outcome"),
    };

    assert_eq!(report.entries.len(), 3);
    assert_eq!(report.days.len(), 3);
    assert_eq!(report.failed_days, 0);
    assert_eq!(report.matched_tags.len(), 1);
    assert_eq!(report.matched_tags[0].id, 1);
    assert!(report.missing_tags.is_empty());
    assert_eq!(report.posted.thread_id, Some(901));

    let (summary, applied) = published.lock().unwrap().clone().unwrap();
    assert_eq!(summary.title, "03/10-03/12 Board Game Night");
    assert_eq!(summary.event_id.as_deref(), Some("gcal-1"));
    assert_eq!(summary.when_lines.len(), 3);
    assert_eq!(applied.len(), 1);

    assert_eq!(calendar.inserted.lock().unwrap().len(), 3);
}

/// Tests that canceling the tag picker stops the run before any external
/// write.
///
/// Expected: Canceled, zero calendar inserts
#[tokio::test]
async fn cancel_at_picker_writes_nothing() {
    let calendar = MockCalendar::default();
    let catalog = catalog();
    let prompt = MockPrompt::canceling();
    let publisher = MockPublisher::new();
    let published = publisher.published.clone();

    let wizard = EventWizard::new(
        &calendar,
        Some(&catalog),
        prompt,
        publisher,
        forum_destination(),
        Chicago,
        "Interest".to_string(),
    );

    let outcome = wizard.run(board_game_night()).await.unwrap();
    assert!(matches!(outcome, WizardOutcome::Canceled));
    assert!(calendar.inserted.lock().unwrap().is_empty());
    assert!(published.lock().unwrap().is_none());
}

/// Tests that a forum run with no resolvable tags aborts after the calendar
/// entries were written: materialization precedes resolution, and the
/// already-created entries are left in place rather than rolled back.
///
/// Expected: NoValidTags, three calendar inserts, nothing published
#[tokio::test]
async fn unresolvable_tags_abort_after_calendar_writes() {
    let calendar = MockCalendar::default();
    let catalog = MockCatalog {
        options: Some(vec![TagOption::new("Knitting")]),
    };
    let prompt = MockPrompt::choosing(&["Knitting"]);
    let publisher = MockPublisher::new();
    let published = publisher.published.clone();

    let wizard = EventWizard::new(
        &calendar,
        Some(&catalog),
        prompt,
        publisher,
        forum_destination(),
        Chicago,
        "Interest".to_string(),
    );

    let err = wizard.run(board_game_night()).await.unwrap_err();
    assert!(matches!(err, WizardError::NoValidTags));
    assert_eq!(calendar.inserted.lock().unwrap().len(), 3);
    assert!(published.lock().unwrap().is_none());
}

/// Tests per-day failure tolerance: one bad day does not sink the run.
///
/// Expected: two entries, one failed day, a notice to the operator, and the
/// summary still posted
#[tokio::test]
async fn partial_calendar_failure_still_posts() {
    let calendar = MockCalendar {
        fail_on_days: HashSet::from([11]),
        ..MockCalendar::default()
    };
    let catalog = catalog();
    let prompt = MockPrompt::choosing(&["Games"]);
    let notices = prompt.notices.clone();
    let publisher = MockPublisher::new();
    let published = publisher.published.clone();

    let wizard = EventWizard::new(
        &calendar,
        Some(&catalog),
        prompt,
        publisher,
        forum_destination(),
        Chicago,
        "Interest".to_string(),
    );

    let outcome = wizard.run(board_game_night()).await.unwrap();
    let report = match outcome {
        WizardOutcome::Posted(report) => report,
        WizardOutcome::Canceled => panic!("expected a posted outcome"),
    };

    assert_eq!(report.entries.len(), 2);
    assert_eq!(report.failed_days, 1);
    assert!(notices
        .lock()
        .unwrap()
        .iter()
        .any(|n| n.contains("Mar 11")));

    let (summary, _) = published.lock().unwrap().clone().unwrap();
    assert_eq!(summary.when_lines.len(), 3);
    let field = summary.calendar_field.unwrap();
    assert_eq!(field.matches("](").count(), 2);
}

/// Tests catalog degradation: an unreachable catalog falls back to the
/// destination's own tags without aborting.
///
/// Expected: picker offered the forum tag names and the run completes
#[tokio::test]
async fn unreachable_catalog_falls_back_to_forum_tags() {
    let calendar = MockCalendar::default();
    let catalog = MockCatalog { options: None };
    let prompt = MockPrompt::choosing(&["Yard Sale"]);
    let seen = prompt.seen_options.clone();
    let notices = prompt.notices.clone();
    let publisher = MockPublisher::new();

    let wizard = EventWizard::new(
        &calendar,
        Some(&catalog),
        prompt,
        publisher,
        forum_destination(),
        Chicago,
        "Interest".to_string(),
    );

    let outcome = wizard.run(board_game_night()).await.unwrap();
    assert!(matches!(outcome, WizardOutcome::Posted(_)));

    let offered: Vec<String> = seen.lock().unwrap().iter().map(|o| o.name.clone()).collect();
    assert_eq!(offered, vec!["Games".to_string(), "Yard Sale".to_string()]);
    assert!(!notices.lock().unwrap().is_empty());
}

/// Tests a plain channel destination: chosen names stay on the summary but
/// nothing is resolved or applied, and the title keeps no date prefix.
///
/// Expected: Posted with no applied tags
#[tokio::test]
async fn plain_destination_skips_tag_resolution() {
    let calendar = MockCalendar::default();
    let catalog = catalog();
    let prompt = MockPrompt::choosing(&["Games"]);
    let publisher = MockPublisher::new();
    let published = publisher.published.clone();

    let wizard = EventWizard::new(
        &calendar,
        Some(&catalog),
        prompt,
        publisher,
        Destination::Plain { channel_id: 42 },
        Chicago,
        "Interest".to_string(),
    );

    let outcome = wizard.run(board_game_night()).await.unwrap();
    let report = match outcome {
        WizardOutcome::Posted(report) => report,
        WizardOutcome::Canceled => panic!("expected a posted outcome"),
    };
    assert!(report.matched_tags.is_empty());
    assert!(report.missing_tags.is_empty());

    let (summary, applied) = published.lock().unwrap().clone().unwrap();
    assert_eq!(summary.title, "Board Game Night");
    assert_eq!(summary.tag_names, vec!["Games".to_string()]);
    assert!(applied.is_empty());
}

/// Tests that a publish failure surfaces as PostError after the calendar
/// entries were already written.
///
/// Expected: PostError, three entries kept in the calendar
#[tokio::test]
async fn publish_failure_is_post_error() {
    let calendar = MockCalendar::default();
    let catalog = catalog();
    let prompt = MockPrompt::choosing(&["Games"]);
    let publisher = MockPublisher {
        published: Arc::new(Mutex::new(None)),
        fail: true,
    };

    let wizard = EventWizard::new(
        &calendar,
        Some(&catalog),
        prompt,
        publisher,
        forum_destination(),
        Chicago,
        "Interest".to_string(),
    );

    let err = wizard.run(board_game_night()).await.unwrap_err();
    assert!(matches!(err, WizardError::PostError(_)));
    assert_eq!(calendar.inserted.lock().unwrap().len(), 3);
}
