use chrono::{Datelike, Timelike};
use chrono_tz::America::Chicago;

use crate::error::wizard::WizardError;
use crate::model::draft::DraftInput;
use crate::wizard::datetime::{expand_days, parse_civil, parse_draft};

fn draft_input(title: &str, start: &str, end: &str) -> DraftInput {
    DraftInput {
        title: title.to_string(),
        start_raw: start.to_string(),
        end_raw: end.to_string(),
        location: None,
        details: None,
    }
}

/// Tests the 24-hour input shape.
///
/// Expected: Ok with the civil wall-clock preserved
#[test]
fn parses_iso_style_input() {
    let dt = parse_civil("2025-03-10 18:00", Chicago).unwrap();
    assert_eq!((dt.month(), dt.day(), dt.hour(), dt.minute()), (3, 10, 18, 0));
}

/// Tests the 12-hour input shape, including lowercase meridiems.
///
/// Expected: Ok with pm hours shifted past noon
#[test]
fn parses_us_style_input() {
    let dt = parse_civil("03/10/2025 6:30 pm", Chicago).unwrap();
    assert_eq!((dt.month(), dt.day(), dt.hour(), dt.minute()), (3, 10, 18, 30));

    let morning = parse_civil("03/10/2025 9:00 AM", Chicago).unwrap();
    assert_eq!(morning.hour(), 9);
}

/// Tests that surrounding whitespace is tolerated.
///
/// Expected: Ok
#[test]
fn trims_padding_before_parsing() {
    assert!(parse_civil("  2025-03-10 18:00  ", Chicago).is_ok());
}

/// Tests rejection of input matching neither accepted shape.
///
/// Expected: InvalidInput naming both formats
#[test]
fn rejects_unrecognized_shapes() {
    let err = parse_civil("next tuesday at 6", Chicago).unwrap_err();
    match err {
        WizardError::InvalidInput(msg) => {
            assert!(msg.contains("YYYY-MM-DD"));
            assert!(msg.contains("MM/DD/YYYY"));
        }
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}

/// Tests the spring-forward gap: 2:30 AM does not exist on 2025-03-09 in
/// Chicago.
///
/// Expected: InvalidInput
#[test]
fn rejects_nonexistent_local_times() {
    assert!(matches!(
        parse_civil("2025-03-09 02:30", Chicago),
        Err(WizardError::InvalidInput(_))
    ));
}

/// Tests that an end date before the start date terminates validation.
///
/// Expected: InvalidInput
#[test]
fn rejects_reversed_date_order() {
    let input = draft_input("Picnic", "2025-03-12 10:00", "2025-03-10 14:00");
    assert!(matches!(
        parse_draft(&input, Chicago),
        Err(WizardError::InvalidInput(_))
    ));
}

/// Tests title and details limits.
///
/// Expected: InvalidInput for an empty title and for oversized fields
#[test]
fn enforces_field_limits() {
    let blank = draft_input("   ", "2025-03-10 18:00", "2025-03-10 21:00");
    assert!(parse_draft(&blank, Chicago).is_err());

    let mut long_title = draft_input(&"x".repeat(121), "2025-03-10 18:00", "2025-03-10 21:00");
    assert!(parse_draft(&long_title, Chicago).is_err());
    long_title.title = "x".repeat(120);
    assert!(parse_draft(&long_title, Chicago).is_ok());

    let mut wordy = draft_input("Picnic", "2025-03-10 18:00", "2025-03-10 21:00");
    wordy.details = Some("d".repeat(1001));
    assert!(parse_draft(&wordy, Chicago).is_err());
}

/// Tests empty optional fields normalizing to None.
///
/// Expected: whitespace-only location and details dropped
#[test]
fn blank_optionals_become_none() {
    let mut input = draft_input("Picnic", "2025-03-10 18:00", "2025-03-10 21:00");
    input.location = Some("   ".to_string());
    input.details = Some("".to_string());

    let draft = parse_draft(&input, Chicago).unwrap();
    assert_eq!(draft.location, None);
    assert_eq!(draft.details, None);
}

/// Tests the single-day expansion base case.
///
/// Expected: one window matching the draft bounds
#[test]
fn single_day_yields_one_window() {
    let input = draft_input("Picnic", "2025-03-10 10:00", "2025-03-10 14:00");
    let draft = parse_draft(&input, Chicago).unwrap();

    let days = expand_days(&draft);
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].start, draft.start);
    assert_eq!(days[0].end, draft.end);
}

/// Tests the three-day expansion: each day repeats the start/end
/// times-of-day.
///
/// Expected: three windows, 18:00-21:00 on Mar 10, 11, and 12
#[test]
fn multi_day_repeats_daily_window() {
    let input = draft_input("Board Game Night", "2025-03-10 18:00", "2025-03-12 21:00");
    let draft = parse_draft(&input, Chicago).unwrap();

    let days = expand_days(&draft);
    assert_eq!(days.len(), 3);
    for (offset, day) in days.iter().enumerate() {
        assert_eq!(day.start.day(), 10 + offset as u32);
        assert_eq!(day.start.hour(), 18);
        assert_eq!(day.end.day(), 10 + offset as u32);
        assert_eq!(day.end.hour(), 21);
    }
}

/// Tests the overnight shift: an end time-of-day at or before the start
/// lands on the following day.
///
/// Expected: each window ends the next calendar day at 02:00
#[test]
fn overnight_windows_end_next_day() {
    let input = draft_input("Night Market", "2025-03-10 20:00", "2025-03-11 02:00");
    let draft = parse_draft(&input, Chicago).unwrap();

    let days = expand_days(&draft);
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].start.day(), 10);
    assert_eq!(days[0].end.day(), 11);
    assert_eq!(days[0].end.hour(), 2);
    assert_eq!(days[1].start.day(), 11);
    assert_eq!(days[1].end.day(), 12);
}
