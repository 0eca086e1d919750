use super::*;

/// Tests the at-most-once gate: a marker does not exist before sending and
/// does exist after.
///
/// Expected: was_sent false, then true after mark_sent
#[tokio::test]
async fn gates_on_marker_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReminderLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReminderLogRepository::new(db);

    assert!(!repo.was_sent("gcal-abc", "T-60").await?);

    repo.mark_sent("gcal-abc", "T-60").await?;

    assert!(repo.was_sent("gcal-abc", "T-60").await?);

    Ok(())
}

/// Tests that different lead-time thresholds for the same entry are tracked
/// as independent markers.
///
/// Expected: T-60 marker does not gate T-15
#[tokio::test]
async fn tracks_thresholds_independently() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReminderLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReminderLogRepository::new(db);
    repo.mark_sent("gcal-abc", "T-60").await?;

    assert!(!repo.was_sent("gcal-abc", "T-15").await?);
    assert!(!repo.was_sent("gcal-def", "T-60").await?);

    Ok(())
}

/// Tests that re-marking an already-sent reminder keeps a single row.
///
/// Expected: Ok with one marker row
#[tokio::test]
async fn remarking_keeps_single_marker() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReminderLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReminderLogRepository::new(db);
    repo.mark_sent("gcal-abc", "T-60").await?;
    repo.mark_sent("gcal-abc", "T-60").await?;

    let count = entity::prelude::ReminderLog::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
