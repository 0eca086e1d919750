use super::*;

/// Tests recording a new RSVP.
///
/// Expected: Ok with status stored
#[tokio::test]
async fn records_new_rsvp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rsvp)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RsvpRepository::new(db);
    let row = repo.set_status("gcal-abc", 42, "going").await?;

    assert_eq!(row.event_id, "gcal-abc");
    assert_eq!(row.user_id, "42");
    assert_eq!(row.status, "going");

    Ok(())
}

/// Tests that a user changing their mind replaces the old status rather
/// than adding a second row.
///
/// Expected: Ok with single updated row
#[tokio::test]
async fn replaces_status_for_same_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rsvp)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RsvpRepository::new(db);
    repo.set_status("gcal-abc", 42, "going").await?;
    let row = repo.set_status("gcal-abc", 42, "not_going").await?;

    assert_eq!(row.status, "not_going");

    let count = entity::prelude::Rsvp::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that RSVPs are tracked independently per user and per event.
///
/// Expected: Ok with separate rows
#[tokio::test]
async fn tracks_users_and_events_independently() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rsvp)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RsvpRepository::new(db);
    repo.set_status("gcal-abc", 42, "going").await?;
    repo.set_status("gcal-abc", 43, "maybe").await?;
    repo.set_status("gcal-def", 42, "not_going").await?;

    let for_event = repo.get_for_event("gcal-abc").await?;
    assert_eq!(for_event.len(), 2);

    let other = repo.find("gcal-def", 42).await?.unwrap();
    assert_eq!(other.status, "not_going");

    Ok(())
}
