use super::*;

/// Tests looking up the posted location for a known calendar entry.
///
/// Expected: Ok(Some) with matching row
#[tokio::test]
async fn finds_existing_mapping() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EventIndex)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::event_index::EventIndexFactory::new(db)
        .event_id("gcal-abc")
        .thread_id(Some("333".to_string()))
        .build()
        .await?;

    let repo = EventIndexRepository::new(db);
    let found = repo.find_by_event_id("gcal-abc").await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().thread_id, Some("333".to_string()));

    Ok(())
}

/// Tests looking up a calendar entry that was never posted.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EventIndex)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventIndexRepository::new(db);
    let found = repo.find_by_event_id("gcal-missing").await?;

    assert!(found.is_none());

    Ok(())
}
