use super::*;

/// Tests upserting a new event index row.
///
/// Verifies that a calendar entry's posted location is stored with all
/// identifiers converted to their string column form.
///
/// Expected: Ok with row created
#[tokio::test]
async fn upserts_new_mapping() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EventIndex)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventIndexRepository::new(db);
    let row = repo
        .upsert("gcal-abc", Some(111), 222, Some(333))
        .await?;

    assert_eq!(row.event_id, "gcal-abc");
    assert_eq!(row.message_id, Some("111".to_string()));
    assert_eq!(row.channel_id, "222");
    assert_eq!(row.thread_id, Some("333".to_string()));

    Ok(())
}

/// Tests that upserting the same calendar entry replaces the prior mapping
/// instead of creating a duplicate row.
///
/// Expected: Ok with single updated row
#[tokio::test]
async fn replaces_existing_mapping() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EventIndex)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::event_index::EventIndexFactory::new(db)
        .event_id("gcal-abc")
        .channel_id("222")
        .thread_id(None)
        .build()
        .await?;

    let repo = EventIndexRepository::new(db);
    let row = repo.upsert("gcal-abc", Some(999), 222, Some(444)).await?;

    assert_eq!(row.thread_id, Some("444".to_string()));

    let count = entity::prelude::EventIndex::find()
        .filter(entity::event_index::Column::EventId.eq("gcal-abc"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests storing a post without a thread (plain channel destination).
///
/// Expected: Ok with None thread_id
#[tokio::test]
async fn stores_mapping_without_thread() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EventIndex)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventIndexRepository::new(db);
    let row = repo.upsert("gcal-plain", Some(111), 222, None).await?;

    assert!(row.thread_id.is_none());

    Ok(())
}
