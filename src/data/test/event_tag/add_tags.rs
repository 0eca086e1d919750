use super::*;

/// Tests recording tag membership for a calendar entry.
///
/// Expected: Ok with one row per tag
#[tokio::test]
async fn records_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EventTag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventTagRepository::new(db);
    repo.add_tags(
        "gcal-abc",
        &["Games".to_string(), "Family Friendly".to_string()],
    )
    .await?;

    let tags = repo.get_tags("gcal-abc").await?;
    assert_eq!(tags.len(), 2);
    assert!(tags.contains(&"Games".to_string()));
    assert!(tags.contains(&"Family Friendly".to_string()));

    Ok(())
}

/// Tests that re-adding an existing (event, tag) pair is a no-op rather
/// than an error or a duplicate.
///
/// Expected: Ok with single row
#[tokio::test]
async fn ignores_duplicate_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EventTag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventTagRepository::new(db);
    repo.add_tags("gcal-abc", &["Games".to_string()]).await?;
    repo.add_tags("gcal-abc", &["Games".to_string()]).await?;

    let count = entity::prelude::EventTag::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
