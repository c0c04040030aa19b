use super::*;

/// Tests a partial feed update.
///
/// Verifies only the provided fields change.
///
/// Expected: Ok with title and disabled updated, url kept
#[tokio::test]
async fn updates_only_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feed)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let feed = factory::feed::FeedFactory::new(db, "111")
        .text(Some("{link}".to_string()))
        .build()
        .await?;

    let repo = FeedRepository::new(db);
    let updated = repo
        .update(
            feed.id,
            UpdateFeedParam {
                title: Some("Renamed".to_string()),
                disabled: Some(true),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.title, "Renamed");
    assert!(updated.disabled);
    assert_eq!(updated.url, feed.url);
    assert_eq!(updated.text.as_deref(), Some("{link}"));

    Ok(())
}

/// Tests resetting the message format.
///
/// Expected: Ok with text cleared
#[tokio::test]
async fn clears_text() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feed)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let feed = factory::feed::FeedFactory::new(db, "111")
        .text(Some("{link}".to_string()))
        .build()
        .await?;

    let repo = FeedRepository::new(db);
    let updated = repo
        .update(
            feed.id,
            UpdateFeedParam {
                text: Some(None),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.text.is_none());

    Ok(())
}

/// Tests updating a feed that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_feed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feed)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeedRepository::new(db);
    let result = repo.update(42, UpdateFeedParam::default()).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
