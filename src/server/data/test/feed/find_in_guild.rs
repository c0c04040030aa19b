use super::*;

/// Tests finding a feed in its own guild.
///
/// Expected: Ok(Some) with the feed
#[tokio::test]
async fn finds_feed_in_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feed)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let feed = factory::create_feed(db, "111").await?;

    let repo = FeedRepository::new(db);
    let found = repo.find_in_guild(111, feed.id).await?;

    assert_eq!(found.map(|f| f.url), Some(feed.url));

    Ok(())
}

/// Tests that a feed of another guild is not found.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_feed_of_other_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feed)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let feed = factory::create_feed(db, "999").await?;

    let repo = FeedRepository::new(db);

    assert!(repo.find_in_guild(111, feed.id).await?.is_none());
    assert!(repo.find_in_guild(999, feed.id + 100).await?.is_none());

    Ok(())
}
