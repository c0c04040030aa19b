use super::*;

/// Tests listing feeds of a guild.
///
/// Verifies feeds from other guilds are excluded and order is by creation.
///
/// Expected: Ok with the guild's feeds in insertion order
#[tokio::test]
async fn returns_only_guild_feeds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feed)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_feed(db, "111").await?;
    let second = factory::create_feed(db, "111").await?;
    factory::create_feed(db, "999").await?;

    let repo = FeedRepository::new(db);
    let feeds = repo.get_by_guild(111).await?;

    let ids: Vec<i32> = feeds.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests listing feeds of a guild without any.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_guild_without_feeds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feed)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeedRepository::new(db);

    assert!(repo.get_by_guild(111).await?.is_empty());

    Ok(())
}
