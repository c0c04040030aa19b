use super::*;

/// Tests counting feeds of a guild.
///
/// Expected: Ok with the number of the guild's feeds
#[tokio::test]
async fn counts_guild_feeds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feed)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_feed(db, "111").await?;
    factory::create_feed(db, "111").await?;
    factory::create_feed(db, "222").await?;

    let repo = FeedRepository::new(db);

    assert_eq!(repo.count_by_guild(111).await?, 2);
    assert_eq!(repo.count_by_guild(333).await?, 0);

    Ok(())
}

/// Tests counting distinct feed URLs.
///
/// Verifies the same URL subscribed in several guilds counts once.
///
/// Expected: Ok(2)
#[tokio::test]
async fn counts_distinct_urls() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feed)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let shared = "https://example.com/shared.rss";
    factory::feed::FeedFactory::new(db, "111").url(shared).build().await?;
    factory::feed::FeedFactory::new(db, "222").url(shared).build().await?;
    factory::feed::FeedFactory::new(db, "222")
        .url("https://example.com/other.rss")
        .build()
        .await?;

    let repo = FeedRepository::new(db);

    assert_eq!(repo.count_distinct_urls().await?, 2);

    Ok(())
}
