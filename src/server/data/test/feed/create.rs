use super::*;

/// Tests creating a feed.
///
/// Verifies snowflakes are stored as strings and new feeds start enabled.
///
/// Expected: Ok with feed created
#[tokio::test]
async fn creates_feed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feed)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeedRepository::new(db);
    let feed = repo
        .create(CreateFeedParam {
            guild_id: 111,
            channel_id: 222,
            title: "Release notes".to_string(),
            url: "https://example.com/releases.rss".to_string(),
            text: Some("{title}".to_string()),
            check_titles: true,
            image_previews: false,
        })
        .await?;

    assert_eq!(feed.guild_id, 111);
    assert_eq!(feed.channel_id, 222);
    assert_eq!(feed.text.as_deref(), Some("{title}"));
    assert!(feed.check_titles);
    assert!(!feed.image_previews);
    assert!(!feed.disabled);

    let stored = entity::prelude::Feed::find_by_id(feed.id).one(db).await?.unwrap();
    assert_eq!(stored.guild_id, "111");
    assert_eq!(stored.channel_id, "222");

    Ok(())
}
