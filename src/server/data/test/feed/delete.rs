use super::*;

/// Tests deleting a feed.
///
/// Expected: Ok with only the deleted feed removed
#[tokio::test]
async fn deletes_feed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Feed)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let feed = factory::create_feed(db, "111").await?;
    factory::create_feed(db, "111").await?;

    let repo = FeedRepository::new(db);
    repo.delete(feed.id).await?;

    assert!(entity::prelude::Feed::find_by_id(feed.id).one(db).await?.is_none());
    assert_eq!(entity::prelude::Feed::find().count(db).await?, 1);

    Ok(())
}
