use crate::server::data::general_stats::{GeneralStatsRepository, ARTICLES_SENT};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

/// Tests reading a counter that was never written.
///
/// Expected: Ok(0)
#[tokio::test]
async fn missing_counter_is_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GeneralStats)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GeneralStatsRepository::new(db);

    assert_eq!(repo.get(ARTICLES_SENT).await?, 0);

    Ok(())
}

/// Tests incrementing a counter repeatedly.
///
/// Verifies the first increment creates the row and later ones add to it.
///
/// Expected: Ok with accumulated value
#[tokio::test]
async fn increments_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GeneralStats)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GeneralStatsRepository::new(db);
    repo.increment(ARTICLES_SENT, 1).await?;
    repo.increment(ARTICLES_SENT, 1).await?;
    repo.increment(ARTICLES_SENT, 3).await?;

    assert_eq!(repo.get(ARTICLES_SENT).await?, 5);

    Ok(())
}
