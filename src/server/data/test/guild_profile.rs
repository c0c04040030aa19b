use crate::server::{data::guild_profile::GuildProfileRepository, model::profile::UpdateGuildProfileParam};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

fn update(guild_id: u64, prefix: Option<&str>, timezone: Option<&str>) -> UpdateGuildProfileParam {
    UpdateGuildProfileParam {
        guild_id,
        name: "Test Guild".to_string(),
        prefix: prefix.map(str::to_string),
        locale: None,
        timezone: timezone.map(str::to_string),
        date_format: None,
    }
}

/// Tests creating a profile when none exists.
///
/// Expected: Ok with profile created
#[tokio::test]
async fn creates_missing_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildProfileRepository::new(db);
    let profile = repo.upsert(update(111, Some("rss."), None)).await?;

    assert_eq!(profile.guild_id, 111);
    assert_eq!(profile.prefix.as_deref(), Some("rss."));
    assert_eq!(repo.find_by_guild_id(111).await?, Some(profile));

    Ok(())
}

/// Tests updating an existing profile.
///
/// Verifies unspecified settings keep their stored value and no
/// duplicate row is created.
///
/// Expected: Ok with prefix kept and timezone set
#[tokio::test]
async fn updates_existing_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_profile::GuildProfileFactory::new(db, "111")
        .name("Old Name")
        .prefix(Some("rss.".to_string()))
        .build()
        .await?;

    let repo = GuildProfileRepository::new(db);
    let profile = repo.upsert(update(111, None, Some("Europe/Berlin"))).await?;

    assert_eq!(profile.name, "Test Guild");
    assert_eq!(profile.prefix.as_deref(), Some("rss."));
    assert_eq!(profile.timezone.as_deref(), Some("Europe/Berlin"));
    assert_eq!(entity::prelude::GuildProfile::find().count(db).await?, 1);

    Ok(())
}

/// Tests finding a profile that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildProfileRepository::new(db);

    assert!(repo.find_by_guild_id(111).await?.is_none());

    Ok(())
}
