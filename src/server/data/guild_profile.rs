use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::profile::{GuildProfileParam, UpdateGuildProfileParam};

pub struct GuildProfileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildProfileRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_guild_id(
        &self,
        guild_id: u64,
    ) -> Result<Option<GuildProfileParam>, DbErr> {
        entity::prelude::GuildProfile::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?
            .map(GuildProfileParam::from_entity)
            .transpose()
    }

    /// Creates the profile, or updates it when one already exists.
    ///
    /// On update the guild name is always refreshed while `None` settings keep
    /// their stored value.
    pub async fn upsert(&self, param: UpdateGuildProfileParam) -> Result<GuildProfileParam, DbErr> {
        let existing = entity::prelude::GuildProfile::find_by_id(param.guild_id.to_string())
            .one(self.db)
            .await?;

        let model = match existing {
            Some(profile) => {
                let mut active: entity::guild_profile::ActiveModel = profile.into();
                active.name = ActiveValue::Set(param.name);
                if param.prefix.is_some() {
                    active.prefix = ActiveValue::Set(param.prefix);
                }
                if param.locale.is_some() {
                    active.locale = ActiveValue::Set(param.locale);
                }
                if param.timezone.is_some() {
                    active.timezone = ActiveValue::Set(param.timezone);
                }
                if param.date_format.is_some() {
                    active.date_format = ActiveValue::Set(param.date_format);
                }
                active.update(self.db).await?
            }
            None => {
                entity::guild_profile::ActiveModel {
                    guild_id: ActiveValue::Set(param.guild_id.to_string()),
                    name: ActiveValue::Set(param.name),
                    prefix: ActiveValue::Set(param.prefix),
                    locale: ActiveValue::Set(param.locale),
                    timezone: ActiveValue::Set(param.timezone),
                    date_format: ActiveValue::Set(param.date_format),
                }
                .insert(self.db)
                .await?
            }
        };

        GuildProfileParam::from_entity(model)
    }
}
