//! User service for business logic.
//!
//! Resolves the logged in user's identity and the guilds they may configure, and
//! looks up the bot's own user in the cache mirror.

use crate::server::{
    cache::CacheStore,
    data::mirror::{GuildMirror, UserMirror},
    error::{cache::CacheError, AppError},
    model::{
        mirror::CachedUser,
        oauth::{DiscordIdentity, UserGuild},
        session::StoredToken,
    },
    service::auth::AuthService,
};

/// Service providing business logic for user lookups.
pub struct UserService<'a> {
    auth: AuthService<'a>,
    cache: &'a dyn CacheStore,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `auth` - Auth service used for Discord calls made with the user's token
    /// - `cache` - Cache store holding the Discord mirror
    pub fn new(auth: AuthService<'a>, cache: &'a dyn CacheStore) -> Self {
        Self { auth, cache }
    }

    /// Gets the identity of the logged in user.
    pub async fn get_current_user(
        &self,
        user_id: u64,
        token: &StoredToken,
    ) -> Result<DiscordIdentity, AppError> {
        self.auth.get_identity(user_id, token).await
    }

    /// Gets the guilds the user can manage and the bot is a member of.
    ///
    /// # Returns
    /// - `Ok(Vec<UserGuild>)` - Manageable guilds present in the mirror, in Discord's order
    /// - `Err(AppError)` - Discord request, web cache or cache mirror failure
    pub async fn get_managed_guilds(
        &self,
        user_id: u64,
        token: &StoredToken,
    ) -> Result<Vec<UserGuild>, AppError> {
        let guilds = self.auth.get_user_guilds(user_id, token).await?;

        Ok(filter_managed_guilds(self.cache, guilds).await?)
    }

    /// Gets the bot user from the cache mirror.
    pub async fn get_bot_user(&self, bot_id: u64) -> Result<Option<CachedUser>, AppError> {
        Ok(UserMirror::new(self.cache).fetch(bot_id).await?)
    }
}

/// Keeps guilds the user can manage that the bot also knows about.
pub(crate) async fn filter_managed_guilds(
    cache: &dyn CacheStore,
    guilds: Vec<UserGuild>,
) -> Result<Vec<UserGuild>, CacheError> {
    let mirror = GuildMirror::new(cache);
    let mut managed = Vec::new();

    for guild in guilds {
        if guild.can_manage() && mirror.exists(guild.id).await? {
            managed.push(guild);
        }
    }

    Ok(managed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{
        cache::memory::MemoryCache, model::mirror::CachedGuild,
    };

    fn user_guild(id: u64, owner: bool, permissions: u64) -> UserGuild {
        UserGuild {
            id,
            name: format!("Guild {}", id),
            icon: None,
            owner,
            permissions,
        }
    }

    async fn mirror_guild(cache: &MemoryCache, id: u64) -> Result<(), CacheError> {
        GuildMirror::new(cache)
            .recognize(&CachedGuild {
                id,
                name: format!("Guild {}", id),
                icon: None,
                owner_id: 1,
                member_count: 10,
                shard_id: 0,
            })
            .await
    }

    /// Tests filtering by permission and bot membership.
    ///
    /// Guild 1 is owned, guild 2 grants Manage Channels, guild 3 grants nothing
    /// and guild 4 is manageable but unknown to the bot.
    ///
    /// Expected: only guilds 1 and 2 returned
    #[tokio::test]
    async fn keeps_manageable_guilds_known_to_bot() -> Result<(), CacheError> {
        let cache = MemoryCache::new();
        for id in 1..=3 {
            mirror_guild(&cache, id).await?;
        }

        let guilds = vec![
            user_guild(1, true, 0),
            user_guild(2, false, 1 << 4),
            user_guild(3, false, 1 << 11),
            user_guild(4, true, 0),
        ];

        let managed = filter_managed_guilds(&cache, guilds).await?;
        let ids: Vec<u64> = managed.iter().map(|guild| guild.id).collect();

        assert_eq!(ids, vec![1, 2]);

        Ok(())
    }

    /// Tests filtering an empty guild list.
    ///
    /// Expected: empty result
    #[tokio::test]
    async fn empty_guild_list() -> Result<(), CacheError> {
        let cache = MemoryCache::new();

        let managed = filter_managed_guilds(&cache, Vec::new()).await?;

        assert!(managed.is_empty());

        Ok(())
    }
}
