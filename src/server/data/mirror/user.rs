use crate::server::{
    cache::CacheStore,
    data::mirror::{read_json, user_key, write_json},
    error::cache::CacheError,
    model::mirror::CachedUser,
};

pub struct UserMirror<'a> {
    cache: &'a dyn CacheStore,
}

impl<'a> UserMirror<'a> {
    pub fn new(cache: &'a dyn CacheStore) -> Self {
        Self { cache }
    }

    pub async fn recognize(&self, user: &CachedUser) -> Result<(), CacheError> {
        write_json(self.cache, &user_key(user.id), user).await
    }

    pub async fn fetch(&self, user_id: u64) -> Result<Option<CachedUser>, CacheError> {
        read_json(self.cache, &user_key(user_id)).await
    }
}
