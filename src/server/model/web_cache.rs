/// Kind of Discord payload cached per user in the `web_cache` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebCacheKind {
    /// The user's identity from `/users/@me`
    User,
    /// The user's guild list from `/users/@me/guilds`
    Guilds,
}

impl WebCacheKind {
    pub const ALL: [WebCacheKind; 2] = [WebCacheKind::User, WebCacheKind::Guilds];

    pub fn as_str(&self) -> &'static str {
        match self {
            WebCacheKind::User => "user",
            WebCacheKind::Guilds => "guilds",
        }
    }
}
