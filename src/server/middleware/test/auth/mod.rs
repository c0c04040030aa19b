use crate::server::{
    cache::memory::MemoryCache,
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, session::AuthSession},
    model::session::{SessionIdentity, StoredToken},
    state::AppState,
};
use test_utils::builder::TestBuilder;

mod require;
mod require_guild;

fn identity(id: u64) -> SessionIdentity {
    SessionIdentity {
        id,
        username: "tester".to_string(),
    }
}

fn token(expires_at: i64, refresh_token: Option<&str>) -> StoredToken {
    StoredToken {
        access_token: "access".to_string(),
        refresh_token: refresh_token.map(str::to_string),
        token_type: "Bearer".to_string(),
        scopes: vec!["identify".to_string(), "guilds".to_string()],
        expires_at,
    }
}

fn far_future() -> i64 {
    chrono::Utc::now().timestamp() + 3600
}
