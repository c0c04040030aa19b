use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, middleware::from_fn_with_state, Router};
use oauth2::{
    basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, RevocationUrl, TokenUrl,
};
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use time::Duration;
use tower_http::compression::CompressionLayer;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    cache::{redis::RedisCache, Cache},
    config::Config,
    error::{config::ConfigError, AppError},
    middleware::logging::{log_request, RequestLog},
    state::OAuth2Client,
    util::parse::parse_snowflake,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session store in the application database and migrates its table.
pub async fn connect_to_session_store(db: &DatabaseConnection) -> Result<SqliteStore, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Migration(format!("Failed to migrate session table: {}", e)))?;

    Ok(session_store)
}

/// Builds the session layer.
///
/// Sessions expire after one day of inactivity. Cookies are marked secure when
/// the panel is served over HTTPS.
pub fn session_layer(store: SqliteStore, secure: bool) -> SessionManagerLayer<SqliteStore> {
    SessionManagerLayer::new(store)
        .with_secure(secure)
        .with_expiry(Expiry::OnInactivity(Duration::days(1)))
}

/// Largest accepted request body.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Wraps the merged page and API router in the request layers.
///
/// Request logging sits inside the session layer so each line names the
/// logged in user, for pages and API calls alike.
pub fn with_request_layers(router: Router, store: SqliteStore, config: &Config) -> Router {
    router
        .layer(from_fn_with_state(
            RequestLog {
                trust_proxy: config.trust_proxy,
            },
            log_request,
        ))
        .layer(session_layer(store, config.https.is_some()))
        .layer(CompressionLayer::new())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

/// Connects to the Redis instance holding the Discord mirror.
pub async fn connect_to_cache(config: &Config) -> Result<Cache, AppError> {
    let cache = RedisCache::connect(&config.redis_url).await?;

    Ok(Arc::new(cache))
}

/// HTTP client for OAuth2 and user-token Discord calls.
///
/// Redirects are disabled to prevent SSRF through the token endpoint.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the Discord OAuth2 client from configuration.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with authorize, token and revocation endpoints
/// - `Err(ConfigError::InvalidEnvVar)` - One of the configured URLs is malformed
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.discord_auth_url.clone())
        .map_err(|e| invalid_url("DISCORD_AUTH_URL", e))?;
    let token_url = TokenUrl::new(config.discord_token_url.clone())
        .map_err(|e| invalid_url("DISCORD_TOKEN_URL", e))?;
    let revocation_url = RevocationUrl::new(config.discord_revocation_url.clone())
        .map_err(|e| invalid_url("DISCORD_REVOCATION_URL", e))?;
    let redirect_url = RedirectUrl::new(config.discord_redirect_url.clone())
        .map_err(|e| invalid_url("DISCORD_REDIRECT_URL", e))?;

    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_revocation_url(revocation_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}

/// Discord REST client authenticated as the bot.
pub fn setup_discord_http(config: &Config) -> Arc<Http> {
    Arc::new(Http::new(&config.discord_bot_token))
}

/// Application ID, which is also the bot user's ID.
pub fn client_id(config: &Config) -> Result<u64, AppError> {
    parse_snowflake(&config.discord_client_id).map_err(|_| {
        ConfigError::InvalidEnvVar {
            name: "DISCORD_CLIENT_ID".to_string(),
            reason: "expected a Discord snowflake".to_string(),
        }
        .into()
    })
}

fn invalid_url(name: &str, error: url::ParseError) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(overrides: &[(&'static str, &'static str)]) -> Config {
        let mut vars = HashMap::from([
            ("DATABASE_URL", "sqlite::memory:"),
            ("REDIS_URL", "redis://127.0.0.1/"),
            ("DISCORD_BOT_TOKEN", "bot-token"),
            ("DISCORD_CLIENT_ID", "1234"),
            ("DISCORD_CLIENT_SECRET", "secret"),
            ("DISCORD_REDIRECT_URL", "http://localhost:8080/api/authorize"),
        ]);
        vars.extend(overrides.iter().copied());

        Config::from_vars(|name| vars.get(name).map(|value| value.to_string())).unwrap()
    }

    /// Tests building the OAuth2 client from valid configuration.
    ///
    /// Expected: Ok
    #[test]
    fn builds_oauth_client() {
        assert!(setup_oauth_client(&config(&[])).is_ok());
    }

    /// Tests a malformed redirect URL.
    ///
    /// Expected: Err(ConfigErr) naming the variable
    #[test]
    fn rejects_malformed_redirect_url() {
        let result = setup_oauth_client(&config(&[("DISCORD_REDIRECT_URL", "not a url")]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { ref name, .. }))
                if name == "DISCORD_REDIRECT_URL"
        ));
    }

    /// Tests parsing the client ID.
    ///
    /// Expected: numeric IDs accepted, others rejected as config errors
    #[test]
    fn parses_client_id() {
        assert_eq!(client_id(&config(&[])).unwrap(), 1234);
        assert!(matches!(
            client_id(&config(&[("DISCORD_CLIENT_ID", "abc")])),
            Err(AppError::ConfigErr(_))
        ));
    }

    /// Tests creating the session store on an in-memory database.
    ///
    /// Expected: Ok with the session table migrated
    #[tokio::test]
    async fn migrates_session_store() -> Result<(), AppError> {
        let db = sea_orm::Database::connect("sqlite::memory:").await?;

        connect_to_session_store(&db).await?;

        Ok(())
    }

    /// Tests that a page route outside the API gets the session used by request logging.
    ///
    /// Expected: 200 with a session cookie set
    #[tokio::test]
    async fn layers_page_routes() -> Result<(), AppError> {
        use axum::{
            body::Body,
            http::{header, Request, StatusCode},
            routing::get,
        };
        use tower::ServiceExt;
        use tower_sessions::Session;

        let db = sea_orm::Database::connect("sqlite::memory:").await?;
        let store = connect_to_session_store(&db).await?;
        let page = Router::new().route(
            "/",
            get(|session: Session| async move {
                session.insert("visited", true).await.unwrap();
                StatusCode::OK
            }),
        );

        let response = with_request_layers(page, store, &config(&[]))
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(header::SET_COOKIE));

        Ok(())
    }
}
