use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const DISCORD_REVOCATION_URL: &str = "https://discord.com/api/oauth2/token/revoke";

const DEFAULT_FEED_LIMIT: u64 = 5;
const DEFAULT_HTTPS_PORT: u16 = 443;

pub struct Config {
    pub database_url: String,
    pub redis_url: String,

    pub discord_bot_token: String,
    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,
    pub discord_revocation_url: String,

    /// Fixed shard count, `None` uses Discord's recommendation
    pub shard_count: Option<u32>,
    /// Maximum number of feeds per guild
    pub feed_limit: u64,
    /// Honor `X-Forwarded-*` headers from a reverse proxy
    pub trust_proxy: bool,
    pub https: Option<HttpsConfig>,
}

/// TLS listener settings, present only when `HTTPS_ENABLED` is true.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpsConfig {
    pub port: u16,
    pub private_key: String,
    pub certificate: String,
    pub chain: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_vars(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(lookup);

        let https = if vars.flag("HTTPS_ENABLED")? {
            Some(HttpsConfig {
                port: vars.parsed("HTTPS_PORT")?.unwrap_or(DEFAULT_HTTPS_PORT),
                private_key: vars.required("HTTPS_PRIVATE_KEY")?,
                certificate: vars.required("HTTPS_CERTIFICATE")?,
                chain: vars.required("HTTPS_CHAIN")?,
            })
        } else {
            None
        };

        let shard_count = vars.parsed::<u32>("SHARD_COUNT")?;
        if shard_count == Some(0) {
            return Err(ConfigError::InvalidEnvVar {
                name: "SHARD_COUNT".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            database_url: vars.required("DATABASE_URL")?,
            redis_url: vars.required("REDIS_URL")?,
            discord_bot_token: vars.required("DISCORD_BOT_TOKEN")?,
            discord_client_id: vars.required("DISCORD_CLIENT_ID")?,
            discord_client_secret: vars.required("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: vars.required("DISCORD_REDIRECT_URL")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            discord_revocation_url: DISCORD_REVOCATION_URL.to_string(),
            shard_count,
            feed_limit: vars.parsed("FEED_LIMIT")?.unwrap_or(DEFAULT_FEED_LIMIT),
            trust_proxy: vars.flag("TRUST_PROXY")?,
            https,
        })
    }
}

struct Vars<F>(F);

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn optional(&self, name: &str) -> Option<String> {
        (self.0)(name).filter(|value| !value.trim().is_empty())
    }

    fn required(&self, name: &str) -> Result<String, ConfigError> {
        (self.0)(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
    }

    fn parsed<T>(&self, name: &str) -> Result<Option<T>, ConfigError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        self.optional(name)
            .map(|value| {
                value.trim().parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
                    name: name.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()
    }

    fn flag(&self, name: &str) -> Result<bool, ConfigError> {
        match self.optional(name).map(|v| v.trim().to_ascii_lowercase()) {
            None => Ok(false),
            Some(value) => match value.as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidEnvVar {
                    name: name.to_string(),
                    reason: format!("expected a boolean, got '{}'", value),
                }),
            },
        }
    }
}
