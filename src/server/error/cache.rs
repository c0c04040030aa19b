use thiserror::Error;

/// Failures of the key-value cache mirror.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error(transparent)]
    Redis(#[from] redis::RedisError),

    /// A mirrored value could not be encoded or decoded.
    #[error("Failed to (de)serialize cached value for key {key}: {source}")]
    Serde {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
