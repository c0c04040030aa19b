use thiserror::Error;

/// Failures while spawning or coordinating bot shards.
///
/// Any of these terminates the process.
#[derive(Error, Debug)]
pub enum ShardError {
    /// The bot token is empty.
    #[error("Discord bot token is empty")]
    EmptyToken,

    /// Resolved shard count is zero.
    #[error("Shard count must be at least 1")]
    NoShards,

    /// A shard reported a fatal error or its task ended.
    #[error("Shard {0} exited")]
    ShardExited(u32),

    /// Every shard event sender was dropped before the handshake finished.
    #[error("Shard event channel closed before all shards completed")]
    ChannelClosed,
}
