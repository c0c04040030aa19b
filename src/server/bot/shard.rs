//! Spawns bot shards and coordinates their startup.
//!
//! Every shard runs its own serenity client in a tokio task and talks to the
//! `ShardManager` over channels. The manager initializes shards one at a time
//! through `ShardHandshake` and returns from `wait_until_ready` once all of them
//! populated the cache mirror. Afterwards `supervise` waits for any shard to exit.

use std::collections::HashMap;

use dioxus_logger::tracing;
use serenity::{all::GatewayIntents, http::Http, Client};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::server::{
    bot::{
        handler::Handler,
        handshake::{HandshakeStep, ShardHandshake},
    },
    cache::Cache,
    config::Config,
    error::{shard::ShardError, AppError},
    service::mirror::MirrorService,
};

/// Messages from shards to the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShardEvent {
    Created(u32),
    Complete(u32),
    Exit(u32),
}

/// Messages from the manager to a shard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShardCommand {
    Initialize,
    Exit,
}

/// Sending half used by a shard to report its progress.
#[derive(Debug, Clone)]
pub struct ShardSignal {
    shard_id: u32,
    events: UnboundedSender<ShardEvent>,
}

impl ShardSignal {
    pub fn shard_id(&self) -> u32 {
        self.shard_id
    }

    pub fn created(&self) {
        self.send(ShardEvent::Created(self.shard_id));
    }

    pub fn complete(&self) {
        self.send(ShardEvent::Complete(self.shard_id));
    }

    pub fn exit(&self) {
        self.send(ShardEvent::Exit(self.shard_id));
    }

    /// Signal whose events can be inspected directly.
    #[cfg(test)]
    pub(crate) fn for_test(shard_id: u32) -> (Self, UnboundedReceiver<ShardEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        (Self { shard_id, events }, receiver)
    }

    fn send(&self, event: ShardEvent) {
        if self.events.send(event).is_err() {
            tracing::debug!("Shard manager gone, dropped {:?}", event);
        }
    }
}

/// A shard's end of the channels to the manager.
pub struct ShardLink {
    pub signal: ShardSignal,
    commands: UnboundedReceiver<ShardCommand>,
}

impl ShardLink {
    /// Waits until the manager allows this shard to connect.
    ///
    /// Returns `false` when the manager asked the shard to exit instead.
    pub async fn wait_for_initialize(&mut self) -> bool {
        matches!(self.commands.recv().await, Some(ShardCommand::Initialize))
    }

    /// Waits for an exit command or for the manager to go away.
    pub async fn wait_for_exit(&mut self) {
        while let Some(command) = self.commands.recv().await {
            if command == ShardCommand::Exit {
                return;
            }
        }
    }
}

pub struct ShardManager {
    total: u32,
    events: UnboundedReceiver<ShardEvent>,
    commands: HashMap<u32, UnboundedSender<ShardCommand>>,
}

impl ShardManager {
    /// Creates the manager and one link per shard.
    ///
    /// # Returns
    /// - `Ok((ShardManager, Vec<ShardLink>))` - Links for shards `0..total`
    /// - `Err(ShardError::NoShards)` - `total` is zero
    pub fn new(total: u32) -> Result<(Self, Vec<ShardLink>), ShardError> {
        if total == 0 {
            return Err(ShardError::NoShards);
        }

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mut commands = HashMap::new();
        let mut links = Vec::new();

        for shard_id in 0..total {
            let (commands_tx, commands_rx) = mpsc::unbounded_channel();
            commands.insert(shard_id, commands_tx);
            links.push(ShardLink {
                signal: ShardSignal {
                    shard_id,
                    events: events_tx.clone(),
                },
                commands: commands_rx,
            });
        }

        let manager = Self {
            total,
            events: events_rx,
            commands,
        };

        Ok((manager, links))
    }

    /// Runs the handshake until every shard completed.
    ///
    /// # Returns
    /// - `Ok(())` - All shards initialized and populated the mirror
    /// - `Err(ShardError::ShardExited)` - A shard exited, all shards were told to exit
    /// - `Err(ShardError::ChannelClosed)` - Every shard task ended without exiting cleanly
    pub async fn wait_until_ready(&mut self) -> Result<(), ShardError> {
        let mut handshake = ShardHandshake::new(self.total);

        while let Some(event) = self.events.recv().await {
            match event {
                ShardEvent::Created(shard_id) => {
                    tracing::debug!("Shard {} created", shard_id);
                    if let Some(next) = handshake.on_created(shard_id) {
                        self.send(next, ShardCommand::Initialize);
                    }
                }
                ShardEvent::Complete(shard_id) => {
                    tracing::info!("Shard {} ready", shard_id);
                    match handshake.on_complete(shard_id) {
                        HandshakeStep::Initialize(next) => {
                            self.send(next, ShardCommand::Initialize)
                        }
                        HandshakeStep::Ready => return Ok(()),
                        HandshakeStep::Waiting => {}
                    }
                }
                ShardEvent::Exit(shard_id) => {
                    self.broadcast_exit();
                    return Err(ShardError::ShardExited(shard_id));
                }
            }
        }

        Err(ShardError::ChannelClosed)
    }

    /// Waits for the first shard exit after startup.
    ///
    /// Tells every shard to exit and returns the reason. The caller is expected
    /// to end the process.
    pub async fn supervise(mut self) -> ShardError {
        while let Some(event) = self.events.recv().await {
            match event {
                ShardEvent::Exit(shard_id) => {
                    self.broadcast_exit();
                    return ShardError::ShardExited(shard_id);
                }
                ShardEvent::Created(shard_id) | ShardEvent::Complete(shard_id) => {
                    tracing::debug!("Ignoring late {:?} from shard {}", event, shard_id);
                }
            }
        }

        ShardError::ChannelClosed
    }

    fn send(&self, shard_id: u32, command: ShardCommand) {
        tracing::debug!("Sending {:?} to shard {}", command, shard_id);
        if let Some(commands) = self.commands.get(&shard_id) {
            let _ = commands.send(command);
        }
    }

    fn broadcast_exit(&self) {
        for commands in self.commands.values() {
            let _ = commands.send(ShardCommand::Exit);
        }
    }
}

/// Flushes the mirror, spawns every shard and waits for the handshake.
///
/// # Returns
/// - `Ok(ShardManager)` - All shards ready, pass the manager to `supervise`
/// - `Err(AppError)` - Empty token, no shards, cache failure or a shard exited
pub async fn start_shards(
    config: &Config,
    cache: Cache,
    http: &Http,
) -> Result<ShardManager, AppError> {
    if config.discord_bot_token.trim().is_empty() {
        return Err(ShardError::EmptyToken.into());
    }

    let total = resolve_shard_count(config.shard_count, http).await?;
    tracing::info!("Starting {} shard(s)", total);

    MirrorService::new(cache.as_ref()).flush_all().await?;

    let (mut manager, links) = ShardManager::new(total)?;
    for link in links {
        tokio::spawn(run_shard(
            link,
            total,
            config.discord_bot_token.clone(),
            cache.clone(),
        ));
    }

    manager.wait_until_ready().await?;
    tracing::info!("All shards ready");

    Ok(manager)
}

/// Configured shard count, or Discord's recommendation when unset.
async fn resolve_shard_count(configured: Option<u32>, http: &Http) -> Result<u32, AppError> {
    let total = match configured {
        Some(total) => total,
        None => http.get_bot_gateway().await?.shards,
    };

    if total == 0 {
        return Err(ShardError::NoShards.into());
    }

    Ok(total)
}

/// Lifecycle of one shard task.
///
/// Builds the client and reports `created`, connects once initialized and
/// reports `exit` when the connection ends or the client cannot be built.
async fn run_shard(mut link: ShardLink, total: u32, token: String, cache: Cache) {
    let shard_id = link.signal.shard_id();
    // GUILD_MEMBERS is a privileged intent and must be enabled in the Developer Portal
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(cache, link.signal.clone());
    let mut client = match Client::builder(&token, intents)
        .event_handler(handler)
        .await
    {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build client for shard {}: {}", shard_id, e);
            link.signal.exit();
            return;
        }
    };

    link.signal.created();
    if !link.wait_for_initialize().await {
        return;
    }

    tracing::info!("Shard {} connecting", shard_id);
    let signal = link.signal.clone();
    let shard_manager = client.shard_manager.clone();

    tokio::select! {
        result = client.start_shard(shard_id, total) => {
            if let Err(e) = result {
                tracing::error!("Shard {} stopped: {}", shard_id, e);
            }
            signal.exit();
        }
        _ = link.wait_for_exit() => {
            shard_manager.shutdown_all().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Fake shard: reports created, records its initialization and completes.
    fn spawn_fake_shard(mut link: ShardLink, order: Arc<Mutex<Vec<u32>>>) {
        tokio::spawn(async move {
            link.signal.created();
            if link.wait_for_initialize().await {
                order.lock().unwrap().push(link.signal.shard_id());
                link.signal.complete();
            }
            link.wait_for_exit().await;
        });
    }

    /// Tests that a zero shard count is rejected.
    ///
    /// Expected: Err(NoShards)
    #[test]
    fn rejects_zero_shards() {
        assert!(matches!(ShardManager::new(0), Err(ShardError::NoShards)));
    }

    /// Tests the handshake with well behaved shards.
    ///
    /// Expected: Ok after every shard initialized exactly once
    #[tokio::test]
    async fn ready_after_all_shards_complete() {
        let (mut manager, links) = ShardManager::new(3).unwrap();
        let order = Arc::new(Mutex::new(Vec::new()));
        for link in links {
            spawn_fake_shard(link, order.clone());
        }

        manager.wait_until_ready().await.unwrap();

        let mut initialized = order.lock().unwrap().clone();
        initialized.sort();
        assert_eq!(initialized, vec![0, 1, 2]);
    }

    /// Tests that shards are initialized one at a time.
    ///
    /// Shard 1 waits to be initialized but never completes.
    ///
    /// Expected: only one shard initialized and the handshake still pending
    #[tokio::test]
    async fn initializes_one_shard_at_a_time() {
        let (mut manager, links) = ShardManager::new(2).unwrap();
        let initialized = Arc::new(Mutex::new(Vec::new()));

        for mut link in links {
            let initialized = initialized.clone();
            tokio::spawn(async move {
                link.signal.created();
                if link.wait_for_initialize().await {
                    initialized.lock().unwrap().push(link.signal.shard_id());
                }
                link.wait_for_exit().await;
            });
        }

        let result = tokio::time::timeout(
            std::time::Duration::from_millis(200),
            manager.wait_until_ready(),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(initialized.lock().unwrap().len(), 1);
    }

    /// Tests an exit during the handshake.
    ///
    /// Expected: Err(ShardExited) and the other shard told to exit
    #[tokio::test]
    async fn exit_aborts_handshake() {
        let (mut manager, mut links) = ShardManager::new(2).unwrap();
        let mut survivor = links.pop().unwrap();
        let failing = links.pop().unwrap();

        failing.signal.exit();

        let result = manager.wait_until_ready().await;

        assert!(matches!(result, Err(ShardError::ShardExited(0))));
        assert!(!survivor.wait_for_initialize().await);
    }

    /// Tests supervision after startup.
    ///
    /// Expected: late events ignored, the first exit returned
    #[tokio::test]
    async fn supervise_returns_first_exit() {
        let (manager, links) = ShardManager::new(2).unwrap();

        links[0].signal.complete();
        links[1].signal.exit();

        let reason = manager.supervise().await;

        assert!(matches!(reason, ShardError::ShardExited(1)));
    }

    /// Tests dropped shard tasks.
    ///
    /// Expected: Err(ChannelClosed)
    #[tokio::test]
    async fn closed_channel_fails_handshake() {
        let (mut manager, links) = ShardManager::new(1).unwrap();
        drop(links);

        let result = manager.wait_until_ready().await;

        assert!(matches!(result, Err(ShardError::ChannelClosed)));
    }
}
