//! Serializes shard initialization.
//!
//! Shards report `created` once their client is built. When every shard has
//! reported, they are initialized one at a time in the order they were created,
//! each waiting for the previous one to report `complete`.

use std::collections::{HashSet, VecDeque};

/// What the manager must do after a shard completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeStep {
    /// Send `Initialize` to this shard
    Initialize(u32),
    /// Every shard completed, start serving HTTP
    Ready,
    /// Nothing to do
    Waiting,
}

#[derive(Debug)]
pub struct ShardHandshake {
    total: u32,
    pending: VecDeque<u32>,
    seen: HashSet<u32>,
    initializing: Option<u32>,
    started: bool,
    ready: bool,
}

impl ShardHandshake {
    pub fn new(total: u32) -> Self {
        Self {
            total,
            pending: VecDeque::new(),
            seen: HashSet::new(),
            initializing: None,
            started: false,
            ready: false,
        }
    }

    /// Queues a created shard.
    ///
    /// Returns the first shard to initialize once all shards are queued.
    /// Repeated reports from the same shard are ignored.
    pub fn on_created(&mut self, shard_id: u32) -> Option<u32> {
        if !self.seen.insert(shard_id) {
            return None;
        }
        self.pending.push_back(shard_id);

        if self.started || self.pending.len() != self.total as usize {
            return None;
        }

        self.started = true;
        self.initialize_next()
    }

    /// Records that the initializing shard completed.
    ///
    /// Completions from shards that are not currently initializing are ignored.
    pub fn on_complete(&mut self, shard_id: u32) -> HandshakeStep {
        if self.initializing != Some(shard_id) {
            return HandshakeStep::Waiting;
        }
        self.initializing = None;

        match self.initialize_next() {
            Some(next) => HandshakeStep::Initialize(next),
            None => {
                self.ready = true;
                HandshakeStep::Ready
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    fn initialize_next(&mut self) -> Option<u32> {
        let next = self.pending.pop_front()?;
        self.initializing = Some(next);
        Some(next)
    }
}
