//! Shared helper utilities for factory methods.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for generating unique IDs in tests.
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Values increase monotonically across all factories so generated snowflakes,
/// titles and URLs never collide within a test binary.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}
