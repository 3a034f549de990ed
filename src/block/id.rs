use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a block for its lifetime.
///
/// Ids come from a process-wide monotonic counter, so they stay unique
/// under rapid successive mutations within the same tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(u64);

impl BlockId {
    /// Allocates the next block id.
    pub fn next() -> Self {
        BlockId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block-{}", self.0)
    }
}

/// Allocates a unique id for a generated operator growth slot.
pub(crate) fn next_slot_id() -> String {
    format!("condition-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed))
}
