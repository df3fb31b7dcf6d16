//! Block Clock Adapter
//!
//! Implements `BlockHeightProvider` with a manually advanced counter.

use crate::ports::outbound::BlockHeightProvider;
use shared_types::BlockHeight;
use std::sync::atomic::{AtomicU64, Ordering};

/// Height counter advanced by the host, one block per executed operation.
#[derive(Debug, Default)]
pub struct ManualBlockClock {
    height: AtomicU64,
}

impl ManualBlockClock {
    /// Clock at height zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock resuming from a persisted height.
    pub fn starting_at(height: BlockHeight) -> Self {
        Self {
            height: AtomicU64::new(height),
        }
    }

    /// Mine one block; returns the new height.
    pub fn advance(&self) -> BlockHeight {
        self.height.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Jump to `height` if it is ahead of the current one.
    pub fn set_height(&self, height: BlockHeight) {
        self.height.fetch_max(height, Ordering::SeqCst);
    }
}

impl BlockHeightProvider for ManualBlockClock {
    fn current_height(&self) -> BlockHeight {
        self.height.load(Ordering::SeqCst)
    }
}
