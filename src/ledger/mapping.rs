use std::collections::HashMap;

use super::{ClaimLedger, SlotWrite, WriteStats};
use crate::types::U256;

/// One boolean slot per allowlist index.
#[derive(Clone, Debug, Default)]
pub struct MappingLedger {
    claimed: HashMap<U256, bool>,
    stats: WriteStats,
}

impl MappingLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClaimLedger for MappingLedger {
    #[inline]
    fn is_claimed(&self, index: U256) -> bool {
        self.claimed.get(&index).copied().unwrap_or(false)
    }

    fn mark_claimed(&mut self, index: U256) -> SlotWrite {
        // Flags only ever go false -> true; a repeated mark rewrites the slot.
        let write = match self.claimed.insert(index, true) {
            Some(true) => SlotWrite::Update,
            _ => SlotWrite::Fresh,
        };
        self.stats.record(write);
        write
    }

    fn slots_used(&self) -> usize {
        self.claimed.len()
    }

    fn write_stats(&self) -> WriteStats {
        self.stats
    }
}
