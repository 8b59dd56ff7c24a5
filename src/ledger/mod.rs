//! Claim ledgers: which allowlist indices have already been granted.
//!
//! Two storage strategies share one surface, [`ClaimLedger`]:
//! - [`MappingLedger`]: one slot per index
//! - [`BitmapLedger`]: one bit per index, 256 indices per slot
//!
//! The choice is made at deployment time through a type parameter, never at
//! runtime. A ledger has no failure modes of its own: the caller checks
//! [`ClaimLedger::is_claimed`] and then calls [`ClaimLedger::mark_claimed`]
//! inside the same atomic operation.
//!
//! ### Cost accounting
//! Every mark is reported as a [`SlotWrite`] so the two strategies can be
//! compared with EVM SSTORE pricing: a zero → non-zero slot costs
//! [`FRESH_SLOT_COST`], a non-zero → non-zero rewrite costs
//! [`UPDATE_SLOT_COST`].

mod bitmap;
mod mapping;

pub use bitmap::{BitmapLedger, WORD_BITS};
pub use mapping::MappingLedger;

use crate::types::U256;

/// Cost of writing a slot that was previously zero.
pub const FRESH_SLOT_COST: u64 = 20_000;
/// Cost of rewriting a slot that already held a non-zero value.
pub const UPDATE_SLOT_COST: u64 = 5_000;

/// Kind of storage write a mark performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotWrite {
    /// The slot was zero before this write.
    Fresh,
    /// The slot already held data (another flag in the same word).
    Update,
}

impl SlotWrite {
    #[inline]
    pub fn cost(self) -> u64 {
        match self {
            SlotWrite::Fresh => FRESH_SLOT_COST,
            SlotWrite::Update => UPDATE_SLOT_COST,
        }
    }
}

/// Running totals of writes performed by a ledger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WriteStats {
    pub fresh: u64,
    pub updates: u64,
}

impl WriteStats {
    pub(crate) fn record(&mut self, w: SlotWrite) {
        match w {
            SlotWrite::Fresh => self.fresh += 1,
            SlotWrite::Update => self.updates += 1,
        }
    }

    /// Total marks recorded.
    pub fn writes(&self) -> u64 {
        self.fresh + self.updates
    }

    /// Estimated storage cost of all recorded writes.
    pub fn cost(&self) -> u64 {
        self.fresh * FRESH_SLOT_COST + self.updates * UPDATE_SLOT_COST
    }
}

/// Per-index claim flags.
pub trait ClaimLedger {
    /// Whether `index` has been granted.
    fn is_claimed(&self, index: U256) -> bool;

    /// Set the flag for `index`. The caller must have observed
    /// `is_claimed(index) == false` in the same operation.
    fn mark_claimed(&mut self, index: U256) -> SlotWrite;

    /// Number of distinct storage slots holding data.
    fn slots_used(&self) -> usize;

    /// Writes performed so far.
    fn write_stats(&self) -> WriteStats;
}
