use std::collections::BTreeMap;

use super::{ClaimLedger, SlotWrite, WriteStats};
use crate::types::U256;

/// Flags per storage word.
pub const WORD_BITS: usize = 256;

/// One bit per allowlist index, packed into 256-bit words.
///
/// Index `i` lives at bit `i % 256` of word `i / 256`. Words are stored
/// sparsely; an absent word is all zeros.
#[derive(Clone, Debug, Default)]
pub struct BitmapLedger {
    words: BTreeMap<U256, U256>,
    stats: WriteStats,
}

/// Split an index into `(word index, bit offset)`.
#[inline]
pub(crate) fn locate(index: U256) -> (U256, usize) {
    let word = index >> 8usize;
    let bit = (index.as_limbs()[0] & 0xff) as usize;
    (word, bit)
}

impl BitmapLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw word at `word_index` (zero if never written).
    pub fn word(&self, word_index: U256) -> U256 {
        self.words.get(&word_index).copied().unwrap_or(U256::ZERO)
    }
}

impl ClaimLedger for BitmapLedger {
    #[inline]
    fn is_claimed(&self, index: U256) -> bool {
        let (w, bit) = locate(index);
        self.word(w).bit(bit)
    }

    fn mark_claimed(&mut self, index: U256) -> SlotWrite {
        let (w, bit) = locate(index);
        let slot = self.words.entry(w).or_insert(U256::ZERO);
        let write = if slot.is_zero() { SlotWrite::Fresh } else { SlotWrite::Update };
        slot.set_bit(bit, true);
        self.stats.record(write);
        write
    }

    fn slots_used(&self) -> usize {
        self.words.len()
    }

    fn write_stats(&self) -> WriteStats {
        self.stats
    }
}
