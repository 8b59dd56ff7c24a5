//! Commit-reveal gate for the minting flow.
//!
//! A claimant first commits to `seed_commitment(seed)`. Only once at least
//! `min_delay` blocks have passed may the seed itself be revealed, and only if
//! it hashes back to the stored commitment. The seed therefore cannot be
//! chosen after the claimant learns anything the later blocks reveal.
//!
//! Per-claimant states:
//!
//! ```text
//! NoCommitment --commit--> Committed --reveal--> Revealed
//! ```
//!
//! `Revealed` is terminal unless the deployment opts in to
//! [`RecommitPolicy::AfterReveal`]. Committing while a commitment is
//! outstanding is always rejected.

use std::collections::HashMap;

use crate::config::RecommitPolicy;
use crate::error::{AirdropError, AirdropResult};
use crate::hash::{keccak256, Digest32};
use crate::types::{Address, U256};

/// Blocks that must elapse between `commit` and `reveal`.
pub const DEFAULT_MIN_REVEAL_DELAY: u64 = 10;

/// Digest a claimant commits to for `seed`.
///
/// The preimage is the seed's decimal ASCII rendering, which is what the
/// reference client hashes (`keccak256(utf8(seed.toString()))`).
pub fn seed_commitment(seed: U256) -> Digest32 {
    keccak256(seed.to_string().as_bytes())
}

/// A live commitment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Commitment {
    pub hash: Digest32,
    /// Block at which the commitment was recorded.
    pub block: u64,
}

/// Lifecycle position of one claimant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    NoCommitment,
    Committed(Commitment),
    Revealed,
}

#[derive(Clone, Debug)]
pub struct CommitRevealGate {
    min_delay: u64,
    policy: RecommitPolicy,
    states: HashMap<Address, RevealState>,
}

impl CommitRevealGate {
    pub fn new(min_delay: u64, policy: RecommitPolicy) -> Self {
        Self { min_delay, policy, states: HashMap::new() }
    }

    pub fn min_delay(&self) -> u64 {
        self.min_delay
    }

    pub fn state(&self, who: &Address) -> RevealState {
        self.states.get(who).copied().unwrap_or_default()
    }

    /// Record `hash` for `who` at `block`.
    pub fn commit(&mut self, who: Address, hash: Digest32, block: u64) -> AirdropResult<()> {
        match self.state(&who) {
            RevealState::Committed(_) => return Err(AirdropError::CommitmentOutstanding),
            RevealState::Revealed if self.policy == RecommitPolicy::Never => {
                return Err(AirdropError::AlreadyRevealed)
            }
            _ => {}
        }
        self.states.insert(who, RevealState::Committed(Commitment { hash, block }));
        tracing::debug!(%who, block, "commitment recorded");
        Ok(())
    }

    /// Check `seed` against the live commitment of `who` and consume it.
    pub fn reveal(&mut self, who: Address, seed: U256, block: u64) -> AirdropResult<()> {
        let c = match self.state(&who) {
            RevealState::Committed(c) => c,
            _ => return Err(AirdropError::NoCommitment),
        };
        if block.saturating_sub(c.block) < self.min_delay {
            tracing::debug!(%who, committed_at = c.block, block, "reveal before delay");
            return Err(AirdropError::RevealTooEarly);
        }
        if seed_commitment(seed) != c.hash {
            return Err(AirdropError::InvalidSeed);
        }
        self.states.insert(who, RevealState::Revealed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> CommitRevealGate {
        CommitRevealGate::new(DEFAULT_MIN_REVEAL_DELAY, RecommitPolicy::Never)
    }

    #[test]
    fn commitment_hashes_decimal_string() {
        assert_eq!(seed_commitment(U256::from(12345u64)), keccak256(b"12345"));
        assert_eq!(seed_commitment(U256::ZERO), keccak256(b"0"));
    }

    #[test]
    fn reveal_without_commit_fails() {
        let mut g = gate();
        let who = Address::from_low_u64(1);
        assert_eq!(g.reveal(who, U256::from(1u64), 100), Err(AirdropError::NoCommitment));
    }

    #[test]
    fn delay_is_inclusive_at_min() {
        let mut g = gate();
        let who = Address::from_low_u64(1);
        let seed = U256::from(42u64);
        g.commit(who, seed_commitment(seed), 5).unwrap();

        assert_eq!(g.reveal(who, seed, 14), Err(AirdropError::RevealTooEarly));
        g.reveal(who, seed, 15).unwrap();
        assert_eq!(g.state(&who), RevealState::Revealed);
    }

    #[test]
    fn wrong_seed_keeps_commitment() {
        let mut g = gate();
        let who = Address::from_low_u64(1);
        let seed = U256::from(7u64);
        g.commit(who, seed_commitment(seed), 0).unwrap();

        assert_eq!(g.reveal(who, seed + U256::from(1u64), 10), Err(AirdropError::InvalidSeed));
        assert!(matches!(g.state(&who), RevealState::Committed(_)));
        g.reveal(who, seed, 10).unwrap();
    }

    #[test]
    fn recommit_rules() {
        let mut g = gate();
        let who = Address::from_low_u64(9);
        let seed = U256::from(3u64);
        g.commit(who, seed_commitment(seed), 0).unwrap();
        assert_eq!(
            g.commit(who, seed_commitment(seed), 1),
            Err(AirdropError::CommitmentOutstanding)
        );
        g.reveal(who, seed, 10).unwrap();
        assert_eq!(g.commit(who, seed_commitment(seed), 11), Err(AirdropError::AlreadyRevealed));
        assert_eq!(g.reveal(who, seed, 30), Err(AirdropError::NoCommitment));

        let mut open = CommitRevealGate::new(10, RecommitPolicy::AfterReveal);
        open.commit(who, seed_commitment(seed), 0).unwrap();
        open.reveal(who, seed, 10).unwrap();
        open.commit(who, seed_commitment(seed), 11).unwrap();
    }
}
