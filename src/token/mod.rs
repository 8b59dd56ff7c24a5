//! Reward bookkeeping.
//!
//! Ownership tracking is a collaborator, not the subject of this crate: these
//! types keep just enough state for grants and the benign batch operations
//! (`transfer`, `transferFrom`) to be observable.
//!
//! A [`RewardSink`] is invoked **after** the ledger mark. It receives a
//! read-only view of the ledger in [`GrantContext`]; any code running inside
//! the grant observes the index as already claimed.

mod fungible;
mod nft;

pub use fungible::FungibleReward;
pub use nft::NftRegistry;

use crate::error::{AirdropError, AirdropResult};
use crate::ledger::ClaimLedger;
use crate::types::{Address, U256};

/// What a grant did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grant {
    /// Fixed amount moved from the contract reserve.
    Transferred(u128),
    /// Token id minted to the recipient.
    Minted(U256),
}

/// Inputs to a reward action.
pub struct GrantContext<'a> {
    pub recipient: Address,
    pub index: U256,
    pub ledger: &'a dyn ClaimLedger,
}

/// Executes the entitlement once an index has been marked.
pub trait RewardSink {
    fn grant(&mut self, ctx: &GrantContext<'_>) -> AirdropResult<Grant>;

    /// Move a fungible balance held by `from`. Sinks without balances refuse.
    fn transfer(&mut self, _from: Address, _to: Address, _amount: u128) -> AirdropResult<()> {
        Err(AirdropError::UnsupportedCall)
    }
}
