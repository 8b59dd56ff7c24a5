use crate::error::{AirdropError, AirdropResult};
use crate::ledger::ClaimLedger;
use crate::merkle::{verify_claim, MerkleRoot};
use crate::token::{Grant, GrantContext, RewardSink};
use crate::types::{Address, U256};

/// Verify, check, mark, then grant.
///
/// The mark lands before the reward runs, so the sink sees the index as
/// claimed. A failing grant leaves the mark in place; the host snapshot
/// undoes it.
pub(crate) fn dispense<L, R>(
    root: &MerkleRoot,
    ledger: &mut L,
    reward: &mut R,
    claimant: Address,
    index: U256,
    proof: &[crate::hash::Digest32],
) -> AirdropResult<Grant>
where
    L: ClaimLedger,
    R: RewardSink,
{
    if !verify_claim(&claimant, index, proof, root) {
        return Err(AirdropError::InvalidProof);
    }
    if ledger.is_claimed(index) {
        return Err(AirdropError::AlreadyClaimed);
    }
    let write = ledger.mark_claimed(index);

    let ctx = GrantContext { recipient: claimant, index, ledger: &*ledger };
    let grant = reward.grant(&ctx)?;
    tracing::info!(%claimant, %index, ?write, ?grant, "entitlement granted");
    Ok(grant)
}
