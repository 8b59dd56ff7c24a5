//! Deployable airdrop contracts.
//!
//! A contract is plain state plus a [`Contract::dispatch`] entry point. It
//! does not roll itself back: atomicity comes from [`crate::host::Chain`],
//! which dispatches against a snapshot. Drive contracts through the host
//! unless partial writes on failure are acceptable.

mod airdrop;
mod airdrop_nft;
mod dispense;

pub use airdrop::{MerkleAirdrop, MerkleAirdropBitmap, MerkleAirdropMapping};
pub use airdrop_nft::MerkleAirdropNft;

use crate::call::{peek_selector, Call, CallKind};
use crate::error::{AirdropError, AirdropResult};
use crate::token::Grant;
use crate::types::Address;

/// Per-call execution context supplied by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Env {
    pub caller: Address,
    pub block: u64,
}

/// Result of a successful call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    None,
    Granted(Grant),
    /// One entry per batched call, in order.
    Batch(Vec<Output>),
}

pub trait Contract: Clone {
    fn dispatch(&mut self, env: &Env, call: Call) -> AirdropResult<Output>;
}

/// Dispatch each encoded call in order against `contract`.
///
/// The whole batch is screened before anything runs: a restricted or unknown
/// selector anywhere rejects the batch with nothing dispatched.
pub(crate) fn run_batch<C: Contract>(
    contract: &mut C,
    env: &Env,
    calls: Vec<Vec<u8>>,
) -> AirdropResult<Output> {
    for raw in &calls {
        let sel = peek_selector(raw)?;
        let kind = CallKind::from_selector(&sel).ok_or(AirdropError::UnknownSelector)?;
        if kind.is_restricted() {
            tracing::warn!(
                caller = %env.caller,
                call = kind.signature(),
                "restricted call in batch"
            );
            return Err(AirdropError::RestrictedInBatch);
        }
    }

    let mut outputs = Vec::with_capacity(calls.len());
    for raw in calls {
        let call = Call::decode(&raw)?;
        outputs.push(contract.dispatch(env, call)?);
    }
    Ok(Output::Batch(outputs))
}
