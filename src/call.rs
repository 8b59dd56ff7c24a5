//! Call encoding.
//!
//! An encoded call is a 4-byte selector followed by the CBOR encoding of the
//! argument tuple. Selectors are the first four bytes of `keccak256` over a
//! Solidity-style signature, so they match what an EVM client would compute.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use serde::{de::DeserializeOwned, Serialize};
use serde_bytes::{ByteBuf, Bytes};

use crate::error::{AirdropError, AirdropResult};
use crate::hash::{selector, Digest32};
use crate::types::{Address, Selector, U256};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
    Claim,
    Commit,
    RevealAndClaimMapping,
    RevealAndClaimBitmap,
    Transfer,
    TransferFrom,
    SetApprovalForAll,
    Multicall,
}

impl CallKind {
    pub const ALL: [CallKind; 8] = [
        CallKind::Claim,
        CallKind::Commit,
        CallKind::RevealAndClaimMapping,
        CallKind::RevealAndClaimBitmap,
        CallKind::Transfer,
        CallKind::TransferFrom,
        CallKind::SetApprovalForAll,
        CallKind::Multicall,
    ];

    pub fn signature(self) -> &'static str {
        match self {
            CallKind::Claim => "claim(bytes32[],uint256)",
            CallKind::Commit => "commit(bytes32)",
            CallKind::RevealAndClaimMapping => "revealAndClaimMapping(bytes32[],uint256,uint256)",
            CallKind::RevealAndClaimBitmap => "revealAndClaimBitmap(bytes32[],uint256,uint256)",
            CallKind::Transfer => "transfer(address,uint256)",
            CallKind::TransferFrom => "transferFrom(address,address,uint256)",
            CallKind::SetApprovalForAll => "setApprovalForAll(address,bool)",
            CallKind::Multicall => "multicall(bytes[])",
        }
    }

    pub fn selector(self) -> Selector {
        selector(self.signature())
    }

    pub fn from_selector(sel: &Selector) -> Option<CallKind> {
        SELECTORS.get(sel).copied()
    }

    /// Calls that grant an entitlement and may not appear inside a batch.
    pub fn is_restricted(self) -> bool {
        RESTRICTED.contains(&self.selector())
    }
}

static SELECTORS: Lazy<HashMap<Selector, CallKind>> =
    Lazy::new(|| CallKind::ALL.iter().map(|k| (k.selector(), *k)).collect());

// Single source of truth for the batch denylist.
static RESTRICTED: Lazy<HashSet<Selector>> = Lazy::new(|| {
    [CallKind::Claim, CallKind::RevealAndClaimMapping, CallKind::RevealAndClaimBitmap]
        .iter()
        .map(|k| selector(k.signature()))
        .collect()
});

/// A decoded call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Claim { proof: Vec<Digest32>, index: U256 },
    Commit { commitment: Digest32 },
    RevealAndClaimMapping { proof: Vec<Digest32>, index: U256, seed: U256 },
    RevealAndClaimBitmap { proof: Vec<Digest32>, index: U256, seed: U256 },
    Transfer { to: Address, amount: u128 },
    TransferFrom { from: Address, to: Address, id: U256 },
    SetApprovalForAll { operator: Address, approved: bool },
    Multicall { calls: Vec<Vec<u8>> },
}

impl Call {
    pub fn kind(&self) -> CallKind {
        match self {
            Call::Claim { .. } => CallKind::Claim,
            Call::Commit { .. } => CallKind::Commit,
            Call::RevealAndClaimMapping { .. } => CallKind::RevealAndClaimMapping,
            Call::RevealAndClaimBitmap { .. } => CallKind::RevealAndClaimBitmap,
            Call::Transfer { .. } => CallKind::Transfer,
            Call::TransferFrom { .. } => CallKind::TransferFrom,
            Call::SetApprovalForAll { .. } => CallKind::SetApprovalForAll,
            Call::Multicall { .. } => CallKind::Multicall,
        }
    }

    pub fn selector(&self) -> Selector {
        self.kind().selector()
    }

    /// `selector ‖ cbor(args)`.
    pub fn encode(&self) -> AirdropResult<Vec<u8>> {
        let mut out = self.selector().to_vec();
        match self {
            Call::Claim { proof, index } => write_args(&mut out, &(proof, index))?,
            Call::Commit { commitment } => write_args(&mut out, &(commitment,))?,
            Call::RevealAndClaimMapping { proof, index, seed }
            | Call::RevealAndClaimBitmap { proof, index, seed } => {
                write_args(&mut out, &(proof, index, seed))?
            }
            Call::Transfer { to, amount } => write_args(&mut out, &(to, amount))?,
            Call::TransferFrom { from, to, id } => write_args(&mut out, &(from, to, id))?,
            Call::SetApprovalForAll { operator, approved } => {
                write_args(&mut out, &(operator, approved))?
            }
            Call::Multicall { calls } => {
                let entries: Vec<&Bytes> = calls.iter().map(|c| Bytes::new(c)).collect();
                write_args(&mut out, &(entries,))?
            }
        }
        Ok(out)
    }

    pub fn decode(bytes: &[u8]) -> AirdropResult<Call> {
        let sel = peek_selector(bytes)?;
        let kind = CallKind::from_selector(&sel).ok_or(AirdropError::UnknownSelector)?;
        let payload = &bytes[4..];

        let call = match kind {
            CallKind::Claim => {
                let (proof, index) = read_args(payload)?;
                Call::Claim { proof, index }
            }
            CallKind::Commit => {
                let (commitment,) = read_args(payload)?;
                Call::Commit { commitment }
            }
            CallKind::RevealAndClaimMapping => {
                let (proof, index, seed) = read_args(payload)?;
                Call::RevealAndClaimMapping { proof, index, seed }
            }
            CallKind::RevealAndClaimBitmap => {
                let (proof, index, seed) = read_args(payload)?;
                Call::RevealAndClaimBitmap { proof, index, seed }
            }
            CallKind::Transfer => {
                let (to, amount) = read_args(payload)?;
                Call::Transfer { to, amount }
            }
            CallKind::TransferFrom => {
                let (from, to, id) = read_args(payload)?;
                Call::TransferFrom { from, to, id }
            }
            CallKind::SetApprovalForAll => {
                let (operator, approved) = read_args(payload)?;
                Call::SetApprovalForAll { operator, approved }
            }
            CallKind::Multicall => {
                let (entries,): (Vec<ByteBuf>,) = read_args(payload)?;
                Call::Multicall { calls: entries.into_iter().map(ByteBuf::into_vec).collect() }
            }
        };
        Ok(call)
    }
}

/// Leading selector of an encoded call.
pub fn peek_selector(bytes: &[u8]) -> AirdropResult<Selector> {
    bytes
        .get(..4)
        .and_then(|s| <Selector>::try_from(s).ok())
        .ok_or_else(|| AirdropError::MalformedCall("missing selector".into()))
}

fn write_args<T: Serialize>(out: &mut Vec<u8>, args: &T) -> AirdropResult<()> {
    ciborium::ser::into_writer(args, out).map_err(|e| AirdropError::MalformedCall(e.to_string()))
}

/// Decodes exactly one CBOR item; anything left over is malformed.
fn read_args<T: DeserializeOwned>(payload: &[u8]) -> AirdropResult<T> {
    let mut rest = payload;
    let args = ciborium::de::from_reader(&mut rest)
        .map_err(|e| AirdropError::MalformedCall(e.to_string()))?;
    if !rest.is_empty() {
        return Err(AirdropError::MalformedCall("trailing bytes".into()));
    }
    Ok(args)
}
