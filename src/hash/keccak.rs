//! Keccak-256 helpers.
//!
//! Keccak-256 (Ethereum-style) differs from NIST SHA3-256 in padding. Leaves,
//! Merkle parents, seed commitments and call selectors all use Keccak-256 so
//! that digests match the off-chain tooling bit for bit.
//!
//! ### API
//! - `keccak256(data)`: one-shot
//! - `keccak256_many(parts)`: parts treated as concatenated
//! - `selector(signature)`: first 4 bytes of `keccak256(signature)`

use sha3::{Digest, Keccak256};

use super::Digest32;
use crate::types::Selector;

/// One-shot Keccak-256 of a single buffer.
#[inline]
pub fn keccak256(data: &[u8]) -> Digest32 {
    let mut k = Keccak256::new();
    k.update(data);
    k.finalize().into()
}

/// Keccak-256 over multiple parts, treated as if concatenated.
pub fn keccak256_many<'a, I>(parts: I) -> Digest32
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut k = Keccak256::new();
    for p in parts {
        k.update(p);
    }
    k.finalize().into()
}

/// Call selector for a canonical signature such as `claim(bytes32[],uint256)`.
#[inline]
pub fn selector(signature: &str) -> Selector {
    let h = keccak256(signature.as_bytes());
    [h[0], h[1], h[2], h[3]]
}
