//! Allowlist Merkle commitments.
//!
//! - [`leaf_hash`]: derive the leaf for `(claimant, index)`
//! - [`verify`]: sorted-pair inclusion check against a root
//!
//! ### Encoding
//! * **Leaf:** `keccak256(address ‖ index)`, where `address` is the raw 20
//!   bytes and `index` is a 32-byte big-endian integer. This is Solidity's
//!   `abi.encodePacked(address, uint256)`.
//! * **Parent:** `keccak256(min(a, b) ‖ max(a, b))`, comparing the two
//!   digests byte-wise. Proofs therefore carry no direction bits.
//!
//! The off-chain builder must pair the same way (`sortPairs: true` in
//! merkletreejs) or every proof fails. Leaves are used as-is; the builder
//! must not hash them a second time.

mod verify;

pub use verify::{hash_sorted_pair, recompute_root, verify, verify_claim};

use crate::hash::{keccak256_many, Digest32};
use crate::types::{Address, U256};

/// Root commitment of an allowlist tree.
pub type MerkleRoot = Digest32;

/// Sibling digests ordered from the leaf level upwards.
pub type Proof = Vec<Digest32>;

/// Leaf digest committing one allowlist entry.
#[inline]
pub fn leaf_hash(claimant: &Address, index: U256) -> Digest32 {
    let index_be = index.to_be_bytes::<32>();
    keccak256_many([claimant.as_bytes().as_slice(), index_be.as_slice()])
}
