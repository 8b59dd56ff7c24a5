//! Sorted-pair inclusion verification.
//!
//! Folding a proof never fails: a wrong proof simply recomputes a different
//! root. Callers decide whether `false` is fatal.

use super::{leaf_hash, MerkleRoot};
use crate::hash::{keccak256_many, Digest32};
use crate::types::{Address, U256};

/// Parent of two nodes under the sorted-pair rule.
#[inline]
pub fn hash_sorted_pair(a: &Digest32, b: &Digest32) -> Digest32 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    keccak256_many([lo.as_slice(), hi.as_slice()])
}

/// Fold `proof` onto `leaf` and return the resulting root.
pub fn recompute_root(leaf: &Digest32, proof: &[Digest32]) -> Digest32 {
    proof
        .iter()
        .fold(*leaf, |acc, sibling| hash_sorted_pair(&acc, sibling))
}

/// `true` iff `proof` carries `leaf` exactly to `root`.
#[inline]
pub fn verify(leaf: &Digest32, proof: &[Digest32], root: &MerkleRoot) -> bool {
    &recompute_root(leaf, proof) == root
}

/// Derive the leaf for `(claimant, index)` and verify it.
pub fn verify_claim(
    claimant: &Address,
    index: U256,
    proof: &[Digest32],
    root: &MerkleRoot,
) -> bool {
    let leaf = leaf_hash(claimant, index);
    let ok = verify(&leaf, proof, root);
    tracing::debug!(%claimant, %index, depth = proof.len(), ok, "proof checked");
    ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::keccak256;

    fn d(tag: &[u8]) -> Digest32 {
        keccak256(tag)
    }

    #[test]
    fn pair_hash_is_order_independent() {
        let (a, b) = (d(b"a"), d(b"b"));
        assert_eq!(hash_sorted_pair(&a, &b), hash_sorted_pair(&b, &a));
    }

    #[test]
    fn four_leaf_tree_roundtrip() {
        let leaves = [d(b"0"), d(b"1"), d(b"2"), d(b"3")];
        let n01 = hash_sorted_pair(&leaves[0], &leaves[1]);
        let n23 = hash_sorted_pair(&leaves[2], &leaves[3]);
        let root = hash_sorted_pair(&n01, &n23);

        assert!(verify(&leaves[2], &[leaves[3], n01], &root));
        assert!(verify(&leaves[1], &[leaves[0], n23], &root));

        // Tamper with one sibling.
        let mut bad = n01;
        bad[0] ^= 0x01;
        assert!(!verify(&leaves[2], &[leaves[3], bad], &root));
    }

    #[test]
    fn empty_proof_means_leaf_is_root() {
        let leaf = d(b"only");
        assert!(verify(&leaf, &[], &leaf));
        assert!(!verify(&leaf, &[], &d(b"other")));
    }

    #[test]
    fn truncated_or_extended_proofs_fail() {
        let leaves = [d(b"x"), d(b"y"), d(b"z"), d(b"w")];
        let n01 = hash_sorted_pair(&leaves[0], &leaves[1]);
        let n23 = hash_sorted_pair(&leaves[2], &leaves[3]);
        let root = hash_sorted_pair(&n01, &n23);

        assert!(!verify(&leaves[0], &[leaves[1]], &root));
        assert!(!verify(&leaves[0], &[leaves[1], n23, n23], &root));
    }
}
