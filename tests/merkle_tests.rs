mod common;

use common::{allowlist, idx, signers, Tree};
use hex_literal::hex;
use merkle_airdrop::hash::keccak256;
use merkle_airdrop::merkle::{leaf_hash, recompute_root, verify, verify_claim};
use merkle_airdrop::Address;

#[test]
fn leaf_is_packed_address_and_index() {
    let a: Address = "0x00000000000000000000000000000000000000aa".parse().unwrap();
    let mut packed = [0u8; 52];
    packed[19] = 0xaa;
    packed[51] = 7;
    assert_eq!(leaf_hash(&a, idx(7)), keccak256(&packed));
}

#[test]
fn keccak_matches_known_vector() {
    assert_eq!(
        keccak256(b""),
        hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
    );
}

#[test]
fn every_member_of_odd_tree_verifies() {
    for n in [1usize, 2, 3, 5, 7, 8, 13] {
        let accounts = signers(n);
        let tree = allowlist(&accounts);
        for (i, a) in accounts.iter().enumerate() {
            let proof = tree.proof(i);
            assert!(verify_claim(a, idx(i as u64), &proof, &tree.root()), "n={n} i={i}");
        }
    }
}

#[test]
fn promoted_node_has_shorter_proof() {
    let accounts = signers(5);
    let tree = allowlist(&accounts);
    // Leaf 4 pairs with nothing until the top layer.
    assert_eq!(tree.proof(4).len(), 1);
    assert_eq!(tree.proof(0).len(), 3);
    assert_eq!(recompute_root(&tree.leaf(4), &tree.proof(4)), tree.root());
}

#[test]
fn proof_binds_claimant_and_index() {
    let accounts = signers(5);
    let tree = allowlist(&accounts);
    let proof = tree.proof(2);

    assert!(verify_claim(&accounts[2], idx(2), &proof, &tree.root()));
    assert!(!verify_claim(&accounts[3], idx(2), &proof, &tree.root()));
    assert!(!verify_claim(&accounts[2], idx(3), &proof, &tree.root()));
}

#[test]
fn tampering_breaks_the_proof() {
    let accounts = signers(8);
    let tree = allowlist(&accounts);
    let leaf = tree.leaf(5);
    let proof = tree.proof(5);

    for at in 0..proof.len() {
        let mut bad = proof.clone();
        bad[at][31] ^= 1;
        assert!(!verify(&leaf, &bad, &tree.root()));
    }

    let mut wrong_root = tree.root();
    wrong_root[0] ^= 0x80;
    assert!(!verify(&leaf, &proof, &wrong_root));
    assert!(!verify(&leaf, &proof[1..], &tree.root()));
}

#[test]
fn single_leaf_tree_root_is_the_leaf() {
    let accounts = signers(1);
    let tree = Tree::new(vec![leaf_hash(&accounts[0], idx(0))]);
    assert_eq!(tree.root(), tree.leaf(0));
    assert!(tree.proof(0).is_empty());
}
