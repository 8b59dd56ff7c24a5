//! Shared fixtures for integration tests.
//!
//! `Tree` mirrors how allowlists are built off-chain (merkletreejs with
//! `sortPairs: true`, leaves passed pre-hashed): pairs are hashed in sorted
//! order and an unpaired node at the end of a layer is promoted unchanged.

#![allow(dead_code)]

use merkle_airdrop::hash::Digest32;
use merkle_airdrop::merkle::{hash_sorted_pair, leaf_hash};
use merkle_airdrop::{Address, U256};

pub struct Tree {
    layers: Vec<Vec<Digest32>>,
}

impl Tree {
    pub fn new(leaves: Vec<Digest32>) -> Self {
        assert!(!leaves.is_empty(), "tree needs at least one leaf");
        let mut layers = vec![leaves];
        while layers.last().map_or(0, Vec::len) > 1 {
            let prev = layers.last().unwrap();
            let next = prev
                .chunks(2)
                .map(|pair| match pair {
                    [a, b] => hash_sorted_pair(a, b),
                    [odd] => *odd,
                    _ => unreachable!(),
                })
                .collect();
            layers.push(next);
        }
        Self { layers }
    }

    pub fn root(&self) -> Digest32 {
        self.layers.last().unwrap()[0]
    }

    pub fn leaf(&self, i: usize) -> Digest32 {
        self.layers[0][i]
    }

    /// Sibling hashes from leaf `i` up to (not including) the root.
    pub fn proof(&self, mut i: usize) -> Vec<Digest32> {
        let mut proof = Vec::new();
        for layer in &self.layers[..self.layers.len() - 1] {
            let sibling = i ^ 1;
            if sibling < layer.len() {
                proof.push(layer[sibling]);
            }
            i /= 2;
        }
        proof
    }
}

/// Deterministic distinct accounts.
pub fn signers(n: usize) -> Vec<Address> {
    (0..n as u64).map(|i| Address::from_low_u64(0xa11c_e000 + i)).collect()
}

/// Allowlist where `accounts[i]` is entitled to index `i`.
pub fn allowlist(accounts: &[Address]) -> Tree {
    let leaves = accounts
        .iter()
        .enumerate()
        .map(|(i, a)| leaf_hash(a, U256::from(i as u64)))
        .collect();
    Tree::new(leaves)
}

pub fn idx(i: u64) -> U256 {
    U256::from(i)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
