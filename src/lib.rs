//! merkle_airdrop: allowlist airdrops proven by Merkle inclusion.
//!
//! Layout:
//! - [`hash`]     : Keccak-256 primitives and call selectors
//! - [`merkle`]   : leaf derivation and sorted-pair proof verification
//! - [`ledger`]   : claim ledgers (per-index mapping, packed bitmap)
//! - [`reveal`]   : commit-reveal gate guarding the minting flow
//! - [`token`]    : minimal fungible / NFT bookkeeping used as reward sinks
//! - [`call`]     : selector + CBOR call encoding
//! - [`contract`] : the deployable airdrop contracts and the multicall guard
//! - [`host`]     : in-process executor providing atomic, block-ordered calls
//! - [`config`]   : deployment parameters (JSON / environment)
//!
//! Every state-changing operation goes through [`host::Chain`], which runs it
//! against a snapshot of the contract and discards the snapshot on failure.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms, unused_must_use)]

pub mod call;
pub mod config;
pub mod contract;
pub mod error;
pub mod hash;
pub mod host;
pub mod ledger;
pub mod merkle;
pub mod reveal;
pub mod token;
pub mod types;

pub use call::{Call, CallKind};
pub use config::{AirdropConfig, RecommitPolicy};
pub use contract::{
    Contract, Env, MerkleAirdrop, MerkleAirdropBitmap, MerkleAirdropMapping, MerkleAirdropNft,
    Output,
};
pub use error::{AirdropError, AirdropResult, ErrorKind};
pub use hash::Digest32;
pub use host::Chain;
pub use ledger::{BitmapLedger, ClaimLedger, MappingLedger, SlotWrite, WriteStats};
pub use types::{Address, Selector, U256};
