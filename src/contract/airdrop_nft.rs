use super::dispense::dispense;
use super::{run_batch, Contract, Env, Output};
use crate::call::Call;
use crate::config::{AirdropConfig, RecommitPolicy};
use crate::error::{AirdropError, AirdropResult};
use crate::hash::Digest32;
use crate::ledger::{BitmapLedger, ClaimLedger, MappingLedger};
use crate::merkle::MerkleRoot;
use crate::reveal::{CommitRevealGate, RevealState, DEFAULT_MIN_REVEAL_DELAY};
use crate::token::NftRegistry;
use crate::types::{Address, U256};

/// NFT airdrop gated by commit-reveal.
///
/// Exposes one claim path per ledger layout (`revealAndClaimMapping`,
/// `revealAndClaimBitmap`). The two ledgers are independent; both mint from
/// the same sequential supply.
#[derive(Clone, Debug)]
pub struct MerkleAirdropNft {
    root: MerkleRoot,
    gate: CommitRevealGate,
    mapping: MappingLedger,
    bitmap: BitmapLedger,
    nft: NftRegistry,
}

impl MerkleAirdropNft {
    pub fn new(root: MerkleRoot, max_supply: u64) -> Self {
        Self::with_gate(
            root,
            max_supply,
            CommitRevealGate::new(DEFAULT_MIN_REVEAL_DELAY, RecommitPolicy::Never),
        )
    }

    pub fn from_config(cfg: &AirdropConfig) -> Self {
        Self::with_gate(
            cfg.root,
            cfg.max_supply,
            CommitRevealGate::new(cfg.min_reveal_delay, cfg.recommit_policy),
        )
    }

    fn with_gate(root: MerkleRoot, max_supply: u64, gate: CommitRevealGate) -> Self {
        Self {
            root,
            gate,
            mapping: MappingLedger::new(),
            bitmap: BitmapLedger::new(),
            nft: NftRegistry::new(max_supply),
        }
    }

    pub fn root(&self) -> &MerkleRoot {
        &self.root
    }

    pub fn nft(&self) -> &NftRegistry {
        &self.nft
    }

    pub fn mapping_ledger(&self) -> &MappingLedger {
        &self.mapping
    }

    pub fn bitmap_ledger(&self) -> &BitmapLedger {
        &self.bitmap
    }

    pub fn reveal_state(&self, who: &Address) -> RevealState {
        self.gate.state(who)
    }

    pub fn is_claimed_mapping(&self, index: U256) -> bool {
        self.mapping.is_claimed(index)
    }

    pub fn is_claimed_bitmap(&self, index: U256) -> bool {
        self.bitmap.is_claimed(index)
    }

    pub fn commit(&mut self, env: &Env, commitment: Digest32) -> AirdropResult<Output> {
        self.gate.commit(env.caller, commitment, env.block)?;
        Ok(Output::None)
    }

    pub fn reveal_and_claim_mapping(
        &mut self,
        env: &Env,
        proof: &[Digest32],
        index: U256,
        seed: U256,
    ) -> AirdropResult<Output> {
        self.gate.reveal(env.caller, seed, env.block)?;
        let grant =
            dispense(&self.root, &mut self.mapping, &mut self.nft, env.caller, index, proof)?;
        Ok(Output::Granted(grant))
    }

    pub fn reveal_and_claim_bitmap(
        &mut self,
        env: &Env,
        proof: &[Digest32],
        index: U256,
        seed: U256,
    ) -> AirdropResult<Output> {
        self.gate.reveal(env.caller, seed, env.block)?;
        let grant =
            dispense(&self.root, &mut self.bitmap, &mut self.nft, env.caller, index, proof)?;
        Ok(Output::Granted(grant))
    }
}

impl Contract for MerkleAirdropNft {
    fn dispatch(&mut self, env: &Env, call: Call) -> AirdropResult<Output> {
        match call {
            Call::Commit { commitment } => self.commit(env, commitment),
            Call::RevealAndClaimMapping { proof, index, seed } => {
                self.reveal_and_claim_mapping(env, &proof, index, seed)
            }
            Call::RevealAndClaimBitmap { proof, index, seed } => {
                self.reveal_and_claim_bitmap(env, &proof, index, seed)
            }
            Call::TransferFrom { from, to, id } => {
                self.nft.transfer_from(env.caller, from, to, id)?;
                Ok(Output::None)
            }
            Call::SetApprovalForAll { operator, approved } => {
                self.nft.set_approval_for_all(env.caller, operator, approved);
                Ok(Output::None)
            }
            Call::Multicall { calls } => run_batch(self, env, calls),
            Call::Claim { .. } | Call::Transfer { .. } => Err(AirdropError::UnsupportedCall),
        }
    }
}
