use super::dispense::dispense;
use super::{run_batch, Contract, Env, Output};
use crate::call::Call;
use crate::config::AirdropConfig;
use crate::error::{AirdropError, AirdropResult};
use crate::hash::Digest32;
use crate::ledger::{BitmapLedger, ClaimLedger, MappingLedger};
use crate::merkle::MerkleRoot;
use crate::token::{FungibleReward, RewardSink};
use crate::types::U256;

/// Fungible airdrop: a valid `(caller, index)` proof pays a fixed amount once.
///
/// The ledger is fixed at deployment through `L`.
#[derive(Clone, Debug)]
pub struct MerkleAirdrop<L, R = FungibleReward> {
    root: MerkleRoot,
    ledger: L,
    reward: R,
}

pub type MerkleAirdropMapping = MerkleAirdrop<MappingLedger>;
pub type MerkleAirdropBitmap = MerkleAirdrop<BitmapLedger>;

impl<L: ClaimLedger + Default> MerkleAirdrop<L, FungibleReward> {
    /// Deploy holding `reserve` and paying `amount` per claim.
    pub fn new(root: MerkleRoot, reserve: u128, amount: u128) -> Self {
        Self::with_reward(root, FungibleReward::new(reserve, amount))
    }

    pub fn from_config(cfg: &AirdropConfig) -> Self {
        Self::new(cfg.root, cfg.reserve, cfg.reward_amount)
    }
}

impl<L: ClaimLedger + Default, R: RewardSink> MerkleAirdrop<L, R> {
    pub fn with_reward(root: MerkleRoot, reward: R) -> Self {
        Self { root, ledger: L::default(), reward }
    }
}

impl<L: ClaimLedger, R: RewardSink> MerkleAirdrop<L, R> {
    pub fn root(&self) -> &MerkleRoot {
        &self.root
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn reward(&self) -> &R {
        &self.reward
    }

    pub fn is_claimed(&self, index: U256) -> bool {
        self.ledger.is_claimed(index)
    }

    pub fn claim(&mut self, env: &Env, proof: &[Digest32], index: U256) -> AirdropResult<Output> {
        let grant =
            dispense(&self.root, &mut self.ledger, &mut self.reward, env.caller, index, proof)?;
        Ok(Output::Granted(grant))
    }
}

impl<L, R> Contract for MerkleAirdrop<L, R>
where
    L: ClaimLedger + Clone,
    R: RewardSink + Clone,
{
    fn dispatch(&mut self, env: &Env, call: Call) -> AirdropResult<Output> {
        match call {
            Call::Claim { proof, index } => self.claim(env, &proof, index),
            Call::Transfer { to, amount } => {
                self.reward.transfer(env.caller, to, amount)?;
                Ok(Output::None)
            }
            Call::Multicall { calls } => run_batch(self, env, calls),
            _ => Err(AirdropError::UnsupportedCall),
        }
    }
}
