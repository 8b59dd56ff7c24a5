use std::collections::HashMap;

use super::{Grant, GrantContext, RewardSink};
use crate::error::{AirdropError, AirdropResult};
use crate::types::Address;

/// Balances plus a contract-held reserve paying a fixed amount per claim.
#[derive(Clone, Debug, Default)]
pub struct FungibleReward {
    balances: HashMap<Address, u128>,
    reserve: u128,
    amount: u128,
}

impl FungibleReward {
    pub fn new(reserve: u128, amount: u128) -> Self {
        Self { balances: HashMap::new(), reserve, amount }
    }

    pub fn balance_of(&self, who: &Address) -> u128 {
        self.balances.get(who).copied().unwrap_or(0)
    }

    pub fn reserve(&self) -> u128 {
        self.reserve
    }

    pub fn reward_amount(&self) -> u128 {
        self.amount
    }

    /// Move `amount` from `from` to `to`.
    pub fn transfer(&mut self, from: Address, to: Address, amount: u128) -> AirdropResult<()> {
        let src = self.balance_of(&from);
        if src < amount {
            return Err(AirdropError::InsufficientBalance);
        }
        self.balances.insert(from, src - amount);
        *self.balances.entry(to).or_insert(0) += amount;
        Ok(())
    }
}

impl RewardSink for FungibleReward {
    fn grant(&mut self, ctx: &GrantContext<'_>) -> AirdropResult<Grant> {
        if self.reserve < self.amount {
            return Err(AirdropError::InsufficientReserve);
        }
        self.reserve -= self.amount;
        *self.balances.entry(ctx.recipient).or_insert(0) += self.amount;
        Ok(Grant::Transferred(self.amount))
    }

    fn transfer(&mut self, from: Address, to: Address, amount: u128) -> AirdropResult<()> {
        FungibleReward::transfer(self, from, to, amount)
    }
}
