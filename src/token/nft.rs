use std::collections::{HashMap, HashSet};

use super::{Grant, GrantContext, RewardSink};
use crate::error::{AirdropError, AirdropResult};
use crate::types::{Address, U256};

/// Sequentially-minted, enumerable NFT ownership.
///
/// Token ids start at 0 and increase by one per mint up to `max_supply`.
#[derive(Clone, Debug)]
pub struct NftRegistry {
    owners: HashMap<U256, Address>,
    owned: HashMap<Address, Vec<U256>>,
    operators: HashSet<(Address, Address)>,
    minted: u64,
    max_supply: u64,
}

impl NftRegistry {
    pub fn new(max_supply: u64) -> Self {
        Self {
            owners: HashMap::new(),
            owned: HashMap::new(),
            operators: HashSet::new(),
            minted: 0,
            max_supply,
        }
    }

    pub fn max_supply(&self) -> u64 {
        self.max_supply
    }

    pub fn total_supply(&self) -> u64 {
        self.minted
    }

    pub fn owner_of(&self, id: U256) -> AirdropResult<Address> {
        self.owners.get(&id).copied().ok_or(AirdropError::NonexistentToken)
    }

    pub fn balance_of(&self, who: &Address) -> usize {
        self.owned.get(who).map_or(0, Vec::len)
    }

    pub fn token_of_owner_by_index(&self, who: &Address, i: usize) -> Option<U256> {
        self.owned.get(who).and_then(|ids| ids.get(i)).copied()
    }

    pub fn is_approved_for_all(&self, owner: &Address, operator: &Address) -> bool {
        self.operators.contains(&(*owner, *operator))
    }

    pub fn set_approval_for_all(&mut self, owner: Address, operator: Address, approved: bool) {
        if approved {
            self.operators.insert((owner, operator));
        } else {
            self.operators.remove(&(owner, operator));
        }
    }

    /// Mint the next sequential id to `to`.
    pub fn mint(&mut self, to: Address) -> AirdropResult<U256> {
        if self.minted >= self.max_supply {
            return Err(AirdropError::MaxSupplyReached);
        }
        let id = U256::from(self.minted);
        self.minted += 1;
        self.owners.insert(id, to);
        self.owned.entry(to).or_default().push(id);
        Ok(id)
    }

    /// Move `id` from `from` to `to` on behalf of `caller`.
    pub fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        id: U256,
    ) -> AirdropResult<()> {
        let owner = self.owner_of(id)?;
        if owner != from {
            return Err(AirdropError::WrongOwner);
        }
        if caller != owner && !self.is_approved_for_all(&owner, &caller) {
            return Err(AirdropError::NotOwnerNorApproved);
        }

        if let Some(ids) = self.owned.get_mut(&from) {
            if let Some(pos) = ids.iter().position(|t| *t == id) {
                ids.swap_remove(pos);
            }
        }
        self.owned.entry(to).or_default().push(id);
        self.owners.insert(id, to);
        Ok(())
    }
}

impl RewardSink for NftRegistry {
    fn grant(&mut self, ctx: &GrantContext<'_>) -> AirdropResult<Grant> {
        self.mint(ctx.recipient).map(Grant::Minted)
    }
}
