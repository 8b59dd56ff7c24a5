//! In-process host.
//!
//! `Chain` owns one deployed contract and the block counter. Calls are totally
//! ordered: each runs to completion against the live state and, on error, the
//! pre-call snapshot is put back. Blocks only advance through [`Chain::mine`].
//!
//! The `entered` flag guards the dispatch window. A call that panics never
//! clears it, so a chain observed after an unwound panic refuses further work
//! with `reentrant call` instead of exposing half-applied state.

use tracing::{debug, instrument, warn};

use crate::call::Call;
use crate::contract::{Contract, Env, Output};
use crate::error::{AirdropError, AirdropResult};
use crate::types::Address;

#[derive(Debug)]
pub struct Chain<C> {
    contract: C,
    block: u64,
    entered: bool,
}

impl<C: Contract> Chain<C> {
    /// Deploy `contract` at block 0.
    pub fn deploy(contract: C) -> Self {
        Self { contract, block: 0, entered: false }
    }

    pub fn contract(&self) -> &C {
        &self.contract
    }

    pub fn block_number(&self) -> u64 {
        self.block
    }

    /// Advance the block number by `n`.
    pub fn mine(&mut self, n: u64) -> u64 {
        self.block = self.block.saturating_add(n);
        self.block
    }

    /// Run `call` as `caller` at the current block.
    #[instrument(level = "debug", skip(self, call), fields(block = self.block))]
    pub fn execute(&mut self, caller: Address, call: Call) -> AirdropResult<Output> {
        if self.entered {
            return Err(AirdropError::Reentrant);
        }
        self.entered = true;

        let env = Env { caller, block: self.block };
        let kind = call.kind();
        let snapshot = self.contract.clone();

        let result = self.contract.dispatch(&env, call);
        match &result {
            Ok(_) => debug!(%caller, call = kind.signature(), "call ok"),
            Err(e) => {
                self.contract = snapshot;
                warn!(%caller, call = kind.signature(), reason = %e, "call reverted");
            }
        }

        self.entered = false;
        result
    }

    /// Decode `selector ‖ cbor(args)` and run it.
    pub fn execute_encoded(&mut self, caller: Address, bytes: &[u8]) -> AirdropResult<Output> {
        let call = Call::decode(bytes)?;
        self.execute(caller, call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[derive(Clone, Debug, Default)]
    struct Counter {
        hits: u32,
    }

    impl Contract for Counter {
        fn dispatch(&mut self, _env: &Env, call: Call) -> AirdropResult<Output> {
            self.hits += 1;
            match call {
                Call::Commit { commitment } if commitment == [0xff; 32] => panic!("boom"),
                Call::Commit { .. } => Ok(Output::None),
                _ => Err(AirdropError::UnsupportedCall),
            }
        }
    }

    fn commit(b: u8) -> Call {
        Call::Commit { commitment: [b; 32] }
    }

    #[test]
    fn failed_call_restores_snapshot() {
        let mut chain = Chain::deploy(Counter::default());
        let who = Address::from_low_u64(1);

        chain.execute(who, commit(1)).unwrap();
        assert_eq!(chain.contract().hits, 1);

        let err = chain.execute(who, Call::Multicall { calls: vec![] }).unwrap_err();
        assert_eq!(err, AirdropError::UnsupportedCall);
        assert_eq!(chain.contract().hits, 1);
    }

    #[test]
    fn blocks_only_move_when_mined() {
        let mut chain = Chain::deploy(Counter::default());
        let who = Address::from_low_u64(1);
        chain.execute(who, commit(1)).unwrap();
        assert_eq!(chain.block_number(), 0);
        assert_eq!(chain.mine(9), 9);
        assert_eq!(chain.block_number(), 9);
    }

    #[test]
    fn encoded_calls_decode_first() {
        let mut chain = Chain::deploy(Counter::default());
        let who = Address::from_low_u64(1);
        let bytes = commit(2).encode().unwrap();
        assert_eq!(chain.execute_encoded(who, &bytes).unwrap(), Output::None);
        assert_eq!(chain.execute_encoded(who, &[1, 2, 3, 4]), Err(AirdropError::UnknownSelector));
        assert_eq!(chain.contract().hits, 1);
    }

    #[test]
    fn panic_leaves_chain_locked() {
        let mut chain = Chain::deploy(Counter::default());
        let who = Address::from_low_u64(1);

        let res = catch_unwind(AssertUnwindSafe(|| chain.execute(who, commit(0xff))));
        assert!(res.is_err());
        assert_eq!(chain.execute(who, commit(1)), Err(AirdropError::Reentrant));
    }
}
