//! Error types for the airdrop engine.
//!
//! Every failure aborts the whole operation; the host restores the contract
//! snapshot before the error reaches the caller. The `Display` text of each
//! variant is the short, machine-readable revert reason.
//!
//! Keep the [`codes`] table stable: external callers match on these values.

use thiserror::Error;

/// Coarse classification of a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Proof does not recompute the committed root.
    Proof,
    /// The claimant's lifecycle position forbids the operation.
    State,
    /// An intentional guard (batch restrictions, re-entrancy).
    Policy,
    /// The encoded call could not be decoded or routed.
    Call,
    /// Reward bookkeeping refused the transfer or mint.
    Token,
}

/// Canonical revert reasons.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AirdropError {
    #[error("invalid proof")]
    InvalidProof,
    #[error("already claimed")]
    AlreadyClaimed,

    #[error("no commitment")]
    NoCommitment,
    #[error("reveal too early")]
    RevealTooEarly,
    #[error("invalid seed")]
    InvalidSeed,
    #[error("commitment outstanding")]
    CommitmentOutstanding,
    #[error("already revealed")]
    AlreadyRevealed,

    #[error("cannot call minting functions")]
    RestrictedInBatch,
    #[error("reentrant call")]
    Reentrant,

    #[error("unknown selector")]
    UnknownSelector,
    #[error("malformed call: {0}")]
    MalformedCall(String),
    #[error("unsupported call")]
    UnsupportedCall,

    #[error("insufficient reserve")]
    InsufficientReserve,
    #[error("insufficient balance")]
    InsufficientBalance,
    #[error("max supply reached")]
    MaxSupplyReached,
    #[error("nonexistent token")]
    NonexistentToken,
    #[error("wrong owner")]
    WrongOwner,
    #[error("not owner nor approved")]
    NotOwnerNorApproved,
}

/// Stable numeric codes.
pub mod codes {
    pub const INVALID_PROOF: u32 = 1;
    pub const ALREADY_CLAIMED: u32 = 2;
    pub const NO_COMMITMENT: u32 = 10;
    pub const REVEAL_TOO_EARLY: u32 = 11;
    pub const INVALID_SEED: u32 = 12;
    pub const COMMITMENT_OUTSTANDING: u32 = 13;
    pub const ALREADY_REVEALED: u32 = 14;
    pub const RESTRICTED_IN_BATCH: u32 = 20;
    pub const REENTRANT: u32 = 21;
    pub const UNKNOWN_SELECTOR: u32 = 30;
    pub const MALFORMED_CALL: u32 = 31;
    pub const UNSUPPORTED_CALL: u32 = 32;
    pub const INSUFFICIENT_RESERVE: u32 = 40;
    pub const INSUFFICIENT_BALANCE: u32 = 41;
    pub const MAX_SUPPLY_REACHED: u32 = 42;
    pub const NONEXISTENT_TOKEN: u32 = 43;
    pub const WRONG_OWNER: u32 = 44;
    pub const NOT_OWNER_NOR_APPROVED: u32 = 45;
}

impl AirdropError {
    pub fn kind(&self) -> ErrorKind {
        use AirdropError::*;
        match self {
            InvalidProof => ErrorKind::Proof,
            AlreadyClaimed | NoCommitment | RevealTooEarly | InvalidSeed
            | CommitmentOutstanding | AlreadyRevealed => ErrorKind::State,
            RestrictedInBatch | Reentrant => ErrorKind::Policy,
            UnknownSelector | MalformedCall(_) | UnsupportedCall => ErrorKind::Call,
            InsufficientReserve | InsufficientBalance | MaxSupplyReached | NonexistentToken
            | WrongOwner | NotOwnerNorApproved => ErrorKind::Token,
        }
    }

    /// Convert to a stable numeric code.
    pub fn code(&self) -> u32 {
        use codes::*;
        match self {
            AirdropError::InvalidProof => INVALID_PROOF,
            AirdropError::AlreadyClaimed => ALREADY_CLAIMED,
            AirdropError::NoCommitment => NO_COMMITMENT,
            AirdropError::RevealTooEarly => REVEAL_TOO_EARLY,
            AirdropError::InvalidSeed => INVALID_SEED,
            AirdropError::CommitmentOutstanding => COMMITMENT_OUTSTANDING,
            AirdropError::AlreadyRevealed => ALREADY_REVEALED,
            AirdropError::RestrictedInBatch => RESTRICTED_IN_BATCH,
            AirdropError::Reentrant => REENTRANT,
            AirdropError::UnknownSelector => UNKNOWN_SELECTOR,
            AirdropError::MalformedCall(_) => MALFORMED_CALL,
            AirdropError::UnsupportedCall => UNSUPPORTED_CALL,
            AirdropError::InsufficientReserve => INSUFFICIENT_RESERVE,
            AirdropError::InsufficientBalance => INSUFFICIENT_BALANCE,
            AirdropError::MaxSupplyReached => MAX_SUPPLY_REACHED,
            AirdropError::NonexistentToken => NONEXISTENT_TOKEN,
            AirdropError::WrongOwner => WRONG_OWNER,
            AirdropError::NotOwnerNorApproved => NOT_OWNER_NOR_APPROVED,
        }
    }

    /// Revert reason as surfaced to callers.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

/// Convenience alias for results that use `AirdropError`.
pub type AirdropResult<T> = Result<T, AirdropError>;
