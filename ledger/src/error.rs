//! Ledger-specific errors.
//!
//! Every error is detected before any state is touched; an `Err` return
//! always means zero observable mutations.

use crucible_types::TokenId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("caller is not the owner")]
    NotOwner,

    #[error("only the forging contract may call this")]
    NotForgingContract,

    #[error("only tokens 0-2 can be free minted, got {0}")]
    InvalidFreeMintId(TokenId),

    #[error("cooldown: wait {remaining_secs}s before free minting token {id} again")]
    CooldownActive { id: TokenId, remaining_secs: u64 },

    #[error("token {id} supply cap {cap} reached")]
    SupplyCapExceeded { id: TokenId, cap: u128 },

    #[error("insufficient token {id}: need {needed}, have {available}")]
    InsufficientBalance {
        id: TokenId,
        needed: u128,
        available: u128,
    },

    #[error("array lengths mismatch: {ids} ids, {amounts} amounts")]
    ArrayLengthMismatch { ids: usize, amounts: usize },

    #[error("arithmetic overflow in balance computation")]
    Overflow,
}
