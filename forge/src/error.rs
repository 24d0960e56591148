//! Forging-specific errors.

use crucible_ledger::LedgerError;
use crucible_types::TokenId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForgeError {
    /// A recipe input the account does not hold enough of. Inputs are
    /// checked in recipe order; this names the first shortfall.
    #[error("insufficient token {0} to forge")]
    InsufficientInput(TokenId),

    #[error("can only trade for tokens 0-2, got {0}")]
    InvalidBaseId(TokenId),

    #[error("only tokens 3-6 can be burned directly, got {0}")]
    InvalidBurnRange(TokenId),

    #[error("insufficient token {0} to trade")]
    InsufficientTradeInput(TokenId),

    /// A ledger-level failure surfaced through a privileged primitive
    /// (authorization, balance, supply cap).
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
