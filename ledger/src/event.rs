//! Ledger change notifications.
//!
//! Every successful mutation pushes one event per affected (id, amount)
//! pair. The presentation layer drains them to refresh balances; they
//! serialize to JSON for transport.

use crucible_types::{AccountAddress, Timestamp, TokenId};
use serde::Serialize;

/// A notification emitted by a successful ledger mutation.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LedgerEvent {
    /// The forging role was (re)assigned. `None` means cleared.
    ForgingContractSet { address: Option<AccountAddress> },

    /// An account free minted one unit of a base token.
    FreeMint {
        account: AccountAddress,
        id: TokenId,
        timestamp: Timestamp,
    },

    /// The forging contract minted tokens to an account.
    ForgeMint {
        account: AccountAddress,
        id: TokenId,
        amount: u128,
    },

    /// The forging contract burned tokens from an account.
    ForgeBurn {
        account: AccountAddress,
        id: TokenId,
        amount: u128,
    },
}
