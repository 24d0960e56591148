//! Forge engine notifications.
//!
//! Emitted alongside the ledger's own mint/burn events; the presentation
//! layer listens to these to refresh after forge, trade, and burn flows.

use crucible_types::{AccountAddress, TokenId};
use serde::Serialize;

/// A notification emitted by a successful forge engine operation.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ForgeEvent {
    /// A recipe completed: inputs burned, one unit of `id` minted.
    TokenForged {
        account: AccountAddress,
        id: TokenId,
        recipe: &'static str,
    },

    /// One unit of `from` was exchanged for one unit of the base id `to`.
    TokenTraded {
        account: AccountAddress,
        from: TokenId,
        to: TokenId,
    },

    /// Derived tokens destroyed outright.
    TokenBurned {
        account: AccountAddress,
        id: TokenId,
        amount: u128,
    },
}
