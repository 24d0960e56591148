//! Fundamental types for the crucible ledger.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: account addresses, token ids, timestamps, and ledger parameters.

pub mod address;
pub mod params;
pub mod time;
pub mod token;

pub use address::AccountAddress;
pub use params::ForgeParams;
pub use time::Timestamp;
pub use token::{TokenId, TOKEN_COUNT};
