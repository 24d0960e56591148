//! Forging engine for the crucible ledger.
//!
//! Four fixed recipes turn base tokens into derived tokens; any held token
//! trades one-for-one into a base token; derived tokens can be burned
//! outright. The engine drives the ledger exclusively through its
//! privileged primitives under a registered identity; it never touches
//! balances directly.

pub mod deploy;
pub mod engine;
pub mod error;
pub mod event;
pub mod recipe;

pub use deploy::{deploy, DeployConfig, DEFAULT_METADATA_URI};
pub use engine::TokenForge;
pub use error::ForgeError;
pub use event::ForgeEvent;
pub use recipe::Recipe;
