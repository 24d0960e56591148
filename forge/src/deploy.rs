//! Deployment wiring.
//!
//! Brings up the ledger and the forge engine and performs the one-time
//! forging-role registration that binds them. The ledger comes up with no
//! forging role; the engine is constructed under its own address; the
//! owner then registers that address, after which the pair is live.

use crucible_ledger::{ForgeLedger, LedgerError};
use crucible_types::{AccountAddress, ForgeParams};

use crate::engine::TokenForge;

/// Default metadata locator template served by new deployments.
pub const DEFAULT_METADATA_URI: &str =
    "ipfs://QmS7C6YNrgE93AWjkG7eijDPwgYxc4Lsg6yVtjcWQCXMQQ/{id}.json";

/// Everything needed to bring up a wired ledger/forge pair.
#[derive(Clone, Debug)]
pub struct DeployConfig {
    /// Account that owns the ledger and performs the role registration.
    pub owner: AccountAddress,
    /// Address the forge engine is registered under.
    pub forge_address: AccountAddress,
    /// Opaque per-token metadata locator template.
    pub metadata_uri: String,
    pub params: ForgeParams,
}

impl DeployConfig {
    pub fn new(owner: AccountAddress, forge_address: AccountAddress) -> Self {
        Self {
            owner,
            forge_address,
            metadata_uri: DEFAULT_METADATA_URI.to_string(),
            params: ForgeParams::default(),
        }
    }
}

/// Instantiate both halves and register the forge as the ledger's forging
/// contract.
pub fn deploy(config: DeployConfig) -> Result<(ForgeLedger, TokenForge), LedgerError> {
    let mut ledger = ForgeLedger::with_params(
        config.owner.clone(),
        config.metadata_uri,
        config.params,
    );
    tracing::info!(owner = %config.owner, uri = ledger.metadata_uri(), "ledger deployed");

    let forge = TokenForge::new(config.forge_address.clone());
    tracing::info!(address = %config.forge_address, "forge engine deployed");

    ledger.set_forging_contract(&config.owner, Some(config.forge_address))?;
    tracing::info!("forging contract registered with ledger");

    Ok((ledger, forge))
}
