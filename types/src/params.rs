//! Ledger parameters.

use serde::{Deserialize, Serialize};

/// Tunable parameters for the forging ledger.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ForgeParams {
    /// Minimum seconds between successive free mints of the same base id
    /// by the same account.
    pub free_mint_cooldown_secs: u64,

    /// Global supply limit for the capped token id.
    pub capped_supply_limit: u128,
}

impl ForgeParams {
    /// Production values: 1 minute cooldown, 100 token cap.
    pub fn production() -> Self {
        Self {
            free_mint_cooldown_secs: 60,
            capped_supply_limit: 100,
        }
    }
}

/// Default is the production configuration.
impl Default for ForgeParams {
    fn default() -> Self {
        Self::production()
    }
}
