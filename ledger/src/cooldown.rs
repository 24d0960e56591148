//! Free-mint cooldown tracking.

use std::collections::HashMap;

use crucible_types::{AccountAddress, Timestamp, TokenId};

use crate::error::LedgerError;

/// Per-(account, base id) rate limit on free minting.
///
/// Absent entries mean "never minted", which trivially satisfies the gate.
/// Each (account, id) pair is tracked independently: free minting id 0
/// leaves the cooldown for id 1 untouched.
#[derive(Clone, Debug)]
pub struct CooldownGate {
    cooldown_secs: u64,
    last_mint: HashMap<AccountAddress, HashMap<TokenId, Timestamp>>,
}

impl CooldownGate {
    pub fn new(cooldown_secs: u64) -> Self {
        Self {
            cooldown_secs,
            last_mint: HashMap::new(),
        }
    }

    /// Fail with `CooldownActive` while the last successful free mint of
    /// `id` by `account` is more recent than the cooldown window.
    pub fn check(
        &self,
        account: &AccountAddress,
        id: TokenId,
        now: Timestamp,
    ) -> Result<(), LedgerError> {
        let Some(last) = self
            .last_mint
            .get(account)
            .and_then(|per_id| per_id.get(&id))
        else {
            return Ok(());
        };
        if last.has_expired(self.cooldown_secs, now) {
            Ok(())
        } else {
            Err(LedgerError::CooldownActive {
                id,
                remaining_secs: self.cooldown_secs - last.elapsed_since(now),
            })
        }
    }

    /// Stamp a successful free mint.
    pub fn record(&mut self, account: &AccountAddress, id: TokenId, now: Timestamp) {
        self.last_mint
            .entry(account.clone())
            .or_default()
            .insert(id, now);
    }
}
