//! The forgeable token ledger — composition of book, gates, and events.

use crucible_types::{AccountAddress, ForgeParams, Timestamp, TokenId};

use crate::access::AccessGate;
use crate::book::TokenBook;
use crate::cooldown::CooldownGate;
use crate::error::LedgerError;
use crate::event::LedgerEvent;

/// The multi-token ledger with guarded mutation entry points.
///
/// All balance, supply, role, and cooldown state is owned here. Every
/// public operation validates its guards in order (authorization, then
/// domain and shape, then sufficiency and capacity); the first failing
/// guard aborts the whole call with no observable side effect. The
/// execution substrate is assumed to apply operations one at a time.
pub struct ForgeLedger {
    book: TokenBook,
    access: AccessGate,
    cooldown: CooldownGate,
    metadata_uri: String,
    events: Vec<LedgerEvent>,
}

impl ForgeLedger {
    /// Create a ledger owned by `owner`, serving `metadata_uri` as the
    /// opaque per-token metadata locator template.
    pub fn new(owner: AccountAddress, metadata_uri: impl Into<String>) -> Self {
        Self::with_params(owner, metadata_uri, ForgeParams::default())
    }

    pub fn with_params(
        owner: AccountAddress,
        metadata_uri: impl Into<String>,
        params: ForgeParams,
    ) -> Self {
        Self {
            book: TokenBook::new(params.capped_supply_limit),
            access: AccessGate::new(owner),
            cooldown: CooldownGate::new(params.free_mint_cooldown_secs),
            metadata_uri: metadata_uri.into(),
            events: Vec::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────────

    pub fn balance_of(&self, account: &AccountAddress, id: TokenId) -> u128 {
        self.book.balance_of(account, id)
    }

    pub fn total_supply(&self, id: TokenId) -> u128 {
        self.book.total_supply(id)
    }

    /// Validate a prospective mint without applying it. Lets composed
    /// engines confirm capacity before committing to a burn-then-mint
    /// sequence that has no rollback.
    pub fn can_mint(&self, id: TokenId, amount: u128) -> Result<(), LedgerError> {
        self.book.can_mint(id, amount).map(|_| ())
    }

    pub fn owner(&self) -> &AccountAddress {
        self.access.owner()
    }

    pub fn forging_contract(&self) -> Option<&AccountAddress> {
        self.access.forging_contract()
    }

    pub fn metadata_uri(&self) -> &str {
        &self.metadata_uri
    }

    /// Drain accumulated notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<LedgerEvent> {
        self.events.drain(..).collect()
    }

    // ── Owner operations ─────────────────────────────────────────────────

    /// Assign the forging role. Owner only. `None` clears the role;
    /// reassigning the current value succeeds and still emits.
    pub fn set_forging_contract(
        &mut self,
        caller: &AccountAddress,
        new_contract: Option<AccountAddress>,
    ) -> Result<(), LedgerError> {
        self.access.require_owner(caller)?;
        self.access.set_forging(new_contract.clone());
        tracing::info!(contract = ?new_contract.as_ref().map(AccountAddress::as_str), "forging contract set");
        self.events
            .push(LedgerEvent::ForgingContractSet { address: new_contract });
        Ok(())
    }

    // ── Free minting ─────────────────────────────────────────────────────

    /// Mint one unit of a base token to the caller, subject to the
    /// per-(account, id) cooldown.
    pub fn free_mint(
        &mut self,
        caller: &AccountAddress,
        id: TokenId,
        now: Timestamp,
    ) -> Result<(), LedgerError> {
        if !id.is_base() {
            return Err(LedgerError::InvalidFreeMintId(id));
        }
        self.cooldown.check(caller, id, now)?;
        self.book.mint(caller, id, 1)?;
        self.cooldown.record(caller, id, now);
        tracing::debug!(account = %caller, token = %id, "free mint");
        self.events.push(LedgerEvent::FreeMint {
            account: caller.clone(),
            id,
            timestamp: now,
        });
        Ok(())
    }

    // ── Privileged forging primitives ────────────────────────────────────

    /// Mint arbitrary amounts. Forging role only.
    pub fn forge_mint(
        &mut self,
        caller: &AccountAddress,
        to: &AccountAddress,
        id: TokenId,
        amount: u128,
    ) -> Result<(), LedgerError> {
        self.access.require_forging(caller)?;
        self.book.mint(to, id, amount)?;
        tracing::debug!(account = %to, token = %id, amount, "forge mint");
        self.events.push(LedgerEvent::ForgeMint {
            account: to.clone(),
            id,
            amount,
        });
        Ok(())
    }

    /// Burn arbitrary amounts. Forging role only.
    pub fn forge_burn(
        &mut self,
        caller: &AccountAddress,
        from: &AccountAddress,
        id: TokenId,
        amount: u128,
    ) -> Result<(), LedgerError> {
        self.access.require_forging(caller)?;
        self.book.burn(from, id, amount)?;
        tracing::debug!(account = %from, token = %id, amount, "forge burn");
        self.events.push(LedgerEvent::ForgeBurn {
            account: from.clone(),
            id,
            amount,
        });
        Ok(())
    }

    /// Batched [`forge_mint`](Self::forge_mint). All-or-nothing: a failing
    /// element leaves every balance and supply unchanged and emits nothing.
    pub fn forge_mint_batch(
        &mut self,
        caller: &AccountAddress,
        to: &AccountAddress,
        ids: &[TokenId],
        amounts: &[u128],
    ) -> Result<(), LedgerError> {
        self.access.require_forging(caller)?;
        self.book.mint_batch(to, ids, amounts)?;
        tracing::debug!(account = %to, count = ids.len(), "forge mint batch");
        for (&id, &amount) in ids.iter().zip(amounts) {
            self.events.push(LedgerEvent::ForgeMint {
                account: to.clone(),
                id,
                amount,
            });
        }
        Ok(())
    }

    /// Batched [`forge_burn`](Self::forge_burn). All-or-nothing.
    pub fn forge_burn_batch(
        &mut self,
        caller: &AccountAddress,
        from: &AccountAddress,
        ids: &[TokenId],
        amounts: &[u128],
    ) -> Result<(), LedgerError> {
        self.access.require_forging(caller)?;
        self.book.burn_batch(from, ids, amounts)?;
        tracing::debug!(account = %from, count = ids.len(), "forge burn batch");
        for (&id, &amount) in ids.iter().zip(amounts) {
            self.events.push(LedgerEvent::ForgeBurn {
                account: from.clone(),
                id,
                amount,
            });
        }
        Ok(())
    }
}
