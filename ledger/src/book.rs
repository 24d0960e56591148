//! Balance and supply bookkeeping.

use std::collections::HashMap;

use crucible_types::{AccountAddress, TokenId, TOKEN_COUNT};

use crate::error::LedgerError;

/// Per-account holdings, indexed by token id.
type Holdings = [u128; TOKEN_COUNT];

/// The balance and supply book — sole owner of all token amounts.
///
/// Invariant: for every id, the sum of all holdings equals `supply[id]`.
/// Both sides are only ever adjusted together, inside the same primitive.
/// Batch forms validate against scratch copies and commit the scratch
/// wholesale, so a failing element leaves the book untouched.
#[derive(Clone, Debug)]
pub struct TokenBook {
    holdings: HashMap<AccountAddress, Holdings>,
    supply: Holdings,
    capped_supply_limit: u128,
}

impl TokenBook {
    pub fn new(capped_supply_limit: u128) -> Self {
        Self {
            holdings: HashMap::new(),
            supply: [0; TOKEN_COUNT],
            capped_supply_limit,
        }
    }

    pub fn balance_of(&self, account: &AccountAddress, id: TokenId) -> u128 {
        self.holdings.get(account).map_or(0, |row| row[id.index()])
    }

    pub fn total_supply(&self, id: TokenId) -> u128 {
        self.supply[id.index()]
    }

    /// Validate a prospective mint without applying it: the same supply
    /// cap and overflow checks `mint` enforces.
    pub fn can_mint(&self, id: TokenId, amount: u128) -> Result<u128, LedgerError> {
        let new_supply = self.supply[id.index()]
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        if id.is_capped() && new_supply > self.capped_supply_limit {
            return Err(LedgerError::SupplyCapExceeded {
                id,
                cap: self.capped_supply_limit,
            });
        }
        Ok(new_supply)
    }

    /// Mint `amount` of `id` to `account`. Zero amounts succeed as no-ops.
    ///
    /// Fails with `SupplyCapExceeded` when minting a capped id past its
    /// limit — checked before anything is written.
    pub fn mint(
        &mut self,
        account: &AccountAddress,
        id: TokenId,
        amount: u128,
    ) -> Result<(), LedgerError> {
        let new_supply = self.can_mint(id, amount)?;
        let new_balance = self
            .balance_of(account, id)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        self.supply[id.index()] = new_supply;
        self.holdings.entry(account.clone()).or_default()[id.index()] = new_balance;
        Ok(())
    }

    /// Burn `amount` of `id` from `account`. Zero amounts succeed as no-ops.
    pub fn burn(
        &mut self,
        account: &AccountAddress,
        id: TokenId,
        amount: u128,
    ) -> Result<(), LedgerError> {
        let available = self.balance_of(account, id);
        let remaining = available
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance {
                id,
                needed: amount,
                available,
            })?;
        // supply >= any single balance by the conservation invariant
        self.supply[id.index()] -= amount;
        self.holdings.entry(account.clone()).or_default()[id.index()] = remaining;
        Ok(())
    }

    /// Apply a sequence of mints atomically.
    ///
    /// The supply cap is enforced against the running total within the
    /// batch, so a batch can fail even when each element alone would fit
    /// under the pre-batch supply.
    pub fn mint_batch(
        &mut self,
        account: &AccountAddress,
        ids: &[TokenId],
        amounts: &[u128],
    ) -> Result<(), LedgerError> {
        if ids.len() != amounts.len() {
            return Err(LedgerError::ArrayLengthMismatch {
                ids: ids.len(),
                amounts: amounts.len(),
            });
        }
        let mut supply = self.supply;
        let mut row = self.holdings.get(account).copied().unwrap_or_default();
        for (&id, &amount) in ids.iter().zip(amounts) {
            let new_supply = supply[id.index()]
                .checked_add(amount)
                .ok_or(LedgerError::Overflow)?;
            if id.is_capped() && new_supply > self.capped_supply_limit {
                return Err(LedgerError::SupplyCapExceeded {
                    id,
                    cap: self.capped_supply_limit,
                });
            }
            supply[id.index()] = new_supply;
            row[id.index()] = row[id.index()]
                .checked_add(amount)
                .ok_or(LedgerError::Overflow)?;
        }
        self.supply = supply;
        self.holdings.insert(account.clone(), row);
        Ok(())
    }

    /// Apply a sequence of burns atomically.
    ///
    /// Sufficiency is checked cumulatively: burning the same id twice in
    /// one batch must be covered by the account's single starting balance.
    pub fn burn_batch(
        &mut self,
        account: &AccountAddress,
        ids: &[TokenId],
        amounts: &[u128],
    ) -> Result<(), LedgerError> {
        if ids.len() != amounts.len() {
            return Err(LedgerError::ArrayLengthMismatch {
                ids: ids.len(),
                amounts: amounts.len(),
            });
        }
        let mut supply = self.supply;
        let mut row = self.holdings.get(account).copied().unwrap_or_default();
        for (&id, &amount) in ids.iter().zip(amounts) {
            let available = row[id.index()];
            row[id.index()] =
                available
                    .checked_sub(amount)
                    .ok_or(LedgerError::InsufficientBalance {
                        id,
                        needed: amount,
                        available,
                    })?;
            supply[id.index()] = supply[id.index()]
                .checked_sub(amount)
                .ok_or(LedgerError::Overflow)?;
        }
        self.supply = supply;
        self.holdings.insert(account.clone(), row);
        Ok(())
    }
}
