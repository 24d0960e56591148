//! The forging engine — recipes, trades, and direct burns.

use crucible_ledger::ForgeLedger;
use crucible_types::{AccountAddress, TokenId};

use crate::error::ForgeError;
use crate::event::ForgeEvent;
use crate::recipe::Recipe;

/// The forging engine, bound to a ledger by identity.
///
/// Construction takes the address this engine is registered under; the
/// ledger's owner must assign that address the forging role before any
/// operation here can pass the ledger's authorization gate. Every guard
/// runs before the first burn, so a failing operation never consumes
/// anything.
pub struct TokenForge {
    identity: AccountAddress,
    events: Vec<ForgeEvent>,
}

impl TokenForge {
    pub fn new(identity: AccountAddress) -> Self {
        Self {
            identity,
            events: Vec::new(),
        }
    }

    /// The address this engine acts under.
    pub fn identity(&self) -> &AccountAddress {
        &self.identity
    }

    /// Drain accumulated notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<ForgeEvent> {
        self.events.drain(..).collect()
    }

    /// Forge one unit of token 3 by burning one each of tokens 0 and 1.
    pub fn forge_token3(
        &mut self,
        ledger: &mut ForgeLedger,
        account: &AccountAddress,
    ) -> Result<(), ForgeError> {
        self.forge(ledger, account, Recipe::Forge3)
    }

    /// Forge one unit of token 4 by burning one each of tokens 1 and 2.
    pub fn forge_token4(
        &mut self,
        ledger: &mut ForgeLedger,
        account: &AccountAddress,
    ) -> Result<(), ForgeError> {
        self.forge(ledger, account, Recipe::Forge4)
    }

    /// Forge one unit of token 5 by burning one each of tokens 0 and 2.
    pub fn forge_token5(
        &mut self,
        ledger: &mut ForgeLedger,
        account: &AccountAddress,
    ) -> Result<(), ForgeError> {
        self.forge(ledger, account, Recipe::Forge5)
    }

    /// Forge one unit of token 6 by burning one each of tokens 0, 1 and 2.
    /// Subject to the token 6 supply cap.
    pub fn forge_token6(
        &mut self,
        ledger: &mut ForgeLedger,
        account: &AccountAddress,
    ) -> Result<(), ForgeError> {
        self.forge(ledger, account, Recipe::Forge6)
    }

    fn forge(
        &mut self,
        ledger: &mut ForgeLedger,
        account: &AccountAddress,
        recipe: Recipe,
    ) -> Result<(), ForgeError> {
        for &input in recipe.inputs() {
            if ledger.balance_of(account, input) < 1 {
                return Err(ForgeError::InsufficientInput(input));
            }
        }
        let output = recipe.output();
        // capacity must be confirmed before the first burn; there is no
        // rollback once inputs start being consumed
        ledger.can_mint(output, 1)?;

        for &input in recipe.inputs() {
            ledger.forge_burn(&self.identity, account, input, 1)?;
        }
        ledger.forge_mint(&self.identity, account, output, 1)?;

        tracing::debug!(account = %account, recipe = recipe.name(), "token forged");
        self.events.push(ForgeEvent::TokenForged {
            account: account.clone(),
            id: output,
            recipe: recipe.name(),
        });
        Ok(())
    }

    /// Exchange one unit of any held token for one unit of a base token.
    pub fn trade_for_base(
        &mut self,
        ledger: &mut ForgeLedger,
        account: &AccountAddress,
        token_to_trade: TokenId,
        base_id: TokenId,
    ) -> Result<(), ForgeError> {
        if !base_id.is_base() {
            return Err(ForgeError::InvalidBaseId(base_id));
        }
        if ledger.balance_of(account, token_to_trade) < 1 {
            return Err(ForgeError::InsufficientTradeInput(token_to_trade));
        }
        ledger.forge_burn(&self.identity, account, token_to_trade, 1)?;
        // base ids are uncapped, so the mint cannot fail after the guards
        ledger.forge_mint(&self.identity, account, base_id, 1)?;

        tracing::debug!(account = %account, from = %token_to_trade, to = %base_id, "token traded");
        self.events.push(ForgeEvent::TokenTraded {
            account: account.clone(),
            from: token_to_trade,
            to: base_id,
        });
        Ok(())
    }

    /// Burn derived tokens outright, with no replacement mint.
    pub fn burn_token(
        &mut self,
        ledger: &mut ForgeLedger,
        account: &AccountAddress,
        id: TokenId,
        amount: u128,
    ) -> Result<(), ForgeError> {
        if !id.is_derived() {
            return Err(ForgeError::InvalidBurnRange(id));
        }
        ledger.forge_burn(&self.identity, account, id, amount)?;

        tracing::debug!(account = %account, token = %id, amount, "token burned");
        self.events.push(ForgeEvent::TokenBurned {
            account: account.clone(),
            id,
            amount,
        });
        Ok(())
    }
}
