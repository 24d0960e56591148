//! Two-tier authorization: fixed owner, reassignable forging role.

use crucible_types::AccountAddress;

use crate::error::LedgerError;

/// Authorization state for privileged ledger operations.
///
/// The owner is fixed at construction and may only reassign the forging
/// role. Privileged mint/burn is restricted to the single current role
/// holder; `None` means no caller passes the check. Ownership grants no
/// implicit forging rights.
#[derive(Clone, Debug)]
pub struct AccessGate {
    owner: AccountAddress,
    forging: Option<AccountAddress>,
}

impl AccessGate {
    pub fn new(owner: AccountAddress) -> Self {
        Self {
            owner,
            forging: None,
        }
    }

    pub fn owner(&self) -> &AccountAddress {
        &self.owner
    }

    pub fn forging_contract(&self) -> Option<&AccountAddress> {
        self.forging.as_ref()
    }

    /// Fail unless `caller` is the owner.
    pub fn require_owner(&self, caller: &AccountAddress) -> Result<(), LedgerError> {
        if *caller == self.owner {
            Ok(())
        } else {
            Err(LedgerError::NotOwner)
        }
    }

    /// Fail unless `caller` holds the forging role right now.
    pub fn require_forging(&self, caller: &AccountAddress) -> Result<(), LedgerError> {
        match &self.forging {
            Some(role) if role == caller => Ok(()),
            _ => Err(LedgerError::NotForgingContract),
        }
    }

    /// Reassign the forging role. The previous holder loses access with
    /// this call; reassigning the same value is valid.
    pub fn set_forging(&mut self, new_contract: Option<AccountAddress>) {
        self.forging = new_contract;
    }
}
