//! Owner role management for the vesting vault.
//!
//! A single owner address is fixed at initialization and never changes for the
//! lifetime of the deployed instance. All privileged operations (beneficiary
//! assignment, sweeps, timelock control) check this guard first.
//!
//! # Storage Design
//!
//! Uses instance storage for the owner address (single source of truth).

use crate::errors::VestingVaultError;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

/// Storage key for the owner address
pub const OWNER_KEY: Symbol = symbol_short!("owner");

/// Owner storage and guard operations
pub struct OwnerStorage;

impl OwnerStorage {
    /// Store the owner address. Called once from initialization; the
    /// one-time check lives in `VaultInitializer::initialize`.
    pub fn set(env: &Env, owner: &Address) {
        env.storage().instance().set(&OWNER_KEY, owner);
    }

    /// Get the current owner address, if the vault has been initialized.
    pub fn get_owner(env: &Env) -> Option<Address> {
        env.storage().instance().get(&OWNER_KEY)
    }

    /// Check whether `address` is the vault owner.
    pub fn is_owner(env: &Env, address: &Address) -> bool {
        match Self::get_owner(env) {
            Some(owner) => &owner == address,
            None => false,
        }
    }

    /// Fail with `NotOwner` unless `caller` is the stored owner.
    ///
    /// # Errors
    /// * `NotInitialized` if no owner has been stored yet
    /// * `NotOwner` if `caller` is not the owner
    pub fn require_owner(env: &Env, caller: &Address) -> Result<(), VestingVaultError> {
        let owner = Self::get_owner(env).ok_or(VestingVaultError::NotInitialized)?;
        if &owner != caller {
            return Err(VestingVaultError::NotOwner);
        }
        Ok(())
    }
}
