//! Contract initialization module for the vesting vault.
//!
//! Provides a one-time initialization flow that fixes the owner, the protected
//! token, and the vesting schedule for the lifetime of the instance.
//!
//! # Security Model
//!
//! - **One-time initialization**: the vault can only be initialized once
//! - **Owner authorization**: initialization requires auth from the owner address
//! - **Immutable configuration**: `VaultConfig` is never written again after
//!   initialization; there is no update path
//!
//! # Post-Initialization
//!
//! The owner may assign the beneficiary via `set_beneficiary` and operate the
//! sweep paths; everything else is read-only or beneficiary-driven.

use crate::errors::VestingVaultError;
use crate::events::emit_vault_initialized;
use crate::owner::OwnerStorage;
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

/// Storage key for the initialization flag
const INITIALIZED_KEY: Symbol = symbol_short!("vlt_init");

/// Storage key for the vault configuration
const CONFIG_KEY: Symbol = symbol_short!("vlt_cfg");

/// Immutable vault configuration, written exactly once at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultConfig {
    /// Token that can only leave the vault via the timelocked sweep path
    pub protected_token: Address,
    /// Unix timestamp when vesting starts
    pub start: u64,
    /// Vesting duration in seconds (always > 0)
    pub duration: u64,
}

/// Initialization parameters for the vault
///
/// Bundles all deployment-time constants in a single struct so the setup call
/// is atomic.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializationParams {
    /// Owner address, fixed for the lifetime of the instance
    pub owner: Address,
    /// Protected token identity
    pub protected_token: Address,
    /// Vesting start timestamp
    pub start: u64,
    /// Vesting duration in seconds
    pub duration: u64,
}

/// Vault initialization management
pub struct VaultInitializer;

impl VaultInitializer {
    /// Initialize the vault with all required configuration.
    ///
    /// # Arguments
    /// * `env` - The contract environment
    /// * `params` - Initialization parameters
    ///
    /// # Returns
    /// * `Ok(())` if initialization succeeds
    /// * `Err(VestingVaultError::AlreadyInitialized)` if called twice
    /// * `Err(VestingVaultError::InvalidDuration)` if `duration` is zero
    /// * `Err(VestingVaultError::InvalidTimestamp)` if `start + duration` overflows
    ///
    /// # Security
    /// - Auth from `params.owner` is required by the entrypoint
    /// - A zero duration is rejected here so the vesting formula can never
    ///   divide by zero
    pub fn initialize(env: &Env, params: &InitializationParams) -> Result<(), VestingVaultError> {
        if Self::is_initialized(env) {
            return Err(VestingVaultError::AlreadyInitialized);
        }

        if params.duration == 0 {
            return Err(VestingVaultError::InvalidDuration);
        }
        params
            .start
            .checked_add(params.duration)
            .ok_or(VestingVaultError::InvalidTimestamp)?;

        let config = VaultConfig {
            protected_token: params.protected_token.clone(),
            start: params.start,
            duration: params.duration,
        };

        OwnerStorage::set(env, &params.owner);
        env.storage().instance().set(&CONFIG_KEY, &config);
        env.storage().instance().set(&INITIALIZED_KEY, &true);

        emit_vault_initialized(env, &params.owner, &config);

        Ok(())
    }

    /// Check if the vault has been initialized.
    pub fn is_initialized(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&INITIALIZED_KEY)
            .unwrap_or(false)
    }

    /// Get the vault configuration, if initialized.
    pub fn get_config(env: &Env) -> Option<VaultConfig> {
        env.storage().instance().get(&CONFIG_KEY)
    }

    /// Get the vault configuration or fail with `NotInitialized`.
    pub fn require_config(env: &Env) -> Result<VaultConfig, VestingVaultError> {
        Self::get_config(env).ok_or(VestingVaultError::NotInitialized)
    }
}
