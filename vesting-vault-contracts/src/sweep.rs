//! Owner sweep paths: timelocked for the protected token, immediate for
//! everything else.
//!
//! The protected token can only leave via a two-phase commit/delay/execute
//! flow with a single pending slot. The owner may abandon a pending commitment
//! at any time with `reset_timelock` (a documented owner capability: sweeps
//! can be stalled or restarted at will, but the delay can never be shortened
//! below 14 days from a fresh commit).

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::errors::VestingVaultError;
use crate::events::{emit_timelock_cleared, emit_timelock_set, emit_token_swept};
use crate::init::VaultInitializer;
use crate::owner::OwnerStorage;
use crate::payments::{transfer_out, vault_balance};

/// Delay between committing a protected-token sweep and executing it.
pub const SWEEP_TIMELOCK_SECS: u64 = 14 * 24 * 60 * 60;

const TIMELOCK_KEY: Symbol = symbol_short!("timelock");

/// Pending commitment to sweep the protected token (single slot; receiver and
/// deadline are always set and cleared together).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Timelock {
    pub receiver: Address,
    pub unlock_time: u64,
}

pub struct TimelockStorage;

impl TimelockStorage {
    pub fn get(env: &Env) -> Option<Timelock> {
        env.storage().instance().get(&TIMELOCK_KEY)
    }

    pub fn set(env: &Env, timelock: &Timelock) {
        env.storage().instance().set(&TIMELOCK_KEY, timelock);
    }

    pub fn clear(env: &Env) {
        env.storage().instance().remove(&TIMELOCK_KEY);
    }
}

pub struct SweepCoordinator;

impl SweepCoordinator {
    /// Commit or execute a timelocked sweep of the protected token.
    ///
    /// With no pending timelock, commits one: records `receiver` and a
    /// deadline 14 days out, transfers nothing. With a pending timelock past
    /// its deadline, executes it: requires `receiver` to match the committed
    /// one, clears the slot, then transfers the full protected balance.
    /// Re-invoking with a different receiver while a timelock is pending never
    /// updates the stored receiver; the delay has to be restarted via
    /// `reset_timelock` to redirect a sweep.
    ///
    /// # Errors
    /// * `NotOwner` if `caller` is not the owner
    /// * `BalanceZero` if the vault holds none of the protected token
    /// * `TimelockNotExpired` if a pending timelock is not yet due
    /// * `ReceiverMismatch` if `receiver` differs from the committed one
    pub fn sweep_timelock(
        env: &Env,
        caller: &Address,
        receiver: &Address,
    ) -> Result<(), VestingVaultError> {
        caller.require_auth();
        OwnerStorage::require_owner(env, caller)?;

        let config = VaultInitializer::require_config(env)?;
        let balance = vault_balance(env, &config.protected_token);
        if balance == 0 {
            return Err(VestingVaultError::BalanceZero);
        }

        let now = env.ledger().timestamp();
        match TimelockStorage::get(env) {
            None => {
                let unlock_time = now
                    .checked_add(SWEEP_TIMELOCK_SECS)
                    .ok_or(VestingVaultError::InvalidTimestamp)?;
                let timelock = Timelock {
                    receiver: receiver.clone(),
                    unlock_time,
                };
                TimelockStorage::set(env, &timelock);
                emit_timelock_set(env, receiver, unlock_time);
                Ok(())
            }
            Some(pending) => {
                if now < pending.unlock_time {
                    return Err(VestingVaultError::TimelockNotExpired);
                }
                if &pending.receiver != receiver {
                    return Err(VestingVaultError::ReceiverMismatch);
                }

                // Clear the slot before the transfer so a reentrant call
                // cannot execute the same commitment twice.
                TimelockStorage::clear(env);
                transfer_out(env, &config.protected_token, receiver, balance)?;

                emit_timelock_cleared(env);
                emit_token_swept(env, &config.protected_token, receiver, balance);
                Ok(())
            }
        }
    }

    /// Abandon any pending timelock. No transfer, no conditions on elapsed
    /// time.
    ///
    /// # Errors
    /// * `NotOwner` if `caller` is not the owner
    pub fn reset_timelock(env: &Env, caller: &Address) -> Result<(), VestingVaultError> {
        caller.require_auth();
        OwnerStorage::require_owner(env, caller)?;
        VaultInitializer::require_config(env)?;

        TimelockStorage::clear(env);
        emit_timelock_cleared(env);

        Ok(())
    }

    /// Immediately sweep the vault's entire balance of `token` to `receiver`.
    /// The protected token is barred from this path and must go through
    /// `sweep_timelock`. A zero balance is still transferred (no-op).
    ///
    /// # Errors
    /// * `NotOwner` if `caller` is not the owner
    /// * `ProtectedTokenSweep` if `token` is the protected token
    /// * `InvalidAddress` if `receiver` is the vault itself
    pub fn sweep(
        env: &Env,
        caller: &Address,
        token: &Address,
        receiver: &Address,
    ) -> Result<(), VestingVaultError> {
        caller.require_auth();
        OwnerStorage::require_owner(env, caller)?;

        let config = VaultInitializer::require_config(env)?;
        if token == &config.protected_token {
            return Err(VestingVaultError::ProtectedTokenSweep);
        }
        if receiver == &env.current_contract_address() {
            return Err(VestingVaultError::InvalidAddress);
        }

        let balance = vault_balance(env, token);
        transfer_out(env, token, receiver, balance)?;

        emit_token_swept(env, token, receiver, balance);

        Ok(())
    }
}
