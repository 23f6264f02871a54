#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env};

mod errors;
mod events;
mod init;
mod owner;
mod payments;
mod sweep;
mod vesting;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod test_sweep;

use errors::VestingVaultError;
use init::{InitializationParams, VaultConfig, VaultInitializer};
use owner::OwnerStorage;
use sweep::{SweepCoordinator, Timelock, TimelockStorage};
use vesting::{LedgerStorage, VestingLedger};

pub use sweep::SWEEP_TIMELOCK_SECS;

#[contract]
pub struct VestingVaultContract;

#[contractimpl]
impl VestingVaultContract {
    // ============================================================================
    // Initialization
    // ============================================================================

    /// Initialize the vault with its immutable configuration (one-time setup).
    ///
    /// # Arguments
    /// * `env` - The contract environment
    /// * `params` - Owner, protected token, vesting start and duration
    ///
    /// # Security
    /// - Requires authorization from the owner address
    /// - Can only be called once
    pub fn initialize(env: Env, params: InitializationParams) -> Result<(), VestingVaultError> {
        params.owner.require_auth();
        VaultInitializer::initialize(&env, &params)
    }

    /// Check if the vault has been initialized.
    pub fn is_initialized(env: Env) -> bool {
        VaultInitializer::is_initialized(&env)
    }

    /// Get the immutable vault configuration.
    pub fn get_vault_config(env: Env) -> Option<VaultConfig> {
        VaultInitializer::get_config(&env)
    }

    /// Get the owner address.
    pub fn get_owner(env: Env) -> Option<Address> {
        OwnerStorage::get_owner(&env)
    }

    // ============================================================================
    // Vesting Ledger
    // ============================================================================

    /// Current beneficiary, if one has been assigned.
    pub fn beneficiary(env: Env) -> Option<Address> {
        LedgerStorage::beneficiary(&env)
    }

    /// Assign or replace the beneficiary (owner-only, immediate).
    ///
    /// # Errors
    /// * `NotOwner` if `caller` is not the owner
    /// * `InvalidAddress` if `new_beneficiary` is the vault's own address
    pub fn set_beneficiary(
        env: Env,
        caller: Address,
        new_beneficiary: Address,
    ) -> Result<(), VestingVaultError> {
        VestingLedger::set_beneficiary(&env, &caller, &new_beneficiary)
    }

    /// Cumulative amount of `token` released to the beneficiary so far.
    pub fn released(env: Env, token: Address) -> i128 {
        LedgerStorage::released(&env, &token)
    }

    /// Total vested amount of `token` at `timestamp`.
    ///
    /// Computed against the all-time allocation (current vault balance plus
    /// everything already released): zero before the vesting start, the full
    /// allocation at or after start + duration, linear in between.
    pub fn vested_amount(
        env: Env,
        token: Address,
        timestamp: u64,
    ) -> Result<i128, VestingVaultError> {
        VestingLedger::vested_amount(&env, &token, timestamp)
    }

    /// Amount of `token` releasable to the beneficiary right now.
    pub fn releasable(env: Env, token: Address) -> Result<i128, VestingVaultError> {
        VestingLedger::releasable(&env, &token)
    }

    /// Release the currently releasable amount of `token` to the beneficiary.
    ///
    /// Callable by the owner or the beneficiary. Returns the released amount;
    /// zero is a permitted no-op.
    ///
    /// # Errors
    /// * `Unauthorized` if `caller` is neither owner nor beneficiary
    /// * `BeneficiaryNotSet` if no beneficiary has been assigned
    pub fn release(env: Env, caller: Address, token: Address) -> Result<i128, VestingVaultError> {
        VestingLedger::release(&env, &caller, &token)
    }

    // ============================================================================
    // Timelock Sweep Coordinator
    // ============================================================================

    /// Commit or execute a timelocked sweep of the protected token
    /// (owner-only).
    ///
    /// First call commits: records `receiver` and a deadline 14 days out.
    /// Calling again at or after the deadline with the same `receiver`
    /// transfers the full protected balance and clears the commitment.
    ///
    /// # Errors
    /// * `NotOwner` if `caller` is not the owner
    /// * `BalanceZero` if the vault holds none of the protected token
    /// * `TimelockNotExpired` if the pending timelock is not yet due
    /// * `ReceiverMismatch` if `receiver` differs from the committed one
    pub fn sweep_timelock(
        env: Env,
        caller: Address,
        receiver: Address,
    ) -> Result<(), VestingVaultError> {
        SweepCoordinator::sweep_timelock(&env, &caller, &receiver)
    }

    /// Abandon any pending timelocked sweep (owner-only, no transfer).
    pub fn reset_timelock(env: Env, caller: Address) -> Result<(), VestingVaultError> {
        SweepCoordinator::reset_timelock(&env, &caller)
    }

    /// Immediately sweep the vault's entire balance of a non-protected token
    /// to `receiver` (owner-only).
    ///
    /// # Errors
    /// * `NotOwner` if `caller` is not the owner
    /// * `ProtectedTokenSweep` if `token` is the protected token
    /// * `InvalidAddress` if `receiver` is the vault's own address
    pub fn sweep(
        env: Env,
        caller: Address,
        token: Address,
        receiver: Address,
    ) -> Result<(), VestingVaultError> {
        SweepCoordinator::sweep(&env, &caller, &token, &receiver)
    }

    /// Get the pending timelocked sweep, if any.
    pub fn get_timelock(env: Env) -> Option<Timelock> {
        TimelockStorage::get(&env)
    }
}
