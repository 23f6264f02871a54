//! Linear vesting ledger for the vault.
//!
//! Every unit of a token ever held by the vault is treated as locked from the
//! configured `start` and unlocking linearly over `duration`. The vested total
//! at a timestamp is computed against the all-time allocation (current balance
//! plus everything already released), so prior releases never shrink it, and
//! tokens deposited mid-schedule are immediately partially unlocked.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::errors::VestingVaultError;
use crate::events::{emit_beneficiary_changed, emit_token_released};
use crate::init::VaultInitializer;
use crate::owner::OwnerStorage;
use crate::payments::{transfer_out, vault_balance};

const BENEFICIARY_KEY: Symbol = symbol_short!("benef");
const RELEASED_KEY: Symbol = symbol_short!("released");

/// Storage for the beneficiary slot and the per-token released counters.
pub struct LedgerStorage;

impl LedgerStorage {
    fn released_key(token: &Address) -> (Symbol, Address) {
        (RELEASED_KEY, token.clone())
    }

    pub fn beneficiary(env: &Env) -> Option<Address> {
        env.storage().instance().get(&BENEFICIARY_KEY)
    }

    pub fn set_beneficiary(env: &Env, beneficiary: &Address) {
        env.storage().instance().set(&BENEFICIARY_KEY, beneficiary);
    }

    /// Cumulative amount of `token` released so far. Monotonically
    /// non-decreasing; never reset.
    pub fn released(env: &Env, token: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&Self::released_key(token))
            .unwrap_or(0)
    }

    pub fn set_released(env: &Env, token: &Address, amount: i128) {
        env.storage()
            .persistent()
            .set(&Self::released_key(token), &amount);
    }
}

/// Piecewise-linear vesting formula.
///
/// `total` is the all-time allocation for the token. Floor division biases
/// toward under-release, never over-release.
pub(crate) fn linear_vested(
    total: i128,
    start: u64,
    duration: u64,
    at: u64,
) -> Result<i128, VestingVaultError> {
    if at < start {
        return Ok(0);
    }
    let end = start
        .checked_add(duration)
        .ok_or(VestingVaultError::InvalidTimestamp)?;
    if at >= end {
        return Ok(total);
    }
    // Here start <= at < end, so duration > 0.
    let elapsed = at.saturating_sub(start);
    let vested = total
        .checked_mul(elapsed as i128)
        .ok_or(VestingVaultError::MathOverflow)?
        / duration as i128;
    Ok(vested)
}

pub struct VestingLedger;

impl VestingLedger {
    /// Total vested amount of `token` at `timestamp`, against the all-time
    /// allocation (current balance + released).
    pub fn vested_amount(
        env: &Env,
        token: &Address,
        timestamp: u64,
    ) -> Result<i128, VestingVaultError> {
        let config = VaultInitializer::require_config(env)?;
        let balance = vault_balance(env, token);
        let released = LedgerStorage::released(env, token);
        let total = balance
            .checked_add(released)
            .ok_or(VestingVaultError::MathOverflow)?;
        linear_vested(total, config.start, config.duration, timestamp)
    }

    /// How much of `token` can be released right now.
    pub fn releasable(env: &Env, token: &Address) -> Result<i128, VestingVaultError> {
        let now = env.ledger().timestamp();
        let vested = Self::vested_amount(env, token, now)?;
        let released = LedgerStorage::released(env, token);
        Ok((vested - released).max(0))
    }

    /// Release the currently releasable amount of `token` to the beneficiary.
    ///
    /// The released counter is bumped before the transfer, so a reentrant call
    /// from the token contract observes the post-release ledger. A zero amount
    /// still succeeds (zero transfer, event emitted).
    ///
    /// # Errors
    /// * `Unauthorized` if `caller` is neither owner nor beneficiary
    /// * `BeneficiaryNotSet` if no beneficiary has been assigned
    /// * `TransferFailed` if the token transfer is rejected
    pub fn release(env: &Env, caller: &Address, token: &Address) -> Result<i128, VestingVaultError> {
        caller.require_auth();
        VaultInitializer::require_config(env)?;

        let beneficiary = LedgerStorage::beneficiary(env);
        let authorized =
            OwnerStorage::is_owner(env, caller) || beneficiary.as_ref() == Some(caller);
        if !authorized {
            return Err(VestingVaultError::Unauthorized);
        }
        let beneficiary = beneficiary.ok_or(VestingVaultError::BeneficiaryNotSet)?;

        let amount = Self::releasable(env, token)?;

        let released = LedgerStorage::released(env, token)
            .checked_add(amount)
            .ok_or(VestingVaultError::MathOverflow)?;
        LedgerStorage::set_released(env, token, released);

        transfer_out(env, token, &beneficiary, amount)?;

        emit_token_released(env, token, amount);

        Ok(amount)
    }

    /// Assign or replace the beneficiary. Owner-only, takes effect
    /// immediately (no timelock, no two-step confirmation).
    ///
    /// # Errors
    /// * `NotOwner` if `caller` is not the owner
    /// * `InvalidAddress` if `new_beneficiary` is the vault itself
    pub fn set_beneficiary(
        env: &Env,
        caller: &Address,
        new_beneficiary: &Address,
    ) -> Result<(), VestingVaultError> {
        caller.require_auth();
        OwnerStorage::require_owner(env, caller)?;

        if new_beneficiary == &env.current_contract_address() {
            return Err(VestingVaultError::InvalidAddress);
        }

        let old = LedgerStorage::beneficiary(env);
        LedgerStorage::set_beneficiary(env, new_beneficiary);

        emit_beneficiary_changed(env, old, new_beneficiary);

        Ok(())
    }
}
