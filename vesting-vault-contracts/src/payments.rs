//! Token balance and transfer helpers.
//!
//! All value movement goes through the standard token interface. Transfer
//! failure is mapped to `TransferFailed` and aborts the whole invocation; the
//! host rolls back any state already written, so callers never observe a
//! partial operation.

use crate::errors::VestingVaultError;
use soroban_sdk::{token, Address, Env};

/// Current balance of `token` held by the vault itself.
pub fn vault_balance(env: &Env, token: &Address) -> i128 {
    let client = token::Client::new(env, token);
    client.balance(&env.current_contract_address())
}

/// Transfer `amount` of `token` out of the vault to `to`.
///
/// A zero `amount` is a permitted no-op transfer.
///
/// # Errors
/// * `TransferFailed` if the token contract rejects the transfer
pub fn transfer_out(
    env: &Env,
    token: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), VestingVaultError> {
    let client = token::Client::new(env, token);
    let vault = env.current_contract_address();
    match client.try_transfer(&vault, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(VestingVaultError::TransferFailed),
    }
}
