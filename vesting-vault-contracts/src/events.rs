//! Event emission helpers for audit and indexing.

use crate::init::VaultConfig;
use soroban_sdk::{symbol_short, Address, Env};

/// Vault initialized: (owner, protected_token, start, duration).
pub fn emit_vault_initialized(env: &Env, owner: &Address, config: &VaultConfig) {
    env.events().publish(
        (symbol_short!("vlt_init"),),
        (
            owner.clone(),
            config.protected_token.clone(),
            config.start,
            config.duration,
        ),
    );
}

/// Beneficiary changed: (old, new). `old` is None on first assignment.
pub fn emit_beneficiary_changed(env: &Env, old: Option<Address>, new: &Address) {
    env.events()
        .publish((symbol_short!("benef"),), (old, new.clone()));
}

/// Vested tokens released: (token, amount).
pub fn emit_token_released(env: &Env, token: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("released"),), (token.clone(), amount));
}

/// Timelock committed: (receiver, deadline). Both lifecycle edges publish the
/// same payload shape under `tl_set` so indexers decode one tuple.
pub fn emit_timelock_set(env: &Env, receiver: &Address, deadline: u64) {
    env.events().publish(
        (symbol_short!("tl_set"),),
        (Some(receiver.clone()), deadline),
    );
}

/// Timelock slot cleared (execute or reset): no receiver, deadline zero.
pub fn emit_timelock_cleared(env: &Env) {
    env.events()
        .publish((symbol_short!("tl_set"),), (None::<Address>, 0u64));
}

/// Tokens swept out of the vault: (token, receiver, amount).
pub fn emit_token_swept(env: &Env, token: &Address, receiver: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("swept"),),
        (token.clone(), receiver.clone(), amount),
    );
}
