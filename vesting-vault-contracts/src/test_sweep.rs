#![cfg(test)]
//! Tests for the sweep paths: timelock commit/execute/reset for the protected
//! token and immediate sweep for everything else.

use crate::errors::VestingVaultError;
use crate::init::InitializationParams;
use crate::{VestingVaultContract, VestingVaultContractClient, SWEEP_TIMELOCK_SECS};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{token, Address, Env};

const PROTECTED_BALANCE: i128 = 5_000;

struct Setup {
    env: Env,
    client: VestingVaultContractClient<'static>,
    owner: Address,
    receiver: Address,
    protected_id: Address,
    protected_client: token::Client<'static>,
    protected_sac: token::StellarAssetClient<'static>,
}

fn setup(fund_protected: bool) -> Setup {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1_000);

    let contract_id = env.register(VestingVaultContract, ());
    let client = VestingVaultContractClient::new(&env, &contract_id);
    let owner = Address::generate(&env);
    let receiver = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let protected_id = env
        .register_stellar_asset_contract_v2(token_admin.clone())
        .address();
    let protected_sac = token::StellarAssetClient::new(&env, &protected_id);
    let protected_client = token::Client::new(&env, &protected_id);
    if fund_protected {
        protected_sac.mint(&contract_id, &PROTECTED_BALANCE);
    }

    client.initialize(&InitializationParams {
        owner: owner.clone(),
        protected_token: protected_id.clone(),
        start: 1_000,
        duration: 900,
    });

    Setup {
        env,
        client,
        owner,
        receiver,
        protected_id,
        protected_client,
        protected_sac,
    }
}

fn register_token(s: &Setup) -> (Address, token::Client<'static>, token::StellarAssetClient<'static>) {
    let token_admin = Address::generate(&s.env);
    let token_id = s
        .env
        .register_stellar_asset_contract_v2(token_admin.clone())
        .address();
    let sac = token::StellarAssetClient::new(&s.env, &token_id);
    let client = token::Client::new(&s.env, &token_id);
    (token_id, client, sac)
}

#[test]
fn test_commit_sets_deadline_without_transfer() {
    let s = setup(true);

    s.client.sweep_timelock(&s.owner, &s.receiver);

    let timelock = s.client.get_timelock().unwrap();
    assert_eq!(timelock.receiver, s.receiver);
    assert_eq!(timelock.unlock_time, 1_000 + SWEEP_TIMELOCK_SECS);
    assert_eq!(s.protected_client.balance(&s.client.address), PROTECTED_BALANCE);
    assert_eq!(s.protected_client.balance(&s.receiver), 0);
}

#[test]
fn test_execute_before_deadline_fails() {
    let s = setup(true);

    s.client.sweep_timelock(&s.owner, &s.receiver);

    s.env
        .ledger()
        .set_timestamp(1_000 + SWEEP_TIMELOCK_SECS - 1);
    let result = s.client.try_sweep_timelock(&s.owner, &s.receiver);
    assert_eq!(result, Err(Ok(VestingVaultError::TimelockNotExpired)));

    // Pending commitment is untouched.
    let timelock = s.client.get_timelock().unwrap();
    assert_eq!(timelock.unlock_time, 1_000 + SWEEP_TIMELOCK_SECS);
    assert_eq!(s.protected_client.balance(&s.receiver), 0);
}

#[test]
fn test_execute_at_deadline_transfers_everything() {
    let s = setup(true);

    s.client.sweep_timelock(&s.owner, &s.receiver);
    s.env.ledger().set_timestamp(1_000 + SWEEP_TIMELOCK_SECS);
    s.client.sweep_timelock(&s.owner, &s.receiver);

    assert_eq!(s.client.get_timelock(), None);
    assert_eq!(s.protected_client.balance(&s.receiver), PROTECTED_BALANCE);
    assert_eq!(s.protected_client.balance(&s.client.address), 0);
}

#[test]
fn test_execute_with_wrong_receiver_fails() {
    let s = setup(true);
    let other = Address::generate(&s.env);

    s.client.sweep_timelock(&s.owner, &s.receiver);
    s.env.ledger().set_timestamp(1_000 + SWEEP_TIMELOCK_SECS);

    let result = s.client.try_sweep_timelock(&s.owner, &other);
    assert_eq!(result, Err(Ok(VestingVaultError::ReceiverMismatch)));

    // The commitment stays pending and can still be executed correctly.
    assert!(s.client.get_timelock().is_some());
    s.client.sweep_timelock(&s.owner, &s.receiver);
    assert_eq!(s.protected_client.balance(&s.receiver), PROTECTED_BALANCE);
}

#[test]
fn test_pending_receiver_is_not_updated_by_recommit() {
    let s = setup(true);
    let other = Address::generate(&s.env);

    s.client.sweep_timelock(&s.owner, &s.receiver);

    // A second call before the deadline fails and does not redirect the sweep.
    let result = s.client.try_sweep_timelock(&s.owner, &other);
    assert_eq!(result, Err(Ok(VestingVaultError::TimelockNotExpired)));
    assert_eq!(s.client.get_timelock().unwrap().receiver, s.receiver);
}

#[test]
fn test_commit_with_zero_balance_fails() {
    let s = setup(false);

    let result = s.client.try_sweep_timelock(&s.owner, &s.receiver);
    assert_eq!(result, Err(Ok(VestingVaultError::BalanceZero)));
    assert_eq!(s.client.get_timelock(), None);
}

#[test]
fn test_reset_clears_pending_timelock() {
    let s = setup(true);

    s.client.sweep_timelock(&s.owner, &s.receiver);
    assert!(s.client.get_timelock().is_some());

    s.client.reset_timelock(&s.owner);
    assert_eq!(s.client.get_timelock(), None);
    assert_eq!(s.protected_client.balance(&s.client.address), PROTECTED_BALANCE);
}

#[test]
fn test_reset_works_even_after_deadline() {
    let s = setup(true);

    s.client.sweep_timelock(&s.owner, &s.receiver);
    s.env
        .ledger()
        .set_timestamp(1_000 + SWEEP_TIMELOCK_SECS + 123);

    s.client.reset_timelock(&s.owner);
    assert_eq!(s.client.get_timelock(), None);
    assert_eq!(s.protected_client.balance(&s.receiver), 0);
}

#[test]
fn test_recommit_after_reset_restarts_full_delay() {
    let s = setup(true);

    s.client.sweep_timelock(&s.owner, &s.receiver);
    s.env.ledger().set_timestamp(1_000 + SWEEP_TIMELOCK_SECS - 10);
    s.client.reset_timelock(&s.owner);

    s.client.sweep_timelock(&s.owner, &s.receiver);
    let timelock = s.client.get_timelock().unwrap();
    assert_eq!(
        timelock.unlock_time,
        1_000 + SWEEP_TIMELOCK_SECS - 10 + SWEEP_TIMELOCK_SECS
    );
}

#[test]
fn test_timelock_is_reusable_after_execute() {
    let s = setup(true);

    s.client.sweep_timelock(&s.owner, &s.receiver);
    s.env.ledger().set_timestamp(1_000 + SWEEP_TIMELOCK_SECS);
    s.client.sweep_timelock(&s.owner, &s.receiver);

    // New deposit, new cycle.
    s.protected_sac.mint(&s.client.address, &777);
    let second_receiver = Address::generate(&s.env);
    s.client.sweep_timelock(&s.owner, &second_receiver);

    let timelock = s.client.get_timelock().unwrap();
    assert_eq!(timelock.receiver, second_receiver);
    assert_eq!(
        timelock.unlock_time,
        1_000 + 2 * SWEEP_TIMELOCK_SECS
    );
}

#[test]
fn test_only_owner_operates_timelock() {
    let s = setup(true);
    let intruder = Address::generate(&s.env);

    let result = s.client.try_sweep_timelock(&intruder, &s.receiver);
    assert_eq!(result, Err(Ok(VestingVaultError::NotOwner)));

    let result = s.client.try_reset_timelock(&intruder);
    assert_eq!(result, Err(Ok(VestingVaultError::NotOwner)));
}

#[test]
fn test_sweep_moves_full_balance_immediately() {
    let s = setup(true);
    let (token_id, token_client, sac) = register_token(&s);
    sac.mint(&s.client.address, &777);

    s.client.sweep(&s.owner, &token_id, &s.receiver);

    assert_eq!(token_client.balance(&s.receiver), 777);
    assert_eq!(token_client.balance(&s.client.address), 0);
}

#[test]
fn test_sweep_with_zero_balance_succeeds() {
    let s = setup(true);
    let (token_id, token_client, _sac) = register_token(&s);

    s.client.sweep(&s.owner, &token_id, &s.receiver);
    assert_eq!(token_client.balance(&s.receiver), 0);
}

#[test]
fn test_sweep_of_protected_token_fails() {
    let s = setup(true);

    let result = s.client.try_sweep(&s.owner, &s.protected_id, &s.receiver);
    assert_eq!(result, Err(Ok(VestingVaultError::ProtectedTokenSweep)));
    assert_eq!(s.protected_client.balance(&s.client.address), PROTECTED_BALANCE);
}

#[test]
fn test_sweep_to_vault_itself_fails() {
    let s = setup(true);
    let (token_id, _token_client, sac) = register_token(&s);
    sac.mint(&s.client.address, &100);
    let vault = s.client.address.clone();

    let result = s.client.try_sweep(&s.owner, &token_id, &vault);
    assert_eq!(result, Err(Ok(VestingVaultError::InvalidAddress)));
}

#[test]
fn test_only_owner_sweeps() {
    let s = setup(true);
    let intruder = Address::generate(&s.env);
    let (token_id, _token_client, sac) = register_token(&s);
    sac.mint(&s.client.address, &100);

    let result = s.client.try_sweep(&intruder, &token_id, &s.receiver);
    assert_eq!(result, Err(Ok(VestingVaultError::NotOwner)));
}
