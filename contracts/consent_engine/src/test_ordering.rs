#![cfg(test)]
#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

use crate::{ConsentEngine, ConsentEngineClient, ConsentError, ErrorCategory, SECONDS_PER_DAY};
use soroban_sdk::{testutils::Address as _, Address, Env, String};

fn setup_test() -> (Env, ConsentEngineClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(ConsentEngine, ());
    let client = ConsentEngineClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    (env, client)
}

#[test]
fn test_sequence_counts_every_commit() {
    let (env, client) = setup_test();

    let patient = String::from_str(&env, "patient-42");
    let requester = Address::generate(&env);

    assert_eq!(client.get_consent_sequence(&patient, &requester), 0);
    client.grant_access(&requester, &patient, &requester, &1);
    assert_eq!(client.get_consent_sequence(&patient, &requester), 1);
    client.revoke_access(&requester, &patient, &requester);
    client.revoke_access(&requester, &patient, &requester);
    assert_eq!(client.get_consent_sequence(&patient, &requester), 3);
}

#[test]
fn test_conditional_grant_on_fresh_key() {
    let (env, client) = setup_test();

    let patient = String::from_str(&env, "patient-42");
    let requester = Address::generate(&env);

    let expires_at = client.grant_access_at(&requester, &patient, &requester, &3, &0);
    assert_eq!(expires_at, 3 * SECONDS_PER_DAY);
    assert_eq!(client.get_consent_sequence(&patient, &requester), 1);
}

#[test]
fn test_stale_grant_loses_to_committed_revoke() {
    let (env, client) = setup_test();

    let patient = String::from_str(&env, "patient-42");
    let requester = Address::generate(&env);
    let patient_agent = Address::generate(&env);
    let provider_agent = Address::generate(&env);

    client.grant_access(&patient_agent, &patient, &requester, &30);
    let observed = client.get_consent_sequence(&patient, &requester);

    // Both agents observed sequence 1; the revoke lands first.
    client.revoke_access_at(&patient_agent, &patient, &requester, &observed);
    let res = client.try_grant_access_at(&provider_agent, &patient, &requester, &60, &observed);

    let err = res.unwrap_err().unwrap();
    assert_eq!(err, ConsentError::OrderingConflict);
    assert_eq!(err.category(), ErrorCategory::OrderingConflict);
    assert!(err.retryable());

    assert!(!client.has_valid_consent(&patient, &requester));
    assert_eq!(client.get_consent_sequence(&patient, &requester), 2);
}

#[test]
fn test_resubmit_after_conflict_succeeds() {
    let (env, client) = setup_test();

    let patient = String::from_str(&env, "patient-42");
    let requester = Address::generate(&env);

    client.grant_access(&requester, &patient, &requester, &30);
    let res = client.try_revoke_access_at(&requester, &patient, &requester, &0);
    assert_eq!(res.unwrap_err().unwrap(), ConsentError::OrderingConflict);

    let current = client.get_consent_sequence(&patient, &requester);
    client.revoke_access_at(&requester, &patient, &requester, &current);
    assert!(!client.has_valid_consent(&patient, &requester));
}

#[test]
fn test_conflict_leaves_record_untouched() {
    let (env, client) = setup_test();

    let patient = String::from_str(&env, "patient-42");
    let requester = Address::generate(&env);

    client.grant_access(&requester, &patient, &requester, &30);
    let before = client.get_consent(&patient, &requester).unwrap();

    let res = client.try_grant_access_at(&requester, &patient, &requester, &1, &7);
    assert_eq!(res.unwrap_err().unwrap(), ConsentError::OrderingConflict);

    assert_eq!(client.get_consent(&patient, &requester).unwrap(), before);
}
