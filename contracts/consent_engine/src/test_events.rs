#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::arithmetic_side_effects
)]

use super::*;
use crate::events::{ConsentGrantedEvent, ConsentRevokedEvent};
use soroban_sdk::testutils::{Address as _, Events, Ledger};
use soroban_sdk::{symbol_short, vec, Env, IntoVal, Val};

const DAY: u64 = SECONDS_PER_DAY;

type EventList = Vec<(Address, Vec<Val>, Val)>;

fn setup_test() -> (Env, ConsentEngineClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(ConsentEngine, ());
    let client = ConsentEngineClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    (env, client, admin)
}

fn subject(env: &Env, id: &str) -> String {
    String::from_str(env, id)
}

#[test]
fn test_grant_publishes_consent_granted() {
    let (env, client, _admin) = setup_test();

    let patient = subject(&env, "patient-ev1");
    let requester = Address::generate(&env);

    env.ledger().set_timestamp(3 * DAY);
    let expires_at = client.grant_access(&requester, &patient, &requester, &10);

    let expected: EventList = vec![
        &env,
        (
            client.address.clone(),
            (symbol_short!("CNS_GRT"), patient.clone(), requester.clone()).into_val(&env),
            ConsentGrantedEvent {
                subject_id: patient.clone(),
                requester: requester.clone(),
                expires_at,
                issued_at: 3 * DAY,
                sequence: 1,
                caller: requester.clone(),
            }
            .into_val(&env),
        ),
    ];
    assert_eq!(env.events().all(), expected);
}

#[test]
fn test_every_revoke_publishes_consent_revoked() {
    let (env, client, _admin) = setup_test();

    let patient = subject(&env, "patient-ev2");
    let requester = Address::generate(&env);

    client.grant_access(&requester, &patient, &requester, &30);

    env.ledger().set_timestamp(DAY);
    client.revoke_access(&requester, &patient, &requester);
    let expected: EventList = vec![
        &env,
        (
            client.address.clone(),
            (symbol_short!("CNS_REV"), patient.clone(), requester.clone()).into_val(&env),
            ConsentRevokedEvent {
                subject_id: patient.clone(),
                requester: requester.clone(),
                revoked_at: DAY,
                sequence: 2,
                caller: requester.clone(),
            }
            .into_val(&env),
        ),
    ];
    assert_eq!(env.events().all(), expected);

    // A repeated revoke is audited again with the time of the second call.
    env.ledger().set_timestamp(2 * DAY);
    client.revoke_access(&requester, &patient, &requester);
    let expected: EventList = vec![
        &env,
        (
            client.address.clone(),
            (symbol_short!("CNS_REV"), patient.clone(), requester.clone()).into_val(&env),
            ConsentRevokedEvent {
                subject_id: patient.clone(),
                requester: requester.clone(),
                revoked_at: 2 * DAY,
                sequence: 3,
                caller: requester.clone(),
            }
            .into_val(&env),
        ),
    ];
    assert_eq!(env.events().all(), expected);

    // The stored record keeps the first revocation time.
    let grant = client.get_consent(&patient, &requester).unwrap();
    assert_eq!(grant.revoked_at, Some(DAY));
}

#[test]
fn test_rejected_writes_publish_nothing() {
    let (env, client, admin) = setup_test();

    let patient = subject(&env, "patient-ev3");
    let requester = Address::generate(&env);
    let none: EventList = vec![&env];

    let result = client.try_grant_access(&requester, &patient, &requester, &0);
    assert_eq!(result.unwrap_err().unwrap(), ConsentError::InvalidDuration);
    assert_eq!(env.events().all(), none);

    let empty = subject(&env, "");
    let result = client.try_revoke_access(&requester, &empty, &requester);
    assert_eq!(result.unwrap_err().unwrap(), ConsentError::EmptySubjectId);
    assert_eq!(env.events().all(), none);

    client.grant_access(&requester, &patient, &requester, &5);
    let result = client.try_revoke_access_at(&requester, &patient, &requester, &0);
    assert_eq!(result.unwrap_err().unwrap(), ConsentError::OrderingConflict);
    assert_eq!(env.events().all(), none);

    client.pause(&admin);
    let result = client.try_grant_access(&requester, &patient, &requester, &5);
    assert_eq!(
        result.unwrap_err().unwrap(),
        ConsentError::SubstrateUnavailable
    );
    assert_eq!(env.events().all(), none);

    let result = client.try_revoke_access(&requester, &patient, &requester);
    assert_eq!(
        result.unwrap_err().unwrap(),
        ConsentError::SubstrateUnavailable
    );
    assert_eq!(env.events().all(), none);
}
