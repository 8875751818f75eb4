#![no_main]

use arbitrary::Arbitrary;
use consent_engine::{null_identity, ConsentEngine, ConsentEngineClient};
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env, String,
};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Grant { subject: u8, requester: u8, days: u32 },
    Revoke { subject: u8, requester: u8 },
    Advance { seconds: u32 },
    TogglePause,
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);

    let contract_id = env.register(ConsentEngine, ());
    let client = ConsentEngineClient::new(&env, &contract_id);
    client.initialize(&admin);

    // Slot 0 is the null account so invalid requesters are exercised too.
    let mut requesters = vec![null_identity(&env)];
    for _ in 0..4 {
        requesters.push(Address::generate(&env));
    }
    // Subject 0 is the empty id.
    let subjects = [
        String::from_str(&env, ""),
        String::from_str(&env, "patient-1"),
        String::from_str(&env, "patient-2"),
    ];

    let mut now: u64 = 0;
    for action in actions {
        match action {
            FuzzAction::Grant {
                subject,
                requester,
                days,
            } => {
                let subject = &subjects[subject as usize % subjects.len()];
                let requester = &requesters[requester as usize % requesters.len()];
                if let Ok(Ok(expires_at)) = client.try_grant_access(&admin, subject, requester, &days) {
                    assert!(expires_at > now);
                    assert!(client.has_valid_consent(subject, requester));
                    assert_eq!(client.get_consent_expiration(subject, requester), Some(expires_at));
                }
            }
            FuzzAction::Revoke { subject, requester } => {
                let subject = &subjects[subject as usize % subjects.len()];
                let requester = &requesters[requester as usize % requesters.len()];
                if let Ok(Ok(())) = client.try_revoke_access(&admin, subject, requester) {
                    assert!(!client.has_valid_consent(subject, requester));
                }
            }
            FuzzAction::Advance { seconds } => {
                now = now.saturating_add(u64::from(seconds));
                env.ledger().set_timestamp(now);
            }
            FuzzAction::TogglePause => {
                if client.is_paused() {
                    client.resume(&admin);
                } else {
                    client.pause(&admin);
                }
            }
        }
    }
});
