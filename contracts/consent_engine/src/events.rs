use soroban_sdk::{symbol_short, Address, Env, String};

use crate::consent::ConsentGrant;

/// Event published when the contract is initialized.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub timestamp: u64,
}

/// Event published when consent is granted or re-granted.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConsentGrantedEvent {
    pub subject_id: String,
    pub requester: Address,
    pub expires_at: u64,
    pub issued_at: u64,
    pub sequence: u64,
    pub caller: Address,
}

/// Event published on every revoke call, repeated revokes included.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConsentRevokedEvent {
    pub subject_id: String,
    pub requester: Address,
    pub revoked_at: u64,
    pub sequence: u64,
    pub caller: Address,
}

/// Event published when consent writes are halted or resumed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WritesToggledEvent {
    pub admin: Address,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, admin: Address) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        admin,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes `ConsentGranted` for a freshly committed grant.
/// Topics carry the key so consumers can filter one consent's history.
pub fn publish_consent_granted(env: &Env, grant: &ConsentGrant) {
    let topics = (
        symbol_short!("CNS_GRT"),
        grant.subject_id.clone(),
        grant.requester.clone(),
    );
    let data = ConsentGrantedEvent {
        subject_id: grant.subject_id.clone(),
        requester: grant.requester.clone(),
        expires_at: grant.expires_at,
        issued_at: grant.issued_at,
        sequence: grant.sequence,
        caller: grant.updated_by.clone(),
    };
    env.events().publish(topics, data);
}

/// Publishes `ConsentRevoked` for a committed revoke.
pub fn publish_consent_revoked(env: &Env, grant: &ConsentGrant) {
    let topics = (
        symbol_short!("CNS_REV"),
        grant.subject_id.clone(),
        grant.requester.clone(),
    );
    let data = ConsentRevokedEvent {
        subject_id: grant.subject_id.clone(),
        requester: grant.requester.clone(),
        revoked_at: env.ledger().timestamp(),
        sequence: grant.sequence,
        caller: grant.updated_by.clone(),
    };
    env.events().publish(topics, data);
}

pub fn publish_writes_paused(env: &Env, admin: Address) {
    let topics = (symbol_short!("PAUSED"),);
    let data = WritesToggledEvent {
        admin,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_writes_resumed(env: &Env, admin: Address) {
    let topics = (symbol_short!("RESUMED"),);
    let data = WritesToggledEvent {
        admin,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
