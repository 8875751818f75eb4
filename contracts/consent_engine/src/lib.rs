#![no_std]

pub mod circuit_breaker;
pub mod consent;
pub mod errors;
pub mod events;
pub mod storage;
pub mod validation;

use common::{expiry_after_days, extend_instance};
use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

pub use common::{null_identity, SECONDS_PER_DAY};
pub use consent::{ActiveConsent, ConsentGrant, ConsentStatus};
pub use errors::{ConsentError, ErrorCategory};

use circuit_breaker::{ADMIN, INITIALIZED};

#[contract]
pub struct ConsentEngine;

#[contractimpl]
impl ConsentEngine {
    /// Initialize the contract with the admin allowed to halt consent writes.
    pub fn initialize(env: Env, admin: Address) -> Result<(), ConsentError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ConsentError::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&INITIALIZED, &true);
        extend_instance(&env);

        events::publish_initialized(&env, admin);

        Ok(())
    }

    /// Get the admin address
    pub fn get_admin(env: Env) -> Result<Address, ConsentError> {
        circuit_breaker::load_admin(&env)
    }

    /// Check if the contract is initialized
    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    // ======================== Consent Mutations ========================

    /// Grant `requester` access to `subject_id`'s data for `duration_days`.
    ///
    /// Overwrites any earlier record for the pair, so the latest grant's
    /// expiry wins. Returns the new expiry timestamp.
    pub fn grant_access(
        env: Env,
        caller: Address,
        subject_id: String,
        requester: Address,
        duration_days: u32,
    ) -> Result<u64, ConsentError> {
        Self::commit_grant(&env, caller, subject_id, requester, duration_days, None)
    }

    /// Same as [`grant_access`](Self::grant_access), but only commits if the
    /// pair's sequence still equals `expected_sequence`.
    pub fn grant_access_at(
        env: Env,
        caller: Address,
        subject_id: String,
        requester: Address,
        duration_days: u32,
        expected_sequence: u64,
    ) -> Result<u64, ConsentError> {
        Self::commit_grant(
            &env,
            caller,
            subject_id,
            requester,
            duration_days,
            Some(expected_sequence),
        )
    }

    /// Revoke `requester`'s access to `subject_id`'s data.
    ///
    /// Succeeds for never-granted and already-revoked pairs; every call is
    /// audited.
    pub fn revoke_access(
        env: Env,
        caller: Address,
        subject_id: String,
        requester: Address,
    ) -> Result<(), ConsentError> {
        Self::commit_revoke(&env, caller, subject_id, requester, None)
    }

    /// Same as [`revoke_access`](Self::revoke_access), but only commits if the
    /// pair's sequence still equals `expected_sequence`.
    pub fn revoke_access_at(
        env: Env,
        caller: Address,
        subject_id: String,
        requester: Address,
        expected_sequence: u64,
    ) -> Result<(), ConsentError> {
        Self::commit_revoke(&env, caller, subject_id, requester, Some(expected_sequence))
    }

    // ======================== Consent Queries ========================

    /// `true` iff the pair has an active record whose expiry is still ahead
    /// of the current ledger timestamp.
    pub fn has_valid_consent(env: Env, subject_id: String, requester: Address) -> bool {
        let now = env.ledger().timestamp();
        storage::load_consent(&env, &subject_id, &requester)
            .is_some_and(|grant| grant.is_valid_at(now))
    }

    /// Stored expiry for the pair, whether or not it is still active.
    pub fn get_consent_expiration(
        env: Env,
        subject_id: String,
        requester: Address,
    ) -> Option<u64> {
        storage::load_consent(&env, &subject_id, &requester).and_then(|grant| grant.expiration())
    }

    pub fn get_consent(env: Env, subject_id: String, requester: Address) -> Option<ConsentGrant> {
        storage::load_consent(&env, &subject_id, &requester)
    }

    pub fn get_consent_status(env: Env, subject_id: String, requester: Address) -> ConsentStatus {
        let grant = storage::load_consent(&env, &subject_id, &requester);
        consent::status_of(grant.as_ref(), env.ledger().timestamp())
    }

    /// Number of grant/revoke commits accepted for the pair so far.
    pub fn get_consent_sequence(env: Env, subject_id: String, requester: Address) -> u64 {
        let grant = storage::load_consent(&env, &subject_id, &requester);
        consent::sequence_of(grant.as_ref())
    }

    /// Number of requesters that have ever held a record for `subject_id`.
    pub fn get_subject_requester_count(env: Env, subject_id: String) -> u32 {
        storage::requester_count(&env, &subject_id)
    }

    /// Requesters indexed for `subject_id` at positions
    /// `[start, start + limit)`, in the order they first received a record.
    /// `limit` is capped at [`storage::MAX_PAGE_SIZE`].
    pub fn get_subject_requesters(
        env: Env,
        subject_id: String,
        start: u32,
        limit: u32,
    ) -> Vec<Address> {
        storage::load_requesters(&env, &subject_id, start, limit)
    }

    /// Consents valid at the current ledger timestamp among the requesters
    /// at index positions `[start, start + limit)`.
    ///
    /// A page may hold fewer entries than `limit`; advance `start` by the
    /// page size, not by the number of results.
    pub fn get_active_consents(
        env: Env,
        subject_id: String,
        start: u32,
        limit: u32,
    ) -> Vec<ActiveConsent> {
        let now = env.ledger().timestamp();
        let mut active = Vec::new(&env);
        for requester in storage::load_requesters(&env, &subject_id, start, limit).iter() {
            if let Some(grant) = storage::load_consent(&env, &subject_id, &requester) {
                if grant.is_valid_at(now) {
                    active.push_back(ActiveConsent {
                        requester,
                        expires_at: grant.expires_at,
                    });
                }
            }
        }
        active
    }

    // ======================== Circuit Breaker ========================

    /// Halt all consent writes. Admin only.
    pub fn pause(env: Env, caller: Address) -> Result<(), ConsentError> {
        caller.require_auth();
        circuit_breaker::pause(&env, &caller)
    }

    /// Resume consent writes. Admin only.
    pub fn resume(env: Env, caller: Address) -> Result<(), ConsentError> {
        caller.require_auth();
        circuit_breaker::resume(&env, &caller)
    }

    pub fn is_paused(env: Env) -> bool {
        circuit_breaker::is_paused(&env)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }
}

impl ConsentEngine {
    fn commit_grant(
        env: &Env,
        caller: Address,
        subject_id: String,
        requester: Address,
        duration_days: u32,
        expected_sequence: Option<u64>,
    ) -> Result<u64, ConsentError> {
        circuit_breaker::require_writable(env)?;
        caller.require_auth();

        validation::validate_key(env, &subject_id, &requester)?;
        let now = env.ledger().timestamp();
        let expires_at = expiry_after_days(now, duration_days)?;

        let current = storage::load_consent(env, &subject_id, &requester);
        let grant = ConsentGrant::issue(
            current.as_ref(),
            subject_id,
            requester,
            caller,
            now,
            expires_at,
            expected_sequence,
        )?;

        if current.is_none() {
            storage::index_requester(env, &grant.subject_id, &grant.requester)?;
        }
        storage::store_consent(env, &grant);
        events::publish_consent_granted(env, &grant);
        log!(env, "consent granted", grant.subject_id, grant.sequence, expires_at);

        Ok(expires_at)
    }

    fn commit_revoke(
        env: &Env,
        caller: Address,
        subject_id: String,
        requester: Address,
        expected_sequence: Option<u64>,
    ) -> Result<(), ConsentError> {
        circuit_breaker::require_writable(env)?;
        caller.require_auth();

        validation::validate_key(env, &subject_id, &requester)?;
        let now = env.ledger().timestamp();

        let current = storage::load_consent(env, &subject_id, &requester);
        let grant = ConsentGrant::revoke(
            current.as_ref(),
            subject_id,
            requester,
            caller,
            now,
            expected_sequence,
        )?;

        if current.is_none() {
            storage::index_requester(env, &grant.subject_id, &grant.requester)?;
        }
        storage::store_consent(env, &grant);
        events::publish_consent_revoked(env, &grant);
        log!(env, "consent revoked", grant.subject_id, grant.sequence);

        Ok(())
    }
}


#[cfg(test)]
mod test_ordering;


#[cfg(test)]
mod test_events;
