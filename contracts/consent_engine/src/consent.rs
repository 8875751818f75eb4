//! Consent records and the per-key state machine.
//!
//! ```text
//! NO_RECORD ──grant──▶ ACTIVE(expires_at) ──time──▶ EXPIRED
//!     │                    │   ▲                        │
//!     └──revoke──▶ REVOKED ◀┘   └────────grant─────────┘
//!                     │                                ▲
//!                     └──────────────grant─────────────┘
//! ```
//!
//! Only `active`, `expires_at` and the bookkeeping fields are stored.
//! `EXPIRED` is derived from the ledger timestamp at read time and is never
//! written back.

use common::is_before_expiry;
use soroban_sdk::{contracttype, Address, String};

use crate::ConsentError;

/// The live consent record for one (subject, requester) key.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConsentGrant {
    pub subject_id: String,
    pub requester: Address,
    /// Ledger timestamp of the grant, `0` for a revoke placeholder.
    pub issued_at: u64,
    /// Stored expiry, kept through revocation so it stays auditable.
    pub expires_at: u64,
    pub active: bool,
    /// Timestamp of the first revocation since the last grant.
    pub revoked_at: Option<u64>,
    /// Number of grant/revoke commits accepted for this key.
    pub sequence: u64,
    /// Caller that committed the latest grant or revoke.
    pub updated_by: Address,
}

/// Authorization state of a key as observed at one instant.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ConsentStatus {
    NoRecord = 0,
    Active = 1,
    Expired = 2,
    Revoked = 3,
}

/// A currently valid consent held by `requester`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActiveConsent {
    pub requester: Address,
    pub expires_at: u64,
}

impl ConsentGrant {
    /// Builds the record a grant commits, superseding `current`.
    pub fn issue(
        current: Option<&ConsentGrant>,
        subject_id: String,
        requester: Address,
        caller: Address,
        issued_at: u64,
        expires_at: u64,
        expected_sequence: Option<u64>,
    ) -> Result<ConsentGrant, ConsentError> {
        let sequence = next_sequence(current, expected_sequence)?;
        Ok(ConsentGrant {
            subject_id,
            requester,
            issued_at,
            expires_at,
            active: true,
            revoked_at: None,
            sequence,
            updated_by: caller,
        })
    }

    /// Builds the record a revoke commits.
    ///
    /// An existing record keeps its issue and expiry timestamps. With no
    /// record, an inactive placeholder with zero timestamps is produced so
    /// later queries answer "no access" rather than "unknown".
    pub fn revoke(
        current: Option<&ConsentGrant>,
        subject_id: String,
        requester: Address,
        caller: Address,
        now: u64,
        expected_sequence: Option<u64>,
    ) -> Result<ConsentGrant, ConsentError> {
        let sequence = next_sequence(current, expected_sequence)?;
        let (issued_at, expires_at, revoked_at) = match current {
            Some(grant) => (
                grant.issued_at,
                grant.expires_at,
                grant.revoked_at.unwrap_or(now),
            ),
            None => (0, 0, now),
        };
        Ok(ConsentGrant {
            subject_id,
            requester,
            issued_at,
            expires_at,
            active: false,
            revoked_at: Some(revoked_at),
            sequence,
            updated_by: caller,
        })
    }

    /// `true` iff the record is active and `now` is strictly before expiry.
    pub fn is_valid_at(&self, now: u64) -> bool {
        self.active && is_before_expiry(now, self.expires_at)
    }

    pub fn status_at(&self, now: u64) -> ConsentStatus {
        if !self.active {
            ConsentStatus::Revoked
        } else if is_before_expiry(now, self.expires_at) {
            ConsentStatus::Active
        } else {
            ConsentStatus::Expired
        }
    }

    /// Stored expiry, with the zero placeholder reported as absent.
    pub fn expiration(&self) -> Option<u64> {
        if self.expires_at == 0 {
            None
        } else {
            Some(self.expires_at)
        }
    }
}

/// Status of an optional record at `now`.
pub fn status_of(grant: Option<&ConsentGrant>, now: u64) -> ConsentStatus {
    grant.map_or(ConsentStatus::NoRecord, |g| g.status_at(now))
}

/// Current sequence of an optional record, `0` when no record exists.
pub fn sequence_of(grant: Option<&ConsentGrant>) -> u64 {
    grant.map_or(0, |g| g.sequence)
}

/// Sequence the next commit for a key receives.
///
/// With `expected` set, the commit is only accepted when no other write has
/// landed since the caller observed `expected`.
fn next_sequence(
    current: Option<&ConsentGrant>,
    expected: Option<u64>,
) -> Result<u64, ConsentError> {
    let observed = sequence_of(current);
    if let Some(expected) = expected {
        if expected != observed {
            return Err(ConsentError::OrderingConflict);
        }
    }
    observed
        .checked_add(1)
        .ok_or(ConsentError::SequenceExhausted)
}
