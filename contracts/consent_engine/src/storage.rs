use common::extend_persistent;
use soroban_sdk::{contracttype, Address, Env, String, Vec};

use crate::{consent::ConsentGrant, ConsentError};

/// Largest page returned by the paginated subject queries.
pub const MAX_PAGE_SIZE: u32 = 100;

// ── Storage Keys ─────────────────────────────────────────────

/// Persistent storage keys.
///
/// Each (subject, requester) pair is its own ledger entry so that writes to
/// different keys never share a footprint. The subject index is one entry
/// per position plus a counter, so no entry grows with the number of
/// requesters.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Live consent record for a (subject, requester) pair.
    Consent(String, Address),
    /// Number of requesters indexed for a subject.
    RequesterCount(String),
    /// Requester stored at a position of a subject's index.
    RequesterAt(String, u32),
}

fn consent_key(subject_id: &String, requester: &Address) -> DataKey {
    DataKey::Consent(subject_id.clone(), requester.clone())
}

// ── Consent records ──────────────────────────────────────────

pub fn load_consent(env: &Env, subject_id: &String, requester: &Address) -> Option<ConsentGrant> {
    env.storage()
        .persistent()
        .get(&consent_key(subject_id, requester))
}

/// Writes the whole record as one storage value.
pub fn store_consent(env: &Env, grant: &ConsentGrant) {
    let key = consent_key(&grant.subject_id, &grant.requester);
    env.storage().persistent().set(&key, grant);
    extend_persistent(env, &key);
}

// ── Subject index ────────────────────────────────────────────

pub fn requester_count(env: &Env, subject_id: &String) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::RequesterCount(subject_id.clone()))
        .unwrap_or(0)
}

/// Appends `requester` at the next free position of the subject's index.
///
/// Callers only invoke this for a key that had no record yet, so the index
/// never holds duplicates.
pub fn index_requester(
    env: &Env,
    subject_id: &String,
    requester: &Address,
) -> Result<(), ConsentError> {
    let position = requester_count(env, subject_id);
    let next = position.checked_add(1).ok_or(ConsentError::IndexFull)?;

    let slot_key = DataKey::RequesterAt(subject_id.clone(), position);
    env.storage().persistent().set(&slot_key, requester);
    extend_persistent(env, &slot_key);

    let count_key = DataKey::RequesterCount(subject_id.clone());
    env.storage().persistent().set(&count_key, &next);
    extend_persistent(env, &count_key);

    Ok(())
}

/// Index positions `[start, end)` covered by a page, with `limit` capped at
/// [`MAX_PAGE_SIZE`]. An empty range is returned past the end of the index.
pub fn page_range(count: u32, start: u32, limit: u32) -> (u32, u32) {
    if start >= count {
        return (count, count);
    }
    let end = start
        .saturating_add(limit.min(MAX_PAGE_SIZE))
        .min(count);
    (start, end)
}

/// Requesters at index positions `[start, start + limit)`.
pub fn load_requesters(env: &Env, subject_id: &String, start: u32, limit: u32) -> Vec<Address> {
    let (from, to) = page_range(requester_count(env, subject_id), start, limit);
    let mut page = Vec::new(env);
    for position in from..to {
        let key = DataKey::RequesterAt(subject_id.clone(), position);
        if let Some(requester) = env.storage().persistent().get::<_, Address>(&key) {
            page.push_back(requester);
        }
    }
    page
}
