//! # Identity validity
//!
//! A Soroban [`Address`] is always syntactically well-formed once it reaches a
//! contract, so "malformed or null" reduces to two cases that can still slip
//! through:
//!
//! - the **null account** (`GAAA…WHF`), the strkey of the all-zero ed25519
//!   public key. Nobody holds its secret key, so it is the ledger's
//!   equivalent of a zero address and can never act as a requester.
//! - the **contract itself**. A contract cannot be a party to the grants it
//!   manages.
//!
//! Subject identifiers are opaque strings; the only structural rule is that
//! they are non-empty.

use soroban_sdk::{Address, Env, String};

use crate::CommonError;

/// Strkey of the all-zero ed25519 account.
pub const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// Returns the null account as an [`Address`].
pub fn null_identity(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, NULL_ACCOUNT))
}

/// Returns `true` when `candidate` may act as a requester in grants managed
/// by the contract at `engine`.
pub fn is_valid_identity(env: &Env, candidate: &Address, engine: &Address) -> bool {
    candidate != engine && *candidate != null_identity(env)
}

/// Rejects identities that can never be a party to a grant.
///
/// # Errors
/// - [`CommonError::InvalidIdentity`]: `candidate` is the null account or
///   the managing contract.
pub fn validate_identity(
    env: &Env,
    candidate: &Address,
    engine: &Address,
) -> Result<(), CommonError> {
    if is_valid_identity(env, candidate, engine) {
        Ok(())
    } else {
        Err(CommonError::InvalidIdentity)
    }
}

/// Rejects empty opaque identifiers such as subject ids.
///
/// # Errors
/// - [`CommonError::EmptyIdentifier`]: `id` has zero length.
pub fn validate_identifier(id: &String) -> Result<(), CommonError> {
    if id.is_empty() {
        return Err(CommonError::EmptyIdentifier);
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
