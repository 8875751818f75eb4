use common::{validate_identifier, validate_identity};
use soroban_sdk::{Address, Env, String};

use crate::ConsentError;

/// Checks the (subject, requester) key of a mutating call.
///
/// The subject is checked before the requester so the reported error is the
/// first violated precondition.
pub fn validate_key(
    env: &Env,
    subject_id: &String,
    requester: &Address,
) -> Result<(), ConsentError> {
    validate_identifier(subject_id)?;
    validate_identity(env, requester, &env.current_contract_address())?;
    Ok(())
}
