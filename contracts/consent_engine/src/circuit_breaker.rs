use common::extend_instance;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::{events, ConsentError};

// ── Storage Keys ─────────────────────────────────────────────

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const INITIALIZED: Symbol = symbol_short!("INIT");
const PAUSED: Symbol = symbol_short!("PAUSED");

// ── Core Logistics ───────────────────────────────────────────

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&PAUSED).unwrap_or(false)
}

/// Fails every mutating entry point while consent writes are halted.
pub fn require_writable(env: &Env) -> Result<(), ConsentError> {
    if is_paused(env) {
        return Err(ConsentError::SubstrateUnavailable);
    }
    Ok(())
}

pub fn load_admin(env: &Env) -> Result<Address, ConsentError> {
    env.storage()
        .instance()
        .get(&ADMIN)
        .ok_or(ConsentError::NotInitialized)
}

fn require_admin(env: &Env, caller: &Address) -> Result<(), ConsentError> {
    if *caller != load_admin(env)? {
        return Err(ConsentError::Unauthorized);
    }
    Ok(())
}

/// Halts consent writes. Queries keep answering from the last committed state.
pub fn pause(env: &Env, caller: &Address) -> Result<(), ConsentError> {
    require_admin(env, caller)?;
    env.storage().instance().set(&PAUSED, &true);
    extend_instance(env);
    events::publish_writes_paused(env, caller.clone());
    Ok(())
}

pub fn resume(env: &Env, caller: &Address) -> Result<(), ConsentError> {
    require_admin(env, caller)?;
    env.storage().instance().set(&PAUSED, &false);
    extend_instance(env);
    events::publish_writes_resumed(env, caller.clone());
    Ok(())
}
