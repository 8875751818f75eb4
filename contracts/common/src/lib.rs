//! Shared utilities and error types for the consent gateway contracts.
//!
//! This crate provides:
//! - [`CommonError`]: standardised error codes for all contracts.
//! - Identity validity checks for requester addresses ([`identity`]).
//! - Day-granularity duration to ledger-timestamp conversion ([`time`]).
//! - Storage TTL constants and extension helpers ([`ttl`]).
//!
//! Contract-specific errors can extend the range starting at code **40** and
//! above, ensuring no collisions with the common set.

#![no_std]

use soroban_sdk::contracterror;

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod identity;
pub mod time;
pub mod ttl;

pub use identity::*;
pub use time::*;
pub use ttl::*;

// ── Shared error enum ────────────────────────────────────────────────────────

/// Standardised error codes shared by every gateway contract.
///
/// # Code ranges
/// | Range   | Purpose                        |
/// |---------|--------------------------------|
/// | 1 – 9   | Lifecycle / initialisation     |
/// | 10 – 19 | Authentication & authorisation |
/// | 30 – 39 | Validation / input             |
/// | 40+     | Reserved for contract-specific |
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum CommonError {
    // ── Lifecycle (1–9) ──────────────────────────────────────
    /// The contract has not been initialised yet.
    NotInitialized = 1,

    /// The contract has already been initialised.
    /// Returned when `initialize` is called more than once.
    AlreadyInitialized = 2,

    // ── Auth (10–19) ─────────────────────────────────────────
    /// The caller lacks the required role to perform the operation.
    AccessDenied = 10,

    // ── Validation (30–39) ───────────────────────────────────
    /// A required string identifier was empty.
    EmptyIdentifier = 30,

    /// An identity is null or otherwise unusable as a party to a grant.
    InvalidIdentity = 31,

    /// A duration was zero or would push a timestamp past `u64::MAX`.
    InvalidDuration = 32,
}
