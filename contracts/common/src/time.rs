//! # Day-granularity durations
//!
//! Consent durations are expressed in whole days at the contract interface
//! while every stored timestamp is an absolute ledger timestamp in seconds.
//! These helpers do the conversion with checked arithmetic so an oversized
//! duration is reported instead of wrapping.

use crate::CommonError;

/// Length of one day in ledger-timestamp units (seconds).
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Convert a whole number of days into seconds.
///
/// # Errors
/// - [`CommonError::InvalidDuration`]: `days` is zero.
pub fn days_to_seconds(days: u32) -> Result<u64, CommonError> {
    if days == 0 {
        return Err(CommonError::InvalidDuration);
    }
    // u32::MAX days fits comfortably in u64 seconds.
    Ok(u64::from(days) * SECONDS_PER_DAY)
}

/// Compute the absolute expiry for a window of `days` starting at `now`.
///
/// The result is always strictly greater than `now`.
///
/// # Errors
/// - [`CommonError::InvalidDuration`]: `days` is zero or the expiry would
///   overflow a `u64` timestamp.
pub fn expiry_after_days(now: u64, days: u32) -> Result<u64, CommonError> {
    let window = days_to_seconds(days)?;
    now.checked_add(window).ok_or(CommonError::InvalidDuration)
}

/// A window ending at `expires_at` is open at `now` only while `now` is
/// strictly before it.
pub fn is_before_expiry(now: u64, expires_at: u64) -> bool {
    now < expires_at
}

// ── Tests ─────────────────────────────────────────────────────────────────────
