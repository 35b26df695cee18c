//! # Sequence and Account-Number Validation
//!
//! Per-account replay protection. A signer embeds the account number and
//! sequence it claims at signing time; both must exactly equal the account's
//! current persisted values. On success the sequence advances by exactly one
//! — the sole replay-protection mechanism.

use shared_types::Account;

use super::errors::AnteError;

/// Check the claimed account number against the stored one.
pub fn validate_account_number(account: &Account, claimed: u64) -> Result<(), AnteError> {
    if claimed != account.account_number {
        return Err(AnteError::Unauthorized(format!(
            "account number mismatch for {}: claimed {}, account has {}",
            hex::encode(account.address),
            claimed,
            account.account_number,
        )));
    }
    Ok(())
}

/// Check the claimed sequence against the stored one.
///
/// Too low means replay of an already-applied transaction; too high means
/// out-of-order submission. Both are rejected identically — there is no
/// gap-filling or reordering buffer.
pub fn validate_sequence(account: &Account, claimed: u64) -> Result<(), AnteError> {
    if claimed != account.sequence {
        return Err(AnteError::InvalidSequence {
            expected: account.sequence,
            actual: claimed,
        });
    }
    Ok(())
}

/// Advance the account's sequence by exactly one.
pub fn bump_sequence(account: &mut Account) {
    account.sequence += 1;
}
