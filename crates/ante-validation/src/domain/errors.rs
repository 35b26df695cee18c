//! # Ante Errors
//!
//! Error taxonomy for the validation pipeline. Every failure aborts the
//! whole transaction; the variant is the machine-checkable code surfaced to
//! the caller. No error is retried internally.

use shared_types::Address;
use thiserror::Error;

/// Errors that abort transaction validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnteError {
    /// Signature count mismatch, cryptographic verification failure,
    /// account-number mismatch, or tampered sign-bytes.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// A required signer has no account record.
    #[error("unknown address: no account for required signer {}", hex::encode(.0))]
    UnknownAddress(Address),

    /// A signer's embedded key conflicts with (or is missing alongside) the
    /// account's stored key.
    #[error("invalid public key: {0}")]
    InvalidPubKey(String),

    /// Claimed sequence does not equal the account's current sequence.
    /// Covers both replay (too low) and premature submission (too high).
    #[error("invalid sequence: expected {expected}, got {actual}")]
    InvalidSequence {
        /// The account's current persisted sequence.
        expected: u64,
        /// The sequence the signer claimed.
        actual: u64,
    },

    /// Cumulative metered cost exceeded the declared gas limit.
    #[error("out of gas charging {descriptor}: needed {attempted}, limit {limit}")]
    OutOfGas {
        /// What was being charged when the budget ran out.
        descriptor: &'static str,
        /// Cumulative gas the charge would have reached.
        attempted: u64,
        /// The transaction's declared gas limit.
        limit: u64,
    },

    /// Memo exceeds the absolute size cap, regardless of remaining gas.
    #[error("memo too large: {len} bytes exceeds cap of {max}")]
    MemoTooLarge {
        /// Memo length in bytes.
        len: usize,
        /// The absolute cap.
        max: usize,
    },

    /// The fee payer cannot cover the computed fee.
    #[error("insufficient funds: fee requires {required} {denom}, payer has {available}")]
    InsufficientFunds {
        /// Denomination that fell short.
        denom: String,
        /// Amount the fee requires in that denomination.
        required: u64,
        /// Spendable amount the payer holds.
        available: u64,
    },

    /// The account store collaborator failed.
    #[error("account store failure: {0}")]
    Store(String),
}
