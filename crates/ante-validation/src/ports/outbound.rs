//! # Outbound Ports (Driven Ports / SPI)
//!
//! The account-store collaborator contract. The pipeline performs no I/O of
//! its own; every ledger read and write goes through this port, which may be
//! backed by a persistent store, a block-execution snapshot, or an in-memory
//! map in tests.

use shared_types::{Account, Address};
use thiserror::Error;

use crate::domain::errors::AnteError;

/// Error from account store operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A store lock was poisoned by a panicking writer.
    #[error("account store lock poisoned")]
    LockPoisoned,

    /// The backing store failed.
    #[error("account store backend failure: {0}")]
    Backend(String),
}

impl From<StoreError> for AnteError {
    fn from(err: StoreError) -> Self {
        AnteError::Store(err.to_string())
    }
}

/// Key-value ledger of account records, keyed by address.
///
/// Transactions within a block are validated strictly sequentially against
/// this store: sequence and balance checks are check-then-act, so callers
/// must not mutate the same account concurrently within a block.
pub trait AccountStore: Send + Sync {
    /// Fetch the account record for `address`, if one exists.
    fn account(&self, address: &Address) -> Result<Option<Account>, StoreError>;

    /// Persist `account`, creating or replacing its record.
    fn put_account(&self, account: Account) -> Result<(), StoreError>;

    /// Reserve the next unused account number.
    fn next_account_number(&self) -> Result<u64, StoreError>;
}
