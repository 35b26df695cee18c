//! In-memory implementation of the account store, used by tests and by
//! callers that manage their own snapshotting.

use std::collections::HashMap;
use std::sync::RwLock;

use shared_types::{Account, Address};

use crate::ports::outbound::{AccountStore, StoreError};

/// In-memory account ledger.
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<Address, Account>>,
    next_number: RwLock<u64>,
}

impl InMemoryAccountStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            next_number: RwLock::new(0),
        }
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn account(&self, address: &Address) -> Result<Option<Account>, StoreError> {
        let accounts = self.accounts.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(accounts.get(address).cloned())
    }

    fn put_account(&self, account: Account) -> Result<(), StoreError> {
        let mut accounts = self.accounts.write().map_err(|_| StoreError::LockPoisoned)?;
        accounts.insert(account.address, account);
        Ok(())
    }

    fn next_account_number(&self) -> Result<u64, StoreError> {
        let mut next = self
            .next_number
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let number = *next;
        *next += 1;
        Ok(number)
    }
}
