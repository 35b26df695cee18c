//! # Ledger and Block Entities
//!
//! Accounts as persisted by the account store, plus the block-level context
//! supplied by the block processor for every validation run.

use serde::{Deserialize, Serialize};
use shared_crypto::PublicKey;

use crate::coins::{CoinError, Coins};

/// A 32-byte hash.
pub type Hash = [u8; 32];

/// A 20-byte public-key-derived account identifier.
pub type Address = [u8; 20];

/// An account record in the ledger.
///
/// Created on first write with a freshly assigned account number; the number
/// is immutable afterwards. The sequence number increases by exactly one per
/// successfully authenticated transaction naming this account as a signer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// The account's address.
    pub address: Address,
    /// Public key, unset until the first successfully verified signature
    /// binds it.
    pub pub_key: Option<PublicKey>,
    /// Assigned once at creation, immutable thereafter.
    pub account_number: u64,
    /// Replay-protection counter, starts at 0.
    pub sequence: u64,
    /// Spendable balances.
    pub coins: Coins,
    /// Balances locked by time or governance; not spendable for fees.
    pub locked: Coins,
    /// Balances frozen by the application; not spendable for fees.
    pub frozen: Coins,
}

impl Account {
    /// Create a fresh account with the given address and assigned number.
    pub fn new(address: Address, account_number: u64) -> Self {
        Self {
            address,
            pub_key: None,
            account_number,
            sequence: 0,
            coins: Coins::empty(),
            locked: Coins::empty(),
            frozen: Coins::empty(),
        }
    }

    /// The balances available to pay fees. Locked and frozen buckets are
    /// excluded.
    pub fn spendable(&self) -> &Coins {
        &self.coins
    }

    /// Remove `amount` from the spendable balance.
    pub fn debit(&mut self, amount: &Coins) -> Result<(), CoinError> {
        self.coins = self.coins.checked_sub(amount)?;
        Ok(())
    }

    /// Add `amount` to the spendable balance.
    pub fn credit(&mut self, amount: &Coins) {
        self.coins = self.coins.plus(amount);
    }
}

/// A validator identity in the current validator set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    /// Address credited with block rewards and fees.
    pub address: Address,
    /// Voting power.
    pub power: u64,
}

/// A validator together with its participation in the current block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningValidator {
    /// The validator identity.
    pub validator: Validator,
    /// Whether this validator signed the current block.
    pub signed_block: bool,
}

/// Read-only description of the block a transaction is validated under.
///
/// Supplied by the block-processing collaborator; the validation pipeline
/// never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockContext {
    /// Chain identifier, bound into every signature.
    pub chain_id: String,
    /// Current block height.
    pub height: u64,
    /// The validator that proposed this block.
    pub proposer: Validator,
    /// The validator set, in canonical order, with per-validator
    /// signed-this-block flags.
    pub signing_validators: Vec<SigningValidator>,
}

impl BlockContext {
    /// Validators that signed the current block, in set order.
    pub fn signed_validators(&self) -> impl Iterator<Item = &Validator> {
        self.signing_validators
            .iter()
            .filter(|sv| sv.signed_block)
            .map(|sv| &sv.validator)
    }
}
