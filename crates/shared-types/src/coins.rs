//! # Coins
//!
//! Multi-asset balances. A `Coins` value is kept sorted by denomination with
//! no duplicate or zero entries, so two balances compare equal whenever they
//! represent the same holdings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from coin arithmetic.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoinError {
    /// A subtraction would drive a denomination below zero.
    #[error("insufficient {denom}: required {required}, available {available}")]
    Insufficient {
        denom: String,
        required: u64,
        available: u64,
    },
}

/// A single-asset amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    /// Asset symbol, e.g. `"atom"`.
    pub denom: String,
    /// Non-negative amount in base units.
    pub amount: u64,
}

impl Coin {
    /// Create a new coin.
    pub fn new(denom: impl Into<String>, amount: u64) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

/// A set of coins, sorted by denomination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coins(Vec<Coin>);

impl Coins {
    /// The empty balance.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Build a normalized balance: entries are merged per denomination,
    /// sorted, and zero amounts dropped.
    pub fn new(coins: Vec<Coin>) -> Self {
        let mut normalized = Self::empty();
        for coin in coins {
            normalized.credit_one(&coin);
        }
        normalized
    }

    /// Convenience constructor for a single-asset balance.
    pub fn one(denom: impl Into<String>, amount: u64) -> Self {
        Self::new(vec![Coin::new(denom, amount)])
    }

    /// True when no denomination holds a positive amount.
    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    /// Amount held in `denom`, zero when absent.
    pub fn amount_of(&self, denom: &str) -> u64 {
        self.0
            .iter()
            .find(|c| c.denom == denom)
            .map_or(0, |c| c.amount)
    }

    /// Iterate over the entries in denomination order.
    pub fn iter(&self) -> impl Iterator<Item = &Coin> {
        self.0.iter()
    }

    /// Sum of this balance and `other`.
    pub fn plus(&self, other: &Coins) -> Coins {
        let mut result = self.clone();
        for coin in other.iter() {
            result.credit_one(coin);
        }
        result
    }

    /// Subtract `other`, failing on the first denomination that would go
    /// negative.
    pub fn checked_sub(&self, other: &Coins) -> Result<Coins, CoinError> {
        let mut result = self.clone();
        for coin in other.iter() {
            let available = result.amount_of(&coin.denom);
            if available < coin.amount {
                return Err(CoinError::Insufficient {
                    denom: coin.denom.clone(),
                    required: coin.amount,
                    available,
                });
            }
            result.debit_one(&coin.denom, coin.amount);
        }
        Ok(result)
    }

    fn credit_one(&mut self, coin: &Coin) {
        if coin.amount == 0 {
            return;
        }
        match self.0.binary_search_by(|c| c.denom.cmp(&coin.denom)) {
            Ok(i) => self.0[i].amount += coin.amount,
            Err(i) => self.0.insert(i, coin.clone()),
        }
    }

    fn debit_one(&mut self, denom: &str, amount: u64) {
        if let Ok(i) = self.0.binary_search_by(|c| c.denom.as_str().cmp(denom)) {
            self.0[i].amount -= amount;
            if self.0[i].amount == 0 {
                self.0.remove(i);
            }
        }
    }
}

impl std::fmt::Display for Coins {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "0");
        }
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|c| format!("{}{}", c.amount, c.denom))
            .collect();
        write!(f, "{}", parts.join(","))
    }
}
