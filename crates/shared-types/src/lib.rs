//! # Core Domain Entities
//!
//! Defines the domain entities shared across the Tollgate subsystems.
//!
//! ## Clusters
//!
//! - **Assets**: `Coin`, `Coins`
//! - **Ledger**: `Account`
//! - **Block**: `Validator`, `SigningValidator`, `BlockContext`
//! - **Transactions**: `Msg`, `StdTx`, `StdFee`, `StdSignature`, sign-bytes

pub mod coins;
pub mod entities;
pub mod tx;

pub use coins::{Coin, CoinError, Coins};
pub use entities::{Account, Address, BlockContext, Hash, SigningValidator, Validator};
pub use tx::{std_sign_bytes, Msg, StdFee, StdSignature, StdTx};
