//! # Shared Crypto
//!
//! Cryptographic primitives for the Tollgate ledger.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `ed25519` | Ed25519 | Account and validator signatures |
//! | `secp256k1` | secp256k1 ECDSA | Account signatures (ECDSA wallets) |
//! | `keys` | scheme-tagged variants | Uniform key/signature handling |
//!
//! Public keys and signatures are exposed as tagged variants over the
//! supported schemes; verification is implemented per variant, so adding a
//! scheme extends the variant set without touching call sites.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ed25519;
pub mod errors;
pub mod keys;
pub mod secp256k1;

// Re-exports
pub use ed25519::{Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};
pub use errors::CryptoError;
pub use keys::{KeyPair, KeyScheme, PublicKey, Signature};
pub use secp256k1::{Secp256k1KeyPair, Secp256k1PublicKey, Secp256k1Signature};
