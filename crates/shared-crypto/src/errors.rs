//! Crypto error types.

use thiserror::Error;

use crate::keys::KeyScheme;

/// Cryptographic operation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Signature verification failed
    #[error("Signature verification failed")]
    SignatureVerificationFailed,

    /// Invalid public key
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Invalid private key
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Invalid signature
    #[error("Invalid signature")]
    InvalidSignature,

    /// Signature scheme does not match the public key's scheme
    #[error("Scheme mismatch: key is {key}, signature is {signature}")]
    SchemeMismatch {
        /// Scheme of the public key
        key: KeyScheme,
        /// Scheme of the signature
        signature: KeyScheme,
    },
}
