//! # Scheme-Tagged Keys and Signatures
//!
//! Uniform handling of public keys and signatures across the supported
//! signature schemes. Verification dispatches on the variant; a signature
//! only verifies against a key of the same scheme.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::ed25519::{Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};
use crate::errors::CryptoError;
use crate::secp256k1::{Secp256k1KeyPair, Secp256k1PublicKey, Secp256k1Signature};

/// Supported signature schemes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyScheme {
    /// Ed25519 (EdDSA over Curve25519)
    Ed25519,
    /// ECDSA over secp256k1
    Secp256k1,
}

impl std::fmt::Display for KeyScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyScheme::Ed25519 => write!(f, "ed25519"),
            KeyScheme::Secp256k1 => write!(f, "secp256k1"),
        }
    }
}

/// A public key of any supported scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublicKey {
    /// Ed25519 public key
    Ed25519(Ed25519PublicKey),
    /// Compressed secp256k1 public key
    Secp256k1(Secp256k1PublicKey),
}

impl PublicKey {
    /// The key's scheme tag.
    pub fn scheme(&self) -> KeyScheme {
        match self {
            PublicKey::Ed25519(_) => KeyScheme::Ed25519,
            PublicKey::Secp256k1(_) => KeyScheme::Secp256k1,
        }
    }

    /// Raw key bytes (scheme-specific length).
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            PublicKey::Ed25519(pk) => pk.as_bytes(),
            PublicKey::Secp256k1(pk) => pk.as_bytes(),
        }
    }

    /// Derive the 20-byte account address for this key: the first 20 bytes
    /// of SHA-256 over the raw key bytes.
    pub fn address(&self) -> [u8; 20] {
        let digest = Sha256::digest(self.as_bytes());
        let mut address = [0u8; 20];
        address.copy_from_slice(&digest[..20]);
        address
    }

    /// Verify `signature` over `message`.
    ///
    /// A signature from a different scheme than the key is rejected with
    /// `SchemeMismatch` before any cryptographic work.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> Result<(), CryptoError> {
        match (self, signature) {
            (PublicKey::Ed25519(pk), Signature::Ed25519(sig)) => pk.verify(message, sig),
            (PublicKey::Secp256k1(pk), Signature::Secp256k1(sig)) => pk.verify(message, sig),
            _ => Err(CryptoError::SchemeMismatch {
                key: self.scheme(),
                signature: signature.scheme(),
            }),
        }
    }
}

/// A signature of any supported scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signature {
    /// Ed25519 signature
    Ed25519(Ed25519Signature),
    /// secp256k1 ECDSA signature (r||s)
    Secp256k1(Secp256k1Signature),
}

impl Signature {
    /// The signature's scheme tag.
    pub fn scheme(&self) -> KeyScheme {
        match self {
            Signature::Ed25519(_) => KeyScheme::Ed25519,
            Signature::Secp256k1(_) => KeyScheme::Secp256k1,
        }
    }

    /// Raw signature bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Signature::Ed25519(sig) => sig.as_bytes(),
            Signature::Secp256k1(sig) => sig.as_bytes(),
        }
    }
}

/// A signing keypair of any supported scheme.
pub enum KeyPair {
    /// Ed25519 keypair
    Ed25519(Ed25519KeyPair),
    /// secp256k1 keypair
    Secp256k1(Secp256k1KeyPair),
}

impl KeyPair {
    /// Generate a random Ed25519 keypair.
    pub fn generate_ed25519() -> Self {
        KeyPair::Ed25519(Ed25519KeyPair::generate())
    }

    /// Generate a random secp256k1 keypair.
    pub fn generate_secp256k1() -> Self {
        KeyPair::Secp256k1(Secp256k1KeyPair::generate())
    }

    /// The corresponding public key.
    pub fn public_key(&self) -> PublicKey {
        match self {
            KeyPair::Ed25519(kp) => PublicKey::Ed25519(kp.public_key()),
            KeyPair::Secp256k1(kp) => PublicKey::Secp256k1(kp.public_key()),
        }
    }

    /// The account address of the public key.
    pub fn address(&self) -> [u8; 20] {
        self.public_key().address()
    }

    /// Sign `message` with this key.
    pub fn sign(&self, message: &[u8]) -> Signature {
        match self {
            KeyPair::Ed25519(kp) => Signature::Ed25519(kp.sign(message)),
            KeyPair::Secp256k1(kp) => Signature::Secp256k1(kp.sign(message)),
        }
    }
}
