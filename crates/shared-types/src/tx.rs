//! # Standard Transaction Envelope
//!
//! The transaction format accepted by the validation pipeline: an ordered
//! message list, a fee declaration, one signature per required signer, and an
//! optional memo.
//!
//! Wire encoding/decoding of transactions is owned by an external
//! collaborator; this module only defines the in-memory shape and the
//! canonical sign-bytes every signer attests to.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;
use shared_crypto::{PublicKey, Signature};

use crate::coins::Coins;
use crate::entities::Address;

/// A single application message inside a transaction.
///
/// The validation pipeline never interprets message payloads; it only needs
/// the message kind (for fee-calculator lookup), the declared signers, and a
/// canonical JSON rendering for sign-bytes construction.
pub trait Msg: Send + Sync {
    /// Stable message-kind identifier, the fee-calculator registry key.
    fn kind(&self) -> &'static str;

    /// Addresses whose signatures this message requires, in declaration
    /// order.
    fn signers(&self) -> Vec<Address>;

    /// Canonical JSON value of the message payload. Must be deterministic:
    /// equal messages render equal values.
    fn sign_doc(&self) -> serde_json::Value;
}

/// Declared fee: a gas budget and the coin amount offered.
///
/// The offered amount is charged as-is only when no message in the
/// transaction has a registered fee calculator; otherwise the calculators
/// decide the charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdFee {
    /// Gas budget for the whole transaction.
    pub gas: u64,
    /// Offered fee amount.
    pub amount: Coins,
}

impl StdFee {
    /// Create a fee declaration.
    pub fn new(gas: u64, amount: Coins) -> Self {
        Self { gas, amount }
    }
}

/// A signer's signature plus the identity claim embedded at signing time.
///
/// The claimed (account number, sequence) pair must exactly equal the
/// account's current persisted values for the signature to validate; that is
/// the replay-protection contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StdSignature {
    /// The signer's public key. May be absent when the chain already knows
    /// the key for this account.
    pub pub_key: Option<PublicKey>,
    /// Signature over the canonical sign-bytes.
    pub signature: Signature,
    /// The account number the signer claims.
    pub account_number: u64,
    /// The sequence number the signer claims.
    pub sequence: u64,
}

/// The standard transaction envelope.
#[derive(Clone)]
pub struct StdTx {
    /// Ordered message list.
    pub msgs: Vec<Arc<dyn Msg>>,
    /// Declared fee and gas budget.
    pub fee: StdFee,
    /// One signature per required signer, in required-signer order.
    pub signatures: Vec<StdSignature>,
    /// Optional free-form memo.
    pub memo: String,
}

impl StdTx {
    /// Assemble a transaction.
    pub fn new(
        msgs: Vec<Arc<dyn Msg>>,
        fee: StdFee,
        signatures: Vec<StdSignature>,
        memo: impl Into<String>,
    ) -> Self {
        Self {
            msgs,
            fee,
            signatures,
            memo: memo.into(),
        }
    }

    /// The distinct signer addresses this transaction requires.
    ///
    /// Messages are scanned in order and each declared signer is appended the
    /// first time it appears; duplicates collapse. The signature list must
    /// match this order position by position.
    pub fn required_signers(&self) -> Vec<Address> {
        let mut signers = Vec::new();
        for msg in &self.msgs {
            for address in msg.signers() {
                if !signers.contains(&address) {
                    signers.push(address);
                }
            }
        }
        signers
    }
}

impl std::fmt::Debug for StdTx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StdTx")
            .field("msgs", &self.msgs.iter().map(|m| m.kind()).collect::<Vec<_>>())
            .field("fee", &self.fee)
            .field("signatures", &self.signatures)
            .field("memo", &self.memo)
            .finish()
    }
}

/// Canonical sign-bytes for one signer position.
///
/// Every signer attests to the whole transaction (chain id, fee, full message
/// list, memo) plus their own account-number/sequence claim, so the bytes
/// differ between signers only in those two fields. The rendering is a JSON
/// object; `serde_json` maps are ordered, which makes the byte string
/// deterministic and order-sensitive in every field that affects transaction
/// meaning.
pub fn std_sign_bytes(
    chain_id: &str,
    account_number: u64,
    sequence: u64,
    fee: &StdFee,
    msgs: &[Arc<dyn Msg>],
    memo: &str,
) -> Vec<u8> {
    let fee_doc = json!({
        "gas": fee.gas,
        "amount": fee
            .amount
            .iter()
            .map(|c| json!({ "denom": c.denom, "amount": c.amount }))
            .collect::<Vec<_>>(),
    });
    let msg_docs: Vec<serde_json::Value> = msgs
        .iter()
        .map(|m| json!({ "kind": m.kind(), "value": m.sign_doc() }))
        .collect();
    let doc = json!({
        "chain_id": chain_id,
        "account_number": account_number,
        "sequence": sequence,
        "fee": fee_doc,
        "msgs": msg_docs,
        "memo": memo,
    });
    doc.to_string().into_bytes()
}
