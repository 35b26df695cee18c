//! # Gas and Memo Metering
//!
//! A transaction declares a finite gas budget in its fee. This module debits
//! that budget for transaction size, per-signature verification work, and
//! memo bytes beyond a free allowance. Exhaustion is an ordinary error value
//! (`AnteError::OutOfGas`), never a panic, and must be forwarded unchanged by
//! every stage above.

use shared_types::StdTx;

use super::errors::AnteError;

/// Absolute memo size cap in bytes. Exceeding it fails the transaction
/// regardless of remaining gas.
pub const MAX_MEMO_BYTES: usize = 100;

/// Memo bytes below this allowance cost no gas.
pub const MEMO_FREE_BYTES: u64 = 32;

/// Gas per memo byte beyond the free allowance.
pub const MEMO_COST_PER_BYTE: u64 = 10;

/// Flat gas cost per signature verification.
pub const SIG_VERIFY_COST: u64 = 100;

/// Gas per metered transaction byte.
pub const TX_SIZE_COST_PER_BYTE: u64 = 1;

/// Canonical per-signature size contribution. Wire encoding is owned by an
/// external collaborator, so size is metered on the canonical message
/// rendering plus this fixed overhead per signature (public key, raw
/// signature, identity claim).
const SIGNATURE_SIZE_BYTES: u64 = 128;

/// Tracks cumulative gas against the declared limit.
#[derive(Debug, Clone)]
pub struct GasMeter {
    limit: u64,
    consumed: u64,
}

impl GasMeter {
    /// Create a meter with the transaction's declared gas limit.
    pub fn new(limit: u64) -> Self {
        Self { limit, consumed: 0 }
    }

    /// Charge `amount` gas. The first charge that pushes cumulative
    /// consumption past the limit aborts with `OutOfGas`.
    pub fn consume(&mut self, amount: u64, descriptor: &'static str) -> Result<(), AnteError> {
        let attempted = self.consumed.saturating_add(amount);
        if attempted > self.limit {
            return Err(AnteError::OutOfGas {
                descriptor,
                attempted,
                limit: self.limit,
            });
        }
        self.consumed = attempted;
        Ok(())
    }

    /// Gas consumed so far.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    /// The declared limit.
    pub fn limit(&self) -> u64 {
        self.limit
    }
}

/// Enforce the absolute memo cap.
pub fn check_memo(memo: &str) -> Result<(), AnteError> {
    if memo.len() > MAX_MEMO_BYTES {
        return Err(AnteError::MemoTooLarge {
            len: memo.len(),
            max: MAX_MEMO_BYTES,
        });
    }
    Ok(())
}

/// Gas cost of the memo: free up to the allowance, proportional beyond it.
pub fn memo_cost(memo: &str) -> u64 {
    (memo.len() as u64).saturating_sub(MEMO_FREE_BYTES) * MEMO_COST_PER_BYTE
}

/// Gas cost of the transaction's metered size.
pub fn tx_size_cost(tx: &StdTx) -> u64 {
    metered_size(tx) * TX_SIZE_COST_PER_BYTE
}

fn metered_size(tx: &StdTx) -> u64 {
    let msg_bytes: u64 = tx
        .msgs
        .iter()
        .map(|m| m.sign_doc().to_string().len() as u64)
        .sum();
    msg_bytes + tx.memo.len() as u64 + tx.signatures.len() as u64 * SIGNATURE_SIZE_BYTES
}
