//! # Inbound Ports (Driving Ports / API)
//!
//! The single entry point exposed to the orchestrating block processor.

use shared_types::{BlockContext, StdTx};

use crate::domain::entities::AnteOutcome;
use crate::domain::errors::AnteError;

/// Pre-execution validation API.
///
/// Both processing lanes — speculative mempool admission and final block
/// execution — run this same pipeline against their own store snapshots; the
/// implementation must not assume which lane it runs in.
/// Implementations must be thread-safe (`Send + Sync`).
pub trait AnteHandlerApi: Send + Sync {
    /// Run the full validation pipeline for one transaction.
    ///
    /// Stages run in strict order and the first failure aborts with its
    /// error code; on success the committed mutations are each signer's
    /// sequence increment (and first-use key binding), the fee debit from
    /// the first signer, and the distribution credits.
    ///
    /// Writes attempted before a failing stage are discarded by the caller's
    /// transactional store context, never by this subsystem.
    fn validate(&self, ctx: &BlockContext, tx: &StdTx) -> Result<AnteOutcome, AnteError>;
}
