//! # Domain Entities
//!
//! Result types produced by a validation run.

use serde::{Deserialize, Serialize};
use shared_types::Coins;

use super::fees::FeePolicy;

/// Successful outcome of a validation run.
///
/// Returned to the orchestrating block processor; carries everything the
/// caller needs to account for the transaction without re-deriving it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnteOutcome {
    /// Gas consumed across all stages.
    pub gas_used: u64,
    /// The transaction's declared gas limit.
    pub gas_limit: u64,
    /// The fee actually charged (calculated, or declared when no message
    /// had a registered calculator).
    pub fee_charged: Coins,
    /// How the charged fee was distributed.
    pub fee_policy: FeePolicy,
}
