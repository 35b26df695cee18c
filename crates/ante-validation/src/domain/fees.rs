//! # Fee Calculation
//!
//! A fee calculator is a pure policy from a message to a computed fee:
//! an amount plus a recipient rule. Calculators are registered per message
//! kind in an explicit registry owned by the orchestrator's construction
//! context — no ambient global state — and the registry can be cleared for
//! test isolation.
//!
//! The transaction's declared fee is a ceiling/price signal, not the charged
//! amount; it is charged as-is only when no message in the transaction has a
//! registered calculator.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use shared_types::{Coin, Coins, Msg, StdTx};

/// Who receives a collected fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeePolicy {
    /// The entire fee goes to the block proposer.
    ProposerOnly,
    /// The fee is split among all validators that signed the block.
    AllValidators,
}

/// A fee computed for a message (or totaled for a transaction).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatedFee {
    /// Fee amount per asset.
    pub amount: Coins,
    /// Recipient rule.
    pub policy: FeePolicy,
}

impl CalculatedFee {
    /// A zero fee, distributed (vacuously) to the proposer.
    pub fn free() -> Self {
        Self {
            amount: Coins::empty(),
            policy: FeePolicy::ProposerOnly,
        }
    }
}

/// A fee-computation policy for one message kind.
pub type FeeCalculator = Arc<dyn Fn(&dyn Msg) -> CalculatedFee + Send + Sync>;

/// Registry mapping message kind to fee calculator.
///
/// Holds at most one calculator per kind; re-registration replaces the prior
/// entry. Registration is expected to happen at startup, before concurrent
/// validation begins; lookups take a read lock only.
#[derive(Default)]
pub struct FeeCalculatorRegistry {
    calculators: RwLock<HashMap<String, FeeCalculator>>,
}

impl FeeCalculatorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `calculator` for `kind`, replacing any prior entry.
    pub fn register(&self, kind: impl Into<String>, calculator: FeeCalculator) {
        self.calculators.write().insert(kind.into(), calculator);
    }

    /// The calculator registered for `kind`, if any.
    pub fn get(&self, kind: &str) -> Option<FeeCalculator> {
        self.calculators.read().get(kind).cloned()
    }

    /// Remove every registered calculator. Test isolation hook.
    pub fn unset_all(&self) {
        self.calculators.write().clear();
    }
}

/// A calculator charging nothing.
pub fn free_fee_calculator() -> FeeCalculator {
    Arc::new(|_| CalculatedFee::free())
}

/// A calculator charging a fixed amount per message under `policy`.
pub fn fixed_fee_calculator(amount: Coin, policy: FeePolicy) -> FeeCalculator {
    Arc::new(move |_| CalculatedFee {
        amount: Coins::new(vec![amount.clone()]),
        policy,
    })
}

/// Total fee obligation of a transaction.
///
/// Sums the calculated fee of every message whose kind has a calculator;
/// messages without one contribute zero. If any covered message requires
/// all-validator distribution, the whole transaction distributes that way.
/// When no message has a calculator, the transaction's declared fee is
/// charged in full, proposer-only.
pub fn calculate_tx_fee(registry: &FeeCalculatorRegistry, tx: &StdTx) -> CalculatedFee {
    let mut total = Coins::empty();
    let mut policy = FeePolicy::ProposerOnly;
    let mut any_calculator = false;

    for msg in &tx.msgs {
        if let Some(calculator) = registry.get(msg.kind()) {
            any_calculator = true;
            let fee = calculator(msg.as_ref());
            total = total.plus(&fee.amount);
            if fee.policy == FeePolicy::AllValidators {
                policy = FeePolicy::AllValidators;
            }
        }
    }

    if !any_calculator {
        return CalculatedFee {
            amount: tx.fee.amount.clone(),
            policy: FeePolicy::ProposerOnly,
        };
    }

    CalculatedFee {
        amount: total,
        policy,
    }
}
