//! # Ante Validation Subsystem
//!
//! Pre-execution validation gate for the Tollgate ledger: every transaction
//! is authenticated, checked for replay, metered for gas, and charged a fee
//! that is distributed to block validators — all before any message handler
//! runs.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): pure validation logic, no I/O
//! - **Ports Layer** (`ports/`): trait definitions for inbound/outbound interfaces
//! - **Service Layer** (`service.rs`): the pipeline orchestrator wiring domain to ports
//! - **Adapters** (`adapters/`): reference in-memory account store
//!
//! ## Pipeline
//!
//! Stages run in strict order; the first failure aborts the transaction with
//! a tagged error. Writes attempted before a failing stage are discarded by
//! the caller's transactional store context.
//!
//! 1. Required-signer resolution and signature-count check
//! 2. Gas metering for transaction size and memo
//! 3. Per-signer authentication: public-key binding, account number,
//!    sequence (replay protection), sign-bytes verification
//! 4. Fee calculation via the calculator registry
//! 5. Fee debit from the first signer and distribution to validators

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::memory_store::InMemoryAccountStore;
pub use domain::distribution::plan_distribution;
pub use domain::entities::AnteOutcome;
pub use domain::errors::AnteError;
pub use domain::fees::{
    fixed_fee_calculator, free_fee_calculator, CalculatedFee, FeeCalculator,
    FeeCalculatorRegistry, FeePolicy,
};
pub use domain::gas::GasMeter;
pub use ports::inbound::AnteHandlerApi;
pub use ports::outbound::{AccountStore, StoreError};
pub use service::AnteService;
