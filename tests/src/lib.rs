//! # Tollgate Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── support.rs        # Shared fixtures: messages, signing, block contexts
//! │
//! └── integration/      # Cross-crate pipeline flows
//!     ├── ante_flow.rs        # Authentication, replay, gas, memo
//!     └── fee_distribution.rs # Fee calculators and validator payouts
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p tollgate-tests
//!
//! # By category
//! cargo test -p tollgate-tests integration::ante_flow
//! cargo test -p tollgate-tests integration::fee_distribution
//! ```

#![allow(dead_code)]

pub mod support;
