//! # Domain Layer
//!
//! Pure validation logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod distribution;
pub mod entities;
pub mod errors;
pub mod fees;
pub mod gas;
pub mod sequence;
