//! # Adapters
//!
//! Reference implementations of the outbound ports.

pub mod memory_store;
