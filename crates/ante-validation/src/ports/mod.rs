//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API the block processor calls
//! - **Outbound (Driven)**: collaborators this subsystem needs

pub mod inbound;
pub mod outbound;
