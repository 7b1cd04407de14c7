//! # onramp-core
//!
//! Shared building blocks for fiat-to-crypto on-ramp integrations: Solana
//! wallet address validation, purchase request types, the environment
//! switch, error kinds, the polymorphic provider seam, and the
//! per-interaction purchase flow.
//!
//! This crate makes no network calls and holds no process-wide state.
//! Address validation is a syntactic pre-filter only; everything past the
//! hand-off belongs to the provider crates and their external vendors.

pub mod address;
pub mod config;
pub mod error;
pub mod flow;
pub mod provider;
pub mod types;

// Re-export key public types for ergonomic imports.
pub use address::{is_valid_address, WalletAddress};
pub use error::OnRampError;
pub use flow::{FlowState, PurchaseFlow};
pub use provider::{Handoff, OnRampProvider};
pub use types::{Environment, PurchaseRequest};
