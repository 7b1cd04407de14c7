//! # onramp-alchemypay
//!
//! Alchemy Pay hosted-checkout integration: builds the redirect URL that
//! sends the user to Alchemy Pay's on-ramp with the purchase parameters and
//! recipient wallet address in the query string. No network calls happen
//! here; the caller performs the redirect.

pub mod checkout;
pub mod config;

pub use checkout::{checkout_url, AlchemyPay, DEFAULT_FIAT};
pub use config::AlchemyPayConfig;
