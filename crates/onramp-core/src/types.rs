use std::fmt;

use serde::{Deserialize, Serialize};

/// Crypto symbol a provider uses when the request leaves it unset.
pub const DEFAULT_CRYPTO: &str = "SOL";

/// Network identifier a provider uses when the request leaves it unset.
pub const DEFAULT_NETWORK: &str = "SOLANA";

/// Deployment environment, selecting a provider's live or sandbox endpoint.
///
/// Process-wide configuration: read once at startup, never mutated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Test,
    Production,
}

impl Environment {
    /// Parse an environment tag. Only the exact tag `production` (after
    /// trimming) selects production; anything else selects test, so an
    /// unset or misspelled variable can never point at a live endpoint.
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim() == "production" {
            Environment::Production
        } else {
            Environment::Test
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Parameters for a single purchase attempt.
///
/// Constructed fresh per user action and never persisted. The optional
/// fields pass through to the provider unset; each provider applies its own
/// defaults at build time (crypto [`DEFAULT_CRYPTO`], network
/// [`DEFAULT_NETWORK`], and the provider's base fiat currency).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    /// Recipient wallet address. Callers validate this with
    /// [`crate::address::is_valid_address`] before handing the request to a
    /// provider.
    pub wallet_address: String,
    pub crypto: Option<String>,
    pub network: Option<String>,
    pub fiat: Option<String>,
}

impl PurchaseRequest {
    /// A request for the given recipient with all purchase parameters left
    /// to provider defaults.
    pub fn new(wallet_address: impl Into<String>) -> Self {
        PurchaseRequest {
            wallet_address: wallet_address.into(),
            crypto: None,
            network: None,
            fiat: None,
        }
    }

    pub fn with_crypto(mut self, crypto: impl Into<String>) -> Self {
        self.crypto = Some(crypto.into());
        self
    }

    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.network = Some(network.into());
        self
    }

    pub fn with_fiat(mut self, fiat: impl Into<String>) -> Self {
        self.fiat = Some(fiat.into());
        self
    }
}
