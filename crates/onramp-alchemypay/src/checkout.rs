//! Hosted checkout URL construction.

use async_trait::async_trait;
use tracing::warn;
use url::Url;

use onramp_core::error::OnRampError;
use onramp_core::provider::{Handoff, OnRampProvider};
use onramp_core::types::{PurchaseRequest, DEFAULT_CRYPTO, DEFAULT_NETWORK};

use crate::config::{AlchemyPayConfig, APP_ID_VAR};

/// Fiat currency used when the request leaves it unset.
pub const DEFAULT_FIAT: &str = "USD";

/// Build the Alchemy Pay checkout URL for a purchase request.
///
/// The caller has already validated `request.wallet_address`; this function
/// only formats. It never fails: a missing application id is substituted
/// with an empty string and logged, since an operator can fix that without
/// a code change. Parameter names and their order (`appId`, `crypto`,
/// `network`, `fiat`, `address`) are part of the provider's endpoint
/// contract.
pub fn checkout_url(config: &AlchemyPayConfig, request: &PurchaseRequest) -> Url {
    let app_id = match &config.app_id {
        Some(id) => id.as_str(),
        None => {
            warn!("Alchemy Pay app id is missing; set {APP_ID_VAR}");
            ""
        }
    };

    // The hosts are compile-time constants, so parsing cannot fail.
    let mut checkout = Url::parse(config.base_url()).expect("checkout host parses as a URL");
    checkout
        .query_pairs_mut()
        .append_pair("appId", app_id)
        .append_pair("crypto", request.crypto.as_deref().unwrap_or(DEFAULT_CRYPTO))
        .append_pair("network", request.network.as_deref().unwrap_or(DEFAULT_NETWORK))
        .append_pair("fiat", request.fiat.as_deref().unwrap_or(DEFAULT_FIAT))
        .append_pair("address", &request.wallet_address);
    checkout
}

/// Hosted-checkout provider: hands control off via a redirect URL.
#[derive(Debug, Clone)]
pub struct AlchemyPay {
    config: AlchemyPayConfig,
}

impl AlchemyPay {
    pub fn new(config: AlchemyPayConfig) -> Self {
        AlchemyPay { config }
    }

    /// Provider configured from the process environment.
    pub fn from_env() -> Self {
        AlchemyPay::new(AlchemyPayConfig::from_env())
    }

    pub fn config(&self) -> &AlchemyPayConfig {
        &self.config
    }
}

#[async_trait]
impl OnRampProvider for AlchemyPay {
    fn name(&self) -> &'static str {
        "alchemy-pay"
    }

    async fn begin_purchase(&self, request: &PurchaseRequest) -> Result<Handoff, OnRampError> {
        Ok(Handoff::Redirect(checkout_url(&self.config, request)))
    }
}
