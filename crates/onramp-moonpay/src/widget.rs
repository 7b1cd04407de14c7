//! Widget configuration and launch.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use onramp_core::error::OnRampError;
use onramp_core::provider::{Handoff, OnRampProvider};
use onramp_core::types::PurchaseRequest;

use crate::config::{MoonPayConfig, API_KEY_VAR};

/// Currency purchased when the request leaves it unset.
pub const DEFAULT_CURRENCY_CODE: &str = "SOL";

/// Base fiat currency when the request leaves it unset.
pub const DEFAULT_BASE_CURRENCY_CODE: &str = "usd";

/// Widget theme.
pub const WIDGET_THEME: &str = "dark";

/// Widget accent color, the Solana brand purple.
pub const WIDGET_COLOR_CODE: &str = "#9945FF";

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Purchase parameters handed to the widget SDK. Serializes to the
/// camelCase field names of the SDK's JSON contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetParams {
    pub api_key: String,
    pub currency_code: String,
    pub base_currency_code: String,
    pub wallet_address: String,
    pub theme: String,
    pub color_code: String,
}

/// Full widget configuration: the fixed `buy` flow, the deployment
/// environment tag, and the purchase parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    pub flow: String,
    pub environment: String,
    pub params: WidgetParams,
}

/// Build the widget configuration for a purchase request.
///
/// Fails fast with a configuration error when no API key is present,
/// before anything is constructed or any capability touched. The caller
/// has already validated `request.wallet_address`. The request's `network`
/// field is ignored — the widget SDK contract has no network parameter.
pub fn build_widget_config(
    config: &MoonPayConfig,
    request: &PurchaseRequest,
) -> Result<WidgetConfig, OnRampError> {
    let api_key = config.api_key.clone().ok_or_else(|| {
        OnRampError::MissingConfiguration(format!(
            "MoonPay API key is not configured; set {API_KEY_VAR}"
        ))
    })?;

    Ok(WidgetConfig {
        flow: "buy".to_string(),
        environment: config.widget_environment_tag().to_string(),
        params: WidgetParams {
            api_key,
            currency_code: request
                .crypto
                .clone()
                .unwrap_or_else(|| DEFAULT_CURRENCY_CODE.to_string()),
            base_currency_code: request
                .fiat
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_CURRENCY_CODE.to_string()),
            wallet_address: request.wallet_address.clone(),
            theme: WIDGET_THEME.to_string(),
            color_code: WIDGET_COLOR_CODE.to_string(),
        },
    })
}

/// The injected widget-display capability.
///
/// Whatever renders the widget implements this. It resolves once the widget
/// is on screen, or rejects with whatever went wrong.
#[async_trait]
pub trait WidgetHost: Send + Sync {
    async fn show(&self, config: &WidgetConfig) -> Result<(), BoxError>;
}

/// Build the widget configuration and hand it to the display capability.
///
/// The API-key precondition is checked before `host` is ever invoked. A
/// host failure comes back as a launch error carrying the underlying
/// message.
pub async fn launch(
    config: &MoonPayConfig,
    request: &PurchaseRequest,
    host: &dyn WidgetHost,
) -> Result<(), OnRampError> {
    let widget_config = build_widget_config(config, request)?;
    debug!(environment = %widget_config.environment, "opening the purchase widget");
    host.show(&widget_config)
        .await
        .map_err(|e| OnRampError::WidgetLaunch(format!("failed to open MoonPay widget: {e}")))
}

/// Embedded-widget provider: hands control off to the injected widget host.
#[derive(Clone)]
pub struct MoonPay {
    config: MoonPayConfig,
    host: Arc<dyn WidgetHost>,
}

impl MoonPay {
    pub fn new(config: MoonPayConfig, host: Arc<dyn WidgetHost>) -> Self {
        MoonPay { config, host }
    }

    /// Provider configured from the process environment, displaying through
    /// the given host.
    pub fn from_env(host: Arc<dyn WidgetHost>) -> Self {
        MoonPay::new(MoonPayConfig::from_env(), host)
    }

    pub fn config(&self) -> &MoonPayConfig {
        &self.config
    }
}

#[async_trait]
impl OnRampProvider for MoonPay {
    fn name(&self) -> &'static str {
        "moonpay"
    }

    async fn begin_purchase(&self, request: &PurchaseRequest) -> Result<Handoff, OnRampError> {
        launch(&self.config, request, self.host.as_ref()).await?;
        Ok(Handoff::WidgetShown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use onramp_core::types::Environment;

    const ADDRESS: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

    fn config_with_key() -> MoonPayConfig {
        MoonPayConfig::new(Some("pk_test_123".into()), Environment::Test)
    }

    /// Host that records every configuration it is shown, optionally
    /// failing with a fixed message.
    #[derive(Default)]
    struct RecordingHost {
        shown: Mutex<Vec<WidgetConfig>>,
        fail_with: Option<&'static str>,
    }

    #[async_trait]
    impl WidgetHost for RecordingHost {
        async fn show(&self, config: &WidgetConfig) -> Result<(), BoxError> {
            self.shown.lock().unwrap().push(config.clone());
            match self.fail_with {
                Some(message) => Err(message.into()),
                None => Ok(()),
            }
        }
    }

    #[test]
    fn defaults_fill_unset_parameters() {
        let config = build_widget_config(&config_with_key(), &PurchaseRequest::new(ADDRESS))
            .unwrap();
        assert_eq!(config.flow, "buy");
        assert_eq!(config.environment, "sandbox");
        assert_eq!(config.params.api_key, "pk_test_123");
        assert_eq!(config.params.currency_code, "SOL");
        assert_eq!(config.params.base_currency_code, "usd");
        assert_eq!(config.params.wallet_address, ADDRESS);
        assert_eq!(config.params.theme, "dark");
        assert_eq!(config.params.color_code, "#9945FF");
    }

    #[test]
    fn explicit_currencies_pass_through() {
        let request = PurchaseRequest::new(ADDRESS).with_crypto("SOL").with_fiat("eur");
        let config = build_widget_config(&config_with_key(), &request).unwrap();
        assert_eq!(config.params.base_currency_code, "eur");
    }

    #[test]
    fn production_environment_tag() {
        let moonpay = MoonPayConfig::new(Some("pk_live_123".into()), Environment::Production);
        let config = build_widget_config(&moonpay, &PurchaseRequest::new(ADDRESS)).unwrap();
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn missing_api_key_is_a_configuration_error() {
        let moonpay = MoonPayConfig::new(None, Environment::Test);
        let err = build_widget_config(&moonpay, &PurchaseRequest::new(ADDRESS)).unwrap_err();
        assert!(matches!(err, OnRampError::MissingConfiguration(_)));
        assert!(err.to_string().contains("MOONPAY_API_KEY"));
    }

    #[test]
    fn serializes_to_the_sdk_field_names() {
        let config = build_widget_config(&config_with_key(), &PurchaseRequest::new(ADDRESS))
            .unwrap();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["flow"], "buy");
        assert_eq!(json["environment"], "sandbox");
        assert_eq!(json["params"]["apiKey"], "pk_test_123");
        assert_eq!(json["params"]["currencyCode"], "SOL");
        assert_eq!(json["params"]["baseCurrencyCode"], "usd");
        assert_eq!(json["params"]["walletAddress"], ADDRESS);
        assert_eq!(json["params"]["theme"], "dark");
        assert_eq!(json["params"]["colorCode"], "#9945FF");
    }

    #[tokio::test]
    async fn launch_shows_the_widget_once() {
        let host = RecordingHost::default();
        launch(&config_with_key(), &PurchaseRequest::new(ADDRESS), &host)
            .await
            .unwrap();
        let shown = host.shown.lock().unwrap();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].params.wallet_address, ADDRESS);
    }

    #[tokio::test]
    async fn launch_without_api_key_never_invokes_the_host() {
        let host = RecordingHost::default();
        let moonpay = MoonPayConfig::new(None, Environment::Test);
        let err = launch(&moonpay, &PurchaseRequest::new(ADDRESS), &host)
            .await
            .unwrap_err();
        assert!(matches!(err, OnRampError::MissingConfiguration(_)));
        assert!(host.shown.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn host_failure_is_wrapped_with_its_message() {
        let host = RecordingHost {
            fail_with: Some("webview crashed"),
            ..RecordingHost::default()
        };
        let err = launch(&config_with_key(), &PurchaseRequest::new(ADDRESS), &host)
            .await
            .unwrap_err();
        assert!(matches!(err, OnRampError::WidgetLaunch(_)));
        assert!(err.to_string().contains("webview crashed"));
    }
}
