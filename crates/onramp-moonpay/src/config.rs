use onramp_core::config::env_var;
use onramp_core::types::Environment;

/// Environment variable holding the MoonPay API key. Required before a
/// widget can be launched; Variant-A-only deployments may leave it unset.
pub const API_KEY_VAR: &str = "MOONPAY_API_KEY";

/// Environment variable selecting the MoonPay environment.
pub const ENV_VAR: &str = "MOONPAY_ENV";

/// Process-wide MoonPay settings, read once at startup.
#[derive(Debug, Clone)]
pub struct MoonPayConfig {
    /// API key. Checked at widget-build time, not here, so loading never
    /// fails.
    pub api_key: Option<String>,
    pub environment: Environment,
}

impl MoonPayConfig {
    pub fn new(api_key: Option<String>, environment: Environment) -> Self {
        MoonPayConfig { api_key, environment }
    }

    /// Read configuration from [`API_KEY_VAR`] and [`ENV_VAR`]. An unset or
    /// unrecognized environment tag selects the sandbox.
    pub fn from_env() -> Self {
        let environment = env_var(ENV_VAR)
            .map(|tag| Environment::from_tag(&tag))
            .unwrap_or_default();
        MoonPayConfig::new(env_var(API_KEY_VAR), environment)
    }

    /// Environment tag in the widget SDK's vocabulary.
    pub fn widget_environment_tag(&self) -> &'static str {
        match self.environment {
            Environment::Production => "production",
            Environment::Test => "sandbox",
        }
    }
}
