use onramp_core::config::env_var;
use onramp_core::types::Environment;

/// Environment variable holding the application id issued by Alchemy Pay.
pub const APP_ID_VAR: &str = "ALCHEMY_PAY_APP_ID";

/// Environment variable selecting the Alchemy Pay environment.
pub const ENV_VAR: &str = "ALCHEMY_PAY_ENV";

/// Hosted checkout host, production.
pub const PRODUCTION_HOST: &str = "https://ramp.alchemypay.org";

/// Hosted checkout host, sandbox.
pub const TEST_HOST: &str = "https://ramptest.alchemypay.org";

/// Process-wide Alchemy Pay settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AlchemyPayConfig {
    /// Application id. Optional: checkout URLs can still be built without
    /// one, with an empty `appId` parameter and a warning.
    pub app_id: Option<String>,
    pub environment: Environment,
}

impl AlchemyPayConfig {
    pub fn new(app_id: Option<String>, environment: Environment) -> Self {
        AlchemyPayConfig { app_id, environment }
    }

    /// Read configuration from [`APP_ID_VAR`] and [`ENV_VAR`]. An unset or
    /// unrecognized environment tag selects the sandbox host.
    pub fn from_env() -> Self {
        let environment = env_var(ENV_VAR)
            .map(|tag| Environment::from_tag(&tag))
            .unwrap_or_default();
        AlchemyPayConfig::new(env_var(APP_ID_VAR), environment)
    }

    /// Base host of the hosted checkout for this environment.
    pub fn base_url(&self) -> &'static str {
        match self.environment {
            Environment::Production => PRODUCTION_HOST,
            Environment::Test => TEST_HOST,
        }
    }
}
