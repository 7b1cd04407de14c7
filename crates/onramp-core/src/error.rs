use thiserror::Error;

/// On-ramp operation errors.
///
/// None of these are fatal to the process and none trigger an automatic
/// retry: an invalid address goes back to the user as an inline message, a
/// missing secret needs an operator to set it, and a failed widget launch
/// surfaces a retry prompt.
#[derive(Debug, Error)]
pub enum OnRampError {
    /// The supplied wallet address failed the syntactic pre-filter.
    #[error("invalid wallet address: {0}")]
    InvalidAddress(String),

    /// A required configuration value is absent. The message names the
    /// environment variable to set.
    #[error("missing configuration: {0}")]
    MissingConfiguration(String),

    /// The external widget capability failed; carries the underlying
    /// message.
    #[error("widget launch failed: {0}")]
    WidgetLaunch(String),
}
