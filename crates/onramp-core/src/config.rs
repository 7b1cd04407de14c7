//! Environment-variable plumbing shared by the provider crates.
//!
//! Provider configuration is read from the process environment once at
//! startup and never mutated afterwards. Each provider crate owns its own
//! config struct and `from_env` constructor; this module only carries the
//! shared helpers.

/// Load `.env` values into the process environment. A missing file is fine.
///
/// Call once at startup, before any provider's `from_env` constructor.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Read an environment variable, treating unset and blank as absent.
pub fn env_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}
