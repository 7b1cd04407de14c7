//! Solana wallet address validation.
//!
//! Solana addresses are Base58-encoded 32-byte Ed25519 public keys, which
//! encode to between 32 and 44 characters. The alphabet is the standard
//! Bitcoin Base58 alphabet used by the `bs58` crate: digits and letters
//! minus the visually ambiguous `0`, `O`, `I`, `l`.
//!
//! Validation here is a syntactic pre-filter only: length bounds plus
//! alphabet membership. It deliberately does not decode to a fixed byte
//! length, check an on-curve point, or look the account up on any network —
//! a pure validator makes no network calls, so an address that passes here
//! may still not exist on-chain.

use std::fmt;
use std::str::FromStr;

use crate::error::OnRampError;

/// Minimum character length of a Base58-encoded Solana address.
pub const MIN_ADDRESS_LEN: usize = 32;

/// Maximum character length of a Base58-encoded Solana address.
pub const MAX_ADDRESS_LEN: usize = 44;

/// Check whether a string is a syntactically plausible Solana address.
///
/// Leading and trailing whitespace is ignored. After trimming, the input
/// must be 32 to 44 characters, all drawn from the Base58 alphabet.
/// Deterministic, no side effects.
pub fn is_valid_address(raw: &str) -> bool {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return false;
    }

    if trimmed.len() < MIN_ADDRESS_LEN || trimmed.len() > MAX_ADDRESS_LEN {
        return false;
    }

    // The bs58 decoder rejects any character outside the alphabet, which is
    // exactly the membership check needed here. The decoded bytes are not
    // inspected.
    bs58::decode(trimmed).into_vec().is_ok()
}

/// A syntactically validated Solana wallet address.
///
/// Values of this type only come out of [`WalletAddress::parse`], so holding
/// one means the (trimmed) string passed [`is_valid_address`]. The purchase
/// builders take plain strings and rely on the caller having validated them;
/// this type is for callers who want that precondition carried in the type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Validate a raw address string, trimming surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, OnRampError> {
        let trimmed = raw.trim();
        if is_valid_address(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(OnRampError::InvalidAddress(format!(
                "not a plausible Solana address ({} characters after trim)",
                trimmed.chars().count()
            )))
        }
    }

    /// The validated address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper, returning the owned address string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for WalletAddress {
    type Err = OnRampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
