//! Per-interaction purchase flow.
//!
//! Drives the UI-level state machine: Idle -> Validating -> hand-off or
//! error -> Idle. State is scoped to one interaction instance, never a
//! global; transitions happen only inside [`PurchaseFlow::submit`], the
//! single user action. No retries, timers, or background polling — a new
//! attempt is possible as soon as the flow is back at Idle, which every
//! exit path guarantees.

use tracing::debug;

use crate::address::is_valid_address;
use crate::error::OnRampError;
use crate::provider::{Handoff, OnRampProvider};
use crate::types::PurchaseRequest;

/// Inline message for an empty address field.
pub const EMPTY_ADDRESS_MESSAGE: &str = "Please enter your Solana wallet address";

/// Inline message for a malformed address.
pub const INVALID_ADDRESS_MESSAGE: &str =
    "Please enter a valid Solana wallet address (32-44 characters)";

/// Generic retry prompt shown when the provider hand-off fails.
pub const HANDOFF_FAILED_MESSAGE: &str = "Failed to initiate payment. Please try again.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlowState {
    #[default]
    Idle,
    Validating,
    HandingOff,
}

/// State for one purchase interaction: the current phase and the message to
/// show inline after a failed attempt.
#[derive(Debug, Default)]
pub struct PurchaseFlow {
    state: FlowState,
    last_error: Option<String>,
}

impl PurchaseFlow {
    pub fn new() -> Self {
        PurchaseFlow::default()
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Message from the last failed attempt, cleared on the next submit.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Run one purchase attempt.
    ///
    /// The wallet address in `request` is the raw user input: it is trimmed
    /// and validated here before the provider sees it. On success the
    /// returned [`Handoff`] tells the caller what to do next; on failure
    /// the user-facing message is recorded in [`last_error`]. Either way
    /// the flow ends at Idle.
    ///
    /// [`last_error`]: PurchaseFlow::last_error
    pub async fn submit(
        &mut self,
        mut request: PurchaseRequest,
        provider: &dyn OnRampProvider,
    ) -> Result<Handoff, OnRampError> {
        self.last_error = None;
        self.state = FlowState::Validating;

        let trimmed = request.wallet_address.trim();
        if trimmed.is_empty() {
            return Err(self.fail(OnRampError::InvalidAddress(EMPTY_ADDRESS_MESSAGE.into())));
        }
        if !is_valid_address(trimmed) {
            return Err(self.fail(OnRampError::InvalidAddress(INVALID_ADDRESS_MESSAGE.into())));
        }
        request.wallet_address = trimmed.to_string();

        self.state = FlowState::HandingOff;
        debug!(provider = provider.name(), "handing off purchase");

        match provider.begin_purchase(&request).await {
            Ok(handoff) => {
                self.state = FlowState::Idle;
                Ok(handoff)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Record the user-facing message for `err` and return to Idle.
    fn fail(&mut self, err: OnRampError) -> OnRampError {
        let message = match &err {
            OnRampError::InvalidAddress(msg) => msg.clone(),
            // Configuration problems need the operator, so the descriptive
            // message goes through; widget failures get the generic retry
            // prompt.
            OnRampError::MissingConfiguration(_) => err.to_string(),
            OnRampError::WidgetLaunch(_) => HANDOFF_FAILED_MESSAGE.to_string(),
        };
        self.last_error = Some(message);
        self.state = FlowState::Idle;
        err
    }
}
