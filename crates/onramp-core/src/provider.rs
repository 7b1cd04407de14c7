//! The polymorphic on-ramp provider seam.
//!
//! The two integration styles this workspace ships (hosted checkout
//! redirect, embedded widget) are variants of one capability. A new
//! provider is a third implementation of [`OnRampProvider`], not a change
//! to the existing ones.

use async_trait::async_trait;
use url::Url;

use crate::error::OnRampError;
use crate::types::PurchaseRequest;

/// How control leaves this library once a purchase attempt is under way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handoff {
    /// Navigate the user to this hosted checkout URL.
    Redirect(Url),
    /// The embedded widget is on screen; nothing further to do here.
    WidgetShown,
}

/// A fiat-to-crypto on-ramp integration.
///
/// Callers validate the wallet address in the request before calling
/// [`begin_purchase`](OnRampProvider::begin_purchase); implementations do
/// not re-validate it.
#[async_trait]
pub trait OnRampProvider: Send + Sync {
    /// Provider name for log lines.
    fn name(&self) -> &'static str;

    /// Begin a purchase: produce a redirect URL or put a widget on screen.
    async fn begin_purchase(&self, request: &PurchaseRequest)
        -> Result<Handoff, OnRampError>;
}
