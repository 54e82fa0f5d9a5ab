use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::summary::Summary;

/// Trait abstraction for remote advice services.
///
/// The core's only obligation is producing a correct [`Summary`];
/// request construction, authentication, and response handling live
/// behind this trait. If a service changes or disappears, only its
/// implementation is replaced — the rest of the codebase is untouched.
#[async_trait]
pub trait AdviceProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Request free-text advice for the given summary.
    ///
    /// A reply with no usable content is [`CoreError::AdviceUnavailable`];
    /// transport and HTTP failures surface as `Api`/`Network` errors.
    /// Either way the dashboard pipeline is unaffected — advice failures
    /// are reported only in the advice panel.
    async fn advise(&self, summary: &Summary) -> Result<String, CoreError>;
}
