//! Error types for the coach gateway client.

use std::time::Duration;

/// Errors from coach gateway operations.
///
/// Precondition failures (bad session, quota, role) are detected from the
/// HTTP status *before* any stream decoding starts, so they always surface
/// as one of these variants rather than through a stream callback.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    // Retryable errors
    /// Network-level error (connection reset, DNS failure, etc.).
    #[error("network error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// Request timed out.
    #[error("timeout after {0:?}")]
    Timeout(Duration),
    /// Rate limited by the gateway.
    #[error("rate limit: {0}")]
    RateLimited(String),
    /// Gateway or upstream provider is temporarily unavailable.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    // Terminal errors
    /// Missing or expired session.
    #[error("authentication failed: {0}")]
    Authentication(String),
    /// Plan usage limit exhausted.
    #[error("usage limit: {0}")]
    UsageLimit(String),
    /// The endpoint requires the admin role.
    #[error("admin access required: {0}")]
    AdminRequired(String),
    /// Malformed or rejected request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// The gateway returned a response the client could not interpret.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    /// Whether this error is likely transient and the request can be retried.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network(_)
                | Self::Timeout(_)
                | Self::RateLimited(_)
                | Self::ServiceUnavailable(_)
        )
    }
}
