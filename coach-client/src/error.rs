//! Internal error helpers for mapping HTTP/reqwest errors to [`GatewayError`].

use std::time::Duration;

use coach_types::GatewayError;

/// Map an HTTP status code from the gateway to a [`GatewayError`].
///
/// The gateway classifies precondition failures by status: 401 for a
/// missing or expired session, 402 when the plan's usage limit is
/// exhausted, 403 when an endpoint needs the admin role, 429 for rate
/// limiting.
pub(crate) fn map_http_status(status: reqwest::StatusCode, body: &str) -> GatewayError {
    match status.as_u16() {
        401 => GatewayError::Authentication(body.to_string()),
        402 => GatewayError::UsageLimit(body.to_string()),
        403 => GatewayError::AdminRequired(body.to_string()),
        429 => GatewayError::RateLimited(body.to_string()),
        500..=599 => GatewayError::ServiceUnavailable(body.to_string()),
        _ => GatewayError::InvalidRequest(format!("HTTP {status}: {body}")),
    }
}

/// Map a [`reqwest::Error`] to a [`GatewayError`].
pub(crate) fn map_reqwest_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        // Generic duration; the configured client timeout isn't known here.
        GatewayError::Timeout(Duration::from_secs(30))
    } else {
        GatewayError::Network(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn unauthorized_maps_to_authentication() {
        let err = map_http_status(StatusCode::UNAUTHORIZED, "session expired");
        assert!(matches!(err, GatewayError::Authentication(_)));
    }

    #[test]
    fn payment_required_maps_to_usage_limit() {
        let err = map_http_status(StatusCode::PAYMENT_REQUIRED, "monthly quota reached");
        assert!(matches!(err, GatewayError::UsageLimit(_)));
    }

    #[test]
    fn forbidden_maps_to_admin_required() {
        let err = map_http_status(StatusCode::FORBIDDEN, "admin only");
        assert!(matches!(err, GatewayError::AdminRequired(_)));
    }

    #[test]
    fn too_many_requests_maps_to_rate_limited() {
        let err = map_http_status(StatusCode::TOO_MANY_REQUESTS, "slow down");
        assert!(matches!(err, GatewayError::RateLimited(_)));
    }

    #[test]
    fn server_errors_map_to_service_unavailable() {
        for code in [500u16, 502, 503, 529] {
            let status = StatusCode::from_u16(code).unwrap();
            let err = map_http_status(status, "upstream down");
            assert!(matches!(err, GatewayError::ServiceUnavailable(_)), "{code}");
        }
    }

    #[test]
    fn other_statuses_map_to_invalid_request() {
        let err = map_http_status(StatusCode::NOT_FOUND, "no such endpoint");
        assert!(matches!(err, GatewayError::InvalidRequest(_)));
        assert!(err.to_string().contains("404"));
    }
}
