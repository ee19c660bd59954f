use coach_types::*;
use std::time::Duration;

#[test]
fn gateway_error_display() {
    let err = GatewayError::RateLimited("try again in 30s".into());
    assert!(err.to_string().contains("rate limit"));
}

#[test]
fn gateway_error_is_retryable() {
    assert!(
        GatewayError::Network(Box::new(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "reset"
        )))
        .is_retryable()
    );
    assert!(GatewayError::Timeout(Duration::from_secs(5)).is_retryable());
    assert!(GatewayError::RateLimited("slow down".into()).is_retryable());
    assert!(GatewayError::ServiceUnavailable("down".into()).is_retryable());
    assert!(!GatewayError::Authentication("expired".into()).is_retryable());
    assert!(!GatewayError::UsageLimit("plan exhausted".into()).is_retryable());
    assert!(!GatewayError::AdminRequired("rep role".into()).is_retryable());
    assert!(!GatewayError::InvalidRequest("bad".into()).is_retryable());
    assert!(!GatewayError::InvalidResponse("bad".into()).is_retryable());
}

#[test]
fn network_error_preserves_source() {
    let err = GatewayError::Network(Box::new(std::io::Error::new(
        std::io::ErrorKind::TimedOut,
        "socket timeout",
    )));
    let source = std::error::Error::source(&err);
    assert!(source.is_some());
    assert!(source.unwrap().to_string().contains("socket timeout"));
}

#[test]
fn admin_required_display_names_the_requirement() {
    let err = GatewayError::AdminRequired("transcript chat".into());
    assert!(err.to_string().contains("admin access required"));
}
