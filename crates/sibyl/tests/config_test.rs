//! Tests for retry-policy configuration parsing.

use sibyl::config::parse_retry_policy;
use sibyl_database::RetryPolicy;
use std::time::Duration;

#[test]
fn defaults_apply_when_nothing_is_set() {
    let policy = parse_retry_policy(None, None).unwrap();
    assert_eq!(policy, RetryPolicy::default());
}

#[test]
fn explicit_values_override_defaults() {
    let policy = parse_retry_policy(Some("5".into()), Some("250".into())).unwrap();
    assert_eq!(policy.max_attempts, 5);
    assert_eq!(policy.delay, Duration::from_millis(250));
}

#[test]
fn non_numeric_values_are_rejected() {
    let err = parse_retry_policy(Some("three".into()), None).unwrap_err();
    assert!(err.message.contains("SIBYL_MAX_ATTEMPTS"));

    let err = parse_retry_policy(None, Some("soon".into())).unwrap_err();
    assert!(err.message.contains("SIBYL_RETRY_DELAY_MS"));
}

#[test]
fn zero_attempts_is_rejected() {
    let err = parse_retry_policy(Some("0".into()), None).unwrap_err();
    assert!(err.message.contains("at least 1"));
}
