use super::*;

#[test]
fn missing_endpoint_selects_bridge_or_simulated() {
    assert_eq!(SelectionPolicy::from_endpoint(None), SelectionPolicy::BridgeOrSimulated);
}

#[test]
fn blank_endpoint_counts_as_missing() {
    assert_eq!(SelectionPolicy::from_endpoint(Some("   ")), SelectionPolicy::BridgeOrSimulated);
}

#[test]
fn endpoint_selects_http_and_is_trimmed() {
    assert_eq!(
        SelectionPolicy::from_endpoint(Some(" https://script.google.com/macros/s/abc/exec ")),
        SelectionPolicy::Http {
            endpoint: "https://script.google.com/macros/s/abc/exec".to_owned()
        }
    );
}

#[test]
fn default_config_uses_fixed_timings() {
    let config = AppConfig::default();
    assert_eq!(config.notification_ttl, Duration::from_secs(5));
    assert_eq!(config.session_check_delay, Duration::from_millis(100));
    assert!(config.simulated_latency > Duration::ZERO);
}

#[test]
fn build_config_matches_build_endpoint() {
    let config = AppConfig::from_build();
    assert_eq!(config.selection, SelectionPolicy::from_endpoint(BUILD_API_ENDPOINT));
}
