use super::*;
use crate::net::bridge::Settle;

struct StubBridge;

impl ScriptBridge for StubBridge {
    fn invoke(&self, _function: &str, _args: &[serde_json::Value], settle: Settle) {
        settle.resolve(serde_json::json!({ "success": true, "source": "stub" }));
    }
}

#[test]
fn http_policy_wins_even_when_bridge_present() {
    let policy = SelectionPolicy::Http {
        endpoint: "https://example.invalid/exec".to_owned(),
    };
    let transport = select_with_probe(&policy, Some(StubBridge), Duration::ZERO);
    assert_eq!(transport.name(), "http");
}

#[test]
fn present_bridge_is_used() {
    let transport = select_with_probe(&SelectionPolicy::BridgeOrSimulated, Some(StubBridge), Duration::ZERO);
    assert_eq!(transport.name(), "bridge");
}

#[test]
fn absent_bridge_falls_back_to_simulation() {
    let transport = select_with_probe::<StubBridge>(&SelectionPolicy::BridgeOrSimulated, None, Duration::ZERO);
    assert_eq!(transport.name(), "simulated");
}

#[cfg(not(feature = "csr"))]
#[test]
fn default_native_config_simulates() {
    let transport = select_transport(&AppConfig::default());
    assert_eq!(transport.name(), "simulated");
}
