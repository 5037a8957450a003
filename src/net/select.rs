//! One-time transport selection at startup.

#[cfg(test)]
#[path = "select_test.rs"]
mod select_test;

use std::sync::Arc;
use std::time::Duration;

use super::bridge::{BridgeTransport, ScriptBridge};
use super::http::HttpTransport;
use super::simulated::SimulatedTransport;
use super::transport::Transport;
use crate::config::{AppConfig, SelectionPolicy};

/// Pick the transport for `policy`, given the result of probing for a bridge.
pub fn select_with_probe<B: ScriptBridge + 'static>(
    policy: &SelectionPolicy,
    bridge: Option<B>,
    simulated_latency: Duration,
) -> Arc<dyn Transport> {
    let transport: Arc<dyn Transport> = match (policy, bridge) {
        (SelectionPolicy::Http { endpoint }, _) => Arc::new(HttpTransport::new(endpoint.clone())),
        (SelectionPolicy::BridgeOrSimulated, Some(bridge)) => Arc::new(BridgeTransport::new(bridge)),
        (SelectionPolicy::BridgeOrSimulated, None) => {
            log::warn!("google.script.run not found; using simulated backend");
            Arc::new(SimulatedTransport::new(simulated_latency))
        }
    };
    log::info!("remote transport: {} ({policy:?})", transport.name());
    transport
}

/// Pick the transport for this build and page.
pub fn select_transport(config: &AppConfig) -> Arc<dyn Transport> {
    #[cfg(feature = "csr")]
    {
        let probe = match config.selection {
            SelectionPolicy::BridgeOrSimulated => super::bridge::GoogleScriptBridge::detect(),
            SelectionPolicy::Http { .. } => None,
        };
        select_with_probe(&config.selection, probe, config.simulated_latency)
    }
    #[cfg(not(feature = "csr"))]
    {
        select_with_probe::<NoBridge>(&config.selection, None, config.simulated_latency)
    }
}

/// Probe result outside the browser: there is never a host bridge.
#[cfg(not(feature = "csr"))]
struct NoBridge;

#[cfg(not(feature = "csr"))]
impl ScriptBridge for NoBridge {
    fn invoke(&self, _function: &str, _args: &[serde_json::Value], settle: super::bridge::Settle) {
        settle.reject(records::RemoteError::BridgeUnavailable.to_string());
    }
}
