//! Build-time application configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only external setting is the optional HTTP endpoint, baked in at
//! compile time through `SURAT_API_ENDPOINT`. Everything else is a fixed
//! timing constant of the UI.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Endpoint of the HTTP bridge, if this build was configured with one.
pub const BUILD_API_ENDPOINT: Option<&str> = option_env!("SURAT_API_ENDPOINT");

/// How long a notification stays on screen.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Delay between the connectivity probe and the session check at boot.
pub const SESSION_CHECK_DELAY: Duration = Duration::from_millis(100);

/// Artificial latency of the simulated transport.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(300);

/// How the remote-call transport is chosen at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Use the host bridge when present, otherwise simulate the backend.
    BridgeOrSimulated,
    /// Always POST to the given endpoint.
    Http { endpoint: String },
}

impl SelectionPolicy {
    /// Policy implied by an optional endpoint; blank counts as absent.
    #[must_use]
    pub fn from_endpoint(endpoint: Option<&str>) -> Self {
        match endpoint.map(str::trim) {
            Some(url) if !url.is_empty() => Self::Http {
                endpoint: url.to_owned(),
            },
            _ => Self::BridgeOrSimulated,
        }
    }
}

/// Runtime view of the build configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub selection: SelectionPolicy,
    pub notification_ttl: Duration,
    pub session_check_delay: Duration,
    pub simulated_latency: Duration,
}

impl AppConfig {
    /// Configuration of the current build.
    #[must_use]
    pub fn from_build() -> Self {
        Self {
            selection: SelectionPolicy::from_endpoint(BUILD_API_ENDPOINT),
            ..Self::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            selection: SelectionPolicy::BridgeOrSimulated,
            notification_ttl: NOTIFICATION_TTL,
            session_check_delay: SESSION_CHECK_DELAY,
            simulated_latency: SIMULATED_LATENCY,
        }
    }
}
