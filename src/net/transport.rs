//! The transport seam shared by bridge, simulated and HTTP calls.

use async_trait::async_trait;
use records::{Call, RemoteError};
use serde_json::Value;

/// Carries one [`Call`] to the backend and yields its raw reply.
///
/// Implementations are interchangeable: callers never learn which one is
/// active. Futures are not `Send`; they run on the browser event loop.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Perform the call once. No retry.
    async fn call(&self, call: Call) -> Result<Value, RemoteError>;
}
