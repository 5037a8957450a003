//! Recording transport for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use records::{Call, Operation, RemoteError};
use serde_json::Value;

use super::api::RemoteApi;
use super::transport::Transport;

/// Replays a scripted reply per operation (default `{success: true}`) and
/// records every call it receives.
#[derive(Default)]
pub(crate) struct FakeTransport {
    replies: HashMap<Operation, Result<Value, RemoteError>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(mut self, operation: Operation, value: Value) -> Self {
        self.replies.insert(operation, Ok(value));
        self
    }

    pub(crate) fn fail(mut self, operation: Operation, err: RemoteError) -> Self {
        self.replies.insert(operation, Err(err));
        self
    }

    pub(crate) fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub(crate) fn count(&self, operation: Operation) -> usize {
        self.calls().iter().filter(|c| c.operation == operation).count()
    }

    pub(crate) fn total(&self) -> usize {
        self.calls().len()
    }
}

/// A [`RemoteApi`] over `fake`, keeping `fake` inspectable.
pub(crate) fn api_over(fake: &Arc<FakeTransport>) -> RemoteApi {
    RemoteApi::new(fake.clone())
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn call(&self, call: Call) -> Result<Value, RemoteError> {
        let reply = self
            .replies
            .get(&call.operation)
            .cloned()
            .unwrap_or_else(|| Ok(serde_json::json!({ "success": true })));
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        reply
    }
}
