//! Transport over the host script runner (`google.script.run`).
//!
//! DESIGN
//! ======
//! The runner reports through a success/failure callback pair. [`Settle`]
//! owns the sending half of a oneshot channel and hands out that pair; the
//! first callback to fire wins and later ones are ignored. The transport
//! awaits the receiving half, so the pair becomes one future.

#[cfg(test)]
#[path = "bridge_test.rs"]
mod bridge_test;

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use records::{Call, RemoteError, reject_failed_reply};
use serde_json::Value;

use super::transport::Transport;

type Outcome = Result<Value, String>;

/// One-shot completion handle given to a [`ScriptBridge`] invocation.
#[derive(Clone)]
pub struct Settle {
    slot: Rc<RefCell<Option<oneshot::Sender<Outcome>>>>,
}

impl Settle {
    fn new() -> (Self, oneshot::Receiver<Outcome>) {
        let (tx, rx) = oneshot::channel();
        let settle = Self {
            slot: Rc::new(RefCell::new(Some(tx))),
        };
        (settle, rx)
    }

    /// Success callback.
    pub fn resolve(&self, value: Value) {
        self.finish(Ok(value));
    }

    /// Failure callback.
    pub fn reject(&self, message: String) {
        self.finish(Err(message));
    }

    fn finish(&self, outcome: Outcome) {
        if let Some(tx) = self.slot.borrow_mut().take() {
            let _ = tx.send(outcome);
        }
    }
}

/// A host object able to run named backend functions.
pub trait ScriptBridge: Send + Sync {
    /// Start `function(args...)` and report through `settle` exactly once.
    fn invoke(&self, function: &str, args: &[Value], settle: Settle);
}

/// [`Transport`] over a [`ScriptBridge`].
pub struct BridgeTransport<B> {
    bridge: B,
}

impl<B: ScriptBridge> BridgeTransport<B> {
    pub fn new(bridge: B) -> Self {
        Self { bridge }
    }
}

#[async_trait(?Send)]
impl<B: ScriptBridge> Transport for BridgeTransport<B> {
    fn name(&self) -> &'static str {
        "bridge"
    }

    async fn call(&self, call: Call) -> Result<Value, RemoteError> {
        let (settle, rx) = Settle::new();
        self.bridge.invoke(call.function_name(), &call.args, settle);
        match rx.await {
            Ok(Ok(value)) => reject_failed_reply(call.operation, value),
            Ok(Err(message)) => Err(RemoteError::Transport(message)),
            Err(oneshot::Canceled) => Err(RemoteError::Transport(format!(
                "{} tidak mendapat respons dari server",
                call.function_name()
            ))),
        }
    }
}

#[cfg(feature = "csr")]
pub use host::GoogleScriptBridge;

#[cfg(feature = "csr")]
mod host {
    use js_sys::{Array, Function, JSON, Reflect};
    use serde_json::Value;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    use super::{ScriptBridge, Settle};

    /// The `google.script.run` object of an Apps Script web app.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct GoogleScriptBridge;

    impl GoogleScriptBridge {
        /// `Some` when the page is served by the script host.
        pub fn detect() -> Option<Self> {
            runner().map(|_| Self)
        }
    }

    impl ScriptBridge for GoogleScriptBridge {
        fn invoke(&self, function: &str, args: &[Value], settle: Settle) {
            let Some(run) = runner() else {
                settle.reject(records::RemoteError::BridgeUnavailable.to_string());
                return;
            };
            if let Err(err) = start(&run, function, args, &settle) {
                settle.reject(error_message(&err));
            }
        }
    }

    fn runner() -> Option<JsValue> {
        let mut current: JsValue = js_sys::global().into();
        for key in ["google", "script", "run"] {
            current = Reflect::get(&current, &JsValue::from_str(key)).ok()?;
            if current.is_undefined() || current.is_null() {
                return None;
            }
        }
        Some(current)
    }

    fn start(run: &JsValue, function: &str, args: &[Value], settle: &Settle) -> Result<(), JsValue> {
        let on_success = {
            let settle = settle.clone();
            Closure::once_into_js(move |reply: JsValue| {
                if reply.is_instance_of::<js_sys::Error>() {
                    settle.reject(error_message(&reply));
                } else {
                    settle.resolve(to_json(&reply));
                }
            })
        };
        let on_failure = {
            let settle = settle.clone();
            Closure::once_into_js(move |err: JsValue| settle.reject(error_message(&err)))
        };

        let runner = method(run, "withSuccessHandler")?.call1(run, &on_success)?;
        let runner = method(&runner, "withFailureHandler")?.call1(&runner, &on_failure)?;

        let js_args = Array::new();
        for arg in args {
            js_args.push(&to_js(arg)?);
        }
        method(&runner, function)?.apply(&runner, &js_args)?;
        Ok(())
    }

    fn method(target: &JsValue, name: &str) -> Result<Function, JsValue> {
        Reflect::get(target, &JsValue::from_str(name))?
            .dyn_into::<Function>()
            .map_err(|_| JsValue::from_str(&format!("{name} bukan fungsi")))
    }

    fn to_js(value: &Value) -> Result<JsValue, JsValue> {
        let text = serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        JSON::parse(&text)
    }

    fn to_json(value: &JsValue) -> Value {
        JSON::stringify(value)
            .ok()
            .and_then(|s| s.as_string())
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or(Value::Null)
    }

    fn error_message(err: &JsValue) -> String {
        if let Some(err) = err.dyn_ref::<js_sys::Error>() {
            return String::from(err.message());
        }
        err.as_string().unwrap_or_else(|| format!("{err:?}"))
    }
}
