//! Timer primitives over `gloo-timers`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::time::Duration;

/// Resolve after `delay`. Resolves immediately outside the browser.
pub async fn sleep(delay: Duration) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::TimeoutFuture::new(millis(delay)).await;
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = delay;
    }
}

/// A scheduled one-shot callback. Dropping it cancels the callback.
pub struct PendingTimeout {
    #[cfg(feature = "csr")]
    _inner: gloo_timers::callback::Timeout,
}

impl PendingTimeout {
    /// Run `callback` once after `delay`.
    ///
    /// Outside the browser the callback is dropped without running.
    pub fn schedule(delay: Duration, callback: impl FnOnce() + 'static) -> Self {
        #[cfg(feature = "csr")]
        {
            Self {
                _inner: gloo_timers::callback::Timeout::new(millis(delay), callback),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (delay, callback);
            Self {}
        }
    }

    /// Cancel explicitly; equivalent to dropping.
    pub fn cancel(self) {
        drop(self);
    }
}

/// Milliseconds for browser timer APIs, saturating at `u32::MAX`.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}
