//! The single transient notification (toast).
//!
//! DESIGN
//! ======
//! Only the most recent notification is kept. Each one gets a fresh id, and
//! the auto-dismiss timer clears the toast only if that id is still current,
//! so a timer left over from a replaced notification cannot hide a newer
//! one. [`Notifier`] additionally drops the previous timer when a new toast
//! is shown or the toast is dismissed by hand.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

use std::time::Duration;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::util::timer::PendingTimeout;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationState {
    pub current: Option<Notification>,
    next_id: u64,
}

impl NotificationState {
    /// Replace the current notification; returns the new one's id.
    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.current = Some(Notification {
            id: self.next_id,
            message: message.into(),
            kind,
        });
        self.next_id
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Timer expiry for notification `id`; ignored if it was replaced.
    pub fn expire(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
        }
    }
}

/// Context handle for raising notifications from any component.
#[derive(Clone, Copy)]
pub struct Notifier {
    state: RwSignal<NotificationState>,
    timer: StoredValue<Option<PendingTimeout>, LocalStorage>,
    ttl: Duration,
}

impl Notifier {
    pub fn new(state: RwSignal<NotificationState>, ttl: Duration) -> Self {
        Self {
            state,
            timer: StoredValue::new_local(None),
            ttl,
        }
    }

    #[must_use]
    pub fn state(&self) -> RwSignal<NotificationState> {
        self.state
    }

    pub fn show(&self, kind: NotificationKind, message: impl Into<String>) {
        let message = message.into();
        let Some(id) = self.state.try_update(|s| s.show(kind, message)) else {
            return;
        };
        let state = self.state;
        let pending = PendingTimeout::schedule(self.ttl, move || state.update(|s| s.expire(id)));
        self.timer.set_value(Some(pending));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(NotificationKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(NotificationKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(NotificationKind::Info, message);
    }

    pub fn dismiss(&self) {
        self.timer.set_value(None);
        self.state.update(NotificationState::dismiss);
    }
}
