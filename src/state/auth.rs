//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app shell reads this to choose between the loading screen, the login
//! page and the main layout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use records::{AuthUser, RemoteError};

/// Signed-in user plus whether the boot-time session check is still pending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// Record the outcome of `checkAuth`. A failed check counts as signed out.
    pub fn finish_session_check(&mut self, result: Result<Option<AuthUser>, RemoteError>) {
        self.user = match result {
            Ok(user) => user,
            Err(err) => {
                log::warn!("session check failed: {err}");
                None
            }
        };
        self.loading = false;
    }

    pub fn signed_in(&mut self, user: AuthUser) {
        self.user = Some(user);
        self.loading = false;
    }

    pub fn signed_out(&mut self) {
        self.user = None;
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Name shown in the header, `Pengguna` when the profile has none.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.nama.trim())
            .filter(|n| !n.is_empty())
            .unwrap_or("Pengguna")
            .to_owned()
    }
}

/// Greeting shown after a successful login.
#[must_use]
pub fn welcome_message(user: &AuthUser) -> String {
    format!("Selamat datang, {}!", user.nama)
}
