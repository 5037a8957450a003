//! Local UI chrome state (active view, theme, sidebar, profile menu).
//!
//! DESIGN
//! ======
//! Presentation flags live apart from auth and record data so navigation
//! rules can be tested without rendering.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use records::MailType;

/// Screen shown in the main area once signed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Dashboard,
    SuratMasuk,
    SuratKeluar,
    Profile,
}

impl View {
    /// Navigation entries in sidebar order.
    pub const NAVIGATION: [Self; 3] = [Self::Dashboard, Self::SuratMasuk, Self::SuratKeluar];

    /// Register shown by a list view.
    #[must_use]
    pub const fn mail_type(self) -> Option<MailType> {
        match self {
            Self::SuratMasuk => Some(MailType::Masuk),
            Self::SuratKeluar => Some(MailType::Keluar),
            Self::Dashboard | Self::Profile => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::SuratMasuk => "Surat Masuk",
            Self::SuratKeluar => "Surat Keluar",
            Self::Profile => "Profil Saya",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Connection label shown until the probe answers.
pub const CONNECTION_PENDING: &str = "Mengecek koneksi...";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub view: View,
    pub theme: Theme,
    /// Mobile off-canvas sidebar.
    pub sidebar_open: bool,
    /// Desktop narrow sidebar.
    pub sidebar_collapsed: bool,
    pub profile_menu_open: bool,
    pub connection_status: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            view: View::Dashboard,
            theme: Theme::Light,
            sidebar_open: false,
            sidebar_collapsed: false,
            profile_menu_open: false,
            connection_status: CONNECTION_PENDING.to_owned(),
        }
    }
}

impl UiState {
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// Switch screens, closing the mobile sidebar and the profile menu.
    pub fn set_view(&mut self, view: View) {
        self.view = view;
        self.sidebar_open = false;
        self.profile_menu_open = false;
    }

    pub fn toggle_profile_menu(&mut self) {
        self.profile_menu_open = !self.profile_menu_open;
    }

    /// A press anywhere outside the open profile menu.
    pub fn dismiss_profile_menu(&mut self) {
        self.profile_menu_open = false;
    }

    /// Return to the dashboard after logout.
    pub fn reset_after_logout(&mut self) {
        self.set_view(View::Dashboard);
    }
}
