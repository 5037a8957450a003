//! Light/dark theme persistence.
//!
//! Reads the stored preference from `localStorage` under `theme` and applies
//! the `dark` class to the `<html>` element. Toggling writes back.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort; storage failures leave the in-memory theme
//! authoritative for the session.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::ui::Theme;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "theme";

/// Stored value for a theme.
#[must_use]
pub const fn storage_value(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    }
}

/// Parse a stored value; anything other than `dark` means light.
#[must_use]
pub fn parse_stored(value: Option<&str>) -> Theme {
    match value {
        Some("dark") => Theme::Dark,
        _ => Theme::Light,
    }
}

/// Read the persisted theme. Light when nothing is stored.
pub fn read_preference() -> Theme {
    #[cfg(feature = "csr")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        parse_stored(stored.as_deref())
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::Light
    }
}

/// Apply `theme` to the document root and persist it.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(root) = window.document().and_then(|d| d.document_element()) {
            let classes = root.class_list();
            let _ = match theme {
                Theme::Dark => classes.add_1("dark"),
                Theme::Light => classes.remove_1("dark"),
            };
        }
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, storage_value(theme));
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}
