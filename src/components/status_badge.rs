//! Colored badge for a record status.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;

/// CSS class for a status label. Unknown labels render neutral.
#[must_use]
pub fn status_badge_class(label: &str) -> &'static str {
    match label {
        "Belum Disposisi" | "Draf" => "badge badge--pending",
        "Sudah Disposisi" | "Terkirim" => "badge badge--done",
        "Diarsipkan" => "badge badge--archived",
        _ => "badge",
    }
}

#[component]
pub fn StatusBadge(label: &'static str) -> impl IntoView {
    view! { <span class=status_badge_class(label)>{label}</span> }
}
