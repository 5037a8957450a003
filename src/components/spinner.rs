//! Loading indicator.

use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional)] small: bool) -> impl IntoView {
    let class = if small { "spinner spinner--small" } else { "spinner" };
    view! { <span class=class role="status" aria-label="Memuat"></span> }
}
