//! Dashboard counter card.

use leptos::prelude::*;

#[component]
pub fn StatCard(label: &'static str, value: u32, #[prop(optional)] accent: &'static str) -> impl IntoView {
    let class = if accent.is_empty() {
        "stat-card".to_owned()
    } else {
        format!("stat-card stat-card--{accent}")
    };
    view! {
        <div class=class>
            <p class="stat-card__label">{label}</p>
            <p class="stat-card__value">{value}</p>
        </div>
    }
}
