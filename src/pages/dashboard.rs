//! Dashboard page with the five mail counters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing view after sign-in. Stats are fetched once per mount.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use records::DashboardStats;

use crate::components::spinner::Spinner;
use crate::components::stat_card::StatCard;
use crate::net::api::RemoteApi;
use crate::state::notification::Notifier;

/// Card label, value and accent for each counter, in display order.
#[must_use]
pub fn stat_cards(stats: &DashboardStats) -> [(&'static str, u32, &'static str); 5] {
    [
        ("Total Surat Masuk", stats.total_masuk, "blue"),
        ("Total Surat Keluar", stats.total_keluar, "green"),
        ("Surat Masuk Bulan Ini", stats.masuk_bulan_ini, "indigo"),
        ("Surat Keluar Bulan Ini", stats.keluar_bulan_ini, "teal"),
        ("Belum Disposisi", stats.belum_disposisi, "amber"),
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<RemoteApi>();
    let notifier = expect_context::<Notifier>();

    let stats = RwSignal::new(None::<DashboardStats>);
    let loading = RwSignal::new(true);

    leptos::task::spawn_local(async move {
        match api.get_dashboard_stats().await {
            Ok(loaded) => stats.set(Some(loaded)),
            Err(err) => notifier.error(format!("Gagal memuat statistik: {err}")),
        }
        loading.set(false);
    });

    view! {
        <section class="dashboard">
            <h2 class="page-title">"Ringkasan"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <div class="page-loading"><Spinner/></div> }>
                {move || {
                    let current = stats.get().unwrap_or_default();
                    stat_cards(&current)
                        .into_iter()
                        .map(|(label, value, accent)| view! { <StatCard label=label value=value accent=accent/> })
                        .collect_view()
                }}
            </Show>
        </section>
    }
}
