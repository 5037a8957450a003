//! Navigation sidebar: off-canvas on mobile, collapsible on desktop.

use leptos::prelude::*;

use crate::state::ui::{UiState, View};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let class = move || {
        ui.with(|u| {
            let mut class = String::from("sidebar");
            if u.sidebar_open {
                class.push_str(" sidebar--open");
            }
            if u.sidebar_collapsed {
                class.push_str(" sidebar--collapsed");
            }
            class
        })
    };

    let items = View::NAVIGATION
        .into_iter()
        .map(|view| {
            let active = move || ui.with(|u| u.view == view);
            view! {
                <li>
                    <button
                        class="sidebar__item"
                        class:sidebar__item--active=active
                        title=view.label()
                        on:click=move |_| ui.update(|u| u.set_view(view))
                    >
                        <span class="sidebar__label">{view.label()}</span>
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <Show when=move || ui.with(|u| u.sidebar_open)>
            <div class="sidebar-backdrop" on:click=move |_| ui.update(|u| u.sidebar_open = false)></div>
        </Show>
        <aside class=class>
            <div class="sidebar__brand">
                <span class="sidebar__logo">"✉"</span>
                <span class="sidebar__label">"E-Surat"</span>
            </div>
            <nav>
                <ul class="sidebar__nav">{items}</ul>
            </nav>
            <button
                class="sidebar__collapse"
                title="Ciutkan menu"
                on:click=move |_| ui.update(|u| u.sidebar_collapsed = !u.sidebar_collapsed)
            >
                {move || if ui.with(|u| u.sidebar_collapsed) { "»" } else { "«" }}
            </button>
        </aside>
    }
}
