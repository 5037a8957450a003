//! Header with menu toggle, page title, theme switch and profile menu.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::{UiState, View};

#[component]
pub fn TopBar(on_logout: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let title = move || ui.with(|u| u.view.label());
    let name = move || auth.with(AuthState::display_name);
    let photo = move || auth.with(|a| a.user.as_ref().and_then(|u| u.foto_url.clone()));
    let theme_icon = move || match ui.with(|u| u.theme) {
        crate::state::ui::Theme::Light => "☾",
        crate::state::ui::Theme::Dark => "☀",
    };

    view! {
        <header class="top-bar">
            <button
                class="top-bar__menu"
                aria-label="Buka menu"
                on:click=move |_| ui.update(|u| u.sidebar_open = !u.sidebar_open)
            >
                "☰"
            </button>
            <h1 class="top-bar__title">{title}</h1>
            <div class="top-bar__actions">
                <button
                    class="top-bar__theme"
                    aria-label="Ganti tema"
                    on:click=move |_| ui.update(|u| u.theme = u.theme.toggled())
                >
                    {theme_icon}
                </button>
                <div class="profile-menu">
                    <button
                        class="profile-menu__trigger"
                        on:click=move |_| ui.update(UiState::toggle_profile_menu)
                    >
                        {move || match photo() {
                            Some(url) => view! { <img class="avatar" src=url alt="Foto profil"/> }.into_any(),
                            None => view! { <span class="avatar avatar--placeholder">"👤"</span> }.into_any(),
                        }}
                        <span class="profile-menu__name">{name}</span>
                    </button>
                    <Show when=move || ui.with(|u| u.profile_menu_open)>
                        <div
                            class="profile-menu__backdrop"
                            on:mousedown=move |_| ui.update(UiState::dismiss_profile_menu)
                        ></div>
                        <div class="profile-menu__panel">
                            <button
                                class="profile-menu__item"
                                on:click=move |_| ui.update(|u| u.set_view(View::Profile))
                            >
                                "Profil Saya"
                            </button>
                            <button class="profile-menu__item" on:click=move |_| on_logout.run(())>
                                "Logout"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}
