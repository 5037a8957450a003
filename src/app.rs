//! Root component: context wiring, boot sequence and the main layout.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` chooses the transport once, provides the shared state signals and
//! the notifier, then starts two independent boot calls: the connectivity
//! probe immediately and the session check after a short delay. Until the
//! session check answers only a spinner is shown.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use records::{PingReply, RemoteError};

use crate::components::notification_toast::NotificationToast;
use crate::components::sidebar::Sidebar;
use crate::components::spinner::Spinner;
use crate::components::top_bar::TopBar;
use crate::config::AppConfig;
use crate::net::api::RemoteApi;
use crate::net::select::select_transport;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::surat_list::SuratListPage;
use crate::state::auth::AuthState;
use crate::state::notification::{NotificationState, Notifier};
use crate::state::ui::{UiState, View};
use crate::util::{theme, timer};

pub const LOGOUT_MESSAGE: &str = "Anda telah berhasil logout.";
pub const LOGOUT_FAILED_MESSAGE: &str = "Gagal logout.";

/// Footer label for the outcome of the connectivity probe.
#[must_use]
pub fn connection_label(result: &Result<PingReply, RemoteError>) -> String {
    match result {
        Ok(reply) if reply.success => {
            format!("Koneksi: {}", reply.source.as_deref().unwrap_or("tidak diketahui"))
        }
        Ok(_) => "Koneksi: Gagal terhubung ke backend.".to_owned(),
        Err(err) => format!("Koneksi Error: {err}"),
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build();
    let api = RemoteApi::new(select_transport(&config));
    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::with_theme(theme::read_preference()));
    let notifier = Notifier::new(RwSignal::new(NotificationState::default()), config.notification_ttl);

    provide_context(api.clone());
    provide_context(auth);
    provide_context(ui);
    provide_context(notifier);

    let current_theme = Memo::new(move |_| ui.with(|u| u.theme));
    Effect::new(move || theme::apply(current_theme.get()));

    boot(&api, auth, ui, &config);

    view! {
        <Title text="Aplikasi Manajemen Surat"/>
        <Show
            when=move || !auth.with(|a| a.loading)
            fallback=|| view! { <div class="boot-screen"><Spinner/></div> }
        >
            <Show when=move || auth.with(AuthState::is_signed_in) fallback=|| view! { <LoginPage/> }>
                <MainLayout/>
            </Show>
        </Show>
        <NotificationToast/>
    }
}

fn boot(api: &RemoteApi, auth: RwSignal<AuthState>, ui: RwSignal<UiState>, config: &AppConfig) {
    let probe = api.clone();
    leptos::task::spawn_local(async move {
        let label = connection_label(&probe.ping().await);
        log::info!("{label}");
        ui.update(|u| u.connection_status = label);
    });

    let session = api.clone();
    let delay = config.session_check_delay;
    leptos::task::spawn_local(async move {
        timer::sleep(delay).await;
        let result = session.check_auth().await;
        auth.update(|a| a.finish_session_check(result));
    });
}

#[component]
fn MainLayout() -> impl IntoView {
    let api = expect_context::<RemoteApi>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let notifier = expect_context::<Notifier>();

    let on_logout = Callback::new(move |()| {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.logout().await {
                Ok(_) => {
                    auth.update(AuthState::signed_out);
                    ui.update(UiState::reset_after_logout);
                    notifier.info(LOGOUT_MESSAGE);
                }
                Err(_) => notifier.error(LOGOUT_FAILED_MESSAGE),
            }
        });
    });

    let active_view = Memo::new(move |_| ui.with(|u| u.view));
    let content = move || match active_view.get() {
        View::Dashboard => view! { <DashboardPage/> }.into_any(),
        View::SuratMasuk => view! { <SuratListPage mail_type=records::MailType::Masuk/> }.into_any(),
        View::SuratKeluar => view! { <SuratListPage mail_type=records::MailType::Keluar/> }.into_any(),
        View::Profile => view! { <ProfilePage/> }.into_any(),
    };

    view! {
        <div class="layout" class:layout--collapsed=move || ui.with(|u| u.sidebar_collapsed)>
            <Sidebar/>
            <div class="layout__main">
                <TopBar on_logout=on_logout/>
                <main class="layout__content">{content}</main>
                <footer class="layout__footer">
                    <span>{move || ui.with(|u| u.connection_status.clone())}</span>
                </footer>
            </div>
        </div>
    }
}
