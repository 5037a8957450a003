//! Login page (email + password).

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use records::ValidationError;

use crate::components::spinner::Spinner;
use crate::net::api::RemoteApi;
use crate::net::simulated::{DEMO_EMAIL, DEMO_PASSWORD};
use crate::state::auth::{AuthState, welcome_message};
use crate::state::notification::Notifier;
use crate::state::ui::{UiState, View};

/// Trimmed email and the password, or the message for missing input.
///
/// # Errors
///
/// [`ValidationError::MissingCredentials`] when either is blank.
pub fn validate_credentials(email: &str, password: &str) -> Result<(String, String), ValidationError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<RemoteApi>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let notifier = expect_context::<Notifier>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let simulated = api.transport_name() == "simulated";

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) =
            match validate_credentials(&email.get_untracked(), &password.get_untracked()) {
                Ok(credentials) => credentials,
                Err(err) => {
                    notifier.error(err.to_string());
                    return;
                }
            };
        busy.set(true);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.login(&email_value, &password_value).await {
                Ok(user) => {
                    log::info!("signed in as {}", user.email);
                    notifier.success(welcome_message(&user));
                    ui.update(|u| u.set_view(View::Dashboard));
                    auth.update(|a| a.signed_in(user));
                }
                Err(err) => notifier.error(err.to_string()),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-card__brand">
                    <h1>"Aplikasi Manajemen Surat"</h1>
                    <p>"Kelola surat masuk dan keluar dengan efisien, cepat, dan aman."</p>
                </div>
                <div class="login-card__form">
                    <h2>"Selamat Datang Kembali!"</h2>
                    <p class="login-card__subtitle">"Silakan masuk untuk melanjutkan."</p>
                    <form class="login-form" on:submit=on_submit>
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            class="login-input"
                            type="email"
                            autocomplete="email"
                            placeholder="anda@instansi.go.id"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            class="login-input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary login-button" type="submit" disabled=move || busy.get()>
                            <Show when=move || busy.get()>
                                <Spinner small=true/>
                            </Show>
                            "Masuk"
                        </button>
                    </form>
                    <Show when=move || simulated>
                        <p class="login-hint">
                            "Mode simulasi: gunakan " <code>{DEMO_EMAIL}</code> " / " <code>{DEMO_PASSWORD}</code>
                        </p>
                    </Show>
                </div>
            </div>
        </div>
    }
}
