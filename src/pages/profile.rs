//! Profile editor for the signed-in user.

use leptos::prelude::*;

use crate::components::spinner::Spinner;
use crate::net::api::RemoteApi;
use crate::state::auth::AuthState;
use crate::state::notification::Notifier;
use crate::state::profile_form::{PROFILE_UPDATED_MESSAGE, ProfileForm, fetch_latest};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let api = expect_context::<RemoteApi>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifier = expect_context::<Notifier>();

    let form = RwSignal::new(
        auth.with_untracked(|a| a.user.as_ref().map(ProfileForm::from_user))
            .unwrap_or_default(),
    );
    let submitting = RwSignal::new(false);

    if let Some(shown) = auth.with_untracked(|a| a.user.clone()) {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            if let Some(latest) = fetch_latest(&api).await {
                form.update(|f| f.refresh_from(&shown, &latest));
                auth.update(|a| a.signed_in(latest));
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let Some(user) = auth.with_untracked(|a| a.user.clone()) else {
            return;
        };
        submitting.set(true);
        let current = form.get_untracked();
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match current.submit(&api, &user).await {
                Ok(updated) => {
                    auth.update(|a| a.signed_in(updated));
                    notifier.success(PROFILE_UPDATED_MESSAGE);
                }
                Err(err) => notifier.error(err.describe("Gagal memperbarui profil: ")),
            }
            submitting.set(false);
        });
    };

    let on_photo = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            leptos::task::spawn_local(async move {
                if let Some(picked) = crate::util::file_reader::read_first_file(&input).await {
                    form.update(|f| f.set_photo(&picked.name, &picked.mime_type, &picked.data_url));
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let text_field = move |id: &'static str, label: &'static str, placeholder: &'static str| {
        let value = move || {
            form.with(|f| match id {
                "Nama" => f.nama.clone(),
                "Jabatan" => f.jabatan.clone(),
                _ => f.unit.clone(),
            })
        };
        let on_input = move |ev: leptos::ev::Event| {
            let text = event_target_value(&ev);
            form.update(|f| match id {
                "Nama" => f.nama = text,
                "Jabatan" => f.jabatan = text,
                _ => f.unit = text,
            });
        };
        view! {
            <div class="form-field">
                <label for=id>{label}</label>
                <input
                    id=id
                    type="text"
                    placeholder=placeholder
                    prop:value=value
                    on:input=on_input
                    disabled=move || submitting.get()
                />
            </div>
        }
    };

    let email = move || auth.with(|a| a.user.as_ref().map(|u| u.email.clone()).unwrap_or_default());

    view! {
        <section class="profile">
            <h2 class="page-title">"Profil Saya"</h2>
            <form class="profile__card" on:submit=on_submit>
                <div class="profile__photo">
                    {move || match form.with(|f| f.photo_preview.clone()) {
                        Some(src) => view! { <img class="avatar avatar--large" src=src alt="Foto profil"/> }.into_any(),
                        None => view! { <span class="avatar avatar--large avatar--placeholder">"👤"</span> }.into_any(),
                    }}
                    <label class="btn btn--secondary" for="photo-upload">"Ganti Foto"</label>
                    <input id="photo-upload" class="sr-only" type="file" accept="image/*" on:change=on_photo/>
                </div>
                <div class="profile__fields">
                    <div class="form-field">
                        <label for="Email">"Email"</label>
                        <input id="Email" type="email" class="input--readonly" prop:value=email readonly=true/>
                    </div>
                    {text_field("Nama", "Nama Lengkap", "Nama lengkap Anda")}
                    {text_field("Jabatan", "Jabatan", "e.g., Staf, Guru, Admin")}
                    {text_field("Unit", "Unit Kerja", "e.g., Tata Usaha, Kurikulum")}
                </div>
                <div class="profile__actions">
                    <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                        <Show when=move || submitting.get()>
                            <Spinner small=true/>
                        </Show>
                        "Simpan Perubahan"
                    </button>
                </div>
            </form>
        </section>
    }
}
