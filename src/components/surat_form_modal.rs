//! Create/edit dialog for a mail record.
//!
//! The dialog owns a [`SuratForm`] signal. Opening it for a new outgoing
//! letter shows a spinner until the backend has issued a number.

use leptos::prelude::*;
use records::{MailType, Surat};

use crate::components::spinner::Spinner;
use crate::net::api::RemoteApi;
use crate::state::notification::Notifier;
use crate::state::surat_form::{FieldInput, SuratForm, form_fields, saved_message};

#[component]
pub fn SuratFormModal(
    mail_type: MailType,
    initial: Option<Surat>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let api = expect_context::<RemoteApi>();
    let notifier = expect_context::<Notifier>();

    let form = RwSignal::new(SuratForm::new(mail_type, initial.as_ref()));
    let loading = RwSignal::new(form.with_untracked(SuratForm::needs_generated_number));
    let submitting = RwSignal::new(false);

    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let (opened, err) = SuratForm::open(&api, mail_type, initial.as_ref()).await;
            if let Some(err) = err {
                notifier.error(format!("Gagal membuat nomor surat: {err}"));
            }
            form.set(opened);
            loading.set(false);
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);
        let current = form.get_untracked();
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match current.submit(&api).await {
                Ok(_) => {
                    notifier.success(saved_message(mail_type));
                    on_saved.run(());
                }
                Err(err) => notifier.error(err.describe("Gagal menyimpan: ")),
            }
            submitting.set(false);
        });
    };

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            leptos::task::spawn_local(async move {
                if let Some(picked) = crate::util::file_reader::read_first_file(&input).await {
                    form.update(|f| f.draft.attachment = picked.to_upload());
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let fields = form_fields(mail_type)
        .iter()
        .map(|field| {
            let name = field.name;
            let value = move || form.with(|f| f.draft.field(name).to_owned());
            let on_edit = move |ev: leptos::ev::Event| {
                form.update(|f| f.draft.set_field(name, event_target_value(&ev)));
            };
            let disabled = move || submitting.get();
            let control = match field.input {
                FieldInput::Text => view! {
                    <input id=name type="text" prop:value=value on:input=on_edit disabled=disabled/>
                }
                .into_any(),
                FieldInput::Date => view! {
                    <input id=name type="date" prop:value=value on:input=on_edit disabled=disabled/>
                }
                .into_any(),
                FieldInput::Select => {
                    let options = mail_type
                        .status_options()
                        .into_iter()
                        .map(|o| view! { <option value=o>{o}</option> })
                        .collect_view();
                    view! {
                        <select id=name prop:value=value on:change=on_edit disabled=disabled>
                            {options}
                        </select>
                    }
                    .into_any()
                }
                FieldInput::TextArea => view! {
                    <textarea id=name rows="3" prop:value=value on:input=on_edit disabled=disabled></textarea>
                }
                .into_any(),
                FieldInput::Generated => view! {
                    <input id=name type="text" class="input--readonly" prop:value=value readonly=true/>
                }
                .into_any(),
            };
            let wide = matches!(field.input, FieldInput::TextArea | FieldInput::Generated) || name == "Perihal";
            view! {
                <div class="form-field" class:form-field--wide=wide>
                    <label for=name>{field.label}</label>
                    {control}
                </div>
            }
        })
        .collect_view();

    let attachment_label = move || {
        form.with(|f| {
            f.draft
                .attachment
                .as_ref()
                .map_or_else(|| "PNG, JPG, PDF hingga 10MB".to_owned(), |a| a.file_name.clone())
        })
    };
    let old_file = move || {
        form.with(|f| {
            if f.draft.attachment.is_some() {
                return None;
            }
            f.draft.existing_file_url().map(str::to_owned)
        })
    };

    view! {
        <div class="dialog-backdrop">
            <div class="dialog dialog--surat" role="dialog">
                <div class="dialog__header">
                    <h3>{move || form.with(SuratForm::title)}</h3>
                    <button class="dialog__close" aria-label="Tutup" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                {move || loading.get().then(|| view! { <div class="dialog__loading"><Spinner/></div> })}
                <form class:hidden=move || loading.get() on:submit=on_submit>
                    <div class="form-grid">
                        {fields}
                        <div class="form-field">
                            <label for="file-upload">"Lampiran File (Opsional)"</label>
                            <input id="file-upload" type="file" on:change=on_file disabled=move || submitting.get()/>
                            <p class="form-hint">
                                {attachment_label}
                                {move || old_file().map(|url| view! {
                                    <a href=url target="_blank" rel="noopener noreferrer">" (Lihat file lama)"</a>
                                })}
                            </p>
                        </div>
                    </div>
                    <div class="dialog__actions">
                        <button
                            type="button"
                            class="btn btn--secondary"
                            disabled=move || submitting.get()
                            on:click=move |_| on_close.run(())
                        >
                            "Batal"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                            <Show when=move || submitting.get()>
                                <Spinner small=true/>
                            </Show>
                            "Simpan"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
