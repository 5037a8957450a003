//! Per-register list page: filters, table, create/edit/delete, CSV export.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once per register by the main layout. The list is refetched
//! whenever a filter changes or a save/delete completes.

#[cfg(test)]
#[path = "surat_list_test.rs"]
mod surat_list_test;

use leptos::prelude::*;
use records::csv::{export_csv, export_filename};
use records::{Filters, MailType, RemoteError, Surat};

use crate::components::spinner::Spinner;
use crate::components::status_badge::StatusBadge;
use crate::components::surat_form_modal::SuratFormModal;
use crate::net::api::RemoteApi;
use crate::state::notification::Notifier;
use crate::util::dialog::confirm;
use crate::util::{clock, download};

pub const EMPTY_EXPORT_MESSAGE: &str = "Tidak ada data untuk diekspor.";
pub const DELETED_MESSAGE: &str = "Surat berhasil dihapus.";
const DELETE_CONFIRMATION: &str = "Apakah Anda yakin ingin menghapus surat ini?";
const CSV_MIME: &str = "text/csv;charset=utf-8";

#[must_use]
pub fn load_failed_message(mail_type: MailType, err: &RemoteError) -> String {
    format!("Gagal memuat {}: {err}", mail_type.title())
}

#[must_use]
pub fn delete_failed_message(err: &RemoteError) -> String {
    format!("Gagal menghapus surat: {err}")
}

/// Filename and CSV text for the loaded records, or `None` when empty.
#[must_use]
pub fn build_export(records: &[Surat], mail_type: MailType, date: time::Date) -> Option<(String, String)> {
    let csv = export_csv(records)?;
    Some((export_filename(mail_type.title(), date), csv))
}

/// Which dialog, if any, is open over the list.
#[derive(Clone, Debug, PartialEq)]
enum Dialog {
    Closed,
    Create,
    Edit(Surat),
}

#[component]
pub fn SuratListPage(mail_type: MailType) -> impl IntoView {
    let api = expect_context::<RemoteApi>();
    let notifier = expect_context::<Notifier>();

    let rows = RwSignal::new(Vec::<Surat>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let reload = RwSignal::new(0_u32);
    let dialog = RwSignal::new(Dialog::Closed);

    let load_api = api.clone();
    Effect::new(move || {
        reload.track();
        let filters = Filters::from_inputs(&search.get(), &start_date.get(), &end_date.get(), &status.get());
        loading.set(true);
        let api = load_api.clone();
        leptos::task::spawn_local(async move {
            match api.list_surat(mail_type, &filters).await {
                Ok(list) => rows.set(list),
                Err(err) => notifier.error(load_failed_message(mail_type, &err)),
            }
            loading.set(false);
        });
    });

    let refresh = move || reload.update(|n| *n = n.wrapping_add(1));

    let delete_api = api;
    let on_delete = Callback::new(move |id: String| {
        if !confirm(DELETE_CONFIRMATION) {
            return;
        }
        let api = delete_api.clone();
        leptos::task::spawn_local(async move {
            match api.delete_surat(mail_type, &id).await {
                Ok(_) => {
                    notifier.success(DELETED_MESSAGE);
                    refresh();
                }
                Err(err) => notifier.error(delete_failed_message(&err)),
            }
        });
    });

    let on_export = move |_| {
        let export = rows.with_untracked(|list| build_export(list, mail_type, clock::today()));
        match export {
            None => notifier.info(EMPTY_EXPORT_MESSAGE),
            Some((filename, csv)) => {
                if let Err(err) = download::download_text(&filename, CSV_MIME, &csv) {
                    log::error!("export failed: {err}");
                    notifier.error(format!("Gagal mengekspor: {err}"));
                }
            }
        }
    };

    let on_close = Callback::new(move |()| dialog.set(Dialog::Closed));
    let on_saved = Callback::new(move |()| {
        dialog.set(Dialog::Closed);
        refresh();
    });

    let status_options = mail_type
        .status_options()
        .into_iter()
        .map(|o| view! { <option value=o>{o}</option> })
        .collect_view();

    let table_body = move || {
        let list = rows.get();
        if list.is_empty() {
            return view! {
                <tr>
                    <td class="table__empty" colspan="6">"Tidak ada data ditemukan."</td>
                </tr>
            }
            .into_any();
        }
        list.into_iter()
            .map(|surat| {
                let [first, second, third, fourth, _] = surat.table_cells().map(str::to_owned);
                let badge = surat.status_label();
                let id = surat.id().to_owned();
                let edit_target = surat.clone();
                view! {
                    <tr>
                        <td>{first}</td>
                        <td>{second}</td>
                        <td class="table__wide">{third}</td>
                        <td>{fourth}</td>
                        <td><StatusBadge label=badge/></td>
                        <td class="table__actions">
                            <button
                                class="icon-btn"
                                title="Ubah"
                                on:click=move |_| dialog.set(Dialog::Edit(edit_target.clone()))
                            >
                                "✎"
                            </button>
                            <button
                                class="icon-btn icon-btn--danger"
                                title="Hapus"
                                on:click=move |_| on_delete.run(id.clone())
                            >
                                "🗑"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <section class="surat-list">
            <div class="surat-list__header">
                <h2 class="page-title">{mail_type.title()}</h2>
                <div class="surat-list__actions">
                    <button class="btn btn--secondary" on:click=on_export>"Ekspor CSV"</button>
                    <button class="btn btn--primary" on:click=move |_| dialog.set(Dialog::Create)>
                        "Tambah Surat"
                    </button>
                </div>
            </div>

            <div class="filters">
                <input
                    type="search"
                    placeholder="Cari nomor, perihal, asal/tujuan..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    title="Dari tanggal"
                    prop:value=move || start_date.get()
                    on:input=move |ev| start_date.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    title="Sampai tanggal"
                    prop:value=move || end_date.get()
                    on:input=move |ev| end_date.set(event_target_value(&ev))
                />
                <select prop:value=move || status.get() on:change=move |ev| status.set(event_target_value(&ev))>
                    <option value="">"Semua Status"</option>
                    {status_options}
                </select>
            </div>

            <div class="table-wrap">
                <Show when=move || !loading.get() fallback=|| view! { <div class="page-loading"><Spinner/></div> }>
                    <table class="table">
                        <thead>
                            <tr>
                                {mail_type.table_headers().into_iter().map(|h| view! { <th>{h}</th> }).collect_view()}
                                <th>"Aksi"</th>
                            </tr>
                        </thead>
                        <tbody>{table_body}</tbody>
                    </table>
                </Show>
            </div>

            {move || {
                let initial = match dialog.get() {
                    Dialog::Closed => return None,
                    Dialog::Create => None,
                    Dialog::Edit(surat) => Some(surat),
                };
                Some(view! {
                    <SuratFormModal mail_type=mail_type initial=initial on_close=on_close on_saved=on_saved/>
                })
            }}
        </section>
    }
}
