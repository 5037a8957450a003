use super::*;
use crate::net::fake::{FakeTransport, api_over};
use futures::executor::block_on;
use records::{Operation, StatusKeluar, StatusMasuk, SuratKeluar, SuratMasuk};
use serde_json::json;

// =============================================================
// Helpers
// =============================================================

fn filled_masuk() -> SuratDraft {
    let mut draft = SuratDraft::new(MailType::Masuk);
    draft.set_field("Nomor Surat", "045/UND/2024");
    draft.set_field("Tanggal Surat", "2024-05-01");
    draft.set_field("Tanggal Diterima", "2024-05-03");
    draft.set_field("Asal Surat", "Dinas Pendidikan");
    draft.set_field("Perihal", "Undangan rapat");
    draft
}

fn existing_keluar() -> Surat {
    Surat::Keluar(SuratKeluar {
        id: "k-9".to_owned(),
        nomor_surat: "009/SK/2024".to_owned(),
        tanggal_surat: "2024-02-02".to_owned(),
        tujuan_surat: "Camat".to_owned(),
        perihal: "Laporan".to_owned(),
        status: StatusKeluar::Terkirim,
        keterangan: None,
        file_url: Some("https://drive/x".to_owned()),
    })
}

// =============================================================
// Draft
// =============================================================

#[test]
fn new_draft_uses_register_default_status() {
    assert_eq!(SuratDraft::new(MailType::Masuk).field("Status"), "Belum Disposisi");
    assert_eq!(SuratDraft::new(MailType::Keluar).field("Status"), "Draf");
}

#[test]
fn draft_from_record_copies_columns_but_not_id() {
    let draft = SuratDraft::from_surat(&existing_keluar());
    assert_eq!(draft.field("Nomor Surat"), "009/SK/2024");
    assert_eq!(draft.field("Status"), "Terkirim");
    assert_eq!(draft.field("Keterangan"), "");
    assert_eq!(draft.field("ID"), "");
    assert_eq!(draft.existing_file_url(), Some("https://drive/x"));
}

#[test]
fn missing_tanggal_diterima_is_rejected() {
    let mut draft = filled_masuk();
    draft.set_field("Tanggal Diterima", "");
    assert_eq!(draft.validate(), Err(ValidationError::MissingField("Tanggal Diterima")));
}

#[test]
fn whitespace_only_counts_as_blank() {
    let mut draft = filled_masuk();
    draft.set_field("Perihal", "   ");
    assert_eq!(draft.validate(), Err(ValidationError::MissingField("Perihal")));
}

#[test]
fn first_missing_field_is_reported_in_order() {
    let draft = SuratDraft::new(MailType::Keluar);
    assert_eq!(draft.validate(), Err(ValidationError::MissingField("Tanggal Surat")));
}

#[test]
fn keluar_does_not_require_nomor_surat() {
    let mut draft = SuratDraft::new(MailType::Keluar);
    draft.set_field("Tanggal Surat", "2024-01-01");
    draft.set_field("Tujuan Surat", "Bupati");
    draft.set_field("Perihal", "Permohonan");
    assert_eq!(draft.validate(), Ok(()));
}

#[test]
fn payload_carries_id_only_when_editing_and_file_when_attached() {
    let mut draft = filled_masuk();
    let created = draft.to_payload(&FormMode::Create);
    assert!(created.get("ID").is_none());
    assert!(created.get("file").is_none());
    assert_eq!(created["Asal Surat"], "Dinas Pendidikan");

    draft.attachment = UploadedFile::from_data_url("a.pdf", "application/pdf", "data:application/pdf;base64,QUJD");
    let edited = draft.to_payload(&FormMode::Edit { id: "m-1".to_owned() });
    assert_eq!(edited["ID"], "m-1");
    assert_eq!(
        edited["file"],
        json!({ "fileName": "a.pdf", "mimeType": "application/pdf", "base64Data": "QUJD" })
    );
}

// =============================================================
// Form
// =============================================================

#[test]
fn titles_follow_mode_and_register() {
    assert_eq!(SuratForm::new(MailType::Masuk, None).title(), "Tambah Surat Masuk");
    assert_eq!(SuratForm::new(MailType::Keluar, Some(&existing_keluar())).title(), "Ubah Surat Keluar");
}

#[test]
fn keluar_fields_show_generated_number() {
    let fields = form_fields(MailType::Keluar);
    assert_eq!(fields[0].input, FieldInput::Generated);
    assert!(form_fields(MailType::Masuk).iter().all(|f| f.input != FieldInput::Generated));
}

#[test]
fn opening_keluar_create_fetches_number_exactly_once() {
    let fake = FakeTransport::new()
        .reply(Operation::GetNewNomorSurat, json!("010/SK/2024"))
        .shared();
    let (form, err) = block_on(SuratForm::open(&api_over(&fake), MailType::Keluar, None));
    assert!(err.is_none());
    assert_eq!(form.draft.field("Nomor Surat"), "010/SK/2024");
    assert_eq!(fake.count(Operation::GetNewNomorSurat), 1);
    assert_eq!(fake.total(), 1);
}

#[test]
fn opening_keluar_edit_fetches_nothing() {
    let fake = FakeTransport::new().shared();
    let surat = existing_keluar();
    let (form, _) = block_on(SuratForm::open(&api_over(&fake), MailType::Keluar, Some(&surat)));
    assert_eq!(fake.total(), 0);
    assert_eq!(form.draft.field("Nomor Surat"), "009/SK/2024");
}

#[test]
fn opening_masuk_create_fetches_nothing() {
    let fake = FakeTransport::new().shared();
    block_on(SuratForm::open(&api_over(&fake), MailType::Masuk, None));
    assert_eq!(fake.total(), 0);
}

#[test]
fn failed_number_fetch_still_opens_form() {
    let fake = FakeTransport::new()
        .fail(Operation::GetNewNomorSurat, RemoteError::Transport("offline".to_owned()))
        .shared();
    let (form, err) = block_on(SuratForm::open(&api_over(&fake), MailType::Keluar, None));
    assert_eq!(err, Some(RemoteError::Transport("offline".to_owned())));
    assert_eq!(form.draft.field("Nomor Surat"), "");
}

#[test]
fn invalid_submit_makes_no_remote_call() {
    let fake = FakeTransport::new().shared();
    let mut form = SuratForm::new(MailType::Masuk, None);
    form.draft = filled_masuk();
    form.draft.set_field("Tanggal Diterima", "");
    let err = block_on(form.submit(&api_over(&fake))).unwrap_err();
    assert_eq!(err, FormError::Invalid(ValidationError::MissingField("Tanggal Diterima")));
    assert_eq!(fake.total(), 0);
}

#[test]
fn valid_create_issues_exactly_one_create() {
    let fake = FakeTransport::new().shared();
    let mut form = SuratForm::new(MailType::Masuk, None);
    form.draft = filled_masuk();
    block_on(form.submit(&api_over(&fake))).unwrap();
    assert_eq!(fake.total(), 1);
    let call = &fake.calls()[0];
    assert_eq!(call.operation, Operation::CreateSurat);
    assert_eq!(call.str_arg(0), Some("masuk"));
}

#[test]
fn valid_edit_issues_exactly_one_update_with_id() {
    let fake = FakeTransport::new().shared();
    let surat = Surat::Masuk(SuratMasuk {
        id: "m-3".to_owned(),
        nomor_surat: "1".to_owned(),
        tanggal_surat: "2024-01-01".to_owned(),
        tanggal_diterima: "2024-01-02".to_owned(),
        asal_surat: "X".to_owned(),
        perihal: "Y".to_owned(),
        status: StatusMasuk::Diarsipkan,
        keterangan: None,
        file_url: None,
    });
    let form = SuratForm::new(MailType::Masuk, Some(&surat));
    block_on(form.submit(&api_over(&fake))).unwrap();
    assert_eq!(fake.count(Operation::UpdateSurat), 1);
    assert_eq!(fake.total(), 1);
    assert_eq!(fake.calls()[0].str_arg(1), Some("m-3"));
}

#[test]
fn backend_refusal_is_remote_error_with_context() {
    let fake = FakeTransport::new()
        .reply(Operation::CreateSurat, json!({ "success": false, "message": "Kuota penuh" }))
        .shared();
    let mut form = SuratForm::new(MailType::Masuk, None);
    form.draft = filled_masuk();
    let err = block_on(form.submit(&api_over(&fake))).unwrap_err();
    assert_eq!(err.describe("Gagal menyimpan: "), "Gagal menyimpan: Kuota penuh");
}

#[test]
fn saved_message_names_register() {
    assert_eq!(saved_message(MailType::Keluar), "Data Surat Keluar berhasil disimpan.");
}
