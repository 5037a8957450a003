use super::*;

// =============================================================
// MailType
// =============================================================

#[test]
fn mail_type_serializes_to_wire_value() {
    assert_eq!(serde_json::to_value(MailType::Masuk).unwrap(), serde_json::json!("masuk"));
    assert_eq!(serde_json::to_value(MailType::Keluar).unwrap(), serde_json::json!("keluar"));
    assert_eq!(MailType::Keluar.as_str(), "keluar");
}

#[test]
fn mail_type_titles_and_default_status() {
    assert_eq!(MailType::Masuk.title(), "Surat Masuk");
    assert_eq!(MailType::Keluar.title(), "Surat Keluar");
    assert_eq!(MailType::Masuk.default_status(), "Belum Disposisi");
    assert_eq!(MailType::Keluar.default_status(), "Draf");
}

#[test]
fn required_fields_differ_by_register() {
    assert!(MailType::Masuk.required_fields().contains(&"Tanggal Diterima"));
    assert!(MailType::Masuk.required_fields().contains(&"Nomor Surat"));
    assert!(!MailType::Keluar.required_fields().contains(&"Nomor Surat"));
    assert_eq!(MailType::Keluar.required_fields(), &["Tanggal Surat", "Tujuan Surat", "Perihal"]);
}

#[test]
fn status_options_are_closed_per_register() {
    assert_eq!(
        MailType::Masuk.status_options(),
        ["Belum Disposisi", "Sudah Disposisi", "Diarsipkan"]
    );
    assert_eq!(MailType::Keluar.status_options(), ["Draf", "Terkirim", "Diarsipkan"]);
    assert_eq!(StatusMasuk::from_label("Draf"), None);
    assert_eq!(StatusKeluar::from_label("Terkirim"), Some(StatusKeluar::Terkirim));
}

// =============================================================
// Record deserialization
// =============================================================

#[test]
fn surat_masuk_reads_sheet_columns() {
    let value = serde_json::json!({
        "ID": "m-1",
        "Nomor Surat": "001/UND/2024",
        "Tanggal Surat": "2024-03-01",
        "Tanggal Diterima": "2024-03-02",
        "Asal Surat": "Dinas Pendidikan",
        "Perihal": "Undangan rapat",
        "Status": "Sudah Disposisi",
        "Keterangan": "",
        "File URL": "https://drive.example/file"
    });
    let surat: SuratMasuk = serde_json::from_value(value).unwrap();
    assert_eq!(surat.id, "m-1");
    assert_eq!(surat.asal_surat, "Dinas Pendidikan");
    assert_eq!(surat.status, StatusMasuk::SudahDisposisi);
    assert_eq!(surat.keterangan, None);
    assert_eq!(surat.file_url.as_deref(), Some("https://drive.example/file"));
}

#[test]
fn numeric_cells_are_read_as_text() {
    let value = serde_json::json!({
        "ID": 17,
        "Nomor Surat": 42,
        "Tujuan Surat": "Kecamatan",
        "Perihal": "Laporan",
        "Status": "Terkirim"
    });
    let surat: SuratKeluar = serde_json::from_value(value).unwrap();
    assert_eq!(surat.id, "17");
    assert_eq!(surat.nomor_surat, "42");
    assert_eq!(surat.tanggal_surat, "");
}

#[test]
fn blank_status_falls_back_to_default() {
    let value = serde_json::json!({ "ID": "k-1", "Status": "" });
    let surat: SuratKeluar = serde_json::from_value(value).unwrap();
    assert_eq!(surat.status, StatusKeluar::Draf);
}

#[test]
fn unknown_status_is_rejected() {
    let value = serde_json::json!({ "ID": "k-1", "Status": "Belum Disposisi" });
    assert!(serde_json::from_value::<SuratKeluar>(value).is_err());
}

#[test]
fn list_from_value_wraps_register_variant() {
    let value = serde_json::json!([{ "ID": "a" }, { "ID": "b" }]);
    let list = Surat::list_from_value(MailType::Keluar, value).unwrap();
    assert_eq!(list.len(), 2);
    assert!(list.iter().all(|s| s.mail_type() == MailType::Keluar));
    assert_eq!(list[1].id(), "b");
}

#[test]
fn table_cells_follow_headers() {
    let surat = Surat::Masuk(SuratMasuk {
        id: "m-1".to_owned(),
        nomor_surat: "N-1".to_owned(),
        tanggal_diterima: "2024-01-02".to_owned(),
        asal_surat: "Asal".to_owned(),
        perihal: "Hal".to_owned(),
        ..SuratMasuk::default()
    });
    assert_eq!(surat.table_cells(), ["N-1", "Asal", "Hal", "2024-01-02", "Belum Disposisi"]);
}

// =============================================================
// AuthUser / ProfileUpdate
// =============================================================

#[test]
fn auth_user_round_trips_foto_url_key() {
    let value = serde_json::json!({
        "ID": "1",
        "Email": "admin@example.com",
        "Nama": "Admin",
        "Jabatan": "Developer",
        "Unit": "IT",
        "Foto URL": ""
    });
    let user: AuthUser = serde_json::from_value(value).unwrap();
    assert_eq!(user.foto_url, None);
    assert_eq!(user.nama, "Admin");

    let with_photo = AuthUser {
        foto_url: Some("https://img".to_owned()),
        ..user
    };
    let out = serde_json::to_value(&with_photo).unwrap();
    assert_eq!(out["Foto URL"], "https://img");
}

#[test]
fn profile_update_omits_absent_photo() {
    let update = ProfileUpdate {
        nama: "Budi".to_owned(),
        jabatan: "Staf".to_owned(),
        unit: "TU".to_owned(),
        foto_url: None,
        photo_file: None,
    };
    let out = serde_json::to_value(&update).unwrap();
    assert_eq!(out, serde_json::json!({ "Nama": "Budi", "Jabatan": "Staf", "Unit": "TU" }));
}

// =============================================================
// UploadedFile
// =============================================================

#[test]
fn uploaded_file_takes_payload_after_comma() {
    let file = UploadedFile::from_data_url("scan.pdf", "application/pdf", "data:application/pdf;base64,QUJD").unwrap();
    assert_eq!(file.base64_data, "QUJD");
    let out = serde_json::to_value(&file).unwrap();
    assert_eq!(
        out,
        serde_json::json!({ "fileName": "scan.pdf", "mimeType": "application/pdf", "base64Data": "QUJD" })
    );
}

#[test]
fn uploaded_file_rejects_url_without_payload() {
    assert!(UploadedFile::from_data_url("x", "text/plain", "not-a-data-url").is_none());
}

// =============================================================
// DashboardStats / Filters
// =============================================================

#[test]
fn dashboard_stats_accepts_float_integers() {
    let value = serde_json::json!({
        "totalMasuk": 10.0,
        "totalKeluar": 5,
        "masukBulanIni": 2,
        "keluarBulanIni": 1,
        "belumDisposisi": 3
    });
    let stats: DashboardStats = serde_json::from_value(value).unwrap();
    assert_eq!(stats.total_masuk, 10);
    assert_eq!(stats.belum_disposisi, 3);
}

#[test]
fn dashboard_stats_rejects_negative_counts() {
    let value = serde_json::json!({
        "totalMasuk": -1,
        "totalKeluar": 5,
        "masukBulanIni": 2,
        "keluarBulanIni": 1,
        "belumDisposisi": 3
    });
    assert!(serde_json::from_value::<DashboardStats>(value).is_err());
}

#[test]
fn filters_drop_blank_inputs() {
    let filters = Filters::from_inputs("  rapat ", "", "2024-12-31", "   ");
    assert_eq!(
        serde_json::to_value(&filters).unwrap(),
        serde_json::json!({ "searchTerm": "rapat", "endDate": "2024-12-31" })
    );
}

#[test]
fn default_filters_serialize_to_empty_object() {
    assert_eq!(serde_json::to_value(Filters::default()).unwrap(), serde_json::json!({}));
}
