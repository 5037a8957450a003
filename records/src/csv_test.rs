use super::*;
use crate::model::{StatusKeluar, StatusMasuk};

// =============================================================
// Helpers
// =============================================================

fn masuk(id: &str, perihal: &str) -> Surat {
    Surat::Masuk(SuratMasuk {
        id: id.to_owned(),
        nomor_surat: format!("N-{id}"),
        tanggal_surat: "2024-05-01".to_owned(),
        tanggal_diterima: "2024-05-02".to_owned(),
        asal_surat: "Dinas".to_owned(),
        perihal: perihal.to_owned(),
        status: StatusMasuk::SudahDisposisi,
        keterangan: None,
        file_url: None,
    })
}

/// Split a line produced by `export_csv` whose cells contain no commas.
fn cells(line: &str) -> Vec<&str> {
    line.split(',').collect()
}

// =============================================================
// quote_field
// =============================================================

#[test]
fn quote_field_wraps_plain_text() {
    assert_eq!(quote_field("abc"), "\"abc\"");
    assert_eq!(quote_field(""), "\"\"");
}

#[test]
fn quote_field_doubles_embedded_quotes() {
    assert_eq!(quote_field("say \"hi\""), "\"say \"\"hi\"\"\"");
}

// =============================================================
// export_csv
// =============================================================

#[test]
fn export_of_empty_list_is_none() {
    let empty: Vec<Surat> = Vec::new();
    assert!(export_csv(&empty).is_none());
}

#[test]
fn export_has_header_plus_one_line_per_record() {
    let records = vec![masuk("1", "Rapat"), masuk("2", "Undangan"), masuk("3", "Laporan")];
    let out = export_csv(&records).unwrap();
    let lines: Vec<&str> = out.split('\n').collect();
    assert_eq!(lines.len(), records.len() + 1);

    let k = records[0].csv_headers().len();
    for line in &lines {
        let row = cells(line);
        assert_eq!(row.len(), k);
        assert!(row.iter().all(|c| c.starts_with('"') && c.ends_with('"')));
    }
}

#[test]
fn export_header_lists_record_columns() {
    let out = export_csv(&[masuk("1", "Rapat")]).unwrap();
    let header = out.lines().next().unwrap();
    assert_eq!(
        header,
        "\"ID\",\"Nomor Surat\",\"Tanggal Surat\",\"Tanggal Diterima\",\"Asal Surat\",\"Perihal\",\"Status\",\"Keterangan\",\"File URL\""
    );
}

#[test]
fn export_escapes_quotes_inside_values() {
    let out = export_csv(&[masuk("1", "Surat \"penting\"")]).unwrap();
    let row = out.lines().nth(1).unwrap();
    assert!(row.contains("\"Surat \"\"penting\"\"\""));
}

#[test]
fn export_writes_status_label_and_blank_optionals() {
    let out = export_csv(&[masuk("7", "Hal")]).unwrap();
    let row = out.lines().nth(1).unwrap();
    assert_eq!(
        row,
        "\"7\",\"N-7\",\"2024-05-01\",\"2024-05-02\",\"Dinas\",\"Hal\",\"Sudah Disposisi\",\"\",\"\""
    );
}

#[test]
fn export_uses_first_record_columns_for_every_row() {
    let keluar = Surat::Keluar(SuratKeluar {
        id: "k".to_owned(),
        tujuan_surat: "Camat".to_owned(),
        status: StatusKeluar::Terkirim,
        ..SuratKeluar::default()
    });
    let out = export_csv(&[masuk("1", "Hal"), keluar]).unwrap();
    let row = out.lines().nth(2).unwrap();
    // "Tanggal Diterima" and "Asal Surat" do not exist on outgoing mail.
    assert_eq!(cells(row).len(), 9);
    assert!(row.contains("\"Terkirim\""));
    assert!(!row.contains("Camat"));
}

// =============================================================
// export_filename
// =============================================================

#[test]
fn export_filename_uses_iso_date() {
    let date = time::Date::from_calendar_date(2024, time::Month::March, 5).unwrap();
    assert_eq!(export_filename("Surat Masuk", date), "Surat Masuk_2024-03-05.csv");
}
