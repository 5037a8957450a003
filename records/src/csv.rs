//! CSV export of already-loaded records.
//!
//! Columns are taken from the first record; every other row is looked up by
//! column name, so a row missing a column yields an empty cell. Every cell,
//! header included, is double-quoted with embedded quotes doubled.

#[cfg(test)]
#[path = "csv_test.rs"]
mod csv_test;

use crate::model::{Surat, SuratKeluar, SuratMasuk};

/// A record that can be flattened into named CSV cells.
pub trait CsvRecord {
    /// Column names of this record, in export order.
    fn csv_headers(&self) -> Vec<&'static str>;

    /// Cell text for `header`, or `None` when this record has no such column.
    fn csv_field(&self, header: &str) -> Option<String>;
}

const MASUK_COLUMNS: [&str; 9] = [
    "ID",
    "Nomor Surat",
    "Tanggal Surat",
    "Tanggal Diterima",
    "Asal Surat",
    "Perihal",
    "Status",
    "Keterangan",
    "File URL",
];

const KELUAR_COLUMNS: [&str; 8] = [
    "ID",
    "Nomor Surat",
    "Tanggal Surat",
    "Tujuan Surat",
    "Perihal",
    "Status",
    "Keterangan",
    "File URL",
];

impl CsvRecord for SuratMasuk {
    fn csv_headers(&self) -> Vec<&'static str> {
        MASUK_COLUMNS.to_vec()
    }

    fn csv_field(&self, header: &str) -> Option<String> {
        let text = match header {
            "ID" => self.id.clone(),
            "Nomor Surat" => self.nomor_surat.clone(),
            "Tanggal Surat" => self.tanggal_surat.clone(),
            "Tanggal Diterima" => self.tanggal_diterima.clone(),
            "Asal Surat" => self.asal_surat.clone(),
            "Perihal" => self.perihal.clone(),
            "Status" => self.status.label().to_owned(),
            "Keterangan" => self.keterangan.clone().unwrap_or_default(),
            "File URL" => self.file_url.clone().unwrap_or_default(),
            _ => return None,
        };
        Some(text)
    }
}

impl CsvRecord for SuratKeluar {
    fn csv_headers(&self) -> Vec<&'static str> {
        KELUAR_COLUMNS.to_vec()
    }

    fn csv_field(&self, header: &str) -> Option<String> {
        let text = match header {
            "ID" => self.id.clone(),
            "Nomor Surat" => self.nomor_surat.clone(),
            "Tanggal Surat" => self.tanggal_surat.clone(),
            "Tujuan Surat" => self.tujuan_surat.clone(),
            "Perihal" => self.perihal.clone(),
            "Status" => self.status.label().to_owned(),
            "Keterangan" => self.keterangan.clone().unwrap_or_default(),
            "File URL" => self.file_url.clone().unwrap_or_default(),
            _ => return None,
        };
        Some(text)
    }
}

impl CsvRecord for Surat {
    fn csv_headers(&self) -> Vec<&'static str> {
        match self {
            Self::Masuk(s) => s.csv_headers(),
            Self::Keluar(s) => s.csv_headers(),
        }
    }

    fn csv_field(&self, header: &str) -> Option<String> {
        match self {
            Self::Masuk(s) => s.csv_field(header),
            Self::Keluar(s) => s.csv_field(header),
        }
    }
}

/// Wrap a cell in double quotes, doubling any embedded quote.
#[must_use]
pub fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Render `records` as CSV text, or `None` when there is nothing to export.
#[must_use]
pub fn export_csv<R: CsvRecord>(records: &[R]) -> Option<String> {
    let first = records.first()?;
    let headers = first.csv_headers();

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(join_quoted(headers.iter().copied()));
    for record in records {
        let cells: Vec<String> = headers
            .iter()
            .map(|header| record.csv_field(header).unwrap_or_default())
            .collect();
        lines.push(join_quoted(cells.iter().map(String::as_str)));
    }
    Some(lines.join("\n"))
}

/// Download filename: `<title>_<YYYY-MM-DD>.csv`.
#[must_use]
pub fn export_filename(title: &str, date: time::Date) -> String {
    format!(
        "{title}_{:04}-{:02}-{:02}.csv",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

fn join_quoted<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    cells.map(quote_field).collect::<Vec<_>>().join(",")
}
