//! Record shapes exchanged with the spreadsheet backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's sheet column headers (`"Nomor Surat"`,
//! `"Foto URL"`, ...) through serde renames so replies deserialize without a
//! translation layer. Spreadsheet cells are loosely typed, so text columns
//! accept numbers and nulls as well.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Which of the two mail registers a record belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailType {
    /// Incoming mail (*surat masuk*).
    #[default]
    Masuk,
    /// Outgoing mail (*surat keluar*).
    Keluar,
}

impl MailType {
    /// Wire value passed as the `type` argument.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Masuk => "masuk",
            Self::Keluar => "keluar",
        }
    }

    /// Human-readable register name used in titles and messages.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Masuk => "Surat Masuk",
            Self::Keluar => "Surat Keluar",
        }
    }

    /// Status labels selectable for this register, in display order.
    #[must_use]
    pub const fn status_options(self) -> [&'static str; 3] {
        match self {
            Self::Masuk => [
                StatusMasuk::BelumDisposisi.label(),
                StatusMasuk::SudahDisposisi.label(),
                StatusMasuk::Diarsipkan.label(),
            ],
            Self::Keluar => [
                StatusKeluar::Draf.label(),
                StatusKeluar::Terkirim.label(),
                StatusKeluar::Diarsipkan.label(),
            ],
        }
    }

    /// Status assigned to a freshly created record.
    #[must_use]
    pub const fn default_status(self) -> &'static str {
        match self {
            Self::Masuk => StatusMasuk::BelumDisposisi.label(),
            Self::Keluar => StatusKeluar::Draf.label(),
        }
    }

    /// Column headers shown in the list table.
    #[must_use]
    pub const fn table_headers(self) -> [&'static str; 5] {
        match self {
            Self::Masuk => ["Nomor Surat", "Asal Surat", "Perihal", "Tanggal Diterima", "Status"],
            Self::Keluar => ["Nomor Surat", "Tujuan Surat", "Perihal", "Tanggal Surat", "Status"],
        }
    }

    /// Columns that must be non-blank before a create/update is sent.
    #[must_use]
    pub const fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::Masuk => &["Nomor Surat", "Tanggal Surat", "Tanggal Diterima", "Asal Surat", "Perihal"],
            Self::Keluar => &["Tanggal Surat", "Tujuan Surat", "Perihal"],
        }
    }
}

/// Lifecycle status of an incoming letter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusMasuk {
    #[default]
    #[serde(rename = "Belum Disposisi")]
    BelumDisposisi,
    #[serde(rename = "Sudah Disposisi")]
    SudahDisposisi,
    Diarsipkan,
}

impl StatusMasuk {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BelumDisposisi => "Belum Disposisi",
            Self::SudahDisposisi => "Sudah Disposisi",
            Self::Diarsipkan => "Diarsipkan",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        [Self::BelumDisposisi, Self::SudahDisposisi, Self::Diarsipkan]
            .into_iter()
            .find(|status| status.label() == label)
    }
}

/// Lifecycle status of an outgoing letter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusKeluar {
    #[default]
    Draf,
    Terkirim,
    Diarsipkan,
}

impl StatusKeluar {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Draf => "Draf",
            Self::Terkirim => "Terkirim",
            Self::Diarsipkan => "Diarsipkan",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        [Self::Draf, Self::Terkirim, Self::Diarsipkan]
            .into_iter()
            .find(|status| status.label() == label)
    }
}

/// An incoming letter as stored in the `masuk` sheet.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SuratMasuk {
    #[serde(rename = "ID", deserialize_with = "deserialize_cell_text")]
    pub id: String,
    #[serde(rename = "Nomor Surat", default, deserialize_with = "deserialize_cell_text")]
    pub nomor_surat: String,
    #[serde(rename = "Tanggal Surat", default, deserialize_with = "deserialize_cell_text")]
    pub tanggal_surat: String,
    #[serde(rename = "Tanggal Diterima", default, deserialize_with = "deserialize_cell_text")]
    pub tanggal_diterima: String,
    #[serde(rename = "Asal Surat", default, deserialize_with = "deserialize_cell_text")]
    pub asal_surat: String,
    #[serde(rename = "Perihal", default, deserialize_with = "deserialize_cell_text")]
    pub perihal: String,
    #[serde(rename = "Status", default, deserialize_with = "deserialize_status")]
    pub status: StatusMasuk,
    #[serde(rename = "Keterangan", default, deserialize_with = "deserialize_optional_cell_text")]
    pub keterangan: Option<String>,
    #[serde(rename = "File URL", default, deserialize_with = "deserialize_optional_cell_text")]
    pub file_url: Option<String>,
}

/// An outgoing letter as stored in the `keluar` sheet.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SuratKeluar {
    #[serde(rename = "ID", deserialize_with = "deserialize_cell_text")]
    pub id: String,
    #[serde(rename = "Nomor Surat", default, deserialize_with = "deserialize_cell_text")]
    pub nomor_surat: String,
    #[serde(rename = "Tanggal Surat", default, deserialize_with = "deserialize_cell_text")]
    pub tanggal_surat: String,
    #[serde(rename = "Tujuan Surat", default, deserialize_with = "deserialize_cell_text")]
    pub tujuan_surat: String,
    #[serde(rename = "Perihal", default, deserialize_with = "deserialize_cell_text")]
    pub perihal: String,
    #[serde(rename = "Status", default, deserialize_with = "deserialize_status")]
    pub status: StatusKeluar,
    #[serde(rename = "Keterangan", default, deserialize_with = "deserialize_optional_cell_text")]
    pub keterangan: Option<String>,
    #[serde(rename = "File URL", default, deserialize_with = "deserialize_optional_cell_text")]
    pub file_url: Option<String>,
}

/// A mail record of either register.
#[derive(Clone, Debug, PartialEq)]
pub enum Surat {
    Masuk(SuratMasuk),
    Keluar(SuratKeluar),
}

impl Surat {
    #[must_use]
    pub const fn mail_type(&self) -> MailType {
        match self {
            Self::Masuk(_) => MailType::Masuk,
            Self::Keluar(_) => MailType::Keluar,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Masuk(s) => &s.id,
            Self::Keluar(s) => &s.id,
        }
    }

    #[must_use]
    pub fn nomor_surat(&self) -> &str {
        match self {
            Self::Masuk(s) => &s.nomor_surat,
            Self::Keluar(s) => &s.nomor_surat,
        }
    }

    #[must_use]
    pub fn perihal(&self) -> &str {
        match self {
            Self::Masuk(s) => &s.perihal,
            Self::Keluar(s) => &s.perihal,
        }
    }

    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        match self {
            Self::Masuk(s) => s.status.label(),
            Self::Keluar(s) => s.status.label(),
        }
    }

    /// Values for the five list-table columns, matching [`MailType::table_headers`].
    #[must_use]
    pub fn table_cells(&self) -> [&str; 5] {
        match self {
            Self::Masuk(s) => [
                &s.nomor_surat,
                &s.asal_surat,
                &s.perihal,
                &s.tanggal_diterima,
                s.status.label(),
            ],
            Self::Keluar(s) => [
                &s.nomor_surat,
                &s.tujuan_surat,
                &s.perihal,
                &s.tanggal_surat,
                s.status.label(),
            ],
        }
    }

    /// Parse a raw reply value as a record of the given register.
    ///
    /// # Errors
    ///
    /// Returns the serde error if the value does not fit the register's shape.
    pub fn from_value(mail_type: MailType, value: serde_json::Value) -> Result<Self, serde_json::Error> {
        Ok(match mail_type {
            MailType::Masuk => Self::Masuk(serde_json::from_value(value)?),
            MailType::Keluar => Self::Keluar(serde_json::from_value(value)?),
        })
    }

    /// Parse a raw list reply as records of the given register.
    ///
    /// # Errors
    ///
    /// Returns the serde error if any element does not fit the register's shape.
    pub fn list_from_value(mail_type: MailType, value: serde_json::Value) -> Result<Vec<Self>, serde_json::Error> {
        Ok(match mail_type {
            MailType::Masuk => serde_json::from_value::<Vec<SuratMasuk>>(value)?
                .into_iter()
                .map(Self::Masuk)
                .collect(),
            MailType::Keluar => serde_json::from_value::<Vec<SuratKeluar>>(value)?
                .into_iter()
                .map(Self::Keluar)
                .collect(),
        })
    }
}

/// The signed-in user as returned by `login`, `checkAuth` and `getUserProfile`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(rename = "ID", deserialize_with = "deserialize_cell_text")]
    pub id: String,
    #[serde(rename = "Email", default, deserialize_with = "deserialize_cell_text")]
    pub email: String,
    #[serde(rename = "Nama", default, deserialize_with = "deserialize_cell_text")]
    pub nama: String,
    #[serde(rename = "Jabatan", default, deserialize_with = "deserialize_cell_text")]
    pub jabatan: String,
    #[serde(rename = "Unit", default, deserialize_with = "deserialize_cell_text")]
    pub unit: String,
    #[serde(
        rename = "Foto URL",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_cell_text"
    )]
    pub foto_url: Option<String>,
}

/// Payload of `updateUserProfile`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    #[serde(rename = "Nama")]
    pub nama: String,
    #[serde(rename = "Jabatan")]
    pub jabatan: String,
    #[serde(rename = "Unit")]
    pub unit: String,
    #[serde(rename = "Foto URL", skip_serializing_if = "Option::is_none")]
    pub foto_url: Option<String>,
    #[serde(rename = "photoFile", skip_serializing_if = "Option::is_none")]
    pub photo_file: Option<UploadedFile>,
}

/// A file picked in a form, carried inline as base64 until submitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    #[serde(rename = "base64Data")]
    pub base64_data: String,
}

impl UploadedFile {
    /// Build from a browser data URL (`data:<mime>;base64,<payload>`).
    ///
    /// Returns `None` when the URL has no comma-separated payload.
    #[must_use]
    pub fn from_data_url(file_name: &str, mime_type: &str, data_url: &str) -> Option<Self> {
        let (_, payload) = data_url.split_once(',')?;
        Some(Self {
            file_name: file_name.to_owned(),
            mime_type: mime_type.to_owned(),
            base64_data: payload.to_owned(),
        })
    }
}

/// Counters shown on the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub total_masuk: u32,
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub total_keluar: u32,
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub masuk_bulan_ini: u32,
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub keluar_bulan_ini: u32,
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub belum_disposisi: u32,
}

/// List query sent with `listSurat`. Blank inputs are left off the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Filters {
    /// Build filters from raw form inputs, dropping blank ones.
    #[must_use]
    pub fn from_inputs(search_term: &str, start_date: &str, end_date: &str, status: &str) -> Self {
        Self {
            search_term: non_blank(search_term),
            start_date: non_blank(start_date),
            end_date: non_blank(end_date),
            status: non_blank(status),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn cell_to_text<E: serde::de::Error>(value: serde_json::Value) -> Result<Option<String>, E> {
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(text) => Ok(Some(text)),
        serde_json::Value::Number(number) => Ok(Some(number.to_string())),
        serde_json::Value::Bool(flag) => Ok(Some(flag.to_string())),
        _ => Err(E::custom("expected text-compatible cell")),
    }
}

fn deserialize_cell_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(cell_to_text::<D::Error>(value)?.unwrap_or_default())
}

fn deserialize_optional_cell_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(cell_to_text::<D::Error>(value)?.filter(|text| !text.is_empty()))
}

fn deserialize_status<'de, D, S>(deserializer: D) -> Result<S, D::Error>
where
    D: Deserializer<'de>,
    S: Default + serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(S::default()),
        serde_json::Value::String(ref text) if text.trim().is_empty() => Ok(S::default()),
        other => serde_json::from_value(other).map_err(D::Error::custom),
    }
}

fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return u32::try_from(int).map_err(|_| D::Error::custom(format!("value {int} out of range for u32")));
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= f64::from(u32::MAX)
            {
                return Ok(float as u32);
            }
            Err(D::Error::custom("expected non-negative integer"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
