//! Create/edit form for one mail record.
//!
//! DESIGN
//! ======
//! The draft is a map from column name to input text, seeded from the record
//! being edited or from per-register defaults. Validation runs before any
//! remote call; a valid submit issues exactly one `createSurat` or
//! `updateSurat`. Outgoing mail gets its number from the backend when the
//! create form opens, never when editing.

#[cfg(test)]
#[path = "surat_form_test.rs"]
mod surat_form_test;

use std::collections::BTreeMap;

use records::{Envelope, MailType, RemoteError, Surat, UploadedFile, ValidationError};
use serde_json::{Map, Value};

use super::error::FormError;
use crate::net::api::RemoteApi;

pub const NOMOR_SURAT: &str = "Nomor Surat";
const STATUS: &str = "Status";

/// Input widget used for a form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldInput {
    Text,
    Date,
    Select,
    TextArea,
    /// Filled by the backend, shown but not editable.
    Generated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub input: FieldInput,
}

const fn field(name: &'static str, label: &'static str, input: FieldInput) -> FormField {
    FormField { name, label, input }
}

const MASUK_FIELDS: [FormField; 7] = [
    field(NOMOR_SURAT, "Nomor Surat", FieldInput::Text),
    field("Tanggal Surat", "Tanggal Surat", FieldInput::Date),
    field("Tanggal Diterima", "Tanggal Diterima", FieldInput::Date),
    field("Asal Surat", "Asal Surat", FieldInput::Text),
    field("Perihal", "Perihal", FieldInput::Text),
    field(STATUS, "Status", FieldInput::Select),
    field("Keterangan", "Keterangan (Opsional)", FieldInput::TextArea),
];

const KELUAR_FIELDS: [FormField; 6] = [
    field(NOMOR_SURAT, "Nomor Surat (Otomatis)", FieldInput::Generated),
    field("Tanggal Surat", "Tanggal Surat", FieldInput::Date),
    field("Tujuan Surat", "Tujuan Surat", FieldInput::Text),
    field("Perihal", "Perihal", FieldInput::Text),
    field(STATUS, "Status", FieldInput::Select),
    field("Keterangan", "Keterangan (Opsional)", FieldInput::TextArea),
];

/// Fields of the form for `mail_type`, in display order.
#[must_use]
pub fn form_fields(mail_type: MailType) -> &'static [FormField] {
    match mail_type {
        MailType::Masuk => &MASUK_FIELDS,
        MailType::Keluar => &KELUAR_FIELDS,
    }
}

/// Toast text after a successful save.
#[must_use]
pub fn saved_message(mail_type: MailType) -> String {
    format!("Data {} berhasil disimpan.", mail_type.title())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

/// Input values of a surat form plus an optional new attachment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuratDraft {
    mail_type: MailType,
    values: BTreeMap<String, String>,
    pub attachment: Option<UploadedFile>,
}

impl SuratDraft {
    /// Blank draft with the register's default status.
    #[must_use]
    pub fn new(mail_type: MailType) -> Self {
        let mut values: BTreeMap<String, String> = form_fields(mail_type)
            .iter()
            .map(|f| (f.name.to_owned(), String::new()))
            .collect();
        values.insert(STATUS.to_owned(), mail_type.default_status().to_owned());
        Self {
            mail_type,
            values,
            attachment: None,
        }
    }

    /// Draft holding every column of `surat` except its ID.
    #[must_use]
    pub fn from_surat(surat: &Surat) -> Self {
        let mut draft = Self::new(surat.mail_type());
        let columns = match surat {
            Surat::Masuk(s) => serde_json::to_value(s),
            Surat::Keluar(s) => serde_json::to_value(s),
        };
        if let Ok(Value::Object(columns)) = columns {
            for (name, value) in columns {
                if name == "ID" {
                    continue;
                }
                let text = match value {
                    Value::String(text) => text,
                    Value::Null => String::new(),
                    other => other.to_string(),
                };
                draft.values.insert(name, text);
            }
        }
        draft
    }

    #[must_use]
    pub const fn mail_type(&self) -> MailType {
        self.mail_type
    }

    #[must_use]
    pub fn field(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_owned(), value.into());
    }

    /// Link to the attachment already stored with the record, if any.
    #[must_use]
    pub fn existing_file_url(&self) -> Option<&str> {
        Some(self.field("File URL")).filter(|url| !url.is_empty())
    }

    /// First blank required column, in register order.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] naming that column.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self
            .mail_type
            .required_fields()
            .iter()
            .copied()
            .find(|name| self.field(name).trim().is_empty())
        {
            Some(name) => Err(ValidationError::MissingField(name)),
            None => Ok(()),
        }
    }

    /// Wire payload: every column, the ID when editing, and `file` when a new
    /// attachment was picked.
    #[must_use]
    pub fn to_payload(&self, mode: &FormMode) -> Value {
        let mut payload: Map<String, Value> = self
            .values
            .iter()
            .map(|(name, value)| (name.clone(), Value::String(value.clone())))
            .collect();
        if let FormMode::Edit { id } = mode {
            payload.insert("ID".to_owned(), Value::String(id.clone()));
        }
        if let Some(file) = &self.attachment
            && let Ok(file) = serde_json::to_value(file)
        {
            payload.insert("file".to_owned(), file);
        }
        Value::Object(payload)
    }
}

/// A surat form: register, create/edit mode and the draft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuratForm {
    pub mode: FormMode,
    pub draft: SuratDraft,
}

impl SuratForm {
    #[must_use]
    pub fn new(mail_type: MailType, initial: Option<&Surat>) -> Self {
        match initial {
            Some(surat) => Self {
                mode: FormMode::Edit {
                    id: surat.id().to_owned(),
                },
                draft: SuratDraft::from_surat(surat),
            },
            None => Self {
                mode: FormMode::Create,
                draft: SuratDraft::new(mail_type),
            },
        }
    }

    #[must_use]
    pub const fn mail_type(&self) -> MailType {
        self.draft.mail_type()
    }

    #[must_use]
    pub fn title(&self) -> String {
        let verb = match self.mode {
            FormMode::Create => "Tambah",
            FormMode::Edit { .. } => "Ubah",
        };
        format!("{verb} {}", self.mail_type().title())
    }

    /// Whether opening this form should fetch a new outgoing-mail number.
    #[must_use]
    pub fn needs_generated_number(&self) -> bool {
        self.mail_type() == MailType::Keluar && self.mode == FormMode::Create
    }

    /// Build the form for display, fetching the outgoing-mail number when
    /// creating one. The form is returned even when that fetch fails.
    pub async fn open(api: &RemoteApi, mail_type: MailType, initial: Option<&Surat>) -> (Self, Option<RemoteError>) {
        let mut form = Self::new(mail_type, initial);
        if !form.needs_generated_number() {
            return (form, None);
        }
        match api.get_new_nomor_surat().await {
            Ok(number) => {
                form.draft.set_field(NOMOR_SURAT, number);
                (form, None)
            }
            Err(err) => (form, Some(err)),
        }
    }

    /// Validate, then send exactly one create or update.
    ///
    /// # Errors
    ///
    /// [`FormError::Invalid`] without any remote call, or
    /// [`FormError::Remote`] when the backend refuses.
    pub async fn submit(&self, api: &RemoteApi) -> Result<Envelope, FormError> {
        self.draft.validate()?;
        let payload = self.draft.to_payload(&self.mode);
        let envelope = match &self.mode {
            FormMode::Create => api.create_surat(self.mail_type(), payload).await?,
            FormMode::Edit { id } => api.update_surat(self.mail_type(), id, payload).await?,
        };
        Ok(envelope)
    }
}
