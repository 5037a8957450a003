//! Shared record model and remote-call schema for the surat application.
//!
//! This crate owns everything the UI and the backend agree on: the mail and
//! user record shapes, the catalogue of remote operations with their
//! positional arguments, the `{success, message?, error?}` envelope rule, and
//! CSV serialization of loaded records. It has no browser dependencies so the
//! rules can be exercised natively.

pub mod csv;
pub mod envelope;
pub mod error;
pub mod model;
pub mod operation;

pub use envelope::{
    Envelope, PingReply, reject_failed_envelope, reject_failed_envelope_or, reject_failed_reply,
};
pub use error::{RemoteError, ValidationError};
pub use model::{
    AuthUser, DashboardStats, Filters, MailType, ProfileUpdate, StatusKeluar, StatusMasuk, Surat,
    SuratKeluar, SuratMasuk, UploadedFile,
};
pub use operation::{Call, HttpRequestBody, Operation};
