//! Application state held in `RwSignal`s and provided through context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` and `ui` are the view controller's state; `notification` owns the
//! single toast; `surat_form` and `profile_form` hold form drafts together
//! with their validation and submit flows, kept free of rendering so they can
//! be tested natively.

pub mod auth;
pub mod error;
pub mod notification;
pub mod profile_form;
pub mod surat_form;
pub mod ui;
