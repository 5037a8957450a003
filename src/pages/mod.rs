//! Top-level screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! `login` is shown while signed out; the others are switched by the active
//! [`crate::state::ui::View`] inside the main layout.

pub mod dashboard;
pub mod login;
pub mod profile;
pub mod surat_list;
