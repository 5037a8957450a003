//! Reusable UI building blocks shared by the pages.

pub mod notification_toast;
pub mod sidebar;
pub mod spinner;
pub mod stat_card;
pub mod status_badge;
pub mod surat_form_modal;
pub mod top_bar;
