//! Browser helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each helper isolates one browser API (timers, storage, downloads, file
//! reading) behind a plain function. Without the `csr` feature they compile
//! to no-ops so page logic stays testable natively.

pub mod clock;
pub mod dialog;
pub mod download;
pub mod file_reader;
pub mod theme;
pub mod timer;
