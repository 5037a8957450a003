//! Remote call adapter.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` defines the one call interface; `bridge`, `simulated` and
//! `http` implement it; `select` picks exactly one at startup; `api` wraps
//! the chosen transport in typed methods the views call.
//!
//! ERROR HANDLING
//! ==============
//! Every failure, transport or backend, arrives as a rejected call carrying
//! a [`records::RemoteError`] whose display text is shown to the user as is.

pub mod api;
pub mod bridge;
pub mod http;
pub mod select;
pub mod simulated;
pub mod transport;

#[cfg(test)]
pub(crate) mod fake;
