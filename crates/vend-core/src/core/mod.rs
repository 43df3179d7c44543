//! Internal implementation modules for `vend-core`.
//!
//! Most callers should go through `vend_core::api` rather than importing these
//! modules directly.

pub mod config;
pub mod runtime;
pub mod sandbox;
pub mod source;
pub mod tooling;
