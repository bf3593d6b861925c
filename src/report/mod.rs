//! Renderers for scan results.
//!
//! - [`csv`] — the `ecosystem,package,version,file` report file.
//! - [`json`] — the same records as a pretty-printed JSON array.
//! - [`terminal`] — stderr diagnostics and the operator summary.

pub mod csv;
pub mod json;
pub mod terminal;
