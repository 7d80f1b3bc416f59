//! faktur-core
//!
//! Pure invoice domain: data model, IDR formatting, the `${{name}}`
//! placeholder engine, and invoice-to-HTML rendering.
//! No async, no HTTP, no browser — this is the shared vocabulary of the
//! Faktur system.

pub mod error;
pub mod models;
pub mod money;
pub mod render;
pub mod template;
