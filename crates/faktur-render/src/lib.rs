//! faktur-render
//!
//! HTML → PDF conversion through a headless Chromium instance.
//! One browser process per call, killed on every exit path.

pub mod error;
pub mod pdf;

pub use error::RenderError;
pub use pdf::{PdfSettings, html_to_pdf};
