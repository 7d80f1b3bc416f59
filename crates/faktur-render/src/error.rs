use thiserror::Error;

/// Conversion failures.
///
/// Callers are expected to collapse these into a single "conversion
/// failed" response; the variants exist so the underlying cause can be
/// logged for operability.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("browser launch failed: {0}")]
    Launch(String),

    #[error("page load failed: {0}")]
    Load(String),

    #[error("pdf generation failed: {0}")]
    Pdf(String),
}
