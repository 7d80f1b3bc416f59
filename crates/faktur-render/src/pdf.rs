use std::path::PathBuf;
use std::time::{Duration, Instant};

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};

use crate::error::RenderError;

const A4_WIDTH_IN: f64 = 8.27;
const A4_HEIGHT_IN: f64 = 11.69;
const MM_PER_INCH: f64 = 25.4;

/// Per-deployment knobs. Page geometry is fixed and not exposed here.
#[derive(Debug, Clone)]
pub struct PdfSettings {
    /// Upper bound on the page-load wait. A document that never goes
    /// quiescent fails instead of hanging the call.
    pub timeout: Duration,
    /// Explicit Chromium binary; autodetected when `None`.
    pub chrome_path: Option<PathBuf>,
}

impl Default for PdfSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            chrome_path: None,
        }
    }
}

/// Convert an HTML document to PDF bytes.
///
/// Launches a fresh headless-Chromium process, loads the document as an
/// in-memory `data:` URL, waits for navigation to settle (bounded by
/// `settings.timeout`), and prints to A4 with 20mm vertical / 15mm
/// horizontal margins and backgrounds enabled.
///
/// The `Browser` handle is dropped on every return path, which kills the
/// Chromium process — no engine instance outlives the call.
///
/// This is a blocking function; async callers should wrap it in
/// `spawn_blocking`.
pub fn html_to_pdf(html: &str, settings: &PdfSettings) -> Result<Vec<u8>, RenderError> {
    let started = Instant::now();

    let options = LaunchOptions::default_builder()
        .headless(true)
        .window_size(Some((1920, 1080)))
        .path(settings.chrome_path.clone())
        .build()
        .map_err(|e| RenderError::Launch(e.to_string()))?;

    let browser = Browser::new(options).map_err(|e| RenderError::Launch(e.to_string()))?;

    let tab = browser
        .new_tab()
        .map_err(|e| RenderError::Launch(e.to_string()))?;
    tab.set_default_timeout(settings.timeout);

    let url = format!("data:text/html;base64,{}", BASE64.encode(html));
    tab.navigate_to(&url)
        .map_err(|e| RenderError::Load(e.to_string()))?;
    tab.wait_until_navigated()
        .map_err(|e| RenderError::Load(e.to_string()))?;

    let pdf = tab
        .print_to_pdf(Some(print_options()))
        .map_err(|e| RenderError::Pdf(e.to_string()))?;

    tracing::info!(
        html_bytes = html.len(),
        pdf_bytes = pdf.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "pdf generated"
    );

    Ok(pdf)
}

fn print_options() -> PrintToPdfOptions {
    PrintToPdfOptions {
        landscape: Some(false),
        print_background: Some(true),
        scale: Some(1.0),
        paper_width: Some(A4_WIDTH_IN),
        paper_height: Some(A4_HEIGHT_IN),
        margin_top: Some(20.0 / MM_PER_INCH),
        margin_bottom: Some(20.0 / MM_PER_INCH),
        margin_left: Some(15.0 / MM_PER_INCH),
        margin_right: Some(15.0 / MM_PER_INCH),
        ..Default::default()
    }
}
