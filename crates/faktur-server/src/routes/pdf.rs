use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;
use crate::state::AppState;

/// Convert an uploaded HTML file to PDF.
///
/// Expects a multipart form with a single `file` field. Validation happens
/// before any browser work, so a rejected request never launches Chromium.
pub async fn generate_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut html: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        if !is_html(&filename, &content_type) {
            return Err(ApiError::BadRequest(
                "Only HTML files are accepted.".to_string(),
            ));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
        if data.len() > state.config.max_upload_bytes {
            return Err(ApiError::PayloadTooLarge);
        }

        html = Some(String::from_utf8(data.to_vec()).map_err(|_| {
            ApiError::BadRequest("Uploaded file is not valid UTF-8.".to_string())
        })?);
        break;
    }

    let Some(html) = html else {
        return Err(ApiError::BadRequest(
            "No file uploaded. Please upload an HTML file.".to_string(),
        ));
    };

    let pdf = convert(&state, html).await?;
    Ok(pdf_response(pdf, "output.pdf"))
}

fn is_html(filename: &str, content_type: &str) -> bool {
    content_type == "text/html"
        || filename.ends_with(".html")
        || filename.ends_with(".htm")
}

/// Run one conversion under the concurrency cap.
///
/// `html_to_pdf` is blocking (it drives a Chromium process), so it runs on
/// the blocking pool; the semaphore permit is held until the browser is
/// torn down.
pub(crate) async fn convert(state: &AppState, html: String) -> Result<Vec<u8>, ApiError> {
    let permit = state
        .render_slots
        .clone()
        .acquire_owned()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    let settings = state.pdf_settings();

    let pdf = tokio::task::spawn_blocking(move || {
        let _permit = permit;
        faktur_render::html_to_pdf(&html, &settings)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("render task panicked: {e}")))??;

    Ok(pdf)
}

pub(crate) fn pdf_response(pdf: Vec<u8>, filename: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
            (header::CONTENT_LENGTH, pdf.len().to_string()),
        ],
        pdf,
    )
        .into_response()
}
