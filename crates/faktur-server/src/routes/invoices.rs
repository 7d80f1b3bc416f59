use axum::Json;
use axum::extract::State;
use axum::response::Response;

use faktur_core::models::invoice::Invoice;
use faktur_core::render::render_invoice;

use crate::error::ApiError;
use crate::routes::pdf::{convert, pdf_response};
use crate::state::AppState;

/// Render a structured invoice against the built-in template and convert
/// it to PDF. Same pipeline as the upload route, minus the browser client.
pub async fn invoice_pdf(
    State(state): State<AppState>,
    Json(invoice): Json<Invoice>,
) -> Result<Response, ApiError> {
    let html = render_invoice(&invoice)?;
    let pdf = convert(&state, html).await?;
    Ok(pdf_response(pdf, "invoice.pdf"))
}
