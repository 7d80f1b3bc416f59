use std::sync::Arc;

use tokio::sync::Semaphore;

use faktur_render::PdfSettings;

use crate::config::ServerConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Bounds in-flight conversions; one permit per live Chromium instance.
    pub render_slots: Arc<Semaphore>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let permits = config.max_concurrent_renders;
        Self {
            config: Arc::new(config),
            render_slots: Arc::new(Semaphore::new(permits)),
        }
    }

    pub fn pdf_settings(&self) -> PdfSettings {
        PdfSettings {
            timeout: self.config.render_timeout,
            chrome_path: self.config.chrome_path.clone(),
        }
    }
}
