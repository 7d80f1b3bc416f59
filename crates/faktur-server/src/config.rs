use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Deployment configuration, read once at startup and passed into
/// [`crate::state::AppState`]. No global mutable state.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// CORS allow-list. Empty means no cross-origin browser access.
    pub allowed_origins: Vec<String>,
    /// Cap on the uploaded HTML file, in bytes.
    pub max_upload_bytes: usize,
    /// Cap on Chromium instances alive at once.
    pub max_concurrent_renders: usize,
    /// Quiescence bound for a single page load.
    pub render_timeout: Duration,
    /// Explicit Chromium binary; autodetected when unset.
    pub chrome_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            allowed_origins: Vec::new(),
            max_upload_bytes: 10 * 1024 * 1024,
            max_concurrent_renders: 4,
            render_timeout: Duration::from_secs(30),
            chrome_path: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let allowed_origins = env::var("ALLOWED_ORIGIN")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            host: env::var("FAKTUR_HOST").unwrap_or(defaults.host),
            port: parse_env("FAKTUR_PORT", defaults.port),
            allowed_origins,
            max_upload_bytes: parse_env("FAKTUR_MAX_UPLOAD_BYTES", defaults.max_upload_bytes),
            max_concurrent_renders: parse_env(
                "FAKTUR_MAX_CONCURRENT_RENDERS",
                defaults.max_concurrent_renders,
            ),
            render_timeout: Duration::from_secs(parse_env(
                "FAKTUR_RENDER_TIMEOUT_SECS",
                defaults.render_timeout.as_secs(),
            )),
            chrome_path: env::var("CHROME_PATH").ok().map(PathBuf::from),
        }
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
