//! Server configuration from environment variables.

use serde::{Deserialize, Serialize};

/// Top-level Docshelf configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocshelfConfig {
    /// HTTP server port.
    pub port: u16,
    /// Origin allowed by CORS (the companion front-end).
    pub allowed_origin: String,
}

impl DocshelfConfig {
    /// Create configuration from environment and defaults. Never fails —
    /// missing or malformed variables fall back to defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);

        let allowed_origin = std::env::var("DOCSHELF_ALLOWED_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        Self {
            port,
            allowed_origin,
        }
    }
}
