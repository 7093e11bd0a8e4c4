//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To point the dashboard at another backend, only edit this file
//! (or set the environment variables below).

/// Default inference backend URL
///
/// This is the fallback URL when no environment variable is set.
/// The reference backend is a FastAPI service listening on port 8000.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Default request timeout in seconds, applied to every backend call
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "SolGuard";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get backend URL from environment or use default
pub fn get_backend_url() -> String {
    std::env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string())
}

/// Get request timeout from environment or use default
pub fn get_timeout_secs() -> u64 {
    std::env::var("BACKEND_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}
