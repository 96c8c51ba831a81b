//! Build-time Configuration
//!
//! Backend location and UI timing constants.

/// Default backend base URL
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// How long the "saved" toast stays visible
pub const TOAST_DURATION_MS: u32 = 2200;

/// Placeholder rows shown in the task list while loading
pub const SKELETON_ROWS: usize = 3;

/// Literal text sent by the live coach "Send test" button
pub const LIVE_TEST_MESSAGE: &str = "hello coach";

/// Live coaching socket path, relative to the backend base URL
pub const LIVE_PATH: &str = "/ws/live";

/// Backend base URL, taken from `PETS_BACKEND_URL` at build time.
pub fn backend_url() -> String {
    resolve_backend_url(option_env!("PETS_BACKEND_URL"))
}

/// Live coaching socket URL derived from the backend base URL.
pub fn live_url() -> String {
    socket_url(&backend_url(), LIVE_PATH)
}

fn resolve_backend_url(configured: Option<&str>) -> String {
    let url = match configured.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_BACKEND_URL,
    };
    url.trim_end_matches('/').to_string()
}

fn socket_url(base: &str, path: &str) -> String {
    let base = if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{}", rest)
    } else if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{}", rest)
    } else {
        base.to_string()
    };
    format!("{}{}", base, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_url_default_and_trim() {
        assert_eq!(resolve_backend_url(None), DEFAULT_BACKEND_URL);
        assert_eq!(resolve_backend_url(Some("  ")), DEFAULT_BACKEND_URL);
        assert_eq!(resolve_backend_url(Some("https://api.pets.dev/")), "https://api.pets.dev");
    }

    #[test]
    fn test_socket_url_scheme() {
        assert_eq!(socket_url("http://localhost:8000", LIVE_PATH), "ws://localhost:8000/ws/live");
        assert_eq!(socket_url("https://api.pets.dev", LIVE_PATH), "wss://api.pets.dev/ws/live");
    }
}
