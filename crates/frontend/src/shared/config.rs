//! Build-time configuration of the web client.
//!
//! Values are baked in by the bundler through environment variables:
//! - `LEXIGUARD_API_BASE_URL`: analysis service origin, e.g. `https://api.lexiguard.app`
//! - `LEXIGUARD_FIREBASE_API_KEY`: web API key of the identity provider project
//!
//! Without an explicit API base the service is assumed to run next to the
//! page on port 8000.

use once_cell::sync::Lazy;

pub const DEFAULT_API_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub firebase_api_key: String,
}

impl AppConfig {
    fn load() -> Self {
        let (protocol, hostname) = window_origin();
        let config = Self {
            api_base_url: resolve_api_base(
                option_env!("LEXIGUARD_API_BASE_URL"),
                &protocol,
                &hostname,
            ),
            firebase_api_key: option_env!("LEXIGUARD_FIREBASE_API_KEY")
                .unwrap_or_default()
                .trim()
                .to_string(),
        };
        if config.firebase_api_key.is_empty() {
            log::warn!("LEXIGUARD_FIREBASE_API_KEY was not set at build time; sign-in will fail");
        }
        config
    }
}

static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::load);

pub fn app_config() -> &'static AppConfig {
    &CONFIG
}

fn window_origin() -> (String, String) {
    let Some(window) = web_sys::window() else {
        return ("http:".to_string(), "127.0.0.1".to_string());
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    (protocol, hostname)
}

/// Configured base (trailing slashes removed) or `<protocol>//<hostname>:8000`
pub fn resolve_api_base(configured: Option<&str>, protocol: &str, hostname: &str) -> String {
    match configured.map(str::trim) {
        Some(base) if !base.is_empty() => base.trim_end_matches('/').to_string(),
        _ => format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_base_is_used() {
        assert_eq!(
            resolve_api_base(Some("https://api.lexiguard.app/"), "http:", "localhost"),
            "https://api.lexiguard.app"
        );
    }

    #[test]
    fn test_falls_back_to_window_host() {
        assert_eq!(
            resolve_api_base(None, "http:", "localhost"),
            "http://localhost:8000"
        );
        assert_eq!(
            resolve_api_base(Some("   "), "https:", "lexiguard.app"),
            "https://lexiguard.app:8000"
        );
    }
}
