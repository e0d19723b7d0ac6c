//! Network URL constants for the stockdesk SDK.

/// Default REST API base URL (local backend).
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Environment variable consulted by [`api_url_from_env`].
pub const API_URL_ENV: &str = "STOCKDESK_API_URL";

/// Resolve the base URL from [`API_URL_ENV`], falling back to [`DEFAULT_API_URL`].
///
/// Only called when the caller opts in (e.g. `StockClientBuilder::from_env`);
/// nothing in the crate reads the environment on its own.
pub fn api_url_from_env() -> String {
    resolve_api_url(std::env::var(API_URL_ENV).ok())
}

fn resolve_api_url(value: Option<String>) -> String {
    match value {
        Some(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => DEFAULT_API_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_api_url_fallback() {
        assert_eq!(resolve_api_url(None), DEFAULT_API_URL);
        assert_eq!(resolve_api_url(Some("   ".into())), DEFAULT_API_URL);
        assert_eq!(
            resolve_api_url(Some(" https://api.example.com ".into())),
            "https://api.example.com"
        );
    }
}
