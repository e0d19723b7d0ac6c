//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// Input rejected before any request was sent.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SdkError {
    /// HTTP status code, if the backend answered with a non-success status.
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::Http(e) => e.status(),
            _ => None,
        }
    }
}

/// HTTP-layer errors.
///
/// Every variant carries the operation-specific message (`context`), e.g.
/// `"Failed to fetch data for NVDA"`, which is also the start of its `Display`.
#[derive(Error, Debug)]
pub enum HttpError {
    /// The request never produced a response (connect, DNS, timeout, body read).
    #[cfg(feature = "http")]
    #[error("{context}: {source}")]
    Network {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status. The body was not decoded.
    #[error("{context} (status {status})")]
    Status {
        context: String,
        status: u16,
        body: String,
    },

    /// 2xx response whose body is not the expected JSON.
    #[error("{context}: invalid response body: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl HttpError {
    /// The operation-specific message.
    pub fn context(&self) -> &str {
        match self {
            #[cfg(feature = "http")]
            HttpError::Network { context, .. } => context,
            HttpError::Status { context, .. } => context,
            HttpError::Decode { context, .. } => context,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        match self {
            #[cfg(feature = "http")]
            HttpError::Network { .. } => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display_starts_with_context() {
        let err = HttpError::Status {
            context: "Failed to fetch data for NVDA".to_string(),
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to fetch data for NVDA (status 404)");
        assert_eq!(err.context(), "Failed to fetch data for NVDA");
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_network());
    }

    #[test]
    fn test_decode_error_has_no_status() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = HttpError::Decode {
            context: "Failed to search stocks".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("Failed to search stocks: invalid response body"));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_sdk_error_status_passthrough() {
        let err: SdkError = HttpError::Status {
            context: "Failed to fetch admin stocks".to_string(),
            status: 500,
            body: String::new(),
        }
        .into();
        assert_eq!(err.status(), Some(500));
        assert_eq!(SdkError::Validation("empty".into()).status(), None);
    }
}
