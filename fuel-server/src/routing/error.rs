//! Routing error types.

use crate::domain::DomainError;

/// Errors from route providers.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Route geometry held an invalid coordinate or too few points
    #[error("invalid route geometry: {0}")]
    Geometry(#[from] DomainError),

    /// Provider answered but found no route between the points
    #[error("no route found between the given points")]
    NoRoute,

    /// Every configured provider failed
    #[error("failed to retrieve route from all providers")]
    AllProvidersFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RouteError::Api {
            status: 429,
            message: "rate limited".into(),
        };
        assert_eq!(err.to_string(), "API error 429: rate limited");

        let err = RouteError::AllProvidersFailed;
        assert_eq!(err.to_string(), "failed to retrieve route from all providers");

        let err = RouteError::from(DomainError::RouteTooShort(1));
        assert!(err.to_string().starts_with("invalid route geometry"));
    }
}
