//! The transit "unavailable" signal.
//!
//! Everything that can go wrong talking to the transit provider folds into
//! `Unavailable`: it is the seam that triggers pedestrian fallback, so it
//! is never propagated as a fatal error.

use std::fmt;

/// Why the transit provider could not supply itineraries.
#[derive(Debug, Clone)]
pub enum Unavailable {
    /// The provider reported the endpoints are too close for transit
    /// (status 11 or the equivalent error message).
    TooClose,

    /// The provider returned a non-success HTTP status.
    Http { status: u16, message: String },

    /// Network failure (connect error, reset, DNS).
    Network(String),

    /// The request timed out.
    Timeout,

    /// The response body could not be parsed.
    MalformedBody { message: String },
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unavailable::TooClose => write!(f, "endpoints too close for transit routing"),
            Unavailable::Http { status, message } => {
                write!(f, "transit API error {status}: {message}")
            }
            Unavailable::Network(msg) => write!(f, "transit network error: {msg}"),
            Unavailable::Timeout => write!(f, "transit request timed out"),
            Unavailable::MalformedBody { message } => {
                write!(f, "malformed transit response: {message}")
            }
        }
    }
}

impl std::error::Error for Unavailable {}

impl From<reqwest::Error> for Unavailable {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Unavailable::Timeout
        } else {
            Unavailable::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            Unavailable::TooClose.to_string(),
            "endpoints too close for transit routing"
        );
        assert_eq!(
            Unavailable::Http {
                status: 500,
                message: "Internal Server Error".into()
            }
            .to_string(),
            "transit API error 500: Internal Server Error"
        );
        assert_eq!(
            Unavailable::Timeout.to_string(),
            "transit request timed out"
        );
        assert!(
            Unavailable::MalformedBody {
                message: "expected value".into()
            }
            .to_string()
            .contains("malformed")
        );
    }
}
