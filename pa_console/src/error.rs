use thiserror::Error;

/// Failure of a single console round trip or page lookup.
///
/// Each call site turns these into its own short message; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("page element unavailable: {0}")]
    Dom(String),
}

pub type Result<T, E = ConsoleError> = std::result::Result<T, E>;

impl From<serde_json::Error> for ConsoleError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_become_decode_failures() {
        let error: ConsoleError = serde_json::from_str::<u32>("\"nope\"")
            .unwrap_err()
            .into();
        assert!(matches!(error, ConsoleError::Decode(_)));
    }

    #[test]
    fn status_error_mentions_code() {
        let error = ConsoleError::Status {
            status: 500,
            body: "Registry with UID 'X' could not be found".to_string(),
        };
        assert!(error.to_string().contains("500"));
    }
}
