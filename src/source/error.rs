use thiserror::Error;

/// Failure categories for the entry source.
///
/// The pipeline branches on the category, never on message text: transport
/// failures degrade to sample data, upstream failures surface as hard
/// errors so stale or fake data is never presented as authoritative.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The score service could not be reached at all (connect, DNS, timeout).
    #[error("score service unreachable: {0}")]
    Transport(String),

    /// The service was reached but reported a failure or returned a payload
    /// that could not be used.
    #[error("{0}")]
    Upstream(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message_passes_through_verbatim() {
        let err = SourceError::Upstream("db timeout".to_string());
        assert_eq!(err.to_string(), "db timeout");
    }

    #[test]
    fn test_transport_message_names_the_service() {
        let err = SourceError::Transport("connection refused".to_string());
        assert!(err.to_string().contains("unreachable"));
    }
}
