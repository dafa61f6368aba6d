use serde::Deserialize;
use tokio_retry::{strategy::ExponentialBackoff, Retry};

use super::types::ScoreEntry;
use super::{EntrySource, SourceCheck, SourceError};

/// Wire shape of the score service's entries endpoint.
#[derive(Debug, Deserialize)]
struct EntriesPayload {
    success: bool,
    #[serde(default)]
    data: Option<Vec<ScoreEntry>>,
    #[serde(default)]
    error: Option<String>,
}

/// Entry source backed by the HTTP score service.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl HttpSource {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn entries_url(base: &str, limit: Option<usize>) -> String {
        let base = base.trim_end_matches('/');
        match limit {
            Some(n) => format!("{}/entries?limit={}", base, n),
            None => format!("{}/entries", base),
        }
    }
}

impl EntrySource for HttpSource {
    fn check_configured(&self) -> SourceCheck {
        match self.base_url.as_deref() {
            Some(url) if !url.trim().is_empty() => SourceCheck::valid(),
            _ => SourceCheck::invalid(
                "No score service URL configured. Set source_url in the config file.",
            ),
        }
    }

    async fn fetch_entries(&self, limit: Option<usize>) -> Result<Vec<ScoreEntry>, SourceError> {
        let base = self.base_url.as_deref().ok_or_else(|| {
            SourceError::Upstream("fetch attempted without a configured source".to_string())
        })?;
        let url = Self::entries_url(base, limit);

        // Retry strategy: exponential backoff with 3 attempts
        let retry_strategy = ExponentialBackoff::from_millis(100)
            .max_delay(std::time::Duration::from_secs(5))
            .take(3);

        let response = Retry::spawn(retry_strategy, || async {
            self.client.get(&url).send().await
        })
        .await
        .map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                SourceError::Transport(format!("could not reach {}: {}", url, e))
            } else {
                SourceError::Upstream(format!("score service request failed: {}", e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Upstream(format!(
                "score service returned {}",
                status
            )));
        }

        let payload: EntriesPayload = response.json().await.map_err(|e| {
            SourceError::Upstream(format!("malformed score service response: {}", e))
        })?;

        if !payload.success {
            return Err(SourceError::Upstream(payload.error.unwrap_or_else(|| {
                "score service reported failure".to_string()
            })));
        }

        Ok(payload.data.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_url_without_limit() {
        assert_eq!(
            HttpSource::entries_url("https://scores.example.org/api", None),
            "https://scores.example.org/api/entries"
        );
    }

    #[test]
    fn test_entries_url_with_limit_and_trailing_slash() {
        assert_eq!(
            HttpSource::entries_url("https://scores.example.org/api/", Some(50)),
            "https://scores.example.org/api/entries?limit=50"
        );
    }

    #[test]
    fn test_unset_url_is_not_configured() {
        let source = HttpSource::new(None);
        let check = source.check_configured();
        assert!(!check.is_valid);
        assert!(check.message.unwrap().contains("source_url"));
    }

    #[test]
    fn test_blank_url_is_not_configured() {
        let source = HttpSource::new(Some("   ".to_string()));
        assert!(!source.check_configured().is_valid);
    }

    #[test]
    fn test_configured_url_passes_check() {
        let source = HttpSource::new(Some("https://scores.example.org".to_string()));
        let check = source.check_configured();
        assert!(check.is_valid);
        assert!(check.message.is_none());
    }

    #[test]
    fn test_payload_parses_service_failure() {
        let json = r#"{"success": false, "error": "db timeout"}"#;
        let payload: EntriesPayload = serde_json::from_str(json).unwrap();
        assert!(!payload.success);
        assert_eq!(payload.error.as_deref(), Some("db timeout"));
        assert!(payload.data.is_none());
    }

    #[test]
    fn test_payload_parses_entries() {
        let json = r#"{"success": true, "data": [{"user_id": "user_1", "composite_score": 25.0}]}"#;
        let payload: EntriesPayload = serde_json::from_str(json).unwrap();
        assert!(payload.success);
        assert_eq!(payload.data.unwrap().len(), 1);
    }
}
