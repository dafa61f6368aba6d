pub mod error;
pub mod http;
pub mod types;

pub use error::SourceError;
pub use http::HttpSource;
pub use types::{Boundary, BoundaryScores, Recommendation, ScoreEntry};

/// Result of the pre-fetch configuration check.
#[derive(Debug, Clone)]
pub struct SourceCheck {
    pub is_valid: bool,
    pub message: Option<String>,
}

impl SourceCheck {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
        }
    }
}

/// The only outward call the pipeline makes. Any store or transport can sit
/// behind this trait as long as it honors the contract.
#[allow(async_fn_in_trait)]
pub trait EntrySource {
    /// Checked before fetching; an invalid source routes the pipeline
    /// straight to the fallback dataset.
    fn check_configured(&self) -> SourceCheck;

    /// Fetch up to `limit` stored entries.
    async fn fetch_entries(&self, limit: Option<usize>) -> Result<Vec<ScoreEntry>, SourceError>;
}
