use serde::{Deserialize, Serialize};

use crate::leaderboard::rank::ScoreDirection;

/// Top-level configuration.
///
/// Example YAML:
/// ```yaml
/// source_url: "https://scores.example.org/api"
/// limit: 50
/// score_direction: lower_is_better
/// allow_partial_scores: false
/// aliases:
///   - SolarFox
///   - RiverOtter
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base URL of the score service. Unset means sample-data mode: the
    /// board still renders, labeled with a warning.
    #[serde(default)]
    pub source_url: Option<String>,

    /// Default maximum number of rows to request and display.
    #[serde(default)]
    pub limit: Option<usize>,

    /// Direction of the stored composite score (default: lower_is_better).
    #[serde(default)]
    pub score_direction: ScoreDirection,

    /// Opt-in: average over incomplete boundary sets instead of rejecting
    /// those entries.
    #[serde(default)]
    pub allow_partial_scores: bool,

    /// Override for the built-in pseudonym pool.
    #[serde(default)]
    pub aliases: Option<Vec<String>>,
}
