use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::scoring::{aggregate, aggregate_partial, Grade};
use crate::source::types::{BoundaryScores, Recommendation, ScoreEntry};
use crate::source::{EntrySource, SourceError};

use super::alias::AliasGenerator;
use super::fallback::{
    fallback_entries, OFFLINE_MESSAGE, OFFLINE_WARNING, UNCONFIGURED_MESSAGE, UNCONFIGURED_WARNING,
};
use super::rank::{rank, truncate, ScoreDirection};

/// Pipeline policy, fixed once per invocation.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    pub direction: ScoreDirection,
    /// Explicit opt-in to averaging over incomplete boundary sets instead
    /// of rejecting them.
    pub allow_partial_scores: bool,
    /// Maximum number of rows returned; `total_users` still reports the
    /// full ranked population.
    pub limit: Option<usize>,
    pub aliases: AliasGenerator,
}

/// One row of the final board. Built fresh per invocation, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub user_id: String,
    pub composite_score: f64,
    pub grade: String,
    pub campus_affiliation: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary_scores: Option<BoundaryScores>,
    pub pseudonym: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<Recommendation>,
}

/// Rendering-ready pipeline output.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardResponse {
    pub success: bool,
    pub leaderboard: Vec<LeaderboardEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_users: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Entries dropped by validation, surfaced for observability.
    #[serde(skip_serializing_if = "is_zero")]
    pub rejected_entries: usize,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl LeaderboardResponse {
    /// HTTP-style status for transport layers: degraded data is still 200,
    /// only an upstream failure maps to 500.
    pub fn http_status(&self) -> u16 {
        if self.success {
            200
        } else {
            500
        }
    }

    fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            leaderboard: Vec::new(),
            total_users: None,
            message: None,
            warning: None,
            error: Some(error.into()),
            rejected_entries: 0,
        }
    }
}

/// Run the full fetch -> aggregate -> classify -> rank -> alias pipeline.
///
/// Degradation policy: an unconfigured source and a transport-level fetch
/// failure both fall back to labeled sample data with a warning and still
/// count as success; an upstream failure surfaces as a hard error with no
/// substitute data.
pub async fn build_leaderboard<S: EntrySource>(
    source: &S,
    options: &PipelineOptions,
) -> LeaderboardResponse {
    let check = source.check_configured();
    if !check.is_valid {
        let warning = check
            .message
            .unwrap_or_else(|| UNCONFIGURED_WARNING.to_string());
        return assemble(fallback_entries(), options, UNCONFIGURED_MESSAGE, Some(warning));
    }

    match source.fetch_entries(options.limit).await {
        Ok(entries) => assemble(entries, options, "Leaderboard retrieved successfully", None),
        Err(SourceError::Transport(_)) => assemble(
            fallback_entries(),
            options,
            OFFLINE_MESSAGE,
            Some(OFFLINE_WARNING.to_string()),
        ),
        Err(SourceError::Upstream(message)) => LeaderboardResponse::failure(message),
    }
}

/// A stored entry that survived validation, with its composite resolved.
struct Candidate {
    entry: ScoreEntry,
    composite: f64,
    timestamp: DateTime<Utc>,
}

/// Pre-pass: partition entries into valid and rejected so one malformed
/// entry never aborts the whole board. A stored composite wins; entries
/// without one have it derived from boundary detail.
fn validate(entries: Vec<ScoreEntry>, allow_partial: bool) -> (Vec<Candidate>, usize) {
    let now = Utc::now();
    let mut valid = Vec::with_capacity(entries.len());
    let mut rejected = 0usize;

    for entry in entries {
        let timestamp = entry.created_at.unwrap_or(now);
        let composite = match entry.composite_score {
            Some(score) if (0.0..=100.0).contains(&score) => Some(score),
            Some(_) => None,
            None => entry.boundary_scores.as_ref().and_then(|scores| {
                let result = if allow_partial {
                    aggregate_partial(scores)
                } else {
                    aggregate(scores)
                };
                result.ok().map(|r| r.composite)
            }),
        };

        match composite {
            Some(composite) => valid.push(Candidate {
                entry,
                composite,
                timestamp,
            }),
            None => rejected += 1,
        }
    }

    (valid, rejected)
}

fn assemble(
    entries: Vec<ScoreEntry>,
    options: &PipelineOptions,
    message: &str,
    warning: Option<String>,
) -> LeaderboardResponse {
    let (candidates, rejected) = validate(entries, options.allow_partial_scores);
    let total_users = candidates.len();

    let ranked = rank(
        candidates,
        options.direction,
        |c| c.composite,
        |c| c.timestamp,
    );
    let ranked = truncate(ranked, options.limit);

    let leaderboard = ranked
        .into_iter()
        .map(|(rank, c)| project(rank, c, options))
        .collect();

    LeaderboardResponse {
        success: true,
        leaderboard,
        total_users: Some(total_users),
        message: Some(message.to_string()),
        warning,
        error: None,
        rejected_entries: rejected,
    }
}

fn project(rank: usize, candidate: Candidate, options: &PipelineOptions) -> LeaderboardEntry {
    let Candidate {
        entry,
        composite,
        timestamp,
    } = candidate;

    // Grades read best-at-the-top, so a lower-is-better composite is
    // inverted to its display score before classification. Stored grades
    // are never overridden.
    let display_score = match options.direction {
        ScoreDirection::LowerIsBetter => 100.0 - composite,
        ScoreDirection::HigherIsBetter => composite,
    };
    let grade = entry
        .grade
        .unwrap_or_else(|| Grade::from_score(display_score).as_str().to_string());

    let pseudonym = entry
        .pseudonym
        .unwrap_or_else(|| options.aliases.alias_for(&entry.user_id, rank - 1));

    LeaderboardEntry {
        rank,
        user_id: entry.user_id,
        composite_score: composite,
        grade,
        campus_affiliation: entry
            .campus_affiliation
            .unwrap_or_else(|| "Unknown Campus".to_string()),
        timestamp,
        boundary_scores: entry.boundary_scores,
        pseudonym,
        recommendations: entry.recommendations,
    }
}
