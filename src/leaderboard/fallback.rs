use chrono::{Duration, Utc};

use crate::source::types::ScoreEntry;

/// Message shown when the source was never configured.
pub const UNCONFIGURED_MESSAGE: &str = "Sample leaderboard data - score service not configured";
/// Default warning for the unconfigured path when the configuration check
/// carries no message of its own.
pub const UNCONFIGURED_WARNING: &str =
    "Score service not configured; set source_url in the config file";
/// Message shown when the service exists but could not be reached.
pub const OFFLINE_MESSAGE: &str = "Sample leaderboard data - score service unreachable";
/// Warning for the offline path, worded distinctly from a generic error.
pub const OFFLINE_WARNING: &str =
    "Offline mode: the score service could not be reached; showing sample data";

/// Canned demo entries for the degraded paths, consistent with the stored
/// lower-is-better convention (the best entry carries the smallest
/// composite). Ids carry the demo marker so aliasing always masks them, and
/// the caller must pair the set with a warning; it is never served as
/// authoritative data.
pub fn fallback_entries() -> Vec<ScoreEntry> {
    let now = Utc::now();
    let demo = |user_id: &str, composite: f64, minutes_ago: i64| ScoreEntry {
        composite_score: Some(composite),
        campus_affiliation: Some("Demo Campus".to_string()),
        created_at: Some(now - Duration::minutes(minutes_ago)),
        ..ScoreEntry::new(user_id)
    };

    vec![
        demo("demo_user_1", 12.5, 50),
        demo("demo_user_2", 18.0, 40),
        demo("demo_user_3", 22.5, 30),
        demo("demo_user_4", 27.0, 20),
        demo("demo_user_5", 31.5, 10),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_size_is_bounded() {
        let entries = fallback_entries();
        assert!((3..=5).contains(&entries.len()));
    }

    #[test]
    fn test_fallback_scores_are_lower_is_better() {
        let entries = fallback_entries();
        let scores: Vec<f64> = entries
            .iter()
            .map(|e| e.composite_score.unwrap())
            .collect();
        let mut sorted = scores.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(scores, sorted, "best demo entry must come first");
        assert!(scores.iter().all(|s| (0.0..=100.0).contains(s)));
    }

    #[test]
    fn test_fallback_ids_carry_the_demo_marker() {
        for entry in fallback_entries() {
            assert!(entry.user_id.contains("demo_user"));
            assert_eq!(entry.campus_affiliation.as_deref(), Some("Demo Campus"));
            assert!(entry.created_at.is_some());
        }
    }

    #[test]
    fn test_warnings_are_distinguishable() {
        assert_ne!(UNCONFIGURED_WARNING, OFFLINE_WARNING);
        assert!(OFFLINE_WARNING.contains("Offline"));
    }
}
