use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Which direction of the composite score means "better".
///
/// The canonical stored convention is lower-is-better; a source that stores
/// inverted scores must declare it here once rather than pre-inverting
/// values. Mixing conventions within one leaderboard is an invariant
/// violation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreDirection {
    #[default]
    LowerIsBetter,
    HigherIsBetter,
}

/// Sort candidates best-first under the configured direction and assign
/// dense 1-based ranks. Ties never share a rank: the earlier timestamp
/// takes the better position, so re-runs over the same data are repeatable.
pub fn rank<T>(
    mut candidates: Vec<T>,
    direction: ScoreDirection,
    score_of: impl Fn(&T) -> f64,
    time_of: impl Fn(&T) -> DateTime<Utc>,
) -> Vec<(usize, T)> {
    candidates.sort_by(|a, b| {
        let (sa, sb) = (score_of(a), score_of(b));
        let score_cmp = match direction {
            ScoreDirection::LowerIsBetter => sa.partial_cmp(&sb),
            ScoreDirection::HigherIsBetter => sb.partial_cmp(&sa),
        }
        .unwrap_or(Ordering::Equal);
        if score_cmp != Ordering::Equal {
            return score_cmp;
        }
        // Tie-breaker: earlier submission ranks first
        time_of(a).cmp(&time_of(b))
    });

    candidates
        .into_iter()
        .enumerate()
        .map(|(i, c)| (i + 1, c))
        .collect()
}

/// Keep only the top `limit` ranked rows. Rank numbers are left intact so a
/// truncated board still reads 1..=N.
pub fn truncate<T>(ranked: Vec<(usize, T)>, limit: Option<usize>) -> Vec<(usize, T)> {
    match limit {
        Some(n) => ranked.into_iter().take(n).collect(),
        None => ranked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        score: f64,
        at: DateTime<Utc>,
    }

    fn row(name: &'static str, score: f64, minutes_ago: i64) -> Row {
        Row {
            name,
            score,
            at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    fn rank_rows(rows: Vec<Row>, direction: ScoreDirection) -> Vec<(usize, Row)> {
        rank(rows, direction, |r| r.score, |r| r.at)
    }

    #[test]
    fn test_lower_is_better_orders_ascending() {
        let rows = vec![row("c", 30.0, 10), row("a", 10.0, 10), row("b", 20.0, 10)];
        let ranked = rank_rows(rows, ScoreDirection::LowerIsBetter);
        let order: Vec<_> = ranked.iter().map(|(r, row)| (*r, row.name)).collect();
        assert_eq!(order, vec![(1, "a"), (2, "b"), (3, "c")]);
    }

    #[test]
    fn test_higher_is_better_orders_descending() {
        let rows = vec![row("c", 30.0, 10), row("a", 10.0, 10), row("b", 20.0, 10)];
        let ranked = rank_rows(rows, ScoreDirection::HigherIsBetter);
        let order: Vec<_> = ranked.iter().map(|(_, row)| row.name).collect();
        assert_eq!(order, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_ranks_are_dense_and_one_based() {
        let rows = (0..7).map(|i| row("x", i as f64, 0)).collect();
        let ranked = rank_rows(rows, ScoreDirection::LowerIsBetter);
        let ranks: Vec<_> = ranked.iter().map(|(r, _)| *r).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_ties_break_on_earlier_timestamp() {
        // Same score: the older submission must take the better rank, in
        // whatever input order the entries arrive.
        let older = row("older", 25.0, 60);
        let newer = row("newer", 25.0, 5);
        for rows in [
            vec![newer.clone(), older.clone()],
            vec![older.clone(), newer.clone()],
        ] {
            let ranked = rank_rows(rows, ScoreDirection::LowerIsBetter);
            assert_eq!(ranked[0].1.name, "older");
            assert_eq!(ranked[1].1.name, "newer");
        }
    }

    #[test]
    fn test_ties_do_not_share_a_rank() {
        let rows = vec![row("a", 25.0, 30), row("b", 25.0, 20), row("c", 25.0, 10)];
        let ranked = rank_rows(rows, ScoreDirection::LowerIsBetter);
        let ranks: Vec<_> = ranked.iter().map(|(r, _)| *r).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_truncate_keeps_top_ranks() {
        let rows = (1..=5).map(|i| row("x", i as f64, 0)).collect();
        let ranked = truncate(rank_rows(rows, ScoreDirection::LowerIsBetter), Some(2));
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].0, 1);
        assert_eq!(ranked[1].0, 2);
    }

    #[test]
    fn test_no_limit_returns_everything() {
        let rows = (1..=5).map(|i| row("x", i as f64, 0)).collect();
        let ranked = truncate(rank_rows(rows, ScoreDirection::LowerIsBetter), None);
        assert_eq!(ranked.len(), 5);
    }
}
