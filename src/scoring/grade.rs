use std::fmt;

/// Letter grade bucket derived from a display score (0-100, higher is
/// better). Stored grades always take precedence; this classifier only
/// fills the gap for entries that arrive without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Grade {
    F,
    D,
    DPlus,
    CMinus,
    C,
    CPlus,
    BMinus,
    B,
    BPlus,
    AMinus,
    A,
    APlus,
}

/// Fixed threshold table, best grade first. Boundary values use `>=`.
const THRESHOLDS: [(f64, Grade); 11] = [
    (90.0, Grade::APlus),
    (85.0, Grade::A),
    (80.0, Grade::AMinus),
    (75.0, Grade::BPlus),
    (70.0, Grade::B),
    (65.0, Grade::BMinus),
    (60.0, Grade::CPlus),
    (55.0, Grade::C),
    (50.0, Grade::CMinus),
    (45.0, Grade::DPlus),
    (40.0, Grade::D),
];

impl Grade {
    /// Classify a display score into its grade bucket. Scores below every
    /// threshold (including anything under 40) land on F, so the table is
    /// exhaustive over [0,100].
    pub fn from_score(score: f64) -> Grade {
        for (threshold, grade) in THRESHOLDS {
            if score >= threshold {
                return grade;
            }
        }
        Grade::F
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_values_use_gte() {
        assert_eq!(Grade::from_score(90.0), Grade::APlus);
        assert_eq!(Grade::from_score(89.9), Grade::A);
        assert_eq!(Grade::from_score(40.0), Grade::D);
        assert_eq!(Grade::from_score(39.9), Grade::F);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(Grade::from_score(100.0), Grade::APlus);
        assert_eq!(Grade::from_score(0.0), Grade::F);
    }

    #[test]
    fn test_every_bucket_is_reachable() {
        let expected = [
            (92.0, "A+"),
            (87.0, "A"),
            (82.0, "A-"),
            (77.0, "B+"),
            (72.0, "B"),
            (67.0, "B-"),
            (62.0, "C+"),
            (57.0, "C"),
            (52.0, "C-"),
            (47.0, "D+"),
            (42.0, "D"),
            (20.0, "F"),
        ];
        for (score, grade) in expected {
            assert_eq!(Grade::from_score(score).as_str(), grade, "score {}", score);
        }
    }

    #[test]
    fn test_grades_are_monotonic_over_the_range() {
        // Walking down from 100 in tenths must never produce a better grade
        // at a lower score.
        let mut previous = Grade::from_score(100.0);
        let mut tenths = 1000i32;
        while tenths >= 0 {
            let grade = Grade::from_score(f64::from(tenths) / 10.0);
            assert!(grade <= previous, "inversion at score {}", tenths);
            previous = grade;
            tenths -= 1;
        }
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(Grade::APlus.to_string(), "A+");
        assert_eq!(Grade::CMinus.to_string(), "C-");
    }
}
