use thiserror::Error;

use crate::source::types::{Boundary, BoundaryScores, Recommendation};

/// A boundary set that cannot be aggregated as measured.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IncompleteMeasurement {
    /// One or more of the five dimensions is absent.
    #[error("missing boundary dimensions: {}", missing.join(", "))]
    MissingDimensions { missing: Vec<&'static str> },

    /// A dimension carries a value outside [0,100].
    #[error("{dimension} score {value} outside [0,100]")]
    OutOfRange { dimension: &'static str, value: f64 },

    /// Nothing to average at all.
    #[error("no boundary dimensions present")]
    Empty,
}

/// Aggregated result for one entry's boundary measurements.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringResult {
    /// Arithmetic mean of the dimension values, lower is better.
    pub composite: f64,
    /// Rounded per-dimension values for breakdown display, in fixed
    /// boundary order.
    pub per_boundary_averages: Vec<(Boundary, f64)>,
    /// True when computed over fewer than five dimensions.
    pub partial: bool,
}

/// Strict aggregation: all five dimensions must be present and in range.
pub fn aggregate(scores: &BoundaryScores) -> Result<ScoringResult, IncompleteMeasurement> {
    let missing = scores.missing();
    if !missing.is_empty() {
        return Err(IncompleteMeasurement::MissingDimensions {
            missing: missing.iter().map(|b| b.key()).collect(),
        });
    }
    mean_of(scores)
}

/// Partial aggregation: averages over whatever dimensions are present and
/// flags the result. Callers opt into this explicitly; it is never the
/// default treatment of incomplete data.
pub fn aggregate_partial(scores: &BoundaryScores) -> Result<ScoringResult, IncompleteMeasurement> {
    mean_of(scores)
}

fn mean_of(scores: &BoundaryScores) -> Result<ScoringResult, IncompleteMeasurement> {
    let mut sum = 0.0;
    let mut present = Vec::new();

    for boundary in Boundary::ALL {
        if let Some(value) = scores.get(boundary) {
            if !(0.0..=100.0).contains(&value) {
                return Err(IncompleteMeasurement::OutOfRange {
                    dimension: boundary.key(),
                    value,
                });
            }
            sum += value;
            present.push((boundary, value.round()));
        }
    }

    if present.is_empty() {
        return Err(IncompleteMeasurement::Empty);
    }

    let partial = present.len() < Boundary::ALL.len();
    Ok(ScoringResult {
        composite: sum / present.len() as f64,
        per_boundary_averages: present,
        partial,
    })
}

/// Display cap for upstream recommendations.
pub const MAX_RECOMMENDATIONS: usize = 2;

/// Recommendations arrive pre-ordered by expected impact; only the first
/// two reach the display.
pub fn top_recommendations(recs: &[Recommendation]) -> &[Recommendation] {
    &recs[..recs.len().min(MAX_RECOMMENDATIONS)]
}
