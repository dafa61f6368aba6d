pub mod aggregate;
pub mod grade;

pub use aggregate::{
    aggregate, aggregate_partial, top_recommendations, IncompleteMeasurement, ScoringResult,
    MAX_RECOMMENDATIONS,
};
pub use grade::Grade;
