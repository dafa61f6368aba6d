use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The five planetary boundary dimensions scored by the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Climate,
    Biosphere,
    Biogeochemical,
    Freshwater,
    Aerosols,
}

impl Boundary {
    pub const ALL: [Boundary; 5] = [
        Boundary::Climate,
        Boundary::Biosphere,
        Boundary::Biogeochemical,
        Boundary::Freshwater,
        Boundary::Aerosols,
    ];

    /// Wire key used by the score service.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Climate => "climate",
            Self::Biosphere => "biosphere",
            Self::Biogeochemical => "biogeochemical",
            Self::Freshwater => "freshwater",
            Self::Aerosols => "aerosols",
        }
    }

    /// Human-facing dimension name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Climate => "Climate Change",
            Self::Biosphere => "Biosphere Integrity",
            Self::Biogeochemical => "Biogeochemical Flows",
            Self::Freshwater => "Freshwater Use",
            Self::Aerosols => "Aerosols & Novel Entities",
        }
    }
}

/// Per-boundary sub-scores in [0,100], lower meaning less environmental
/// pressure. An absent dimension is a data-quality problem, never a silent
/// zero; the aggregator decides how to treat it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundaryScores {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub climate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biosphere: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biogeochemical: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freshwater: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aerosols: Option<f64>,
}

impl BoundaryScores {
    /// Build a set with all five dimensions present.
    pub fn complete(
        climate: f64,
        biosphere: f64,
        biogeochemical: f64,
        freshwater: f64,
        aerosols: f64,
    ) -> Self {
        Self {
            climate: Some(climate),
            biosphere: Some(biosphere),
            biogeochemical: Some(biogeochemical),
            freshwater: Some(freshwater),
            aerosols: Some(aerosols),
        }
    }

    pub fn get(&self, boundary: Boundary) -> Option<f64> {
        match boundary {
            Boundary::Climate => self.climate,
            Boundary::Biosphere => self.biosphere,
            Boundary::Biogeochemical => self.biogeochemical,
            Boundary::Freshwater => self.freshwater,
            Boundary::Aerosols => self.aerosols,
        }
    }

    /// Dimensions with no recorded value.
    pub fn missing(&self) -> Vec<Boundary> {
        Boundary::ALL
            .into_iter()
            .filter(|b| self.get(*b).is_none())
            .collect()
    }
}

/// Advisory action computed upstream alongside the score. The pipeline only
/// caps how many reach the display; it never produces these itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: String,
    pub impact: String,
    pub boundary: String,
    pub current_score: f64,
}

/// One stored assessment result as delivered by the score service.
///
/// Most fields are optional: depending on source freshness an entry may
/// arrive with only a composite score, only boundary detail, or both.
/// Absence is modeled explicitly rather than as falsy defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub user_id: String,
    /// Composite score in [0,100]; lower means better outcome.
    #[serde(default)]
    pub composite_score: Option<f64>,
    #[serde(default)]
    pub boundary_scores: Option<BoundaryScores>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub campus_affiliation: Option<String>,
    #[serde(default)]
    pub pseudonym: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl ScoreEntry {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            composite_score: None,
            boundary_scores: None,
            grade: None,
            campus_affiliation: None,
            pseudonym: None,
            created_at: None,
            recommendations: Vec::new(),
        }
    }
}
