pub mod alias;
pub mod fallback;
pub mod pipeline;
pub mod rank;

pub use alias::AliasGenerator;
pub use pipeline::{build_leaderboard, LeaderboardEntry, LeaderboardResponse, PipelineOptions};
pub use rank::ScoreDirection;
