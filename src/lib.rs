pub mod config;
pub mod leaderboard;
pub mod output;
pub mod scoring;
pub mod source;
