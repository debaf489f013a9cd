pub mod config;
pub mod engine;
pub mod factors;
pub mod match_score;
pub mod summary;
pub mod validation;

pub use config::*;
pub use engine::{analyze, classify_ingredients, summarize, Scorer};
pub use factors::{EffectCounts, TagRule};
pub use match_score::{MatchScorer, RandomMatchScore, SeededMatchScore};
pub use validation::validate_scoring;
