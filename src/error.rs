//! Error types for ingredient analysis.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnalysisError {
    /// Summaries average over the list, so at least one ingredient is required
    #[error("cannot summarize empty ingredient list")]
    EmptyIngredientList,

    #[error("unknown skin type '{0}' (expected normal, dry, oily, combination or sensitive)")]
    UnknownSkinType(String),

    #[error("invalid scoring configuration: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
