pub mod catalog;
pub mod label;
pub mod types;

pub use catalog::{lookup, records, UNKNOWN_DESCRIPTION};
pub use label::parse_ingredient_text;
pub use types::{
    Effect, IngredientAnalysis, IngredientRecord, ProductAnalysis, ProductAnalysisSummary,
    SkinProfile, SkinType, Suitability,
};
