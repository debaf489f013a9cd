//! Skincare ingredient analysis.
//!
//! Classifies each ingredient on a product label against a static catalog,
//! then rolls the classifications up into a safety score, a 1-5 rating,
//! a summary paragraph, benefit tags and warnings.
//!
//! ```
//! let names = skinscan::ingredients::parse_ingredient_text("Water, Glycerin, Fragrance");
//! let analysis = skinscan::scoring::analyze(&names).unwrap();
//! assert_eq!(analysis.ingredients.len(), 3);
//! assert_eq!(analysis.summary.safety_score, 57);
//! ```

pub mod config;
pub mod error;
pub mod ingredients;
pub mod output;
pub mod scoring;

pub use error::AnalysisError;
