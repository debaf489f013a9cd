use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AnalysisError;

/// How an ingredient is expected to affect skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    Good,
    Neutral,
    Caution,
    Avoid,
}

impl Effect {
    pub const ALL: [Effect; 4] = [Effect::Good, Effect::Neutral, Effect::Caution, Effect::Avoid];

    pub fn as_str(&self) -> &'static str {
        match self {
            Effect::Good => "good",
            Effect::Neutral => "neutral",
            Effect::Caution => "caution",
            Effect::Avoid => "avoid",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Effect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Effect::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown effect '{}' (expected good, neutral, caution or avoid)", s))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinType {
    #[default]
    Normal,
    Dry,
    Oily,
    Combination,
    Sensitive,
}

impl SkinType {
    pub const ALL: [SkinType; 5] = [
        SkinType::Normal,
        SkinType::Dry,
        SkinType::Oily,
        SkinType::Combination,
        SkinType::Sensitive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkinType::Normal => "normal",
            SkinType::Dry => "dry",
            SkinType::Oily => "oily",
            SkinType::Combination => "combination",
            SkinType::Sensitive => "sensitive",
        }
    }
}

impl fmt::Display for SkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkinType {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkinType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AnalysisError::UnknownSkinType(s.to_string()))
    }
}

/// The user's skin profile. Read-only input to the scorer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkinProfile {
    #[serde(rename = "type", default)]
    pub skin_type: SkinType,

    #[serde(default)]
    pub concerns: Vec<String>,

    #[serde(default)]
    pub allergies: Vec<String>,
}

/// Static reference entry for a known ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientRecord {
    pub name: &'static str,
    pub effect: Effect,
    pub description: &'static str,
    pub good_for: &'static [SkinType],
    pub bad_for: &'static [SkinType],
}

/// Whether a record lists a skin type as helped or harmed by the ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Suitability {
    Beneficial,
    Detrimental,
    Unrated,
}

impl IngredientRecord {
    pub fn suitability(&self, skin_type: SkinType) -> Suitability {
        if self.good_for.contains(&skin_type) {
            Suitability::Beneficial
        } else if self.bad_for.contains(&skin_type) {
            Suitability::Detrimental
        } else {
            Suitability::Unrated
        }
    }
}

/// Classification of a single ingredient from a scanned list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientAnalysis {
    pub name: String,
    pub effect: Effect,
    pub description: String,
}

/// Aggregate verdict over a whole ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAnalysisSummary {
    pub overall_rating: u8,
    pub safety_score: u8,
    pub match_score: u8,
    pub summary: String,
    pub good_for: Vec<String>,
    pub warnings: Vec<String>,
}

/// Summary plus the per-ingredient breakdown it was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAnalysis {
    #[serde(flatten)]
    pub summary: ProductAnalysisSummary,
    pub ingredients: Vec<IngredientAnalysis>,
}
