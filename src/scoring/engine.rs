use tracing::{debug, trace};

use super::config::ScoringConfig;
use super::factors::{collect_tags, EffectCounts, BENEFIT_RULES, WARNING_RULES};
use super::match_score::{MatchScorer, RandomMatchScore};
use super::summary::summary_text;
use super::validation::validate_scoring;
use crate::error::{AnalysisError, Result};
use crate::ingredients::{
    catalog, Effect, IngredientAnalysis, ProductAnalysis, ProductAnalysisSummary, SkinProfile,
};

/// Classify each ingredient name against the catalog, one result per input.
pub fn classify_ingredients<S: AsRef<str>>(names: &[S]) -> Vec<IngredientAnalysis> {
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            match catalog::lookup(name) {
                Some(record) => {
                    trace!(ingredient = name, effect = %record.effect, "catalog hit");
                    IngredientAnalysis {
                        name: name.to_string(),
                        effect: record.effect,
                        description: record.description.to_string(),
                    }
                }
                None => {
                    debug!(ingredient = name, "not in catalog, treating as neutral");
                    IngredientAnalysis {
                        name: name.to_string(),
                        effect: Effect::Neutral,
                        description: catalog::UNKNOWN_DESCRIPTION.to_string(),
                    }
                }
            }
        })
        .collect()
}

/// Summarize a classified list with the default weights and a random match score.
///
/// `raw_names` drives the benefit and warning tags; it is normally the same
/// list that produced `analysis`.
pub fn summarize<S: AsRef<str>>(
    analysis: &[IngredientAnalysis],
    raw_names: &[S],
) -> Result<ProductAnalysisSummary> {
    Scorer::default().summarize(analysis, raw_names, &SkinProfile::default())
}

/// Classify and summarize in one pass using the defaults.
pub fn analyze<S: AsRef<str>>(names: &[S]) -> Result<ProductAnalysis> {
    Scorer::default().analyze(names, &SkinProfile::default())
}

/// Scoring engine with a specific configuration and match-score strategy.
pub struct Scorer {
    config: ScoringConfig,
    match_scorer: Box<dyn MatchScorer + Send + Sync>,
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            config: ScoringConfig::default(),
            match_scorer: Box::new(RandomMatchScore),
        }
    }
}

impl std::fmt::Debug for Scorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scorer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Scorer {
    /// Build a scorer, rejecting configurations that fail validation.
    pub fn new(config: ScoringConfig) -> Result<Self> {
        validate_scoring(&config).map_err(AnalysisError::InvalidConfig)?;
        Ok(Self {
            config,
            match_scorer: Box::new(RandomMatchScore),
        })
    }

    pub fn with_match_scorer(mut self, match_scorer: impl MatchScorer + Send + Sync + 'static) -> Self {
        self.match_scorer = Box::new(match_scorer);
        self
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn summarize<S: AsRef<str>>(
        &self,
        analysis: &[IngredientAnalysis],
        raw_names: &[S],
        profile: &SkinProfile,
    ) -> Result<ProductAnalysisSummary> {
        let counts = EffectCounts::tally(analysis);
        let safety_score = self
            .config
            .effective_weights()
            .safety_score(&counts)
            .ok_or(AnalysisError::EmptyIngredientList)?;
        let overall_rating = self.config.effective_thresholds().rating(safety_score);

        debug!(
            good = counts.good,
            neutral = counts.neutral,
            caution = counts.caution,
            avoid = counts.avoid,
            safety_score,
            overall_rating,
            "scored ingredient list"
        );

        Ok(ProductAnalysisSummary {
            overall_rating,
            safety_score,
            match_score: self.match_scorer.match_score(analysis, profile),
            summary: summary_text(overall_rating, &counts),
            good_for: collect_tags(BENEFIT_RULES, raw_names),
            warnings: collect_tags(WARNING_RULES, raw_names),
        })
    }

    pub fn analyze<S: AsRef<str>>(&self, names: &[S], profile: &SkinProfile) -> Result<ProductAnalysis> {
        let ingredients = classify_ingredients(names);
        let summary = self.summarize(&ingredients, names, profile)?;
        Ok(ProductAnalysis {
            summary,
            ingredients,
        })
    }
}
