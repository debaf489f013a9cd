//! Personalization match score.
//!
//! The match score is meant to express how well a product suits a
//! particular skin profile. No such algorithm exists yet: both scorers here
//! draw a placeholder value and ignore the profile. New strategies plug in
//! through [`MatchScorer`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ingredients::{IngredientAnalysis, SkinProfile};

pub const MATCH_SCORE_MIN: u8 = 70;
pub const MATCH_SCORE_MAX: u8 = 100;

pub trait MatchScorer {
    fn match_score(&self, analysis: &[IngredientAnalysis], profile: &SkinProfile) -> u8;
}

/// Uniform draw from 70..=100 on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomMatchScore;

impl MatchScorer for RandomMatchScore {
    fn match_score(&self, _analysis: &[IngredientAnalysis], _profile: &SkinProfile) -> u8 {
        rand::thread_rng().gen_range(MATCH_SCORE_MIN..=MATCH_SCORE_MAX)
    }
}

/// Same distribution as [`RandomMatchScore`], but repeatable for a given seed.
#[derive(Debug, Clone, Copy)]
pub struct SeededMatchScore {
    seed: u64,
}

impl SeededMatchScore {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MatchScorer for SeededMatchScore {
    fn match_score(&self, _analysis: &[IngredientAnalysis], _profile: &SkinProfile) -> u8 {
        StdRng::seed_from_u64(self.seed).gen_range(MATCH_SCORE_MIN..=MATCH_SCORE_MAX)
    }
}
