use serde::{Deserialize, Serialize};

use crate::ingredients::SkinProfile;
use crate::scoring::ScoringConfig;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Skin profile handed to the match scorer and used for per-ingredient notes
    #[serde(default)]
    pub profile: Option<SkinProfile>,

    /// Overrides for weights and rating thresholds
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}

impl Config {
    pub fn effective_profile(&self) -> SkinProfile {
        self.profile.clone().unwrap_or_default()
    }

    pub fn effective_scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }
}
