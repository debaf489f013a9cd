use serde::{Deserialize, Serialize};

/// Scoring configuration.
///
/// Every field is optional; anything left out falls back to the built-in
/// weights and rating thresholds.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   weights:
///     good: 100
///     neutral: 70
///     caution: 30
///     avoid: 0
///   thresholds:
///     five: 90
///     four: 75
///     three: 60
///     two: 40
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Points each effect class contributes to the safety average
    #[serde(default)]
    pub weights: Option<EffectWeights>,

    /// Minimum safety score for each star rating
    #[serde(default)]
    pub thresholds: Option<RatingThresholds>,
}

impl ScoringConfig {
    pub fn effective_weights(&self) -> EffectWeights {
        self.weights.clone().unwrap_or_default()
    }

    pub fn effective_thresholds(&self) -> RatingThresholds {
        self.thresholds.clone().unwrap_or_default()
    }
}

/// Per-effect weight on a 0-100 scale.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EffectWeights {
    pub good: u32,
    pub neutral: u32,
    pub caution: u32,
    pub avoid: u32,
}

impl Default for EffectWeights {
    fn default() -> Self {
        Self {
            good: 100,
            neutral: 70,
            caution: 30,
            avoid: 0,
        }
    }
}

/// Lowest safety score that earns each rating. Anything below `two` rates 1.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RatingThresholds {
    pub five: u32,
    pub four: u32,
    pub three: u32,
    pub two: u32,
}

impl Default for RatingThresholds {
    fn default() -> Self {
        Self {
            five: 90,
            four: 75,
            three: 60,
            two: 40,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_config() {
        let config = ScoringConfig::default();
        assert!(config.weights.is_none());
        assert!(config.thresholds.is_none());

        let weights = config.effective_weights();
        assert_eq!(weights.good, 100);
        assert_eq!(weights.neutral, 70);
        assert_eq!(weights.caution, 30);
        assert_eq!(weights.avoid, 0);

        let thresholds = config.effective_thresholds();
        assert_eq!(thresholds.five, 90);
        assert_eq!(thresholds.two, 40);
    }

    #[test]
    fn test_scoring_config_serde_roundtrip() {
        let config = ScoringConfig {
            weights: Some(EffectWeights::default()),
            thresholds: Some(RatingThresholds::default()),
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: ScoringConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_weights_fall_back_to_defaults() {
        let yaml = r#"
weights:
  neutral: 60
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        let weights = config.effective_weights();
        assert_eq!(weights.neutral, 60);
        assert_eq!(weights.good, 100);
        assert_eq!(weights.caution, 30);
        assert!(config.thresholds.is_none());
    }

    #[test]
    fn test_empty_scoring_config_parse() {
        let config: ScoringConfig = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, ScoringConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = r#"
weights:
  terrible: 5
"#;
        let result: Result<ScoringConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }
}
