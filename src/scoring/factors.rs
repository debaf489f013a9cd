use super::config::{EffectWeights, RatingThresholds};
use crate::ingredients::{Effect, IngredientAnalysis};

/// Number of ingredients in each effect class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectCounts {
    pub good: usize,
    pub neutral: usize,
    pub caution: usize,
    pub avoid: usize,
}

impl EffectCounts {
    pub fn tally(analysis: &[IngredientAnalysis]) -> Self {
        let mut counts = Self::default();
        for item in analysis {
            *counts.slot(item.effect) += 1;
        }
        counts
    }

    pub fn get(&self, effect: Effect) -> usize {
        match effect {
            Effect::Good => self.good,
            Effect::Neutral => self.neutral,
            Effect::Caution => self.caution,
            Effect::Avoid => self.avoid,
        }
    }

    fn slot(&mut self, effect: Effect) -> &mut usize {
        match effect {
            Effect::Good => &mut self.good,
            Effect::Neutral => &mut self.neutral,
            Effect::Caution => &mut self.caution,
            Effect::Avoid => &mut self.avoid,
        }
    }

    pub fn total(&self) -> usize {
        self.good + self.neutral + self.caution + self.avoid
    }
}

impl EffectWeights {
    pub fn weight(&self, effect: Effect) -> u32 {
        match effect {
            Effect::Good => self.good,
            Effect::Neutral => self.neutral,
            Effect::Caution => self.caution,
            Effect::Avoid => self.avoid,
        }
    }

    /// Weighted mean of the counts, rounded half up. `None` when there is nothing to average.
    pub fn safety_score(&self, counts: &EffectCounts) -> Option<u8> {
        let total = counts.total() as u64;
        if total == 0 {
            return None;
        }
        let weighted: u64 = Effect::ALL
            .iter()
            .map(|&e| counts.get(e) as u64 * u64::from(self.weight(e)))
            .sum();
        let rounded = (2 * weighted + total) / (2 * total);
        Some(rounded.min(100) as u8)
    }
}

impl RatingThresholds {
    /// Map a safety score to a 1-5 star rating.
    pub fn rating(&self, safety_score: u8) -> u8 {
        let score = u32::from(safety_score);
        if score >= self.five {
            5
        } else if score >= self.four {
            4
        } else if score >= self.three {
            3
        } else if score >= self.two {
            2
        } else {
            1
        }
    }
}

/// Adds `tags` once if any trigger appears verbatim in the raw ingredient list.
#[derive(Debug, Clone, Copy)]
pub struct TagRule {
    pub triggers: &'static [&'static str],
    pub tags: &'static [&'static str],
}

impl TagRule {
    pub fn matches<S: AsRef<str>>(&self, raw_names: &[S]) -> bool {
        raw_names
            .iter()
            .any(|name| self.triggers.iter().any(|t| *t == name.as_ref()))
    }
}

pub const BENEFIT_RULES: &[TagRule] = &[
    TagRule {
        triggers: &["Hyaluronic Acid", "Glycerin"],
        tags: &["Hydration"],
    },
    TagRule {
        triggers: &["Ceramide NP", "Ceramide AP", "Ceramide EOP"],
        tags: &["Strengthening skin barrier"],
    },
    TagRule {
        triggers: &["Ascorbic Acid", "Ferulic Acid"],
        tags: &["Brightening", "Antioxidant protection"],
    },
];

pub const WARNING_RULES: &[TagRule] = &[
    TagRule {
        triggers: &["Fragrance"],
        tags: &["Contains fragrance which may cause irritation for sensitive skin"],
    },
    TagRule {
        triggers: &["Dimethicone"],
        tags: &["Contains silicones which may cause breakouts for acne-prone skin"],
    },
];

/// Apply rules in order, collecting each tag at most once.
pub fn collect_tags<S: AsRef<str>>(rules: &[TagRule], raw_names: &[S]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for rule in rules.iter().filter(|r| r.matches(raw_names)) {
        for tag in rule.tags {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(effect: Effect) -> IngredientAnalysis {
        IngredientAnalysis {
            name: "x".to_string(),
            effect,
            description: String::new(),
        }
    }

    #[test]
    fn test_tally() {
        let analysis = vec![
            item(Effect::Good),
            item(Effect::Good),
            item(Effect::Avoid),
            item(Effect::Neutral),
        ];
        let counts = EffectCounts::tally(&analysis);
        assert_eq!(counts.good, 2);
        assert_eq!(counts.avoid, 1);
        assert_eq!(counts.neutral, 1);
        assert_eq!(counts.caution, 0);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_safety_score_empty_is_none() {
        let weights = EffectWeights::default();
        assert_eq!(weights.safety_score(&EffectCounts::default()), None);
    }

    #[test]
    fn test_safety_score_weighted_mean() {
        // (100 + 70 + 30 + 0) / 4 = 50
        let counts = EffectCounts {
            good: 1,
            neutral: 1,
            caution: 1,
            avoid: 1,
        };
        assert_eq!(EffectWeights::default().safety_score(&counts), Some(50));
    }

    #[test]
    fn test_safety_score_rounds_half_up() {
        // (100 + 30) / 2 = 65 exactly; (70 + 0) / 4 = 17.5 -> 18
        let counts = EffectCounts {
            good: 1,
            caution: 1,
            ..Default::default()
        };
        assert_eq!(EffectWeights::default().safety_score(&counts), Some(65));

        let counts = EffectCounts {
            neutral: 1,
            avoid: 3,
            ..Default::default()
        };
        assert_eq!(EffectWeights::default().safety_score(&counts), Some(18));
    }

    #[test]
    fn test_safety_score_rounds_down_below_half() {
        // (100 + 100 + 0) / 3 = 66.67 -> 67; (100 + 0 + 0) / 3 = 33.33 -> 33
        let counts = EffectCounts {
            good: 2,
            avoid: 1,
            ..Default::default()
        };
        assert_eq!(EffectWeights::default().safety_score(&counts), Some(67));

        let counts = EffectCounts {
            good: 1,
            avoid: 2,
            ..Default::default()
        };
        assert_eq!(EffectWeights::default().safety_score(&counts), Some(33));
    }

    #[test]
    fn test_rating_thresholds() {
        let t = RatingThresholds::default();
        assert_eq!(t.rating(100), 5);
        assert_eq!(t.rating(90), 5);
        assert_eq!(t.rating(89), 4);
        assert_eq!(t.rating(75), 4);
        assert_eq!(t.rating(74), 3);
        assert_eq!(t.rating(60), 3);
        assert_eq!(t.rating(59), 2);
        assert_eq!(t.rating(40), 2);
        assert_eq!(t.rating(39), 1);
        assert_eq!(t.rating(0), 1);
    }

    #[test]
    fn test_benefit_tags_in_rule_order() {
        let names = ["Ferulic Acid", "Ceramide AP", "Glycerin"];
        let tags = collect_tags(BENEFIT_RULES, &names);
        assert_eq!(
            tags,
            vec![
                "Hydration",
                "Strengthening skin barrier",
                "Brightening",
                "Antioxidant protection"
            ]
        );
    }

    #[test]
    fn test_benefit_tag_added_once_for_multiple_triggers() {
        let names = ["Hyaluronic Acid", "Glycerin", "Glycerin"];
        let tags = collect_tags(BENEFIT_RULES, &names);
        assert_eq!(tags, vec!["Hydration"]);
    }

    #[test]
    fn test_tag_triggers_are_exact() {
        let names = ["glycerin", "Fragrance (Parfum)"];
        assert!(collect_tags(BENEFIT_RULES, &names).is_empty());
        assert!(collect_tags(WARNING_RULES, &names).is_empty());
    }

    #[test]
    fn test_warning_tags() {
        let names = ["Dimethicone", "Fragrance"];
        let tags = collect_tags(WARNING_RULES, &names);
        assert_eq!(tags.len(), 2);
        assert!(tags[0].contains("fragrance"));
        assert!(tags[1].contains("silicones"));
    }
}
