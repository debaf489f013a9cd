use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref weights) = config.weights {
        for (name, value) in [
            ("good", weights.good),
            ("neutral", weights.neutral),
            ("caution", weights.caution),
            ("avoid", weights.avoid),
        ] {
            if value > 100 {
                errors.push(format!(
                    "scoring.weights.{}: must be between 0 and 100, got {}",
                    name, value
                ));
            }
        }
        // An all-good list must score 100 and an all-avoid list 0
        if weights.good != 100 {
            errors.push(format!(
                "scoring.weights.good: must be 100, got {}",
                weights.good
            ));
        }
        if weights.avoid != 0 {
            errors.push(format!(
                "scoring.weights.avoid: must be 0, got {}",
                weights.avoid
            ));
        }
        let ordered = [
            ("good", weights.good),
            ("neutral", weights.neutral),
            ("caution", weights.caution),
            ("avoid", weights.avoid),
        ];
        for pair in ordered.windows(2) {
            let (upper_name, upper) = pair[0];
            let (lower_name, lower) = pair[1];
            if upper < lower {
                errors.push(format!(
                    "scoring.weights.{}: must be at least weights.{} ({} < {})",
                    upper_name, lower_name, upper, lower
                ));
            }
        }
    }

    if let Some(ref thresholds) = config.thresholds {
        let ordered = [
            ("five", thresholds.five),
            ("four", thresholds.four),
            ("three", thresholds.three),
            ("two", thresholds.two),
        ];
        for (name, value) in ordered {
            if value > 100 {
                errors.push(format!(
                    "scoring.thresholds.{}: must be between 0 and 100, got {}",
                    name, value
                ));
            }
        }
        for pair in ordered.windows(2) {
            let (upper_name, upper) = pair[0];
            let (lower_name, lower) = pair[1];
            if upper <= lower {
                errors.push(format!(
                    "scoring.thresholds.{}: must be greater than thresholds.{} ({} <= {})",
                    upper_name, lower_name, upper, lower
                ));
            }
        }
        // A zero floor would make a one-star rating unreachable
        if thresholds.two == 0 {
            errors.push("scoring.thresholds.two: must be at least 1".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
