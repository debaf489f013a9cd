use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{get_config_path, save_config, Config};
use crate::ingredients::{parse_ingredient_text, SkinProfile, SkinType};
use crate::scoring::{validate_scoring, EffectWeights, RatingThresholds, ScoringConfig};

/// Line-based prompts over any reader/writer pair.
struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Prompt user with a message and return their trimmed input.
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush stdout")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            anyhow::bail!("Input closed before the wizard finished");
        }
        Ok(line.trim().to_string())
    }

    /// Prompt user with a message and a default value. Returns default if input is empty.
    fn prompt_with_default(&mut self, message: &str, default: &str) -> Result<String> {
        let input = self.prompt(&format!("{} [{}]: ", message, default))?;
        if input.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(input)
        }
    }

    /// Prompt user with a yes/no question. Returns bool based on input and default.
    fn prompt_yes_no(&mut self, message: &str, default_yes: bool) -> Result<bool> {
        let hint = if default_yes { "Y/n" } else { "y/N" };
        let input = self.prompt(&format!("{} [{}]: ", message, hint))?.to_lowercase();
        if input.is_empty() {
            Ok(default_yes)
        } else {
            Ok(input == "y" || input == "yes")
        }
    }

    fn prompt_number(&mut self, message: &str, default: u32) -> Result<u32> {
        loop {
            let input = self.prompt_with_default(message, &default.to_string())?;
            match input.parse::<u32>() {
                Ok(v) if v <= 100 => return Ok(v),
                _ => writeln!(self.output, "  Invalid: must be a whole number from 0 to 100. Try again.")?,
            }
        }
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write output")
    }
}

/// Run the interactive init wizard on stdin/stdout.
///
/// If `default_path` is Some, uses that as the suggested config file path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_init_wizard_with(stdin.lock(), stdout.lock(), default_path).map(|_| ())
}

/// Wizard body. Returns the path written, or None if the user declined to overwrite.
pub fn run_init_wizard_with<R: BufRead, W: Write>(
    input: R,
    output: W,
    default_path: Option<PathBuf>,
) -> Result<Option<PathBuf>> {
    let mut p = Prompter { input, output };

    p.say("")?;
    p.say("skinscan Configuration Wizard")?;
    p.say("=============================")?;
    p.say("")?;

    // 1. Skin profile
    p.say("Your skin type is used to flag ingredients known to suit or irritate it.")?;
    let skin_type = loop {
        let input = p.prompt_with_default(
            "Skin type (normal, dry, oily, combination, sensitive)",
            SkinType::default().as_str(),
        )?;
        match input.parse::<SkinType>() {
            Ok(t) => break t,
            Err(e) => p.say(&format!("  Invalid: {}. Try again.", e))?,
        }
    };
    let concerns = parse_ingredient_text(&p.prompt("Skin concerns, comma separated (blank for none): ")?);
    let allergies = parse_ingredient_text(&p.prompt("Known allergies, comma separated (blank for none): ")?);

    // 2. Scoring
    p.say("")?;
    let scoring = if p.prompt_yes_no("Customize scoring weights? (n keeps defaults)", false)? {
        loop {
            let defaults = EffectWeights::default();
            p.say("Weights are the points (0-100) each ingredient class adds to the safety average.")?;
            let weights = EffectWeights {
                good: p.prompt_number("Weight for good ingredients", defaults.good)?,
                neutral: p.prompt_number("Weight for neutral ingredients", defaults.neutral)?,
                caution: p.prompt_number("Weight for caution ingredients", defaults.caution)?,
                avoid: p.prompt_number("Weight for avoid ingredients", defaults.avoid)?,
            };

            let defaults = RatingThresholds::default();
            p.say("Thresholds are the lowest safety score for each star rating.")?;
            let thresholds = RatingThresholds {
                five: p.prompt_number("Minimum score for 5 stars", defaults.five)?,
                four: p.prompt_number("Minimum score for 4 stars", defaults.four)?,
                three: p.prompt_number("Minimum score for 3 stars", defaults.three)?,
                two: p.prompt_number("Minimum score for 2 stars", defaults.two)?,
            };

            let candidate = ScoringConfig {
                weights: Some(weights),
                thresholds: Some(thresholds),
            };
            match validate_scoring(&candidate) {
                Ok(()) => break Some(candidate),
                Err(errors) => {
                    for error in errors {
                        p.say(&format!("  - {}", error))?;
                    }
                    p.say("Let's try that again.")?;
                }
            }
        }
    } else {
        None
    };

    // 3. Config path
    let default_config_path = match default_path {
        Some(path) => path,
        None => get_config_path()?,
    };
    p.say("")?;
    let path_str = p.prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = p.prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            p.say("Aborted.")?;
            return Ok(None);
        }
    }

    // 4. Write config
    let config = Config {
        profile: Some(SkinProfile {
            skin_type,
            concerns,
            allergies,
        }),
        scoring,
    };
    save_config(&config_path, &config)?;

    p.say("")?;
    p.say(&format!("Config written to {}", config_path.display()))?;
    p.say("Run `skinscan analyze \"Water, Glycerin, ...\"` to get started.")?;

    Ok(Some(config_path))
}
