use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::ingredients::{
    catalog, Effect, IngredientAnalysis, IngredientRecord, ProductAnalysis, SkinType, Suitability,
};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Render a 1-5 rating as filled and empty stars
pub fn format_stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Fixed-width effect label, e.g. "[caution]"
pub fn format_effect_badge(effect: Effect, use_colors: bool) -> String {
    let badge = format!("{:<9}", format!("[{}]", effect));
    if !use_colors {
        return badge;
    }
    match effect {
        Effect::Good => badge.green().to_string(),
        Effect::Neutral => badge.dimmed().to_string(),
        Effect::Caution => badge.yellow().to_string(),
        Effect::Avoid => badge.red().bold().to_string(),
    }
}

/// Short note on how a catalogued ingredient relates to a skin type, if the catalog says anything.
pub fn skin_type_note(name: &str, skin_type: SkinType) -> Option<String> {
    let record = catalog::lookup(name)?;
    match record.suitability(skin_type) {
        Suitability::Beneficial => Some(format!("good for {} skin", skin_type)),
        Suitability::Detrimental => Some(format!("may not suit {} skin", skin_type)),
        Suitability::Unrated => None,
    }
}

fn format_ingredient_line(
    item: &IngredientAnalysis,
    skin_type: Option<SkinType>,
    term_width: Option<usize>,
    use_colors: bool,
) -> String {
    let badge = format_effect_badge(item.effect, use_colors);
    let note = skin_type
        .and_then(|t| skin_type_note(&item.name, t))
        .map(|n| format!(" ({})", n))
        .unwrap_or_default();
    let head = format!("  {} {}{}", badge, item.name, note);

    // badge is 9 chars wide plus indent and separators
    let fixed_width = 2 + 9 + 1 + item.name.chars().count() + note.chars().count() + 3;
    let description = match term_width {
        Some(width) if width > fixed_width + 10 => {
            truncate_text(&item.description, width - fixed_width)
        }
        Some(_) => truncate_text(&item.description, 20),
        None => item.description.clone(),
    };

    if use_colors {
        format!("{} - {}", head, description.dimmed())
    } else {
        format!("{} - {}", head, description)
    }
}

/// Multi-line human readable report.
///
/// When `skin_type` is given, catalogued ingredients that are known to help
/// or irritate that skin type get a short note.
pub fn format_report(
    analysis: &ProductAnalysis,
    skin_type: Option<SkinType>,
    use_colors: bool,
) -> String {
    let summary = &analysis.summary;
    let term_width = get_terminal_width();
    let mut lines = Vec::new();

    let stars = format_stars(summary.overall_rating);
    if use_colors {
        lines.push(format!(
            "{}  Safety: {}/100  Match: {}/100",
            stars.yellow(),
            summary.safety_score.bold(),
            summary.match_score.bold()
        ));
    } else {
        lines.push(format!(
            "{}  Safety: {}/100  Match: {}/100",
            stars, summary.safety_score, summary.match_score
        ));
    }
    lines.push(String::new());
    lines.push(summary.summary.clone());

    if !summary.good_for.is_empty() {
        lines.push(String::new());
        lines.push("Good for:".to_string());
        for tag in &summary.good_for {
            if use_colors {
                lines.push(format!("  + {}", tag.green()));
            } else {
                lines.push(format!("  + {}", tag));
            }
        }
    }

    if !summary.warnings.is_empty() {
        lines.push(String::new());
        lines.push("Warnings:".to_string());
        for warning in &summary.warnings {
            if use_colors {
                lines.push(format!("  ! {}", warning.red()));
            } else {
                lines.push(format!("  ! {}", warning));
            }
        }
    }

    lines.push(String::new());
    lines.push(format!("Ingredients ({}):", analysis.ingredients.len()));
    for item in &analysis.ingredients {
        lines.push(format_ingredient_line(item, skin_type, term_width, use_colors));
    }

    lines.join("\n")
}

/// Format ingredients as tab-separated values for scripting
/// Columns: effect, name, description (no headers, no colors)
pub fn format_tsv(analysis: &ProductAnalysis) -> String {
    analysis
        .ingredients
        .iter()
        .map(|item| format!("{}\t{}\t{}", item.effect, item.name, item.description))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_json(analysis: &ProductAnalysis) -> serde_json::Result<String> {
    serde_json::to_string_pretty(analysis)
}

/// Catalog entry with its suitability for every skin type
pub fn format_record(record: &IngredientRecord, use_colors: bool) -> String {
    let mut lines = vec![
        if use_colors {
            format!("{} {}", record.name.bold(), format_effect_badge(record.effect, true))
        } else {
            format!("{} {}", record.name, format_effect_badge(record.effect, false))
        },
        format!("  {}", record.description),
    ];

    lines.push("  Suitability:".to_string());
    for skin_type in SkinType::ALL {
        let verdict = match record.suitability(skin_type) {
            Suitability::Beneficial if use_colors => "beneficial".green().to_string(),
            Suitability::Beneficial => "beneficial".to_string(),
            Suitability::Detrimental if use_colors => "may not suit".red().to_string(),
            Suitability::Detrimental => "may not suit".to_string(),
            Suitability::Unrated if use_colors => "no data".dimmed().to_string(),
            Suitability::Unrated => "no data".to_string(),
        };
        lines.push(format!("    {:<12} {}", skin_type.as_str(), verdict));
    }

    lines.join("\n")
}

/// One line per catalog entry: badge, name
pub fn format_catalog(records: &[&IngredientRecord], use_colors: bool) -> String {
    if records.is_empty() {
        return "No ingredients found.".to_string();
    }

    records
        .iter()
        .map(|r| format!("{} {}", format_effect_badge(r.effect, use_colors), r.name))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredients::ProductAnalysisSummary;

    fn sample_analysis() -> ProductAnalysis {
        ProductAnalysis {
            summary: ProductAnalysisSummary {
                overall_rating: 2,
                safety_score: 58,
                match_score: 81,
                summary: "This product contains 1 concerning ingredients.".to_string(),
                good_for: vec!["Hydration".to_string()],
                warnings: vec![
                    "Contains fragrance which may cause irritation for sensitive skin".to_string(),
                ],
            },
            ingredients: vec![
                IngredientAnalysis {
                    name: "Glycerin".to_string(),
                    effect: Effect::Good,
                    description: "Humectant that draws moisture to the skin.".to_string(),
                },
                IngredientAnalysis {
                    name: "Fragrance".to_string(),
                    effect: Effect::Avoid,
                    description: "Can cause irritation.".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_format_stars() {
        assert_eq!(format_stars(5), "★★★★★");
        assert_eq!(format_stars(2), "★★☆☆☆");
        assert_eq!(format_stars(9), "★★★★★");
    }

    #[test]
    fn test_effect_badge_fixed_width() {
        assert_eq!(format_effect_badge(Effect::Good, false), "[good]   ");
        assert_eq!(format_effect_badge(Effect::Caution, false), "[caution]");
    }

    #[test]
    fn test_format_report_plain() {
        let result = format_report(&sample_analysis(), None, false);
        assert!(result.starts_with("★★☆☆☆  Safety: 58/100  Match: 81/100"));
        assert!(result.contains("Good for:\n  + Hydration"));
        assert!(result.contains("Warnings:\n  ! Contains fragrance"));
        assert!(result.contains("Ingredients (2):"));
        assert!(result.contains("[avoid]   Fragrance"));
        assert!(!result.contains("skin)"));
    }

    #[test]
    fn test_format_report_skin_type_notes() {
        let result = format_report(&sample_analysis(), Some(SkinType::Sensitive), false);
        assert!(result.contains("Glycerin (good for sensitive skin)"));
        assert!(result.contains("Fragrance (may not suit sensitive skin)"));
    }

    #[test]
    fn test_format_report_omits_empty_sections() {
        let mut analysis = sample_analysis();
        analysis.summary.good_for.clear();
        analysis.summary.warnings.clear();
        let result = format_report(&analysis, None, false);
        assert!(!result.contains("Good for:"));
        assert!(!result.contains("Warnings:"));
    }

    #[test]
    fn test_skin_type_note_unknown_ingredient() {
        assert_eq!(skin_type_note("Unobtainium", SkinType::Dry), None);
        assert_eq!(skin_type_note("Water", SkinType::Dry), None);
    }

    #[test]
    fn test_format_tsv() {
        let result = format_tsv(&sample_analysis());
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "good\tGlycerin\tHumectant that draws moisture to the skin."
        );
        assert!(lines[1].starts_with("avoid\tFragrance\t"));
    }

    #[test]
    fn test_format_json() {
        let json = format_json(&sample_analysis()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["safetyScore"], 58);
        assert_eq!(value["ingredients"][1]["effect"], "avoid");
    }

    #[test]
    fn test_format_record() {
        let record = catalog::lookup("Dimethicone").unwrap();
        let result = format_record(record, false);
        assert!(result.starts_with("Dimethicone [caution]"));
        let rows: Vec<&str> = result.lines().skip(3).collect();
        assert_eq!(rows.len(), SkinType::ALL.len());
        assert!(rows.contains(&"    oily         may not suit"));
        assert!(rows.contains(&"    sensitive    may not suit"));
        assert!(rows.contains(&"    dry          no data"));
    }

    #[test]
    fn test_format_record_lists_every_skin_type() {
        let record = catalog::lookup("Glycerin").unwrap();
        let result = format_record(record, false);
        for skin_type in SkinType::ALL {
            let expected = match record.suitability(skin_type) {
                Suitability::Beneficial => "beneficial",
                Suitability::Detrimental => "may not suit",
                Suitability::Unrated => "no data",
            };
            assert!(
                result.contains(&format!("    {:<12} {}", skin_type.as_str(), expected)),
                "missing row for {}",
                skin_type
            );
        }
        assert!(result.contains("    oily         no data"));
        assert!(result.contains("    sensitive    beneficial"));
    }

    #[test]
    fn test_format_catalog_empty() {
        assert_eq!(format_catalog(&[], false), "No ingredients found.");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("Short", 20), "Short");
        assert_eq!(truncate_text("This is a very long text", 15), "This is a ve...");
        assert_eq!(truncate_text("Hello world", 3), "Hel");
    }
}
