use std::collections::HashMap;
use std::sync::LazyLock;

use super::types::SkinType::{Combination, Dry, Normal, Oily, Sensitive};
use super::types::{Effect, IngredientRecord};

/// Description given to ingredients missing from the catalog.
pub const UNKNOWN_DESCRIPTION: &str = "Limited information available for this ingredient.";

static RECORDS: &[IngredientRecord] = &[
    IngredientRecord {
        name: "Water",
        effect: Effect::Neutral,
        description: "Base ingredient used in most skincare products.",
        good_for: &[],
        bad_for: &[],
    },
    IngredientRecord {
        name: "Glycerin",
        effect: Effect::Good,
        description: "Humectant that draws moisture to the skin.",
        good_for: &[Dry, Normal, Combination, Sensitive],
        bad_for: &[],
    },
    IngredientRecord {
        name: "Hyaluronic Acid",
        effect: Effect::Good,
        description: "Powerful humectant that can hold up to 1000x its weight in water.",
        good_for: &[Dry, Normal, Combination, Sensitive, Oily],
        bad_for: &[],
    },
    IngredientRecord {
        name: "Dimethicone",
        effect: Effect::Caution,
        description: "Silicone that creates a barrier on skin. May cause breakouts for some people.",
        good_for: &[],
        bad_for: &[Oily, Sensitive],
    },
    IngredientRecord {
        name: "Fragrance",
        effect: Effect::Avoid,
        description: "Can cause irritation and allergic reactions, especially for sensitive skin.",
        good_for: &[],
        bad_for: &[Sensitive],
    },
    IngredientRecord {
        name: "Phenoxyethanol",
        effect: Effect::Caution,
        description: "Preservative that can cause irritation in high concentrations.",
        good_for: &[],
        bad_for: &[Sensitive],
    },
    IngredientRecord {
        name: "Sodium Hydroxide",
        effect: Effect::Caution,
        description: "pH adjuster that can be irritating in high concentrations.",
        good_for: &[],
        bad_for: &[Sensitive],
    },
    IngredientRecord {
        name: "Sodium Hyaluronate",
        effect: Effect::Good,
        description: "A salt form of hyaluronic acid that hydrates the skin.",
        good_for: &[Dry, Normal, Combination, Sensitive, Oily],
        bad_for: &[],
    },
    IngredientRecord {
        name: "Ceramide NP",
        effect: Effect::Good,
        description: "Helps restore and maintain the skin barrier.",
        good_for: &[Dry, Normal, Sensitive],
        bad_for: &[],
    },
    IngredientRecord {
        name: "Ceramide AP",
        effect: Effect::Good,
        description: "Supports skin barrier function and helps retain moisture.",
        good_for: &[Dry, Normal, Sensitive],
        bad_for: &[],
    },
    IngredientRecord {
        name: "Ceramide EOP",
        effect: Effect::Good,
        description: "Helps fortify the skin's natural barrier.",
        good_for: &[Dry, Normal, Sensitive],
        bad_for: &[],
    },
    IngredientRecord {
        name: "Cholesterol",
        effect: Effect::Good,
        description: "Natural component of the skin that helps maintain its barrier.",
        good_for: &[Dry, Normal, Sensitive],
        bad_for: &[],
    },
    IngredientRecord {
        name: "Ascorbic Acid",
        effect: Effect::Good,
        description: "Vitamin C that brightens skin and provides antioxidant protection.",
        good_for: &[Normal, Combination, Oily],
        bad_for: &[],
    },
    IngredientRecord {
        name: "Ferulic Acid",
        effect: Effect::Good,
        description: "Antioxidant that enhances the stability and efficacy of vitamin C.",
        good_for: &[Normal, Combination, Oily],
        bad_for: &[],
    },
    IngredientRecord {
        name: "Tocopheryl Acetate",
        effect: Effect::Good,
        description: "Form of Vitamin E, an antioxidant that protects skin from free radicals.",
        good_for: &[Dry, Normal, Combination],
        bad_for: &[],
    },
];

static INDEX: LazyLock<HashMap<&'static str, &'static IngredientRecord>> =
    LazyLock::new(|| RECORDS.iter().map(|r| (r.name, r)).collect());

/// Look up an ingredient by its exact label name.
///
/// Matching is case- and spelling-sensitive: "glycerin" does not find "Glycerin".
pub fn lookup(name: &str) -> Option<&'static IngredientRecord> {
    INDEX.get(name).copied()
}

/// All catalog records in table order.
pub fn records() -> &'static [IngredientRecord] {
    RECORDS
}
