use super::factors::EffectCounts;

/// Build the summary paragraph for a rating tier.
///
/// 4-5 stars lead with the beneficial count, 3 stars weigh good against
/// caution+avoid, and 1-2 stars lead with the avoid count.
pub fn summary_text(overall_rating: u8, counts: &EffectCounts) -> String {
    if overall_rating >= 4 {
        let mut text = format!(
            "This product contains {} beneficial ingredients that can help improve your skin. ",
            counts.good
        );
        if counts.avoid > 0 {
            text.push_str(&format!(
                "However, it does contain {} potentially concerning ingredients to be aware of.",
                counts.avoid
            ));
        } else if counts.caution > 0 {
            text.push_str(&format!(
                "It has {} ingredients that may cause issues for some skin types.",
                counts.caution
            ));
        } else {
            text.push_str("Overall, it appears to be a well-formulated product.");
        }
        text
    } else if overall_rating == 3 {
        format!(
            "This product has a mix of {} beneficial ingredients and {} potentially problematic ones. \
             Consider your skin's specific needs before using.",
            counts.good,
            counts.caution + counts.avoid
        )
    } else {
        let mut text = format!(
            "This product contains {} concerning ingredients that may cause irritation or other issues. ",
            counts.avoid
        );
        if counts.good > 0 {
            text.push_str(&format!(
                "While it does have {} beneficial ingredients, there are likely better alternatives available.",
                counts.good
            ));
        } else {
            text.push_str("We recommend looking for alternative products with safer ingredients.");
        }
        text
    }
}
