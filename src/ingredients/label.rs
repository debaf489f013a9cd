/// Split label ingredient text ("Water, Glycerin, ...") into ordered names.
///
/// Entries are trimmed and empty ones dropped. Casing and spelling are kept
/// as printed, since catalog lookups are exact.
pub fn parse_ingredient_text(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_list() {
        let names = parse_ingredient_text("Water, Glycerin, Hyaluronic Acid");
        assert_eq!(names, vec!["Water", "Glycerin", "Hyaluronic Acid"]);
    }

    #[test]
    fn test_parse_drops_empty_entries() {
        let names = parse_ingredient_text(" Water ,, ,Fragrance,\n");
        assert_eq!(names, vec!["Water", "Fragrance"]);
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_ingredient_text("").is_empty());
        assert!(parse_ingredient_text(" , ,").is_empty());
    }

    #[test]
    fn test_parse_keeps_duplicates_and_case() {
        let names = parse_ingredient_text("water, Water, Water");
        assert_eq!(names, vec!["water", "Water", "Water"]);
    }
}
