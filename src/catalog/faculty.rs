//! Faculty listing and slug lookup.

use std::collections::HashSet;

use crate::catalog::model::University;

/// Lowercase the name and replace spaces with hyphens.
///
/// Other characters are kept, so "Sharia & Law" becomes "sharia-&-law".
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Distinct English faculty names in first-seen order.
pub fn distinct<'a>(universities: impl IntoIterator<Item = &'a University>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    universities
        .into_iter()
        .flat_map(|uni| uni.faculties_en.iter())
        .map(String::as_str)
        .filter(|name| seen.insert(*name))
        .collect()
}

/// First faculty whose slug equals `slug`.
pub fn find_by_slug<'a>(
    universities: impl IntoIterator<Item = &'a University>,
    slug: &str,
) -> Option<&'a str> {
    distinct(universities)
        .into_iter()
        .find(|name| slugify(name) == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::sample;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Computer Science"), "computer-science");
        assert_eq!(slugify("Medicine"), "medicine");
        assert_eq!(slugify("Sharia & Law"), "sharia-&-law");
    }

    #[test]
    fn test_distinct_preserves_first_seen_order() {
        let dataset = sample();
        let faculties = distinct(dataset.universities());
        assert_eq!(
            faculties,
            vec![
                "Medicine",
                "Computer Science",
                "Engineering",
                "Islamic Studies",
                "Business",
                "Agriculture",
            ]
        );
    }

    #[test]
    fn test_find_by_slug() {
        let dataset = sample();
        assert_eq!(
            find_by_slug(dataset.universities(), "computer-science"),
            Some("Computer Science")
        );
        assert_eq!(find_by_slug(dataset.universities(), "Computer-Science"), None);
        assert_eq!(find_by_slug(dataset.universities(), "dentistry"), None);
    }
}
