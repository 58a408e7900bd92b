use std::collections::HashSet;

/// Tag constraints that did not fit into the remote request
///
/// A candidate passes when its tag string contains every required tag and
/// none of the excluded ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidualFilter {
    normal: Vec<String>,
    negative: Vec<String>,
}

impl ResidualFilter {
    /// Create a filter from required (`normal`) and excluded (`negative`) tags.
    /// Excluded tags are given without their `-` prefix.
    #[must_use]
    pub const fn new(normal: Vec<String>, negative: Vec<String>) -> Self {
        Self { normal, negative }
    }

    #[must_use]
    pub fn normal(&self) -> &[String] {
        &self.normal
    }

    #[must_use]
    pub fn negative(&self) -> &[String] {
        &self.negative
    }

    /// True when nothing needs to be checked locally
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normal.is_empty() && self.negative.is_empty()
    }

    /// Check a space-delimited tag string against the filter
    #[must_use]
    pub fn matches(&self, tag_string: &str) -> bool {
        let tags: HashSet<&str> = tag_string.split_whitespace().collect();
        self.normal.iter().all(|t| tags.contains(t.as_str()))
            && !self.negative.iter().any(|t| tags.contains(t.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(normal: &[&str], negative: &[&str]) -> ResidualFilter {
        ResidualFilter::new(
            normal.iter().map(|s| (*s).to_string()).collect(),
            negative.iter().map(|s| (*s).to_string()).collect(),
        )
    }

    #[test]
    fn test_superset_and_disjoint_passes() {
        assert!(filter(&["a", "b"], &["d"]).matches("a b c"));
    }

    #[test]
    fn test_excluded_tag_fails() {
        assert!(!filter(&["a", "b"], &["c"]).matches("a b c"));
    }

    #[test]
    fn test_missing_required_tag_fails() {
        assert!(!filter(&["a", "z"], &[]).matches("a b c"));
    }

    #[test]
    fn test_empty_filter_matches_anything() {
        let empty = ResidualFilter::default();
        assert!(empty.is_empty());
        assert!(empty.matches(""));
        assert!(empty.matches("a b c"));
    }

    #[test]
    fn test_whole_tag_comparison() {
        assert!(!filter(&["fox"], &[]).matches("foxes red_fox"));
        assert!(filter(&[], &["fox"]).matches("foxes red_fox"));
    }

    #[test]
    fn test_irregular_whitespace() {
        assert!(filter(&["a", "c"], &[]).matches("  a\tb\n c "));
    }
}
