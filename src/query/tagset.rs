use std::fmt;

/// Prefix marking a tag as excluded
pub const NEGATION_PREFIX: char = '-';

/// Characters marking a namespaced (`rating:s`) or approximate (`~fox`) tag
pub const SPECIAL_MARKERS: [char; 2] = [':', '~'];

/// Classification of a single tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Namespaced or approximate tag; only the remote service can evaluate it
    Special,
    /// Excluded tag (`-scat`)
    Negative,
    /// Plain keyword
    Normal,
}

impl TagKind {
    /// Classify a tag. Special markers take precedence over negation, and a
    /// lone `-` is treated as a plain keyword.
    #[must_use]
    pub fn classify(tag: &str) -> Self {
        if tag.contains(SPECIAL_MARKERS) {
            Self::Special
        } else if tag.len() > NEGATION_PREFIX.len_utf8() && tag.starts_with(NEGATION_PREFIX) {
            Self::Negative
        } else {
            Self::Normal
        }
    }
}

pub(super) fn strip_negation(tag: &str) -> &str {
    tag.strip_prefix(NEGATION_PREFIX).unwrap_or(tag)
}

/// Ordered set of tags; insertion of a tag already present is a no-op
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    #[must_use]
    pub const fn new() -> Self {
        Self { tags: Vec::new() }
    }

    /// Insert a tag, returning `false` if it was already present
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for TagSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for tag in iter {
            self.insert(tag);
        }
    }
}

/// Space-delimited form, as sent in the `tags` query parameter
impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tags.join(" "))
    }
}
