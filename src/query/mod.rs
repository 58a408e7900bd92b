//! Query construction for the remote search endpoint
//!
//! Merges the tags a user typed with the community filter list into the tag
//! set(s) sent to the board. Two strategies are supported:
//!
//! - **Direct**: the merged, deduplicated tag set is sent as-is. Any limit on
//!   the number of tags is left to the remote service.
//! - **Split**: the remote service only accepts [`TAG_CEILING`] tags per
//!   request, so the tags are partitioned into special, normal and negative
//!   buckets. Special tags always go to the remote query, then normal and
//!   negative tags fill the remaining slots. Whatever does not fit becomes a
//!   [`ResidualFilter`] applied to the over-fetched candidates locally.
//!
//! # Examples
//!
//! ```
//! use e621_fetch::query::{QueryBuilder, SearchQuery};
//!
//! let query = QueryBuilder::new()
//!     .user_tags(["fox", "rating:s", "-scat"])
//!     .filter_tags(["-watersport", "-cub"])
//!     .build();
//!
//! match query {
//!     SearchQuery::Direct(tags) => {
//!         assert_eq!(tags.to_string(), "fox rating:s -scat -watersport -cub");
//!     }
//!     SearchQuery::Split(_) => unreachable!(),
//! }
//! ```

mod residual;
mod tagset;

pub use residual::ResidualFilter;
pub use tagset::{TagKind, TagSet};

use tracing::{debug, warn};

/// Maximum number of tags the remote service accepts in one split-mode request
pub const TAG_CEILING: usize = 6;

/// Directive asking the remote service for a random ordering
pub const RANDOM_ORDER: &str = "order:random";

/// Lower bound of the over-fetch size in split mode
pub const MIN_SPLIT_LIMIT: usize = 250;

/// Candidates requested per normal/negative tag in split mode
pub const SPLIT_LIMIT_PER_TAG: usize = 100;

/// Tags partitioned by kind, negative tags stored without their `-` prefix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagBuckets {
    pub special: Vec<String>,
    pub normal: Vec<String>,
    pub negative: Vec<String>,
}

impl TagBuckets {
    /// Partition a tag set, preserving order within each bucket
    #[must_use]
    pub fn partition(tags: &TagSet) -> Self {
        let mut buckets = Self::default();
        for tag in tags.iter() {
            match TagKind::classify(tag) {
                TagKind::Special => buckets.special.push(tag.to_string()),
                TagKind::Negative => buckets.negative.push(tagset::strip_negation(tag).to_string()),
                TagKind::Normal => buckets.normal.push(tag.to_string()),
            }
        }
        buckets
    }

    /// Total number of tags across all buckets
    #[must_use]
    pub fn len(&self) -> usize {
        self.special.len() + self.normal.len() + self.negative.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A split-mode query: the narrowed remote request plus the local remainder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitQuery {
    /// Every input tag, partitioned
    pub buckets: TagBuckets,
    /// Tags actually sent to the remote service
    pub primary: TagSet,
    /// Tags that did not fit and must be checked locally
    pub residual: ResidualFilter,
}

impl SplitQuery {
    /// Build the primary set and residual filter from a merged tag set
    ///
    /// Special tags cannot be evaluated against a post's tag string, so all
    /// of them go to the remote query even when they exceed `ceiling`.
    #[must_use]
    pub fn from_tags(tags: &TagSet, ceiling: usize) -> Self {
        let buckets = TagBuckets::partition(tags);

        let mut primary: TagSet = buckets.special.iter().cloned().collect();
        if primary.len() > ceiling {
            warn!(
                special = primary.len(),
                ceiling, "special tags alone exceed the per-request tag ceiling"
            );
        }

        let mut normal = buckets.normal.iter();
        let mut residual_normal = Vec::new();
        for tag in normal.by_ref() {
            if primary.len() >= ceiling {
                residual_normal.push(tag.clone());
                break;
            }
            primary.insert(tag.clone());
        }
        residual_normal.extend(normal.cloned());

        let mut negative = buckets.negative.iter();
        let mut residual_negative = Vec::new();
        for tag in negative.by_ref() {
            if primary.len() >= ceiling {
                residual_negative.push(tag.clone());
                break;
            }
            primary.insert(format!("-{tag}"));
        }
        residual_negative.extend(negative.cloned());

        let residual = ResidualFilter::new(residual_normal, residual_negative);
        debug!(
            primary = %primary,
            residual_normal = residual.normal().len(),
            residual_negative = residual.negative().len(),
            "built split query"
        );

        Self { buckets, primary, residual }
    }

    /// Number of candidates to over-fetch:
    /// `max(250, 100 * (normal + negative))`, counted before absorption
    #[must_use]
    pub fn fetch_limit(&self) -> usize {
        let filterable = self.buckets.normal.len() + self.buckets.negative.len();
        MIN_SPLIT_LIMIT.max(SPLIT_LIMIT_PER_TAG * filterable)
    }
}

/// The request plan produced by [`QueryBuilder`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// One request with `limit=1` and the full tag set
    Direct(TagSet),
    /// One over-fetching request followed by local filtering
    Split(SplitQuery),
}

impl SearchQuery {
    /// The tags sent to the remote service
    #[must_use]
    pub const fn remote_tags(&self) -> &TagSet {
        match self {
            Self::Direct(tags) => tags,
            Self::Split(split) => &split.primary,
        }
    }
}

/// Builder merging user tags, community filters and mode flags
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    user_tags: Vec<String>,
    filter_tags: Vec<String>,
    randomize: bool,
    split_search: bool,
    ceiling: Option<usize>,
}

impl QueryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags supplied by the user; each item may hold several whitespace-separated tags.
    /// Tags are lowercased, as the service matches them case-insensitively.
    #[must_use]
    pub fn user_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.user_tags = tokenize(tags);
        self
    }

    /// Tags from the community filter list
    #[must_use]
    pub fn filter_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.filter_tags = tokenize(tags);
        self
    }

    /// Append [`RANDOM_ORDER`] to the query
    #[must_use]
    pub const fn randomize(mut self, randomize: bool) -> Self {
        self.randomize = randomize;
        self
    }

    /// Use the split strategy
    #[must_use]
    pub const fn split_search(mut self, split: bool) -> Self {
        self.split_search = split;
        self
    }

    /// Override the per-request tag ceiling used in split mode
    #[must_use]
    pub const fn ceiling(mut self, ceiling: usize) -> Self {
        self.ceiling = Some(ceiling);
        self
    }

    /// Merged and deduplicated tags, before any splitting
    #[must_use]
    pub fn merged(&self) -> TagSet {
        let mut tags: TagSet = self
            .user_tags
            .iter()
            .chain(self.filter_tags.iter())
            .cloned()
            .collect();
        if self.randomize {
            tags.insert(RANDOM_ORDER);
        }
        tags
    }

    #[must_use]
    pub fn build(&self) -> SearchQuery {
        let tags = self.merged();
        if self.split_search {
            SearchQuery::Split(SplitQuery::from_tags(&tags, self.ceiling.unwrap_or(TAG_CEILING)))
        } else {
            SearchQuery::Direct(tags)
        }
    }
}

fn tokenize<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .flat_map(|s| {
            s.as_ref()
                .split_whitespace()
                .map(str::to_lowercase)
                .collect::<Vec<_>>()
        })
        .collect()
}
