//! Result selection
//!
//! Executes a [`SearchQuery`] against a [`SearchBackend`] and picks exactly one
//! post, or fails with a [`FetchError`].
//!
//! - **Direct**: one request with `limit=1`; the first post is the result.
//! - **Split**: one request with the primary tags and an over-fetch limit;
//!   candidates are narrowed with the residual filter and the first survivor
//!   wins. Order is whatever the service returned (random when requested).
//!
//! Each call issues exactly one request and keeps no state between calls.

pub mod error;

pub use error::FetchError;

use crate::client::{Post, SearchBackend, SearchResponse};
use crate::query::{ResidualFilter, SearchQuery, SplitQuery, TagSet};
use tracing::{debug, info, warn};

/// Fetch a single post for `query`
///
/// # Errors
///
/// Returns `FetchError` when the request fails in transport, the service
/// reports a failure, nothing matched, or no split-search candidate survived
/// local filtering.
pub async fn fetch_post<B>(backend: &B, query: &SearchQuery) -> Result<Post, FetchError>
where
    B: SearchBackend + ?Sized,
{
    match query {
        SearchQuery::Direct(tags) => fetch_direct(backend, tags).await,
        SearchQuery::Split(split) => fetch_split(backend, split).await,
    }
}

async fn fetch_direct<B>(backend: &B, tags: &TagSet) -> Result<Post, FetchError>
where
    B: SearchBackend + ?Sized,
{
    debug!(tags = %tags, "direct search");
    let posts = expect_posts(backend.search(tags, 1).await?, tags)?;

    let post = posts
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::NoResults { tags: tags.to_string() })?;
    info!(id = post.id, "direct search found a post");
    Ok(post)
}

async fn fetch_split<B>(backend: &B, split: &SplitQuery) -> Result<Post, FetchError>
where
    B: SearchBackend + ?Sized,
{
    let limit = split.fetch_limit();
    debug!(tags = %split.primary, limit, "split search");

    let candidates = expect_posts(backend.search(&split.primary, limit).await?, &split.primary)?;
    if candidates.is_empty() {
        return Err(FetchError::NoResults { tags: split.primary.to_string() });
    }

    let fetched = candidates.len();
    match select_candidate(candidates, &split.residual) {
        Some(post) => {
            info!(id = post.id, fetched, "split search found a post");
            Ok(post)
        }
        None => {
            warn!(fetched, limit, "no split search candidate passed the residual filter");
            Err(FetchError::SplitSearchExhausted {
                limit,
                special: split.buckets.special.clone(),
                normal: split.buckets.normal.clone(),
                negative: split.buckets.negative.clone(),
            })
        }
    }
}

/// First candidate whose tags satisfy `filter`
#[must_use]
pub fn select_candidate(candidates: Vec<Post>, filter: &ResidualFilter) -> Option<Post> {
    if filter.is_empty() {
        return candidates.into_iter().next();
    }
    candidates.into_iter().find(|post| filter.matches(&post.tags))
}

fn expect_posts(response: SearchResponse, tags: &TagSet) -> Result<Vec<Post>, FetchError> {
    match response {
        SearchResponse::Posts(posts) => Ok(posts),
        SearchResponse::Failure { reason, status } => {
            warn!(status, %reason, tags = %tags, "search service reported a failure");
            Err(FetchError::Remote { reason, status })
        }
    }
}
