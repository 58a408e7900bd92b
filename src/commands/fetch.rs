//! Fetch command - newest or random image for a tag query

use crate::client::{Post, SearchBackend};
use crate::config::AppConfig;
use crate::fetch::fetch_post;
use crate::output::{self, Presentation};
use crate::query::QueryBuilder;
use crate::store::SettingsStore;
use crate::FetchBotError;
use tracing::info;

type Result<T> = std::result::Result<T, FetchBotError>;

/// A fetched post and how to show it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    pub post: Post,
    pub presentation: Presentation,
}

/// Fetch one post for a community
///
/// Reads the community's settings and filter list, builds the query and
/// selects a post. The store is only read.
///
/// # Errors
///
/// Returns `FetchBotError::Store` if the store cannot be read and
/// `FetchBotError::Fetch` if no post could be selected.
pub async fn fetch_image<B>(
    store: &SettingsStore,
    backend: &B,
    config: &AppConfig,
    community: &str,
    tags: &[String],
    randomize: bool,
) -> Result<FetchOutcome>
where
    B: SearchBackend + ?Sized,
{
    let settings = store.settings(community)?;
    let filters = store.filter_list(community)?;

    let query = QueryBuilder::new()
        .user_tags(tags)
        .filter_tags(filters.tags())
        .randomize(randomize)
        .split_search(settings.split_search)
        .build();
    info!(
        community,
        tags = %query.remote_tags(),
        split = settings.split_search,
        "fetching image"
    );

    let post = fetch_post(backend, &query).await?;
    let presentation = Presentation::for_post(&post, settings.verbose, &config.post_url_base);
    Ok(FetchOutcome { post, presentation })
}

/// Execute the fetch command
///
/// Without tags a non-random fetch does nothing.
///
/// # Errors
///
/// See [`fetch_image`].
pub async fn execute<B>(
    store: &SettingsStore,
    backend: &B,
    config: &AppConfig,
    community: &str,
    tags: &[String],
    randomize: bool,
    quiet: bool,
) -> Result<()>
where
    B: SearchBackend + ?Sized,
{
    if tags.is_empty() && !randomize {
        return Ok(());
    }

    if !quiet {
        println!("{}", output::PENDING_MESSAGE);
    }

    let outcome = fetch_image(store, backend, config, community, tags, randomize).await?;
    println!("{}", output::render(&outcome.presentation, quiet));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{MockBackend, Rating};
    use crate::fetch::FetchError;
    use crate::testing::{TestStore, post};

    fn tags(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|s| (*s).to_string()).collect()
    }

    #[tokio::test]
    async fn test_fetch_applies_community_filters() {
        let test_store = TestStore::new();
        let store = test_store.store();
        let backend = MockBackend::with_posts(vec![post(1, Rating::Safe, "fox")]);

        let outcome = fetch_image(store, &backend, &AppConfig::default(), "guild", &tags(&["fox"]), false)
            .await
            .unwrap();
        assert_eq!(outcome.post.id, 1);
        assert!(matches!(outcome.presentation, Presentation::Link(_)));
        assert_eq!(backend.requests()[0].tags, "fox -scat -watersport -cub");
    }

    #[tokio::test]
    async fn test_fetch_verbose_builds_embed() {
        let test_store = TestStore::new();
        let store = test_store.store();
        store.update_settings("guild", |s| s.verbose = true).unwrap();
        let backend = MockBackend::with_posts(vec![post(77, Rating::Questionable, "fox")]);

        let outcome = fetch_image(store, &backend, &AppConfig::default(), "guild", &tags(&["fox"]), false)
            .await
            .unwrap();
        let Presentation::Embed(embed) = outcome.presentation else {
            panic!("Expected embed");
        };
        assert_eq!(embed.link, "https://e621.net/post/show/77");
        assert_eq!(embed.rating.label(), "questionable");
    }

    #[tokio::test]
    async fn test_random_appends_order_directive() {
        let test_store = TestStore::new();
        let store = test_store.store();
        store.reset_filter_list("guild").unwrap();
        let backend = MockBackend::with_posts(vec![post(2, Rating::Safe, "")]);

        fetch_image(store, &backend, &AppConfig::default(), "guild", &[], true)
            .await
            .unwrap();
        assert_eq!(
            backend.requests()[0].tags,
            "-scat -watersport -cub order:random"
        );
    }

    #[tokio::test]
    async fn test_split_setting_switches_strategy() {
        let test_store = TestStore::new();
        let store = test_store.store();
        store.update_settings("guild", |s| s.split_search = true).unwrap();
        let backend = MockBackend::with_posts(vec![post(3, Rating::Safe, "fox")]);

        fetch_image(store, &backend, &AppConfig::default(), "guild", &tags(&["fox"]), false)
            .await
            .unwrap();
        assert_eq!(backend.requests()[0].limit, 400);
    }

    #[tokio::test]
    async fn test_fetch_error_propagates() {
        let test_store = TestStore::new();
        let backend = MockBackend::with_posts(Vec::new());

        let err = fetch_image(test_store.store(), &backend, &AppConfig::default(), "guild", &tags(&["fox"]), false)
            .await
            .unwrap_err();
        assert!(matches!(err, FetchBotError::Fetch(FetchError::NoResults { .. })));
    }

    #[tokio::test]
    async fn test_execute_without_tags_sends_nothing() {
        let test_store = TestStore::new();
        let backend = MockBackend::new();

        execute(test_store.store(), &backend, &AppConfig::default(), "guild", &[], false, true)
            .await
            .unwrap();
        assert!(backend.requests().is_empty());
    }
}
