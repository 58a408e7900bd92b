//! Output formatting for fetched posts
//!
//! A fetched post is shown either as a plain link or, in verbose mode, as an
//! embed record carrying the rating, artists and tags. Text fields of the
//! record are chat-markdown ready: underscores in tags are escaped.

use crate::client::{Post, Rating};
use colored::Colorize;

/// Status line shown while a request is in flight
pub const PENDING_MESSAGE: &str = "Fetching e621 image...";

/// Status line shown above an embed
pub const FOUND_MESSAGE: &str = "Image found.";

/// Artist text used when a post lists no artist
pub const UNKNOWN_ARTIST: &str = "unknown artist";

/// Structured presentation of a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    pub title: String,
    pub link: String,
    pub rating: Rating,
    /// Field name, `Artist` or `Artists`
    pub artist_label: &'static str,
    pub artist_text: String,
    pub tag_text: String,
    pub thumbnail: Option<String>,
}

impl Embed {
    /// Build the embed for a post; `post_url_base` is the page link prefix
    #[must_use]
    pub fn from_post(post: &Post, post_url_base: &str) -> Self {
        let (artist_label, artist_text) = artist_field(&post.artist);
        Self {
            title: format!("e621 Image #{}", post.id),
            link: format!("{}/{}", post_url_base.trim_end_matches('/'), post.id),
            rating: post.rating,
            artist_label,
            artist_text,
            tag_text: tag_text(&post.tags),
            thumbnail: post.file_url.clone(),
        }
    }

    /// Rating color as a hex string, e.g. `00FF00`
    #[must_use]
    pub fn color_hex(&self) -> String {
        format!("{:06X}", self.rating.color())
    }
}

/// What to show for a fetched post
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    /// Plain link to the file
    Link(String),
    /// Rich record
    Embed(Embed),
}

impl Presentation {
    /// Choose the presentation for `post` according to the verbose flag.
    /// Posts without a file URL fall back to their page link.
    #[must_use]
    pub fn for_post(post: &Post, verbose: bool, post_url_base: &str) -> Self {
        if verbose {
            return Self::Embed(Embed::from_post(post, post_url_base));
        }
        let link = post.file_url.clone().unwrap_or_else(|| {
            format!("{}/{}", post_url_base.trim_end_matches('/'), post.id)
        });
        Self::Link(link)
    }
}

/// Artist field label and text: names have `_` replaced by spaces
#[must_use]
pub fn artist_field(artists: &[String]) -> (&'static str, String) {
    match artists {
        [] => ("Artist", UNKNOWN_ARTIST.to_string()),
        [artist] => ("Artist", artist.replace('_', " ")),
        _ => ("Artists", artists.join(", ").replace('_', " ")),
    }
}

/// Comma-separated tag text with markdown-escaped underscores
#[must_use]
pub fn tag_text(tags: &str) -> String {
    tags.split_whitespace()
        .collect::<Vec<_>>()
        .join(", ")
        .replace('_', "\\_")
}

/// Rating word colored for the terminal
#[must_use]
pub fn colorize_rating(rating: Rating) -> String {
    match rating {
        Rating::Safe => rating.label().green().to_string(),
        Rating::Questionable => rating.label().yellow().to_string(),
        Rating::Explicit => rating.label().red().to_string(),
        Rating::Unknown => rating.label().to_string(),
    }
}

/// Render a presentation for the terminal
#[must_use]
pub fn render(presentation: &Presentation, quiet: bool) -> String {
    match presentation {
        Presentation::Link(url) => url.clone(),
        Presentation::Embed(embed) if quiet => embed.link.clone(),
        Presentation::Embed(embed) => {
            let mut lines = vec![
                FOUND_MESSAGE.to_string(),
                format!("{} <{}>", embed.title.bold(), embed.link),
                format!("  Rating: {} (#{})", colorize_rating(embed.rating), embed.color_hex()),
                format!("  {}: {}", embed.artist_label, embed.artist_text),
                format!("  Tags: {}", embed.tag_text),
            ];
            if let Some(thumbnail) = &embed.thumbnail {
                lines.push(format!("  Thumbnail: {thumbnail}"));
            }
            lines.join("\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(artist: &[&str], rating: Rating) -> Post {
        Post {
            id: 1234,
            file_url: Some("https://static1.e621.net/data/ab/cd/abcd.png".to_string()),
            rating,
            artist: artist.iter().map(|s| (*s).to_string()).collect(),
            tags: "red_fox solo snow".to_string(),
        }
    }

    #[test]
    fn test_link_presentation() {
        let p = Presentation::for_post(&post(&[], Rating::Safe), false, "https://e621.net/post/show");
        assert_eq!(
            p,
            Presentation::Link("https://static1.e621.net/data/ab/cd/abcd.png".to_string())
        );
    }

    #[test]
    fn test_link_falls_back_to_page() {
        let mut hidden = post(&[], Rating::Explicit);
        hidden.file_url = None;
        let p = Presentation::for_post(&hidden, false, "https://e621.net/post/show/");
        assert_eq!(p, Presentation::Link("https://e621.net/post/show/1234".to_string()));
    }

    #[test]
    fn test_embed_fields() {
        let embed = Embed::from_post(&post(&["some_artist"], Rating::Safe), "https://e621.net/post/show");
        assert_eq!(embed.title, "e621 Image #1234");
        assert_eq!(embed.link, "https://e621.net/post/show/1234");
        assert_eq!(embed.artist_label, "Artist");
        assert_eq!(embed.artist_text, "some artist");
        assert_eq!(embed.tag_text, "red\\_fox, solo, snow");
        assert_eq!(embed.color_hex(), "00FF00");
        assert_eq!(embed.thumbnail.as_deref(), Some("https://static1.e621.net/data/ab/cd/abcd.png"));
    }

    #[test]
    fn test_questionable_rating_is_recognised() {
        let embed = Embed::from_post(&post(&[], Rating::Questionable), "https://e621.net/post/show");
        assert_eq!(embed.rating.label(), "questionable");
        assert_eq!(embed.color_hex(), "FF9900");
    }

    #[test]
    fn test_artist_field_variants() {
        assert_eq!(artist_field(&[]), ("Artist", UNKNOWN_ARTIST.to_string()));
        assert_eq!(
            artist_field(&["a_b".to_string(), "c_d".to_string()]),
            ("Artists", "a b, c d".to_string())
        );
    }

    #[test]
    fn test_render_quiet_embed_is_link() {
        let p = Presentation::for_post(&post(&[], Rating::Safe), true, "https://e621.net/post/show");
        assert_eq!(render(&p, true), "https://e621.net/post/show/1234");
    }

    #[test]
    fn test_render_embed_lines() {
        colored::control::set_override(false);
        let p = Presentation::for_post(&post(&["x"], Rating::Explicit), true, "https://e621.net/post/show");
        let text = render(&p, false);
        assert!(text.starts_with(FOUND_MESSAGE));
        assert!(text.contains("Rating: explicit (#FF0000)"));
        assert!(text.contains("Artist: x"));
        assert!(text.contains("Thumbnail: https://static1.e621.net"));
    }
}
