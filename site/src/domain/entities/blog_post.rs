//! Blog post domain entities
//!
//! `RawPost` is the shape the publishing platform returns; `BlogPost` is the
//! display row the blog list renders.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Display format for publish dates, e.g. "Jun 3, 2021"
pub const BLOG_DATE_FORMAT: &str = "%b %-d, %Y";

/// A post as returned by the publishing API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPost {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub brief: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    pub date_added: String,
}

/// A post ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub publish_date: String,
    pub title: String,
    pub url: String,
}

impl BlogPost {
    /// Build the display row for a raw post, linking it under `article_base_url`
    pub fn from_raw(raw: &RawPost, article_base_url: &str) -> Self {
        Self {
            publish_date: format_blog_date(&raw.date_added),
            title: raw.title.clone(),
            url: article_url(article_base_url, &raw.slug),
        }
    }
}

/// Canonical article link: `<base>/<slug>`
pub fn article_url(article_base_url: &str, slug: &str) -> String {
    format!("{}/{}", article_base_url.trim_end_matches('/'), slug)
}

/// Human-readable publish date. Unparseable timestamps are shown as-is.
pub fn format_blog_date(date_added: &str) -> String {
    match DateTime::parse_from_rfc3339(date_added.trim()) {
        Ok(date) => date.format(BLOG_DATE_FORMAT).to_string(),
        Err(e) => {
            tracing::debug!("Unparseable post date {:?}: {}", date_added, e);
            date_added.to_string()
        }
    }
}

/// How many posts a blog list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogLimit {
    /// Keep only the first `n` posts
    First(usize),
    /// Keep every post
    All,
}

impl BlogLimit {
    /// Truncate `posts` in place, preserving order
    pub fn apply<T>(self, posts: &mut Vec<T>) {
        if let BlogLimit::First(n) = self {
            posts.truncate(n);
        }
    }
}

impl From<i64> for BlogLimit {
    /// Negative counts mean "no limit"
    fn from(count: i64) -> Self {
        usize::try_from(count)
            .map(BlogLimit::First)
            .unwrap_or(BlogLimit::All)
    }
}
