//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::sync::Arc;

use crate::config::SiteInfo;
use crate::domain::entities::{BlogPost, ProjectCatalog, RawPost};
use crate::domain::ports::PublishingClient;
use crate::AppState;

use super::MockPublishingClient;

pub const TEST_ARTICLE_BASE: &str = "https://blog.example.dev";

/// Create a raw post with a fixed publish date
pub fn test_raw_post(slug: &str, title: &str) -> RawPost {
    RawPost {
        slug: slug.to_string(),
        title: title.to_string(),
        brief: Some(format!("About {}", title)),
        cover_image: None,
        date_added: "2021-06-03T14:15:51.421Z".to_string(),
    }
}

/// Create `n` raw posts: `post-1`/"Post 1" through `post-n`/"Post n"
pub fn test_raw_posts(n: usize) -> Vec<RawPost> {
    (1..=n)
        .map(|i| test_raw_post(&format!("post-{}", i), &format!("Post {}", i)))
        .collect()
}

/// Display rows matching `test_raw_posts(n)`
pub fn test_blog_posts(n: usize) -> Vec<BlogPost> {
    test_raw_posts(n)
        .iter()
        .map(|raw| BlogPost::from_raw(raw, TEST_ARTICLE_BASE))
        .collect()
}

/// App state backed by `client`: home list shows 3 posts, blog page shows all
pub fn test_state(client: MockPublishingClient) -> AppState {
    test_state_with(Arc::new(client))
}

/// Same as [`test_state`] for any publishing client
pub fn test_state_with(client: Arc<dyn PublishingClient>) -> AppState {
    AppState {
        publishing: client,
        article_base_url: TEST_ARTICLE_BASE.to_string(),
        home_blog_count: 3,
        catalog: Arc::new(ProjectCatalog::default()),
        site: SiteInfo::default(),
    }
}
