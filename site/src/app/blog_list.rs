//! Blog list widget
//!
//! Fetches a publication's posts, turns them into display rows and keeps the
//! latest result for the renderer. Each refresh is tagged with a generation
//! number; results from a superseded refresh are dropped so a slow, stale
//! response can never overwrite a newer one.

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entities::{BlogLimit, BlogPost};
use crate::domain::ports::PublishingClient;

/// The publishing API is always read from its first page
const FIRST_PAGE: u32 = 0;

/// A blog list instance with its own display state
pub struct BlogList {
    client: Arc<dyn PublishingClient>,
    article_base_url: String,
    count: AtomicI64,
    /// Generation of the most recently started refresh
    latest_generation: AtomicU64,
    /// Written only by a completing refresh, read by the renderer
    posts: RwLock<Vec<BlogPost>>,
}

impl BlogList {
    /// Create a widget showing `count` posts (negative shows all)
    pub fn new(client: Arc<dyn PublishingClient>, article_base_url: String, count: i64) -> Self {
        Self {
            client,
            article_base_url,
            count: AtomicI64::new(count),
            latest_generation: AtomicU64::new(0),
            posts: RwLock::new(Vec::new()),
        }
    }

    pub fn count(&self) -> i64 {
        self.count.load(Ordering::SeqCst)
    }

    /// Snapshot of the posts currently on display
    pub async fn posts(&self) -> Vec<BlogPost> {
        self.posts.read().await.clone()
    }

    /// Fetch, transform and truncate posts. Failures yield an empty list.
    pub async fn fetch_posts(&self, limit: BlogLimit) -> Vec<BlogPost> {
        match self.client.fetch_posts(FIRST_PAGE).await {
            Ok(raw_posts) => {
                let mut posts: Vec<BlogPost> = raw_posts
                    .iter()
                    .map(|raw| BlogPost::from_raw(raw, &self.article_base_url))
                    .collect();
                limit.apply(&mut posts);
                posts
            }
            Err(e) => {
                tracing::warn!(error = %e, "Unable to fetch blogs at the moment.");
                Vec::new()
            }
        }
    }

    /// Change the limit and re-fetch
    pub async fn set_count(&self, count: i64) -> bool {
        self.count.store(count, Ordering::SeqCst);
        self.refresh().await
    }

    /// Re-fetch with the current limit.
    ///
    /// Returns `false` when a newer refresh started before this one finished,
    /// in which case the result was discarded.
    pub async fn refresh(&self) -> bool {
        let generation = self.latest_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let limit = BlogLimit::from(self.count());

        let posts = self.fetch_posts(limit).await;

        self.apply(generation, posts).await
    }

    async fn apply(&self, generation: u64, posts: Vec<BlogPost>) -> bool {
        let mut displayed = self.posts.write().await;

        let latest = self.latest_generation.load(Ordering::SeqCst);
        if generation != latest {
            tracing::debug!(
                "Discarding stale blog list result (generation {}, latest {})",
                generation,
                latest
            );
            return false;
        }

        *displayed = posts;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PublishingError;
    use crate::test_utils::{test_raw_posts, GatedPublishingClient, MockPublishingClient};

    const BASE: &str = "https://blog.example.dev";

    fn widget(client: MockPublishingClient, count: i64) -> BlogList {
        BlogList::new(Arc::new(client), BASE.to_string(), count)
    }

    #[tokio::test]
    async fn starts_empty() {
        let list = widget(MockPublishingClient::with_posts(test_raw_posts(3)), 2);
        assert!(list.posts().await.is_empty());
        assert_eq!(list.count(), 2);
    }

    #[tokio::test]
    async fn limit_two_of_five_keeps_first_two_in_order() {
        let list = widget(MockPublishingClient::with_posts(test_raw_posts(5)), 2);

        assert!(list.refresh().await);

        let posts = list.posts().await;
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "Post 1");
        assert_eq!(posts[1].title, "Post 2");
    }

    #[tokio::test]
    async fn negative_limit_keeps_all() {
        let list = widget(MockPublishingClient::with_posts(test_raw_posts(3)), -1);

        list.refresh().await;

        assert_eq!(list.posts().await.len(), 3);
    }

    #[tokio::test]
    async fn count_never_exceeds_limit() {
        for limit in 0..8 {
            let list = widget(MockPublishingClient::with_posts(test_raw_posts(5)), limit);
            list.refresh().await;
            assert_eq!(list.posts().await.len(), (limit as usize).min(5));
        }
    }

    #[tokio::test]
    async fn urls_are_base_plus_slug() {
        let list = widget(MockPublishingClient::with_posts(test_raw_posts(4)), -1);
        list.refresh().await;

        for (i, post) in list.posts().await.iter().enumerate() {
            assert_eq!(post.url, format!("{}/post-{}", BASE, i + 1));
        }
    }

    #[tokio::test]
    async fn network_failure_shows_no_posts() {
        let list = widget(MockPublishingClient::failing(), 3);

        assert!(list.refresh().await);

        assert!(list.posts().await.is_empty());
    }

    #[tokio::test]
    async fn failure_clears_previous_posts() {
        let client = MockPublishingClient::with_posts(test_raw_posts(3));
        let list = BlogList::new(Arc::new(client.clone()), BASE.to_string(), -1);
        list.refresh().await;
        assert_eq!(list.posts().await.len(), 3);

        client.set_failing(true);
        list.refresh().await;

        assert!(list.posts().await.is_empty());
    }

    #[tokio::test]
    async fn set_count_refetches_with_new_limit() {
        let client = MockPublishingClient::with_posts(test_raw_posts(5));
        let list = BlogList::new(Arc::new(client.clone()), BASE.to_string(), 1);
        list.refresh().await;
        assert_eq!(list.posts().await.len(), 1);

        list.set_count(4).await;

        assert_eq!(list.count(), 4);
        assert_eq!(list.posts().await.len(), 4);
        assert_eq!(client.calls(), 2);
    }

    #[tokio::test]
    async fn fetch_posts_does_not_touch_display_state() {
        let list = widget(MockPublishingClient::with_posts(test_raw_posts(5)), -1);

        let posts = list.fetch_posts(BlogLimit::First(3)).await;

        assert_eq!(posts.len(), 3);
        assert!(list.posts().await.is_empty());
    }

    #[tokio::test]
    async fn stale_response_is_discarded() {
        let client = Arc::new(GatedPublishingClient::new());
        let first_gate = client.gate();
        let second_gate = client.gate();
        let list = Arc::new(BlogList::new(client.clone(), BASE.to_string(), -1));

        let first = tokio::spawn({
            let list = list.clone();
            async move { list.refresh().await }
        });
        client.wait_for_calls(1).await;

        let second = tokio::spawn({
            let list = list.clone();
            async move { list.set_count(1).await }
        });
        client.wait_for_calls(2).await;

        // Newer request finishes first, then the superseded one arrives
        second_gate.send(Ok(test_raw_posts(2))).unwrap();
        assert!(second.await.unwrap());
        first_gate.send(Ok(test_raw_posts(5))).unwrap();
        assert!(!first.await.unwrap());

        let posts = list.posts().await;
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Post 1");
    }

    #[tokio::test]
    async fn stale_failure_does_not_clear_newer_posts() {
        let client = Arc::new(GatedPublishingClient::new());
        let first_gate = client.gate();
        let second_gate = client.gate();
        let list = Arc::new(BlogList::new(client.clone(), BASE.to_string(), -1));

        let first = tokio::spawn({
            let list = list.clone();
            async move { list.refresh().await }
        });
        client.wait_for_calls(1).await;
        let second = tokio::spawn({
            let list = list.clone();
            async move { list.refresh().await }
        });
        client.wait_for_calls(2).await;

        second_gate.send(Ok(test_raw_posts(3))).unwrap();
        second.await.unwrap();
        first_gate
            .send(Err(PublishingError::MissingData("data".to_string())))
            .unwrap();
        first.await.unwrap();

        assert_eq!(list.posts().await.len(), 3);
    }
}
