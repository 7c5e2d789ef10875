//! Mock implementations of port traits
//!
//! In-memory publishing clients that can be configured for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;

use crate::domain::entities::RawPost;
use crate::domain::ports::PublishingClient;
use crate::error::PublishingError;

// ============================================================================
// Mock Publishing Client
// ============================================================================

/// Returns a fixed list of posts, or fails when told to
#[derive(Clone, Default)]
pub struct MockPublishingClient {
    posts: Arc<Vec<RawPost>>,
    should_fail: Arc<AtomicBool>,
    calls: Arc<AtomicUsize>,
}

impl MockPublishingClient {
    pub fn with_posts(posts: Vec<RawPost>) -> Self {
        Self {
            posts: Arc::new(posts),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        let client = Self::default();
        client.set_failing(true);
        client
    }

    pub fn set_failing(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    /// Number of fetches made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PublishingClient for MockPublishingClient {
    async fn fetch_posts(&self, _page: u32) -> Result<Vec<RawPost>, PublishingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.should_fail.load(Ordering::SeqCst) {
            return Err(PublishingError::Api {
                status: 503,
                message: "Mock failure".to_string(),
            });
        }

        Ok(self.posts.as_ref().clone())
    }
}

// ============================================================================
// Gated Publishing Client
// ============================================================================

type GatedResponse = Result<Vec<RawPost>, PublishingError>;

/// Each fetch waits on the next gate; the test decides when and in which
/// order responses arrive.
#[derive(Default)]
pub struct GatedPublishingClient {
    gates: Mutex<VecDeque<oneshot::Receiver<GatedResponse>>>,
    calls: AtomicUsize,
}

impl GatedPublishingClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a gate for the next fetch and return the sender that releases it
    pub fn gate(&self) -> oneshot::Sender<GatedResponse> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back(rx);
        tx
    }

    /// Yield until `n` fetches have started
    pub async fn wait_for_calls(&self, n: usize) {
        while self.calls.load(Ordering::SeqCst) < n {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl PublishingClient for GatedPublishingClient {
    async fn fetch_posts(&self, _page: u32) -> Result<Vec<RawPost>, PublishingError> {
        let gate = self.gates.lock().unwrap().pop_front();
        self.calls.fetch_add(1, Ordering::SeqCst);

        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(PublishingError::MissingData("gate".to_string()))),
            None => Err(PublishingError::MissingData("gate".to_string())),
        }
    }
}
