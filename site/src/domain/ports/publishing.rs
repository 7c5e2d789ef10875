//! Publishing platform port trait
//!
//! Defines the interface for reading a publication's posts.

use async_trait::async_trait;

use crate::domain::entities::RawPost;
use crate::error::PublishingError;

/// Port trait for the remote publishing API
#[async_trait]
pub trait PublishingClient: Send + Sync {
    /// Fetch one page of the publication's posts, newest first
    async fn fetch_posts(&self, page: u32) -> Result<Vec<RawPost>, PublishingError>;
}
