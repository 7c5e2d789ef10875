//! Hashnode API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::entities::RawPost;
use crate::domain::ports::PublishingClient;
use crate::error::PublishingError;

/// Implementation of the publishing port against Hashnode
pub struct HashnodeClient {
    http: Client,
    endpoint: String,
    username: String,
}

impl HashnodeClient {
    pub fn new(
        endpoint: String,
        username: String,
        timeout: Duration,
    ) -> Result<Self, PublishingError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            endpoint,
            username,
        })
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<GraphqlResponse, PublishingError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|e| PublishingError::Deserialization(e.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(PublishingError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// GraphQL query listing a user's publication posts
pub fn articles_query(username: &str) -> String {
    // A JSON string literal is also a valid GraphQL string literal
    let username = serde_json::Value::String(username.to_string());

    format!(
        r#"
query GetUserArticles($page: Int!) {{
    user(username: {username}) {{
        publication {{
            posts(page: $page) {{
                slug
                title
                brief
                coverImage
                dateAdded
            }}
        }}
    }}
}}"#
    )
}

/// Request types for the GraphQL API
#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: ArticleVariables,
}

#[derive(Serialize)]
struct ArticleVariables {
    page: u32,
}

/// Response types from the GraphQL API
#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<ArticlesData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ArticlesData {
    user: Option<UserNode>,
}

#[derive(Debug, Deserialize)]
struct UserNode {
    publication: Option<PublicationNode>,
}

#[derive(Debug, Deserialize)]
struct PublicationNode {
    posts: Option<Vec<RawPost>>,
}

/// Walk `data.user.publication.posts`, failing on any missing level
fn extract_posts(response: GraphqlResponse) -> Result<Vec<RawPost>, PublishingError> {
    let Some(data) = response.data else {
        let message = response
            .errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(if message.is_empty() {
            PublishingError::MissingData("data".to_string())
        } else {
            PublishingError::Api {
                status: 200,
                message,
            }
        });
    };

    let user = data
        .user
        .ok_or_else(|| PublishingError::MissingData("data.user".to_string()))?;
    let publication = user
        .publication
        .ok_or_else(|| PublishingError::MissingData("data.user.publication".to_string()))?;

    Ok(publication.posts.unwrap_or_default())
}

#[async_trait]
impl PublishingClient for HashnodeClient {
    async fn fetch_posts(&self, page: u32) -> Result<Vec<RawPost>, PublishingError> {
        let query = articles_query(&self.username);
        let request = GraphqlRequest {
            query: &query,
            variables: ArticleVariables { page },
        };

        tracing::debug!("Fetching page {} of posts for {}", page, self.username);

        let response = self.http.post(&self.endpoint).json(&request).send().await?;
        let body = self.handle_response(response).await?;

        extract_posts(body)
    }
}
