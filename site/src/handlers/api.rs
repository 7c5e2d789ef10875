//! JSON API handlers
//!
//! Machine-readable versions of the blog list and the project table.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::domain::entities::{BlogLimit, BlogPost, Project};
use crate::error::AppError;
use crate::handlers::pages::PageQuery;
use crate::AppState;

/// GET /api/blogs?count=N
///
/// One-off fetch; nothing is kept for later requests.
/// Without `count`, every post is returned.
pub async fn list_blogs(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<BlogPost>>, AppError> {
    let limit = query.count()?.map(BlogLimit::from).unwrap_or(BlogLimit::All);
    let posts = state.blog_list(-1).fetch_posts(limit).await;

    Ok(Json(posts))
}

/// GET /api/projects
pub async fn list_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.catalog.projects().to_vec())
}
