//! Page handlers
//!
//! HTML pages composed from the layout, the blog list and the project grid.
//! Every page accepts `?theme=light|dark`; blog pages also accept `?count=N`.

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::domain::entities::{BlogPost, Theme};
use crate::error::AppError;
use crate::view::{render_blog_list, render_page, render_projects};
use crate::AppState;

/// Query parameters shared by the page routes
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub theme: Option<String>,
    pub count: Option<String>,
}

impl PageQuery {
    pub fn theme(&self) -> Theme {
        Theme::from_param(self.theme.as_deref())
    }

    /// Requested blog count, if any. Negative means "all".
    pub fn count(&self) -> Result<Option<i64>, AppError> {
        self.count
            .as_deref()
            .map(|raw| {
                raw.trim()
                    .parse::<i64>()
                    .map_err(|_| AppError::BadRequest(format!("Invalid count: {}", raw)))
            })
            .transpose()
    }
}

/// Mount a blog list for this request and return what it displays.
///
/// `count` overrides `default_count` for this request only.
pub(crate) async fn load_blogs(
    state: &AppState,
    default_count: i64,
    count: Option<i64>,
) -> Vec<BlogPost> {
    let blogs = state.blog_list(default_count);
    match count {
        Some(count) => blogs.set_count(count).await,
        None => blogs.refresh().await,
    };
    blogs.posts().await
}

fn section_heading(title: &str, theme: Theme) -> String {
    format!(
        "<h2 class=\"section__heading heading text-2xl font-bold mb-3{}\">{}</h2>",
        if theme.is_dark() { " text-zinc-200" } else { "" },
        title
    )
}

/// GET /
pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, AppError> {
    let theme = query.theme();
    let posts = load_blogs(&state, state.home_blog_count, query.count()?).await;

    let mut content = String::new();
    content.push_str(&section_heading("Recent Blogs", theme));
    content.push_str(&render_blog_list(&posts, theme));
    content.push_str(&render_projects(&state.catalog, theme));

    Ok(Html(render_page(&state.site, theme, "Home", &content)))
}

/// GET /blogs
pub async fn blogs(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, AppError> {
    let theme = query.theme();
    let posts = load_blogs(&state, -1, query.count()?).await;

    let mut content = section_heading("Blogs", theme);
    content.push_str(&render_blog_list(&posts, theme));

    Ok(Html(render_page(&state.site, theme, "Blogs", &content)))
}

/// GET /projects
pub async fn projects(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let theme = query.theme();
    let content = render_projects(&state.catalog, theme);

    Html(render_page(&state.site, theme, "Projects", &content))
}
