//! Domain entities
//!
//! Plain data the site renders: blog posts, projects and the display theme.

pub mod blog_post;
pub mod project;
pub mod theme;

pub use blog_post::{BlogLimit, BlogPost, RawPost};
pub use project::{Project, ProjectCatalog};
pub use theme::Theme;
