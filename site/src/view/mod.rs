//! View module
//!
//! Server-side HTML rendering. Every renderer takes the theme explicitly.

pub mod blog;
pub mod layout;
pub mod projects;

pub use blog::render_blog_list;
pub use layout::render_page;
pub use projects::render_projects;
