//! Blog list renderer

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::domain::entities::{BlogPost, Theme};

pub const EMPTY_BLOGS_MESSAGE: &str = "No blogs to be found. Stay tuned for upcoming articles!";

/// Render the blog list wrapper around the current posts
pub fn render_blog_list(posts: &[BlogPost], theme: Theme) -> String {
    let mut buf = String::new();

    buf.push_str("<div class=\"blogList\">");
    buf.push_str(&render_blog_view(posts, theme));
    buf.push_str("</div>");

    buf
}

/// One row per post, or the empty-state message
pub fn render_blog_view(posts: &[BlogPost], theme: Theme) -> String {
    if posts.is_empty() {
        return format!(
            "<div class=\"blogView__empty heading content text-md{}\">{}</div>",
            if theme.is_dark() { " text-zinc-200" } else { "" },
            EMPTY_BLOGS_MESSAGE
        );
    }

    let mut buf = String::new();
    buf.push_str("<div class=\"blogView\">");
    for post in posts {
        buf.push_str(&render_blog_row(post, theme));
    }
    buf.push_str("</div>");

    buf
}

fn render_blog_row(post: &BlogPost, theme: Theme) -> String {
    let (hover, title_class) = if theme.is_dark() {
        ("hover:border-red-600", " class=\"text-zinc-200\"")
    } else {
        ("hover:border-cyan-700", "")
    };

    format!(
        concat!(
            "<div class=\"blog my-5\" data-key=\"{key}\">",
            "<div class=\"blog__button subheading mb-1 w-full\">",
            "<button class=\"hover:border-b-2 {hover}\" role=\"button\" type=\"button\">",
            "<a target=\"_blank\" href=\"{url}\"><p{title_class}>{title}</p></a>",
            "</button>",
            "</div>",
            "<div class=\"blog__date text-neutral-500 font-extralight text-sm\">{date}</div>",
            "</div>"
        ),
        key = attr(&post.title),
        hover = hover,
        url = attr(&post.url),
        title_class = title_class,
        title = text(&post.title),
        date = text(&post.publish_date),
    )
}
