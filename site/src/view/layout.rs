//! Page layout: navbar, footer and the container around page content

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::config::SiteInfo;
use crate::domain::entities::Theme;

/// Pages linked from the navbar, as (path, label)
const NAV_LINKS: [(&str, &str); 3] = [("/", "Home"), ("/blogs", "Blogs"), ("/projects", "Projects")];

/// Place already-rendered `content` between the navbar and the footer
pub fn render_layout(site: &SiteInfo, theme: Theme, content: &str) -> String {
    let mut buf = String::new();

    buf.push_str("<div class=\"layout flex justify-center items-center\">");
    buf.push_str("<div class=\"w-full sm:w-3/6 p-5\">");

    buf.push_str("<div class=\"layout__navbar mb-10\">");
    buf.push_str(&render_navbar(site, theme));
    buf.push_str("</div>");

    buf.push_str(content);

    buf.push_str("<div class=\"layout__footer\">");
    buf.push_str(&render_footer(site, theme));
    buf.push_str("</div>");

    buf.push_str("</div></div>");

    buf
}

/// Full HTML document for a page
pub fn render_page(site: &SiteInfo, theme: Theme, title: &str, content: &str) -> String {
    let body_class = if theme.is_dark() {
        "bg-zinc-900 text-zinc-200"
    } else {
        "bg-white"
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{} | {}</title></head><body class=\"{} theme-{}\">{}</body></html>\n",
        text(title),
        text(&site.owner),
        body_class,
        theme,
        render_layout(site, theme, content)
    )
}

pub fn render_navbar(site: &SiteInfo, theme: Theme) -> String {
    let link_class = if theme.is_dark() {
        "navbar__link mx-2 text-zinc-200"
    } else {
        "navbar__link mx-2"
    };

    let mut buf = String::new();
    buf.push_str("<nav class=\"navbar flex justify-between items-center\">");
    buf.push_str(&format!(
        "<a class=\"navbar__brand heading text-xl\" href=\"/?theme={}\">{}</a>",
        theme,
        text(&site.owner)
    ));

    buf.push_str("<div class=\"navbar__links\">");
    for (path, label) in NAV_LINKS {
        buf.push_str(&format!(
            "<a class=\"{}\" href=\"{}?theme={}\">{}</a>",
            link_class, path, theme, label
        ));
    }
    let toggled = theme.toggled();
    buf.push_str(&format!(
        "<a class=\"navbar__theme {}\" href=\"?theme={}\">{} mode</a>",
        link_class,
        toggled,
        capitalize(&toggled.to_string())
    ));
    buf.push_str("</div></nav>");

    buf
}

pub fn render_footer(site: &SiteInfo, theme: Theme) -> String {
    format!(
        "<footer class=\"footer text-center text-sm font-light{}\">\
         <a target=\"_blank\" href=\"{}\">{}</a></footer>",
        if theme.is_dark() { " text-zinc-200" } else { "" },
        attr(&site.github_url),
        text(&site.owner)
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
