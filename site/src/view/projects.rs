//! Project showcase renderer

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::domain::entities::{Project, ProjectCatalog, Theme};

/// Render the showcase grid with one tile per catalog project
pub fn render_projects(catalog: &ProjectCatalog, theme: Theme) -> String {
    let heading_class = if theme.is_dark() { " text-zinc-200" } else { "" };

    let mut buf = String::new();
    buf.push_str("<div class=\"projects py-20 px-6\">");
    buf.push_str(&format!(
        "<div class=\"projects__title pb-6 text-4xl font-bold text-center{}\">My Recent Work</div>",
        heading_class
    ));
    buf.push_str(&format!(
        "<div class=\"projects__subtitle pb-6 text-xl text-center font-light{}\">\
         Here are a few design projects I've worked on recently.</div>",
        heading_class
    ));

    buf.push_str(
        "<div class=\"projects__list py-16 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3\">",
    );
    for project in catalog.projects() {
        buf.push_str(&render_project(project));
    }
    buf.push_str("</div></div>");

    buf
}

fn render_project(project: &Project) -> String {
    format!(
        concat!(
            "<div class=\"mb-5\" data-key=\"{id}\">",
            "<div class=\"project flex m-3 h-60\">",
            "<div class=\"project__thumbnail flex justify-center items-center grow rounded-xl {bg}\">",
            "<img class=\"w-24 h-24\" src=\"{logo}\" alt=\"{name}\">",
            "</div>",
            "<div class=\"project__links flex flex-col p-3 justify-center\">",
            "<a target=\"_blank\" href=\"{github}\">",
            "<img class=\"w-6 h-6 my-3\" src=\"/github.png\" alt=\"github\"></a>",
            "<a target=\"_blank\" href=\"{hosted}\">",
            "<img class=\"w-6 h-6 my-3\" src=\"/web.png\" alt=\"hosting\"></a>",
            "</div>",
            "</div>",
            "</div>"
        ),
        id = project.id,
        bg = text(&project.background_color),
        logo = attr(&project.logo),
        name = attr(&project.name),
        github = attr(&project.links.github),
        hosted = attr(&project.links.hosted),
    )
}
