use crate::core::resolver::ResolvedProject;
use crate::domain::model::{HomeContent, ProjectSummary, Slug, SKILL_MAX_RATING};
use crate::render::blocks::rich_text_html;
use crate::render::html::escape;

pub const HOME_OUTPUT_PATH: &str = "index.html";
pub const NOT_FOUND_OUTPUT_PATH: &str = "404.html";
pub const STYLESHEET_OUTPUT_PATH: &str = "assets/styles.css";
pub const MANIFEST_OUTPUT_PATH: &str = "manifest.json";

/// Output file for a project detail page. Each project gets a directory
/// with an index.html so the page is served at `/projects/<slug>/`.
pub fn project_output_path(slug: &Slug) -> String {
    format!("projects/{}/index.html", slug)
}

/// Per-build values every page render needs: the site title for the chrome
/// and the base path every absolute URL is prefixed with.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub site_title: &'a str,
    pub base_path: &'a str,
}

impl RenderContext<'_> {
    /// Prefixes a root-relative asset path (e.g. `/images/certs/aws-saa.jpeg`)
    /// with the configured base path.
    pub fn asset(&self, path: &str) -> String {
        format!("{}{}", self.base_path, path)
    }

    /// Prefixes a root-relative route (e.g. `/`) with the configured base path.
    pub fn href(&self, route: &str) -> String {
        format!("{}{}", self.base_path, route)
    }

    /// Trailing-slash URL of a project detail page.
    pub fn project_href(&self, slug: &Slug) -> String {
        format!("{}/projects/{}/", self.base_path, slug)
    }
}

fn page_shell(page_title: &str, ctx: &RenderContext<'_>, body: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape(page_title)));
    out.push_str(&format!(
        "<link rel=\"stylesheet\" href=\"{}\">\n",
        escape(&ctx.href("/assets/styles.css"))
    ));
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!(
        "<header class=\"site-header\"><a class=\"site-brand\" href=\"{}\">{}</a></header>\n",
        escape(&ctx.href("/")),
        escape(ctx.site_title)
    ));
    out.push_str("<main>\n");
    out.push_str(body);
    out.push_str("</main>\n");
    out.push_str(&format!(
        "<footer class=\"site-footer\"><p>© {}</p></footer>\n",
        escape(ctx.site_title)
    ));
    out.push_str("</body>\n</html>\n");
    out
}

fn push_section_header(out: &mut String, title: &str, marker: &str) {
    out.push_str(&format!(
        "<div class=\"section-header\"><h2>{}</h2><span class=\"section-marker\">{}</span></div>\n",
        escape(title),
        escape(marker)
    ));
}

fn rating_dots(rating: u8) -> String {
    let filled = usize::from(rating.min(SKILL_MAX_RATING));
    let empty = usize::from(SKILL_MAX_RATING) - filled;
    format!("{}{}", "●".repeat(filled), "○".repeat(empty))
}

/// Renders the single-page home document: hero, about, certifications,
/// experience, education and skills, then the featured project grid.
pub fn home_page(home: &HomeContent, featured: &[ProjectSummary], ctx: &RenderContext<'_>) -> String {
    let mut body = String::new();

    // Hero
    body.push_str("<section class=\"hero\">\n");
    body.push_str(&format!("<h1>I'm {}</h1>\n", escape(&home.profile.name)));
    body.push_str(&format!(
        "<h1><span class=\"accent\">{}</span></h1>\n",
        escape(&home.profile.headline)
    ));
    body.push_str(&format!(
        "<p class=\"hero-intro\">{}</p>\n",
        escape(&home.profile.intro)
    ));
    body.push_str(&format!(
        "<img class=\"hero-portrait\" src=\"{}\" alt=\"{}\">\n",
        escape(&ctx.asset(&home.profile.portrait_image)),
        escape(&home.profile.name)
    ));
    body.push_str("</section>\n");

    // About me with stats
    body.push_str("<section class=\"about\">\n");
    push_section_header(&mut body, "About Me", "( 01 )");
    for paragraph in &home.profile.about {
        body.push_str(&format!("<p>{}</p>\n", escape(paragraph)));
    }
    body.push_str("<div class=\"stats\">\n");
    for stat in &home.profile.stats {
        body.push_str(&format!(
            "<div class=\"stat\"><h3>{}</h3><p>{}</p></div>\n",
            escape(&stat.count),
            escape(&stat.label)
        ));
    }
    body.push_str("</div>\n</section>\n");

    // Certifications
    body.push_str("<section class=\"certifications\">\n");
    push_section_header(&mut body, "Certifications", "( 02 )");
    body.push_str("<div class=\"cert-grid\">\n");
    for cert in &home.certifications {
        body.push_str(&format!(
            "<div class=\"cert-card\"><img src=\"{}\" alt=\"{}\"><p class=\"cert-name\">{}</p><p class=\"cert-code\">{}</p></div>\n",
            escape(&ctx.asset(&cert.icon)),
            escape(&cert.name),
            escape(&cert.name),
            escape(&cert.code)
        ));
    }
    body.push_str("</div>\n</section>\n");

    // Experience timeline
    body.push_str("<section class=\"experience\">\n");
    push_section_header(&mut body, "Experience", "( 03 )");
    for entry in &home.experience {
        body.push_str("<article class=\"experience-entry\">\n");
        body.push_str(&format!(
            "<span class=\"experience-years\">{}</span>\n",
            escape(&entry.years)
        ));
        body.push_str(&format!("<h3>{}</h3>\n", escape(&entry.title)));
        body.push_str(&format!(
            "<p class=\"experience-company\">{} · {}</p>\n",
            escape(&entry.company),
            escape(&entry.mode)
        ));
        body.push_str(&format!("<p>{}</p>\n", escape(&entry.description)));
        body.push_str("</article>\n");
    }
    body.push_str("</section>\n");

    // Education and skills
    body.push_str("<section class=\"education-skills\">\n");
    push_section_header(&mut body, "Education & Skills", "( 04 )");
    body.push_str("<div class=\"education\">\n");
    for entry in &home.education {
        body.push_str(&format!(
            "<article class=\"education-entry\"><h5>{}</h5><p>{}</p></article>\n",
            escape(&entry.title),
            escape(&entry.description)
        ));
    }
    body.push_str("</div>\n<div class=\"skills\">\n");
    for skill in &home.skills {
        body.push_str(&format!(
            "<div class=\"skill\"><img src=\"{}\" alt=\"{}\"><p class=\"skill-name\">{}</p><p class=\"skill-rating\">{}</p></div>\n",
            escape(&ctx.asset(&skill.icon)),
            escape(&skill.name),
            escape(&skill.name),
            rating_dots(skill.rating)
        ));
    }
    body.push_str("</div>\n</section>\n");

    // Featured project grid, marker shows the card count
    body.push_str("<section class=\"latest-work\">\n");
    push_section_header(
        &mut body,
        "Featured Projects",
        &format!("( {:02} )", featured.len()),
    );
    body.push_str("<div class=\"project-grid\">\n");
    for summary in featured {
        body.push_str(&format!(
            "<a class=\"project-card\" href=\"{}\">\n",
            escape(&ctx.project_href(&summary.slug))
        ));
        body.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">\n",
            escape(&ctx.asset(&summary.image)),
            escape(&summary.title)
        ));
        body.push_str(&format!("<h5>{}</h5>\n", escape(&summary.title)));
        if let Some(client) = &summary.client {
            body.push_str(&format!(
                "<p class=\"card-client\">{}</p>\n",
                escape(client)
            ));
        }
        body.push_str("<p class=\"card-caption\">Read the full project →</p>\n");
        body.push_str("</a>\n");
    }
    body.push_str("</div>\n</section>\n");

    page_shell(ctx.site_title, ctx, &body)
}

/// Renders a project detail page. The five authored sections always render
/// in catalog order; the two image sections only when the project ships
/// the corresponding asset.
pub fn project_page(resolved: ResolvedProject<'_>, ctx: &RenderContext<'_>) -> String {
    let summary = resolved.summary;
    let content = resolved.content;
    let mut body = String::new();

    body.push_str("<article class=\"project-detail\">\n");
    body.push_str(&format!("<h1>{}</h1>\n", escape(&summary.title)));
    if let Some(client) = &summary.client {
        body.push_str(&format!(
            "<p class=\"project-client\">{}</p>\n",
            escape(client)
        ));
    }
    body.push_str(&format!(
        "<img class=\"project-hero\" src=\"{}\" alt=\"{}\">\n",
        escape(&ctx.asset(&summary.image)),
        escape(&summary.title)
    ));

    for section in [
        &content.overview,
        &content.about,
        &content.steps,
        &content.services,
        &content.time_and_cost,
    ] {
        body.push_str("<section class=\"content-section\">\n");
        body.push_str(&rich_text_html(section));
        body.push_str("</section>\n");
    }

    if let Some(image) = &content.architecture_image {
        body.push_str("<section class=\"content-section\">\n<h2>➡️ Architectural diagram</h2>\n");
        body.push_str(&format!(
            "<img src=\"{}\" alt=\"{} architecture diagram\">\n",
            escape(&ctx.asset(image)),
            escape(&summary.title)
        ));
        body.push_str("</section>\n");
    }

    if let Some(image) = &content.final_result_image {
        body.push_str("<section class=\"content-section\">\n<h2>➡️ Final result</h2>\n");
        body.push_str("<p>This is the final UI demonstrating the end-to-end workflow.</p>\n");
        body.push_str(&format!(
            "<img src=\"{}\" alt=\"{} final interface\">\n",
            escape(&ctx.asset(image)),
            escape(&summary.title)
        ));
        body.push_str("</section>\n");
    }

    body.push_str(&format!(
        "<a class=\"back-link\" href=\"{}\">← Back to all projects</a>\n",
        escape(&ctx.href("/"))
    ));
    body.push_str("</article>\n");

    page_shell(&format!("{} | {}", summary.title, ctx.site_title), ctx, &body)
}

/// Placeholder page for a listed project whose write-up is not authored yet.
pub fn coming_soon_page(summary: &ProjectSummary, ctx: &RenderContext<'_>) -> String {
    let mut body = String::new();

    body.push_str("<article class=\"project-detail coming-soon\">\n");
    body.push_str(&format!("<h1>{}</h1>\n", escape(&summary.title)));
    body.push_str(&format!(
        "<img class=\"project-hero\" src=\"{}\" alt=\"{}\">\n",
        escape(&ctx.asset(&summary.image)),
        escape(&summary.title)
    ));
    body.push_str(
        "<p class=\"coming-soon-note\">The full write-up for this project is coming soon.</p>\n",
    );
    body.push_str(&format!(
        "<a class=\"back-link\" href=\"{}\">← Back to all projects</a>\n",
        escape(&ctx.href("/"))
    ));
    body.push_str("</article>\n");

    page_shell(&format!("{} | {}", summary.title, ctx.site_title), ctx, &body)
}

/// The static 404 page, served by the host for any unknown route.
pub fn not_found_page(ctx: &RenderContext<'_>) -> String {
    let mut body = String::new();

    body.push_str("<section class=\"not-found\">\n");
    body.push_str("<h1>404</h1>\n");
    body.push_str("<p>This page could not be found.</p>\n");
    body.push_str(&format!(
        "<a class=\"back-link\" href=\"{}\">← Back to the home page</a>\n",
        escape(&ctx.href("/"))
    ));
    body.push_str("</section>\n");

    page_shell(&format!("Page not found | {}", ctx.site_title), ctx, &body)
}

/// The single stylesheet shared by every generated page.
pub const STYLESHEET: &str = "\
:root {
  --primary: #FE4300;
  --ink: #111;
  --muted: #555;
  --soft-gray: #f4f6f8;
  --mist-gray: #dfe5e8;
}
* { box-sizing: border-box; }
body {
  margin: 0;
  font-family: -apple-system, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
  color: var(--ink);
  line-height: 1.6;
}
main { max-width: 960px; margin: 0 auto; padding: 2rem 1rem; }
img { max-width: 100%; height: auto; border-radius: 8px; }
a { color: inherit; }
.site-header { border-bottom: 1px solid var(--mist-gray); padding: 1rem; }
.site-brand { font-weight: 600; text-decoration: none; }
.site-footer { border-top: 1px solid var(--mist-gray); padding: 1rem; color: var(--muted); }
.accent { color: var(--primary); }
.hero { padding: 2rem 0; }
.hero-intro { max-width: 36rem; color: var(--muted); }
.section-header {
  display: flex;
  justify-content: space-between;
  border-bottom: 1px solid var(--ink);
  padding-bottom: 0.5rem;
  margin: 3rem 0 1.5rem;
}
.section-marker { color: var(--primary); }
.stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
.cert-grid, .skills {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
  gap: 1.5rem;
}
.cert-card, .skill {
  border: 1px solid var(--mist-gray);
  border-radius: 12px;
  padding: 1rem;
  text-align: center;
  background: #fff;
}
.cert-code { color: var(--muted); font-size: 0.875rem; }
.skill-rating { color: var(--primary); letter-spacing: 2px; }
.experience-entry { border-left: 2px solid var(--soft-gray); padding-left: 1rem; margin-bottom: 2rem; }
.experience-years { font-weight: 700; }
.experience-company { color: var(--muted); }
.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 1.5rem;
}
.project-card {
  display: block;
  background: #fff;
  border: 1px solid var(--mist-gray);
  border-radius: 8px;
  overflow: hidden;
  text-decoration: none;
}
.project-card h5 { margin: 0.75rem; }
.card-client, .card-caption { margin: 0 0.75rem 0.75rem; color: var(--muted); font-size: 0.875rem; }
.project-detail h1 { font-size: 2rem; }
.project-hero { width: 100%; max-width: 56rem; aspect-ratio: 16 / 9; object-fit: cover; }
.content-section { margin: 2.5rem 0; }
.coming-soon-note { color: var(--muted); font-style: italic; }
.back-link { display: inline-block; margin-top: 2rem; color: var(--primary); }
.not-found { text-align: center; padding: 4rem 0; }
.not-found h1 { font-size: 4rem; margin-bottom: 0; }
";
