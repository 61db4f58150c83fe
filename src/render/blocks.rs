use crate::domain::model::{Block, Inline, RichText};
use crate::render::html::escape;

/// Renders an authored rich-text section to an HTML fragment.
pub fn rich_text_html(text: &RichText) -> String {
    let mut out = String::new();
    for block in &text.0 {
        push_block(&mut out, block);
    }
    out
}

fn push_block(out: &mut String, block: &Block) {
    match block {
        Block::Heading { level, text } => {
            let level = (*level).clamp(1, 6);
            out.push_str(&format!("<h{}>{}</h{}>\n", level, escape(text), level));
        }
        Block::Paragraph(parts) => {
            out.push_str("<p>");
            for part in parts {
                push_inline(out, part);
            }
            out.push_str("</p>\n");
        }
        Block::Bullets(items) => push_list(out, "ul", items),
        Block::Numbered(items) => push_list(out, "ol", items),
    }
}

fn push_inline(out: &mut String, inline: &Inline) {
    match inline {
        Inline::Text(text) => out.push_str(&escape(text)),
        Inline::Strong(text) => {
            out.push_str("<strong>");
            out.push_str(&escape(text));
            out.push_str("</strong>");
        }
    }
}

fn push_list(out: &mut String, tag: &str, items: &[String]) {
    out.push_str(&format!("<{}>\n", tag));
    for item in items {
        out.push_str(&format!("<li>{}</li>\n", escape(item)));
    }
    out.push_str(&format!("</{}>\n", tag));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_heading_levels_render_and_clamp() {
        let text = RichText::of([Block::heading(2, "Overview"), Block::heading(9, "Deep")]);
        let html = rich_text_html(&text);

        assert!(html.contains("<h2>Overview</h2>"));
        assert!(html.contains("<h6>Deep</h6>"));
    }

    #[test]
    fn test_paragraph_mixes_text_and_strong_runs() {
        let text = RichText::of([Block::paragraph([
            Inline::text("Built with "),
            Inline::strong("AWS Lambda"),
            Inline::text(" and S3."),
        ])]);

        assert_eq!(
            rich_text_html(&text),
            "<p>Built with <strong>AWS Lambda</strong> and S3.</p>\n"
        );
    }

    #[test]
    fn test_bullets_and_numbered_lists() {
        let text = RichText::of([
            Block::bullets(["EC2", "ALB"]),
            Block::numbered(["First", "Second"]),
        ]);
        let html = rich_text_html(&text);

        assert!(html.contains("<ul>\n<li>EC2</li>\n<li>ALB</li>\n</ul>\n"));
        assert!(html.contains("<ol>\n<li>First</li>\n<li>Second</li>\n</ol>\n"));
    }

    #[test]
    fn test_authored_text_is_escaped() {
        let text = RichText::of([
            Block::plain("Costs < $5 & free tier"),
            Block::bullets(["<script>alert(1)</script>"]),
        ]);
        let html = rich_text_html(&text);

        assert!(html.contains("<p>Costs &lt; $5 &amp; free tier</p>"));
        assert!(html.contains("<li>&lt;script&gt;alert(1)&lt;/script&gt;</li>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_empty_rich_text_renders_nothing() {
        assert_eq!(rich_text_html(&RichText::default()), "");
    }
}
