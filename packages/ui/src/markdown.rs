use dioxus::prelude::*;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

fn parser_options() -> Options {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TABLES);
    opts
}

const SAFE_SCHEMES: [&str; 4] = ["http://", "https://", "mailto:", "/"];

/// Link targets outside the allowed schemes (e.g. `javascript:`) become `#`.
fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let lower = url.to_ascii_lowercase();
    if url.starts_with('#') || SAFE_SCHEMES.iter().any(|s| lower.starts_with(s)) {
        url
    } else {
        tracing::debug!(%url, "dropped unsafe link target");
        CowStr::Borrowed("#")
    }
}

/// Render Markdown to HTML. Raw HTML in the source is shown as text.
pub(crate) fn render_html(source: &str) -> String {
    let parser = Parser::new_ext(source, parser_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    });
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// A rendered Markdown body (blog posts, project descriptions).
#[component]
pub fn Markdown(source: String, #[props(default = "".to_string())] class: String) -> Element {
    let rendered = render_html(&source);
    rsx! {
        div {
            class: "prose max-w-none {class}",
            dangerous_inner_html: "{rendered}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_basic_markdown() {
        let html = render_html("# Water\n\nWe dug **twelve** wells.");
        assert!(html.contains("<h1>Water</h1>"));
        assert!(html.contains("<strong>twelve</strong>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_html("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_script_links_are_neutralised() {
        let html = render_html("[x](javascript:alert(1)) and [y](JavaScript:void(0))");
        assert!(!html.to_ascii_lowercase().contains("javascript:"));
        assert!(html.contains(r##"<a href="#">x</a>"##));

        let html = render_html("[site](https://example.org) [home](/projects) [mail](mailto:a@b.org) [top](#top)");
        assert!(html.contains(r#"href="https://example.org""#));
        assert!(html.contains(r#"href="/projects""#));
        assert!(html.contains(r#"href="mailto:a@b.org""#));
        assert!(html.contains(r##"href="#top""##));
    }
}
