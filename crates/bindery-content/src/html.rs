//! Markdown-to-HTML rendering and the published page template.
//!
//! Every published page (content pages and the index) is a standalone HTML
//! document: the rendered markdown body wrapped in a fixed template with the
//! workshop stylesheet inlined. Headings get `id` attributes derived from
//! their text so table-of-contents links resolve.

use bindery_core::heading_anchor;
use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};

/// Render markdown content to an HTML fragment.
///
/// Tables, strikethrough, and footnotes are enabled. Headings without an
/// explicit id get one computed from their text via
/// [`bindery_core::heading_anchor`]. Raw HTML in the source (resource
/// buttons, slide embeds) passes through untouched.
///
/// # Example
///
/// ```rust
/// use bindery_content::html::markdown_to_html;
///
/// let html = markdown_to_html("## Getting Started\n\nHello.");
/// assert!(html.contains(r#"<h2 id="getting-started">Getting Started</h2>"#));
/// ```
pub fn markdown_to_html(content: &str) -> String {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let events: Vec<Event<'_>> = Parser::new_ext(content, options).collect();
    let events = assign_heading_ids(events);

    let mut out = String::with_capacity(content.len() * 2);
    html::push_html(&mut out, events.into_iter());
    out
}

/// Wrap a markdown body in the full page template.
///
/// The template inlines the workshop stylesheet, so published pages are
/// self-contained files with no external CSS dependency.
pub fn render_page(title: &str, markdown: &str) -> String {
    let body = markdown_to_html(markdown);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>{PAGE_STYLE}</style>
</head>
<body>
{body}
</body>
</html>"#
    )
}

/// Give every heading without an explicit id one derived from its text.
fn assign_heading_ids(mut events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let mut i = 0;
    while i < events.len() {
        let needs_id = matches!(
            &events[i],
            Event::Start(Tag::Heading { id: None, .. })
        );
        if needs_id {
            // Gather the heading's text up to its end tag
            let mut text = String::new();
            let mut j = i + 1;
            while j < events.len() {
                match &events[j] {
                    Event::End(TagEnd::Heading(_)) => break,
                    Event::Text(t) | Event::Code(t) => text.push_str(t),
                    Event::SoftBreak | Event::HardBreak => text.push(' '),
                    _ => {}
                }
                j += 1;
            }

            let anchor = heading_anchor(&text);
            if !anchor.is_empty() {
                if let Event::Start(Tag::Heading { id, .. }) = &mut events[i] {
                    *id = Some(CowStr::from(anchor));
                }
            }
        }
        i += 1;
    }
    events
}

/// Stylesheet inlined into every published page.
const PAGE_STYLE: &str = r#"
        body {
            max-width: 800px;
            margin: 40px auto;
            padding: 0 20px;
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            font-size: 16px;
            padding-bottom: 5em;
        }
        h1, h3, h4 { margin-top: 2em; }
        h2 {
            position: sticky;
            top: 0;
            background: white;
            padding-top: 2em;
            padding-bottom: 0.5em;
            z-index: 100;
            border-bottom: 2px solid #eee;
        }
        h2:first-of-type {
            margin-top: 1em;
            padding-top: 1em;
        }
        h3 a {
            text-decoration: none;
        }
        h3 a:hover {
            text-decoration: underline;
        }
        p {
            margin: 1em 0;
        }
        code {
            background: #f4f4f4;
            padding: 2px 4px;
            border-radius: 3px;
            font-family: Consolas, Monaco, monospace;
        }
        pre {
            background: #f4f4f4;
            padding: 1em;
            border-radius: 5px;
            overflow-x: auto;
        }
        pre code { background: none; padding: 0; }
        a { color: #0066cc; }
        img {
            display: block;
            max-width: 80%;
            height: auto;
            margin: 1em auto;
            border: solid 1px #999;
        }
        blockquote {
            border-left: solid lightblue 20px;
            margin-left: 4em;
            padding-left: 1em;
            color: #999;
        }
        video {
            display: block;
            max-width: 80%;
            height: auto;
            margin: 1em auto;
            border: solid 1px #999;
        }
        .download-box {
            background: #e8f4f8;
            padding: 1em;
            border-radius: 5px;
            margin: 1em 0;
        }
        ul {
            list-style-type: disc;
            padding-left: 2em;
            margin: 0.5em 0;
        }
        li {
            margin: 0.3em 0;
        }
        .section-header {
            margin-top: 2em;
            margin-bottom: 1em;
            padding-bottom: 0.5em;
            border-bottom: 2px solid #eee;
        }
        .resource-buttons {
            margin: 1em 0;
            display: flex;
            flex-wrap: wrap;
            gap: 0.5em;
        }
        .resource-button {
            display: inline-block;
            padding: 0.4em 0.8em;
            background: #f0f0f0;
            border: 1px solid #ddd;
            border-radius: 4px;
            text-decoration: none;
            color: #333;
            font-size: 0.9em;
            transition: all 0.2s;
        }
        .resource-button:hover {
            background: #e0e0e0;
            border-color: #ccc;
        }
        .resource-button.primary {
            background: #e3f2fd;
            color: #1565c0;
            border-color: #90caf9;
        }
        .resource-button.primary:hover {
            background: #bbdefb;
            border-color: #64b5f6;
        }
        .resource-button.completed {
            background: #e8f5e9;
            color: #2e7d32;
            border-color: #a5d6a7;
        }
        .resource-button.completed:hover {
            background: #c8e6c9;
            border-color: #81c784;
        }
        .data-download {
            margin: 0.5em 0;
            font-size: 0.9em;
        }
        .download-links {
            margin: 0.5em 0;
            line-height: 1.8;
        }
        .download-links a {
            color: #1976d2;
            text-decoration: none;
        }
        .download-links a:hover {
            text-decoration: underline;
        }
"#;

// ============================================================================
// Tests
// ============================================================================
