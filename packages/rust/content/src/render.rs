//! Markdown → HTML rendering for entry detail pages.

use std::sync::LazyLock;

use faky_shared::{Entry, SiteConfig};
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxReference, SyntaxSet};
use tracing::debug;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Dark theme bundled with syntect.
const CODE_THEME: &str = "base16-ocean.dark";

/// Render a markdown body to an HTML fragment.
///
/// Enables the GitHub-flavoured extensions posts rely on: tables,
/// strikethrough, footnotes, and task lists. Raw HTML passes through.
/// Fenced code blocks in a known language are syntax highlighted with
/// inline styles; anything else renders as plain `<pre><code>`.
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut events = Vec::new();
    let mut block: Option<(&'static SyntaxReference, String)> = None;

    for event in Parser::new_ext(markdown, options) {
        if let Some((syntax, mut code)) = block.take() {
            match event {
                Event::End(TagEnd::CodeBlock) => events.push(highlight_block(&code, syntax)),
                Event::Text(text) => {
                    code.push_str(&text);
                    block = Some((syntax, code));
                }
                _ => block = Some((syntax, code)),
            }
            continue;
        }

        if let Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(lang))) = &event {
            if let Some(syntax) = syntax_for(lang) {
                block = Some((syntax, String::new()));
                continue;
            }
        }
        events.push(event);
    }

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());
    out
}

/// Syntax for a fence info string such as `rust` or `rust,ignore`.
fn syntax_for(info: &str) -> Option<&'static SyntaxReference> {
    let token = info
        .split(|c: char| c == ',' || c.is_whitespace())
        .next()
        .filter(|t| !t.is_empty())?;
    SYNTAX_SET.find_syntax_by_token(token)
}

fn highlight_block(code: &str, syntax: &SyntaxReference) -> Event<'static> {
    let highlighted = THEME_SET
        .themes
        .get(CODE_THEME)
        .map(|theme| highlighted_html_for_string(code, &SYNTAX_SET, syntax, theme));

    match highlighted {
        Some(Ok(html)) => Event::Html(html.into()),
        Some(Err(e)) => {
            debug!(syntax = %syntax.name, error = %e, "highlighting failed, rendering plain");
            plain_block(code)
        }
        None => plain_block(code),
    }
}

fn plain_block(code: &str) -> Event<'static> {
    Event::Html(format!("<pre><code>{}</code></pre>\n", escape_html(code)).into())
}

/// Render a complete HTML page for one entry.
pub fn render_document(entry: &Entry, site: &SiteConfig) -> String {
    let meta = &entry.meta;
    let tags: String = meta
        .tags
        .iter()
        .map(|tag| format!("<span class=\"tag\">{}</span>", escape_html(tag)))
        .collect();

    let header = format!(
        "<header>\n<div class=\"tags\">{tags}</div>\n<h1>{title}</h1>\n<p class=\"description\">{description}</p>\n<p class=\"byline\"><time datetime=\"{date_attr}\">{date}</time> • <span>{reading}</span></p>\n</header>",
        title = escape_html(&meta.title),
        description = escape_html(&meta.description),
        date_attr = escape_html(&meta.date),
        date = escape_html(&meta.display_date()),
        reading = escape_html(&meta.reading_time),
    );

    let body = format!(
        "<a class=\"back\" href=\"{base}\">← Back to all posts</a>\n<article>\n{header}\n<div class=\"prose\">\n{content}</div>\n</article>\n<footer><a href=\"{base}\">← More write-ups</a></footer>",
        base = escape_html(&site.base_path),
        content = to_html(&entry.body),
    );

    page(
        &format!("{} | {}", meta.title, site.title),
        &meta.description,
        &body,
    )
}

/// Page served when an identifier does not resolve.
pub fn not_found_page(site: &SiteConfig) -> String {
    let body = format!(
        "<article>\n<h1>Post Not Found</h1>\n<p>The write-up you are looking for does not exist.</p>\n<a href=\"{}\">← Back to all posts</a>\n</article>",
        escape_html(&site.base_path)
    );
    page(&format!("Post Not Found | {}", site.title), "", &body)
}

fn page(title: &str, description: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<title>{}</title>\n<meta name=\"description\" content=\"{}\">\n</head>\n<body>\n<main>\n{body}\n</main>\n</body>\n</html>\n",
        escape_html(title),
        escape_html(description),
    )
}

/// Escape text for HTML element content and double-quoted attributes.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use faky_shared::EntryMeta;

    fn entry(title: &str, body: &str) -> Entry {
        Entry {
            meta: EntryMeta {
                identifier: "post".into(),
                title: title.into(),
                description: "About \"things\"".into(),
                date: "2024-01-01".into(),
                tags: vec!["rust".into(), "<net>".into()],
                published: true,
                draft: false,
                reading_time: "1 min read".into(),
            },
            body: body.into(),
        }
    }

    #[test]
    fn renders_common_markdown() {
        let html = to_html("# Title\n\nSome *emphasis* and `code`.\n\n- one\n- two\n");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>emphasis</em>"));
        assert!(html.contains("<code>code</code>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn renders_tables_and_strikethrough() {
        let html = to_html("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn highlights_known_languages() {
        let html = to_html("```rust\nfn main() { let a = 1 < 2; }\n```\n");
        assert!(html.contains("<pre style=\"background-color:"));
        assert!(html.contains("<span style=\"color:"));
        assert!(html.contains("main"));
        assert!(html.contains("&lt;"));
        assert!(!html.contains("language-rust"));
    }

    #[test]
    fn fence_info_extras_are_ignored() {
        let html = to_html("```rust,ignore\nfn main() {}\n```\n");
        assert!(html.contains("<span style=\"color:"));
    }

    #[test]
    fn unknown_languages_render_plain() {
        let html = to_html("```nosuchlang\nx < y\n```\n");
        assert!(html.contains("class=\"language-nosuchlang\""));
        assert!(html.contains("x &lt; y"));
        assert!(!html.contains("<span style="));

        let html = to_html("    indented\n");
        assert!(html.contains("<pre><code>indented"));
    }

    #[test]
    fn document_carries_page_metadata() {
        let page = render_document(&entry("Hello & Bye", "Body **bold**"), &SiteConfig::default());
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Hello &amp; Bye | Faky</title>"));
        assert!(page.contains("content=\"About &quot;things&quot;\""));
        assert!(page.contains("January 1, 2024"));
        assert!(page.contains("1 min read"));
        assert!(page.contains("&lt;net&gt;"));
        assert!(page.contains("<strong>bold</strong>"));
        assert!(page.contains("href=\"/blog\""));
    }

    #[test]
    fn not_found_page_has_title() {
        let page = not_found_page(&SiteConfig::default());
        assert!(page.contains("<title>Post Not Found | Faky</title>"));
    }
}
