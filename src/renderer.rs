use std::collections::HashSet;
use std::sync::LazyLock;

use log::debug;
use maud::{html, Markup};
use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd};
use regex::Regex;

const TOC_MARKER: &str = "[TOC]";

static SLUG_STRIP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());
static SLUG_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-\s]+").unwrap());

/// Anything that can turn Markdown text into an HTML fragment.
pub(crate) trait MarkdownRenderer {
    fn render(&self, markdown: &str) -> anyhow::Result<String>;
}

/// pulldown-cmark with tables, footnotes, definition lists, heading
/// attributes and a `[TOC]` marker.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct PulldownRenderer;

impl PulldownRenderer {
    fn options() -> Options {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_DEFINITION_LIST);
        options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
        options
    }
}

impl MarkdownRenderer for PulldownRenderer {
    fn render(&self, markdown: &str) -> anyhow::Result<String> {
        let mut events: Vec<Event> = Parser::new_ext(markdown, Self::options()).collect();
        let headings = assign_heading_ids(&mut events);
        debug!("{} heading(s) found", headings.len());
        let events = replace_toc_marker(events, &headings);

        let mut body_html = String::new();
        pulldown_cmark::html::push_html(&mut body_html, events.into_iter());
        Ok(body_html)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Heading {
    level: usize,
    id: String,
    text: String,
}

struct TocEntry<'h> {
    heading: &'h Heading,
    children: Vec<TocEntry<'h>>,
}

fn slugify(text: &str) -> String {
    let stripped = SLUG_STRIP.replace_all(text, "");
    let lowered = stripped.trim().to_lowercase();
    let slug = SLUG_SEPARATORS.replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "section".to_string()
    } else {
        slug.to_string()
    }
}

fn unique_id(base: String, used: &mut HashSet<String>) -> String {
    let mut candidate = base.clone();
    let mut n = 1;
    while used.contains(&candidate) {
        candidate = format!("{base}_{n}");
        n += 1;
    }
    used.insert(candidate.clone());
    candidate
}

/// Gives every heading an `id` and returns them in document order.
fn assign_heading_ids(events: &mut [Event]) -> Vec<Heading> {
    let mut used = HashSet::new();
    for event in events.iter() {
        if let Event::Start(Tag::Heading { id: Some(id), .. }) = event {
            used.insert(id.to_string());
        }
    }

    let mut headings = vec![];
    let mut i = 0;
    while i < events.len() {
        if !matches!(events[i], Event::Start(Tag::Heading { .. })) {
            i += 1;
            continue;
        }

        let mut text = String::new();
        let mut end = i + 1;
        while end < events.len() && !matches!(events[end], Event::End(TagEnd::Heading(_))) {
            if let Event::Text(t) | Event::Code(t) = &events[end] {
                text.push_str(t);
            }
            end += 1;
        }

        if let Event::Start(Tag::Heading { level, id, .. }) = &mut events[i] {
            let anchor = match id {
                Some(explicit) => explicit.to_string(),
                None => unique_id(slugify(&text), &mut used),
            };
            *id = Some(CowStr::from(anchor.clone()));
            headings.push(Heading {
                level: *level as usize,
                id: anchor,
                text,
            });
        }
        i = end + 1;
    }
    headings
}

fn nest(flat: &[Heading]) -> Vec<TocEntry<'_>> {
    let mut entries = vec![];
    let mut i = 0;
    while i < flat.len() {
        let heading = &flat[i];
        let end = flat[i + 1..]
            .iter()
            .position(|h| h.level <= heading.level)
            .map_or(flat.len(), |p| i + 1 + p);
        entries.push(TocEntry {
            heading,
            children: nest(&flat[i + 1..end]),
        });
        i = end;
    }
    entries
}

fn render_toc_list(entries: &[TocEntry]) -> Markup {
    html! {
        ul {
            @for entry in entries {
                li {
                    a href={ "#" (entry.heading.id) } { (entry.heading.text) }
                    @if !entry.children.is_empty() {
                        (render_toc_list(&entry.children))
                    }
                }
            }
        }
    }
}

fn render_toc(headings: &[Heading]) -> String {
    html! {
        div.toc {
            (render_toc_list(&nest(headings)))
        }
    }
    .into()
}

/// Swaps a paragraph holding only `[TOC]` for the rendered table of contents.
fn replace_toc_marker<'a>(events: Vec<Event<'a>>, headings: &[Heading]) -> Vec<Event<'a>> {
    let mut out = Vec::with_capacity(events.len());
    let mut i = 0;
    while i < events.len() {
        if matches!(events[i], Event::Start(Tag::Paragraph)) {
            let close = events[i + 1..]
                .iter()
                .position(|e| matches!(e, Event::End(TagEnd::Paragraph)))
                .map(|p| i + 1 + p);
            if let Some(close) = close {
                let mut text = String::new();
                let only_text = events[i + 1..close].iter().all(|e| match e {
                    Event::Text(t) => {
                        text.push_str(t);
                        true
                    }
                    _ => false,
                });
                if only_text && text.trim() == TOC_MARKER {
                    out.push(Event::Html(CowStr::from(render_toc(headings))));
                    i = close + 1;
                    continue;
                }
            }
        }
        out.push(events[i].clone());
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(markdown: &str) -> String {
        PulldownRenderer.render(markdown).unwrap()
    }

    #[test]
    fn renders_heading_and_paragraph() {
        let html = render("# Hello\n\nThis is a short post.");
        assert!(html.contains(r#"<h1 id="hello">Hello</h1>"#), "{html}");
        assert!(html.contains("<p>This is a short post.</p>"), "{html}");
    }

    #[test]
    fn renders_extra_syntax() {
        let html = render("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"), "{html}");

        let html = render("Text[^1]\n\n[^1]: A note.\n");
        assert!(html.contains("footnote-definition"), "{html}");

        let html = render("Term\n: Definition\n");
        assert!(html.contains("<dl>"), "{html}");

        let html = render("```rust\nfn main() {}\n```\n");
        assert!(html.contains(r#"<code class="language-rust">"#), "{html}");
    }

    #[test]
    fn slugs_are_unique_and_readable() {
        assert_eq!(slugify("Getting Started!"), "getting-started");
        assert_eq!(slugify("  a -- b  "), "a-b");
        assert_eq!(slugify("旅行 日记"), "旅行-日记");
        assert_eq!(slugify("???"), "section");

        let html = render("## Intro\n\n## Intro\n\n## Intro\n");
        assert!(html.contains(r#"<h2 id="intro">"#), "{html}");
        assert!(html.contains(r#"<h2 id="intro_1">"#), "{html}");
        assert!(html.contains(r#"<h2 id="intro_2">"#), "{html}");
    }

    #[test]
    fn explicit_heading_id_is_kept() {
        let html = render("## Setup {#install}\n\n## install\n");
        assert!(html.contains(r#"<h2 id="install">"#), "{html}");
        assert!(html.contains(r#"<h2 id="install_1">install</h2>"#), "{html}");
        assert!(!html.contains("{#install}"), "{html}");
    }

    #[test]
    fn toc_marker_is_replaced_with_nested_list() {
        let html = render("[TOC]\n\n# Top\n\n## Child `code`\n\n# Next\n");
        assert!(!html.contains(TOC_MARKER), "{html}");
        assert!(html.starts_with(r##"<div class="toc"><ul><li><a href="#top">Top</a><ul><li><a href="#child-code">Child code</a></li></ul></li><li><a href="#next">Next</a></li></ul></div>"##), "{html}");
    }

    #[test]
    fn text_mentioning_marker_is_left_alone() {
        let html = render("See [TOC] above.\n\n# A\n");
        assert!(html.contains("<p>See [TOC] above.</p>"), "{html}");
        assert!(!html.contains(r#"class="toc""#), "{html}");
    }

    #[test]
    fn nesting_follows_levels() {
        let flat = vec![
            Heading { level: 2, id: "a".into(), text: "A".into() },
            Heading { level: 3, id: "b".into(), text: "B".into() },
            Heading { level: 4, id: "c".into(), text: "C".into() },
            Heading { level: 2, id: "d".into(), text: "D".into() },
        ];
        let tree = nest(&flat);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].children.len(), 1);
        assert_eq!(tree[0].children[0].children[0].heading.id, "c");
        assert!(tree[1].children.is_empty());
    }
}
