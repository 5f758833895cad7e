//! Description markup sanitizer
//!
//! Walks an HTML fragment and re-emits only its text and a caller-chosen set
//! of bare formatting tags. Attributes never survive.

use scraper::node::Node;
use scraper::{ElementRef, Html};

/// Elements dropped together with everything inside them
const REMOVE_CONTENTS: &[&str] = &[
    "iframe",
    "math",
    "noembed",
    "noframes",
    "noscript",
    "plaintext",
    "script",
    "style",
    "svg",
    "template",
    "xmp",
];

/// Block-level elements whose removal would glue neighbouring words together
const WHITESPACE_ELEMENTS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "br",
    "dd",
    "div",
    "dl",
    "dt",
    "footer",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hgroup",
    "hr",
    "li",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "ul",
];

const VOID_ELEMENTS: &[&str] = &["br", "hr", "wbr"];

/// Sanitize an HTML fragment, keeping only text and tags named in `allowed_tags`.
pub fn sanitize_fragment<S: AsRef<str>>(markup: &str, allowed_tags: &[S]) -> String {
    let fragment = Html::parse_fragment(markup);
    let mut out = String::with_capacity(markup.len());

    write_children(fragment.root_element(), allowed_tags, &mut out);

    out
}

fn write_children<S: AsRef<str>>(element: ElementRef<'_>, allowed_tags: &[S], out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => push_escaped(text, out),
            Node::Element(el) => {
                let name = el.name();
                if REMOVE_CONTENTS.contains(&name) {
                    continue;
                }

                let allowed = allowed_tags.iter().any(|tag| tag.as_ref() == name);
                let spaced = !allowed && WHITESPACE_ELEMENTS.contains(&name);

                if spaced {
                    out.push(' ');
                }
                if allowed {
                    out.push('<');
                    out.push_str(name);
                    out.push('>');
                }

                if let Some(child_el) = ElementRef::wrap(child) {
                    write_children(child_el, allowed_tags, out);
                }

                if allowed && !VOID_ELEMENTS.contains(&name) {
                    out.push_str("</");
                    out.push_str(name);
                    out.push('>');
                }
                if spaced && name != "br" {
                    out.push(' ');
                }
            }
            // Comments and processing instructions
            _ => {}
        }
    }
}

fn push_escaped(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}
