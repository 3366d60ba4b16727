//! Inline splitter - promotes delimited runs, links and images out of plain text.

use crate::core::ast::{TextKind, TextNode};
use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Delimiters applied by [`text_to_text_nodes`], in application order.
///
/// Code spans go first so that bold/italic markers inside them stay inert,
/// and `**` must run before `*`.
pub const INLINE_DELIMITERS: [(&str, TextKind); 3] = [
    ("`", TextKind::Code),
    ("**", TextKind::Bold),
    ("*", TextKind::Italic),
];

static IMAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").expect("valid image pattern"));

static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").expect("valid link pattern"));

/// Splits a single string into typed text nodes.
///
/// Images are extracted before links, since `[text](url)` also matches the
/// tail of every `![alt](url)`.
pub fn text_to_text_nodes(text: &str) -> Result<Vec<TextNode>> {
    let mut nodes = vec![TextNode::plain(text)];
    nodes = split_nodes_image(nodes);
    nodes = split_nodes_link(nodes);
    for (delimiter, kind) in INLINE_DELIMITERS {
        nodes = split_nodes_delimiter(nodes, delimiter, kind)?;
    }
    Ok(nodes)
}

/// Splits every plain node on `delimiter`, turning enclosed runs into `kind`.
///
/// Non-plain nodes pass through untouched. An odd number of delimiters in a
/// node is an error.
pub fn split_nodes_delimiter(
    nodes: Vec<TextNode>,
    delimiter: &str,
    kind: TextKind,
) -> Result<Vec<TextNode>> {
    if delimiter.is_empty() {
        return Ok(nodes);
    }

    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if !node.is_plain() {
            out.push(node);
            continue;
        }

        let sections: Vec<&str> = node.text.split(delimiter).collect();
        if sections.len() % 2 == 0 {
            return Err(Error::UnterminatedDelimiter {
                delimiter: delimiter.to_string(),
                fragment: node.text,
            });
        }

        for (i, section) in sections.into_iter().enumerate() {
            if section.is_empty() {
                continue;
            }
            let section_kind = if i % 2 == 0 { TextKind::Plain } else { kind };
            out.push(TextNode::new(section, section_kind));
        }
    }
    Ok(out)
}

/// Extracts `![alt](url)` images from plain nodes.
pub fn split_nodes_image(nodes: Vec<TextNode>) -> Vec<TextNode> {
    split_nodes_matching(nodes, &IMAGE_PATTERN, TextKind::Image)
}

/// Extracts `[text](url)` links from plain nodes.
pub fn split_nodes_link(nodes: Vec<TextNode>) -> Vec<TextNode> {
    split_nodes_matching(nodes, &LINK_PATTERN, TextKind::Link)
}

/// Returns `(alt, url)` pairs for every image in `text`.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    extract_pairs(text, &IMAGE_PATTERN)
}

/// Returns `(text, url)` pairs for every link in `text`, images excluded.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    split_nodes_image(vec![TextNode::plain(text)])
        .into_iter()
        .filter(TextNode::is_plain)
        .flat_map(|node| extract_pairs(&node.text, &LINK_PATTERN))
        .collect()
}

fn extract_pairs(text: &str, pattern: &Regex) -> Vec<(String, String)> {
    pattern
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

fn split_nodes_matching(nodes: Vec<TextNode>, pattern: &Regex, kind: TextKind) -> Vec<TextNode> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if !node.is_plain() {
            out.push(node);
            continue;
        }

        let text = node.text.as_str();
        let mut last = 0;
        for caps in pattern.captures_iter(text) {
            let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            push_plain(&mut out, &text[last..whole.start()]);
            out.push(TextNode::with_url(label.as_str(), kind, url.as_str()));
            last = whole.end();
        }
        push_plain(&mut out, &text[last..]);
    }
    out
}

fn push_plain(out: &mut Vec<TextNode>, text: &str) {
    if !text.is_empty() {
        out.push(TextNode::plain(text));
    }
}
