//! TextNode to HtmlNode mapping.

use crate::core::ast::{TextKind, TextNode};
use crate::core::html::{HtmlNode, Props};
use crate::{Error, Result};

/// Maps one inline text node to its HTML representation.
///
/// Links and images must carry a URL.
pub fn text_node_to_html_node(node: &TextNode) -> Result<HtmlNode> {
    let html = match node.kind {
        TextKind::Plain => HtmlNode::text(node.text.as_str()),
        TextKind::Bold => HtmlNode::leaf("b", node.text.as_str()),
        TextKind::Italic => HtmlNode::leaf("i", node.text.as_str()),
        TextKind::Code => HtmlNode::leaf("code", node.text.as_str()),
        TextKind::Link => {
            let mut props = Props::new();
            props.insert("href", required_url(node)?);
            HtmlNode::leaf("a", node.text.as_str()).with_props(props)
        }
        TextKind::Image => {
            let mut props = Props::new();
            props.insert("src", required_url(node)?);
            props.insert("alt", node.text.as_str());
            HtmlNode::leaf("img", "").with_props(props)
        }
    };
    Ok(html)
}

fn required_url(node: &TextNode) -> Result<&str> {
    node.url.as_deref().ok_or_else(|| Error::MissingUrl {
        kind: node.kind.to_string(),
        text: node.text.clone(),
    })
}
