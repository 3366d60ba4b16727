//! Block converter - compiles classified blocks into HTML subtrees.

use super::inline::text_to_text_nodes;
use super::text::text_node_to_html_node;
use crate::core::ast::{Block, BlockKind};
use crate::core::html::{HtmlNode, Props};
use crate::Result;

/// Converter for classified document blocks.
pub struct BlockConverter;

impl BlockConverter {
    /// Converts a block to a single HTML node.
    pub fn convert(block: &Block) -> Result<HtmlNode> {
        let node = match &block.kind {
            BlockKind::Heading(level) => {
                HtmlNode::parent(format!("h{level}"), Self::inline_children(&block.text)?)
            }
            BlockKind::Code { language } => Self::convert_code(&block.text, language.as_deref()),
            BlockKind::Quote => {
                HtmlNode::parent("blockquote", Self::inline_children(&block.text)?)
            }
            BlockKind::UnorderedList => HtmlNode::parent("ul", Self::list_items(&block.text)?),
            BlockKind::OrderedList => HtmlNode::parent("ol", Self::list_items(&block.text)?),
            BlockKind::Paragraph => HtmlNode::parent("p", Self::inline_children(&block.text)?),
        };
        Ok(node)
    }

    /// Runs the inline splitter over `text` and maps the result to HTML nodes.
    pub fn inline_children(text: &str) -> Result<Vec<HtmlNode>> {
        text_to_text_nodes(text)?
            .iter()
            .map(text_node_to_html_node)
            .collect()
    }

    // Code contents are kept verbatim; no inline splitting.
    fn convert_code(text: &str, language: Option<&str>) -> HtmlNode {
        let mut code = HtmlNode::parent("code", vec![HtmlNode::text(text)]);
        if let Some(language) = language {
            let mut props = Props::new();
            props.insert("class", format!("language-{language}"));
            code = code.with_props(props);
        }
        HtmlNode::parent("pre", vec![code])
    }

    fn list_items(text: &str) -> Result<Vec<HtmlNode>> {
        text.lines()
            .map(|item| {
                Self::inline_children(item).map(|children| HtmlNode::parent("li", children))
            })
            .collect()
    }
}
