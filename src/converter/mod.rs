//! Converter modules for Markdown to HTML transformation.

mod block;
mod inline;
mod text;

use crate::adapters::markdown::{AstExtractor, MarkdownExtractor};
use crate::core::html::HtmlNode;
use crate::{ConvertOptions, Result};

pub use self::block::BlockConverter;
pub use self::inline::{
    extract_markdown_images, extract_markdown_links, split_nodes_delimiter, split_nodes_image,
    split_nodes_link, text_to_text_nodes, INLINE_DELIMITERS,
};
pub use self::text::text_node_to_html_node;

/// Main converter struct that orchestrates Markdown to HTML conversion.
#[derive(Debug, Clone, Default)]
pub struct MarkdownToHtml {
    options: ConvertOptions,
}

impl MarkdownToHtml {
    /// Creates a new converter with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Creates a new converter with default options.
    pub fn with_defaults() -> Self {
        Self::new(ConvertOptions::default())
    }

    /// Converts a Markdown document to an HTML node tree.
    ///
    /// The returned root is a parent node tagged with
    /// [`ConvertOptions::root_tag`] holding one child per block. Any error
    /// aborts the whole document.
    pub fn convert(&self, markdown: &str) -> Result<HtmlNode> {
        let document = MarkdownExtractor.extract(markdown)?;

        let children = document
            .blocks
            .iter()
            .map(BlockConverter::convert)
            .collect::<Result<Vec<_>>>()?;

        Ok(HtmlNode::parent(self.options.root_tag.as_str(), children))
    }

    /// Converts a Markdown document straight to an HTML string.
    pub fn convert_to_string(&self, markdown: &str) -> Result<String> {
        self.convert(markdown)?.to_html()
    }
}

/// Converts a Markdown document with default options.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode> {
    MarkdownToHtml::with_defaults().convert(markdown)
}
