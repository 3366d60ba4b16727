//! # md2html
//!
//! Markdown to HTML converter and small static site generator.
//!
//! ## Example
//!
//! ```
//! use md2html::{ConvertOptions, MarkdownToHtml};
//!
//! let converter = MarkdownToHtml::new(ConvertOptions::default());
//! let html = converter.convert_to_string("# Title\n\nSome **bold** text").unwrap();
//! assert_eq!(html, "<div><h1>Title</h1><p>Some <b>bold</b> text</p></div>");
//! ```

pub mod adapters;
pub mod converter;
pub mod core;
pub mod error;
pub mod render;
pub mod site;

pub use converter::{markdown_to_html_node, MarkdownToHtml};
pub use crate::core::ast::{Block, BlockKind, TextKind, TextNode};
pub use crate::core::html::{HtmlNode, LeafNode, ParentNode, Props};
pub use error::{Error, Result};
pub use site::SiteConfig;

/// Options for Markdown to HTML conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Tag of the container element wrapping the whole document.
    pub root_tag: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            root_tag: "div".to_string(),
        }
    }
}
