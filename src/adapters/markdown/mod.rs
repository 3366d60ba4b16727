mod extractor;

use crate::core::ast::DocumentAst;
use crate::Result;

pub trait AstExtractor {
    fn extract(&self, source: &str) -> Result<DocumentAst>;
}

pub use extractor::{classify_block, markdown_to_blocks, MarkdownExtractor};
