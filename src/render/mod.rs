mod html;

use crate::core::html::HtmlNode;
use crate::Result;

pub use html::{props_to_html, HtmlRenderer};

pub trait Renderer {
    fn render(&self, node: &HtmlNode) -> Result<String>;
}
