use crate::core::html::{HtmlNode, LeafNode, ParentNode, Props};
use crate::render::Renderer;
use crate::{Error, Result};

/// Serializes an [`HtmlNode`] tree to markup, validating nodes on the way.
///
/// Values and attribute values are written as-is; no escaping happens here.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, node: &HtmlNode) -> Result<String> {
        let mut out = String::new();
        render_into(node, &mut out)?;
        Ok(out)
    }
}

/// Serializes props as ` name="value"` pairs in insertion order.
pub fn props_to_html(props: &Props) -> String {
    let mut out = String::new();
    write_props(props, &mut out);
    out
}

fn write_props(props: &Props, out: &mut String) {
    for (name, value) in props.iter() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}

fn render_into(node: &HtmlNode, out: &mut String) -> Result<()> {
    match node {
        HtmlNode::Leaf(leaf) => render_leaf(leaf, out),
        HtmlNode::Parent(parent) => render_parent(parent, out),
    }
}

fn render_leaf(leaf: &LeafNode, out: &mut String) -> Result<()> {
    let value = leaf.value.as_deref().ok_or_else(|| Error::MissingLeafValue {
        tag: leaf.tag.clone(),
    })?;
    let Some(tag) = leaf.tag.as_deref() else {
        out.push_str(value);
        return Ok(());
    };

    out.push('<');
    out.push_str(tag);
    write_props(&leaf.props, out);
    out.push('>');
    out.push_str(value);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    Ok(())
}

fn render_parent(parent: &ParentNode, out: &mut String) -> Result<()> {
    let tag = parent.tag.as_deref().ok_or(Error::MissingParentTag)?;
    let children = parent
        .children
        .as_deref()
        .ok_or_else(|| Error::MissingChildren {
            tag: tag.to_string(),
        })?;

    out.push('<');
    out.push_str(tag);
    write_props(&parent.props, out);
    out.push('>');
    for child in children {
        render_into(child, out)?;
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    Ok(())
}
