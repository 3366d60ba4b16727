//! HTML node tree produced by the compiler.
//!
//! Nodes may be built in states that cannot be rendered (a tagged leaf with
//! no value, a parent with no tag or no children list). Those states are
//! only rejected by [`HtmlNode::to_html`], so trees can be assembled and
//! inspected freely beforehand.

use crate::render::{HtmlRenderer, Renderer};
use crate::Result;

/// Ordered attribute list. Insertion order is kept for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Props(Vec<(String, String)>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`. An existing name keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (name, value) in iter {
            props.insert(name, value);
        }
        props
    }
}

/// Raw text, or an element with no element children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub props: Props,
}

/// An element owning an ordered list of child nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Option<Vec<HtmlNode>>,
    pub props: Props,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    /// Untagged leaf: renders as `value` verbatim.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf(LeafNode {
            tag: None,
            value: Some(value.into()),
            props: Props::new(),
        })
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf(LeafNode {
            tag: Some(tag.into()),
            value: Some(value.into()),
            props: Props::new(),
        })
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent(ParentNode {
            tag: Some(tag.into()),
            children: Some(children),
            props: Props::new(),
        })
    }

    /// Replaces the node's props.
    pub fn with_props(mut self, props: Props) -> Self {
        *self.props_mut() = props;
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }

    pub fn props(&self) -> &Props {
        match self {
            HtmlNode::Leaf(leaf) => &leaf.props,
            HtmlNode::Parent(parent) => &parent.props,
        }
    }

    pub fn props_mut(&mut self) -> &mut Props {
        match self {
            HtmlNode::Leaf(leaf) => &mut leaf.props,
            HtmlNode::Parent(parent) => &mut parent.props,
        }
    }

    /// Leaf value, `None` for parents.
    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.value.as_deref(),
            HtmlNode::Parent(_) => None,
        }
    }

    /// Parent children, empty for leaves.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Parent(ParentNode {
                children: Some(children),
                ..
            }) => children,
            _ => &[],
        }
    }

    pub fn to_html(&self) -> Result<String> {
        HtmlRenderer.render(self)
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}
