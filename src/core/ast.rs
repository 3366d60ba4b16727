use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Kind of an inline text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl TextKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TextKind::Plain => "plain",
            TextKind::Bold => "bold",
            TextKind::Italic => "italic",
            TextKind::Code => "code",
            TextKind::Link => "link",
            TextKind::Image => "image",
        }
    }
}

impl fmt::Display for TextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" | "text" => Ok(TextKind::Plain),
            "bold" => Ok(TextKind::Bold),
            "italic" => Ok(TextKind::Italic),
            "code" => Ok(TextKind::Code),
            "link" => Ok(TextKind::Link),
            "image" => Ok(TextKind::Image),
            other => Err(Error::UnsupportedTextKind(other.to_string())),
        }
    }
}

/// An inline run of text with a single kind.
///
/// `url` is only meaningful for [`TextKind::Link`] and [`TextKind::Image`].
/// Nothing is validated here; producers keep the combination sensible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    pub text: String,
    pub kind: TextKind,
    pub url: Option<String>,
}

impl TextNode {
    pub fn new(text: impl Into<String>, kind: TextKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn with_url(text: impl Into<String>, kind: TextKind, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            url: Some(url.into()),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextKind::Plain)
    }

    pub fn is_plain(&self) -> bool {
        self.kind == TextKind::Plain
    }
}

/// Structural kind of a document block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// ATX heading, level 1 to 6.
    Heading(u8),
    /// Fenced code; `language` is the info string of the opening fence.
    Code { language: Option<String> },
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

/// A classified block with its marker-stripped text.
///
/// List blocks keep one item per line in `text`; every other kind holds
/// text ready for inline splitting (or verbatim code).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
}

impl Block {
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentAst {
    pub blocks: Vec<Block>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq() {
        let node = TextNode::new("This is a text node", TextKind::Bold);
        let node2 = TextNode::new("This is a text node", TextKind::Bold);
        assert_eq!(node, node2);
    }

    #[test]
    fn test_different_text() {
        let node = TextNode::new("This is a text node", TextKind::Bold);
        let node2 = TextNode::new("This is a different text node", TextKind::Bold);
        assert_ne!(node, node2);
    }

    #[test]
    fn test_different_kind() {
        let node = TextNode::new("This is a text node", TextKind::Bold);
        let node2 = TextNode::new("This is a text node", TextKind::Italic);
        assert_ne!(node, node2);
    }

    #[test]
    fn test_link_with_and_without_url_differ() {
        let without_url = TextNode::new("Link text", TextKind::Link);
        let with_url = TextNode::with_url("Link text", TextKind::Link, "https://www.example.com");
        assert_ne!(without_url, with_url);
    }

    #[test]
    fn test_url_defaults_to_none() {
        let node = TextNode::plain("Text");
        assert_eq!(node.url, None);
        assert!(node.is_plain());
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("bold".parse::<TextKind>().unwrap(), TextKind::Bold);
        assert_eq!("text".parse::<TextKind>().unwrap(), TextKind::Plain);

        let err = "not_a_valid_type".parse::<TextKind>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedTextKind(ref name) if name == "not_a_valid_type"));
    }
}
