//! Minimal HTML tree that serializes to an exact string.
//!
//! Text is written as-is; nothing is escaped.

use crate::error::{Error, Result};

/// Insertion-ordered attribute list.
///
/// Serialization follows insertion order. Equality does not: two lists
/// holding the same key/value pairs are equal regardless of order.
#[derive(Debug, Clone, Default)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing an existing value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Value stored for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Key/value pairs in insertion order, as they will be serialized.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as ` key="value"` pairs, each with a leading space.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.iter() {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        out
    }
}

impl PartialEq for Attributes {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for Attributes {}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (key, value) in iter {
            attrs.insert(key, value);
        }
        attrs
    }
}

/// Terminal node: a tag around a text value, or bare text when `tag` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: String,
    pub attributes: Attributes,
}

/// Container node. Must have a tag and at least one child to serialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: String,
    pub children: Vec<HtmlNode>,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    pub fn leaf(tag: &str, value: impl Into<String>) -> Self {
        HtmlNode::Leaf(LeafNode {
            tag: Some(tag.to_string()),
            value: value.into(),
            attributes: Attributes::new(),
        })
    }

    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf(LeafNode {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        })
    }

    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent(ParentNode {
            tag: tag.to_string(),
            children,
            attributes: Attributes::new(),
        })
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes_mut().insert(key, value);
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => Some(&parent.tag),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf(leaf) => &leaf.attributes,
            HtmlNode::Parent(parent) => &parent.attributes,
        }
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        match self {
            HtmlNode::Leaf(leaf) => &mut leaf.attributes,
            HtmlNode::Parent(parent) => &mut parent.attributes,
        }
    }

    /// Serialize the tree to an HTML string.
    ///
    /// Fails with [`Error::Structural`] if any parent node has an empty tag
    /// or no children.
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<()> {
        match self {
            HtmlNode::Leaf(leaf) => match &leaf.tag {
                Some(tag) => {
                    open_tag(tag, &leaf.attributes, out);
                    out.push_str(&leaf.value);
                    close_tag(tag, out);
                }
                None => out.push_str(&leaf.value),
            },
            HtmlNode::Parent(parent) => {
                if parent.tag.is_empty() {
                    return Err(Error::Structural("parent node does not have a tag".into()));
                }
                if parent.children.is_empty() {
                    return Err(Error::Structural(format!(
                        "parent node <{}> does not have children",
                        parent.tag
                    )));
                }
                open_tag(&parent.tag, &parent.attributes, out);
                for child in &parent.children {
                    child.write_html(out)?;
                }
                close_tag(&parent.tag, out);
            }
        }
        Ok(())
    }

    /// Concatenated leaf values in document order, with all markup dropped.
    pub fn to_raw_text(&self) -> String {
        let mut out = String::new();
        self.write_raw_text(&mut out);
        out
    }

    fn write_raw_text(&self, out: &mut String) {
        match self {
            HtmlNode::Leaf(leaf) => out.push_str(&leaf.value),
            HtmlNode::Parent(parent) => {
                for child in &parent.children {
                    child.write_raw_text(out);
                }
            }
        }
    }
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push_str(&attributes.to_html());
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
