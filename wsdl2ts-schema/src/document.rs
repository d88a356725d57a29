//! Loosely-typed XML document tree.
//!
//! The normalizer reads the schema on demand from this tree instead of a
//! rigid typed model: every element keeps its qualified name, its attribute
//! bag in document order and its child elements in document order. Text
//! content is not retained since no schema construct the normalizer reads
//! depends on it.

use crate::error::ParseError;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// An XML element with its attributes and child elements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlNode {
    /// Qualified tag name, e.g. `xsd:complexType`.
    pub name: String,
    /// Attributes in document order, values unescaped.
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order.
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    /// Creates an element without attributes or children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds an attribute.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Adds a child element.
    #[must_use]
    pub fn with_child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    /// Returns the tag name without its namespace prefix.
    #[must_use]
    pub fn local_name(&self) -> &str {
        local_part(&self.name)
    }

    /// Looks up an attribute value by its exact key.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over child elements whose local name is `local`.
    pub fn children_named<'a>(&'a self, local: &'a str) -> impl Iterator<Item = &'a XmlNode> {
        self.children
            .iter()
            .filter(move |child| child.local_name() == local)
    }

    /// Returns the first child element whose local name is `local`.
    #[must_use]
    pub fn first_child(&self, local: &str) -> Option<&XmlNode> {
        self.children.iter().find(|child| child.local_name() == local)
    }

    /// Follows a path of local names, taking the first match at each step.
    #[must_use]
    pub fn descend(&self, path: &[&str]) -> Option<&XmlNode> {
        path.iter()
            .try_fold(self, |node, segment| node.first_child(segment))
    }
}

/// Strips the namespace prefix from a qualified name.
#[must_use]
pub fn local_part(qualified: &str) -> &str {
    qualified
        .rsplit_once(':')
        .map_or(qualified, |(_, local)| local)
}

/// Parses XML text into a document tree and returns its root element.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed or has no single root element.
pub fn parse_document(xml: &str) -> Result<XmlNode, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                stack.push(node_from_start(e)?);
            }
            Ok(Event::Empty(ref e)) => {
                let node = node_from_start(e)?;
                attach(&mut stack, &mut root, node)?;
            }
            Ok(Event::End(_)) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| ParseError::invalid_structure("unexpected closing tag"))?;
                attach(&mut stack, &mut root, node)?;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(ParseError::invalid_structure(format!(
            "element '{}' is never closed",
            open.name
        )));
    }

    root.ok_or_else(|| ParseError::invalid_structure("no root element found"))
}

/// Builds a childless node from a start (or empty) tag.
fn node_from_start(e: &BytesStart<'_>) -> Result<XmlNode, ParseError> {
    let mut node = XmlNode::new(std::str::from_utf8(e.name().as_ref())?);

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let raw = std::str::from_utf8(&attr.value)?;
        let value = quick_xml::escape::unescape(raw)?;
        node.attributes.push((key.to_string(), value.into_owned()));
    }

    Ok(node)
}

/// Appends a finished node to its parent, or installs it as the root.
fn attach(
    stack: &mut [XmlNode],
    root: &mut Option<XmlNode>,
    node: XmlNode,
) -> Result<(), ParseError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None if root.is_some() => {
            return Err(ParseError::invalid_structure(format!(
                "second root element '{}'",
                node.name
            )));
        }
        None => *root = Some(node),
    }
    Ok(())
}
