//! Read-only attribute tree
//!
//! The client never parses markup itself. Service documents, property
//! definitions and property sets reach it as [`Element`] trees produced by an
//! XML collaborator (or built directly, as the tests do). This module only
//! offers navigation by qualified name.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One element of a parsed document
///
/// # Examples
///
/// ```
/// use cmis_client::domain::tree::Element;
/// use cmis_client::domain::namespaces::CMIS_CORE;
///
/// let info = Element::new(CMIS_CORE, "repositoryInfo")
///     .with_child(Element::leaf(CMIS_CORE, "repositoryId", "A1"));
///
/// assert_eq!(info.child(CMIS_CORE, "repositoryId").map(|e| e.text()), Some("A1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Element {
    /// Namespace URI (`None` for unqualified elements)
    #[serde(default)]
    pub namespace: Option<String>,

    /// Local name
    pub name: String,

    /// Attributes keyed by local name
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,

    /// Concatenated text content of this element
    #[serde(default)]
    pub text: String,

    /// Child elements in document order
    #[serde(default)]
    pub children: Vec<Element>,
}

impl Element {
    /// Create an empty element in the given namespace
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create an element without a namespace
    pub fn unqualified(name: impl Into<String>) -> Self {
        Self {
            namespace: None,
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create a text leaf
    pub fn leaf(
        namespace: impl Into<String>,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self::new(namespace, name).with_text(text)
    }

    /// Set the text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Add an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Append a child element
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child elements
    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Text content of this element
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Attribute value by local name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Namespace URI of this element
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// True if this element has the given qualified name
    pub fn is(&self, namespace: &str, name: &str) -> bool {
        self.name == name && self.namespace() == Some(namespace)
    }

    /// All child elements in document order
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Child elements with the given qualified name
    pub fn children_named<'a>(
        &'a self,
        namespace: &'a str,
        name: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.is(namespace, name))
    }

    /// First child element with the given qualified name
    pub fn child(&self, namespace: &str, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.is(namespace, name))
    }

    /// Follow a chain of qualified names, taking the first match at each step
    pub fn path(&self, steps: &[(&str, &str)]) -> Option<&Element> {
        steps
            .iter()
            .try_fold(self, |node, (namespace, name)| node.child(namespace, name))
    }
}
