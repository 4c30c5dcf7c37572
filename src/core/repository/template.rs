//! URI templates
//!
//! Repositories publish parametrized links (`http://host/obj?id={id}`) in
//! their service document, one per resource kind. The client picks one by
//! kind and fills its `{placeholder}`s with percent-encoded values.

use crate::domain::namespaces::CMIS_REST;
use crate::domain::Element;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::{Captures, Regex};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}]+)\}").expect("valid placeholder pattern"));

/// Everything except the unreserved set `A-Z a-z 0-9 - . _ ~`
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// One `cra:uritemplate` entry of a service document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriTemplate {
    /// Resource kind, e.g. `objectbyid`
    pub kind: String,

    /// Template text with `{placeholder}`s
    pub template: String,

    /// Declared media type of the resource
    pub media_type: Option<String>,
}

impl UriTemplate {
    /// Read a `cra:uritemplate` element
    ///
    /// Returns `None` when the element lacks a type or a template.
    pub fn from_element(element: &Element) -> Option<Self> {
        let kind = element.child(CMIS_REST, "type")?.text().trim();
        let template = element.child(CMIS_REST, "template")?.text().trim();
        Some(Self {
            kind: kind.to_string(),
            template: template.to_string(),
            media_type: element
                .child(CMIS_REST, "mediatype")
                .map(|m| m.text().trim().to_string()),
        })
    }

    /// Names of the placeholders in this template, in order of appearance
    pub fn placeholders(&self) -> Vec<&str> {
        PLACEHOLDER
            .captures_iter(&self.template)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect()
    }

    /// [`fill_template`] applied to this template
    pub fn fill<K, V>(&self, values: &HashMap<K, V>) -> String
    where
        K: Borrow<str> + Hash + Eq,
        V: AsRef<str>,
    {
        fill_template(&self.template, values)
    }
}

/// All URI templates declared in a workspace, in document order
pub fn collect_templates(workspace: &Element) -> Vec<UriTemplate> {
    workspace
        .children_named(CMIS_REST, "uritemplate")
        .filter_map(|element| {
            let template = UriTemplate::from_element(element);
            if template.is_none() {
                tracing::warn!("Skipping uritemplate without type or template");
            }
            template
        })
        .collect()
}

/// First template declared for `kind`
///
/// When a document declares several templates for the same kind (for
/// different media types), document order decides; the media type is not
/// consulted.
pub fn pick_template<'a>(templates: &'a [UriTemplate], kind: &str) -> Option<&'a UriTemplate> {
    templates.iter().find(|t| t.kind == kind)
}

/// Substitute every `{name}` in `template` with the percent-encoded value of
/// `name` in `values`
///
/// Placeholders without a value become the empty string; values whose key
/// does not appear in the template are ignored.
///
/// # Example
///
/// ```
/// use cmis_client::core::repository::fill_template;
/// use std::collections::HashMap;
///
/// let values = HashMap::from([("id", "a b")]);
/// assert_eq!(
///     fill_template("http://x/{id}?a={missing}", &values),
///     "http://x/a%20b?a="
/// );
/// ```
pub fn fill_template<K, V>(template: &str, values: &HashMap<K, V>) -> String
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
{
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            let value: &str = values.get(&caps[1]).map_or("", |v| v.as_ref());
            percent_encode(value)
        })
        .into_owned()
}

/// Percent-encode everything outside the unreserved set
/// (`A-Z a-z 0-9 - . _ ~`), byte by byte over UTF-8, with uppercase hex
pub fn percent_encode(value: &str) -> String {
    utf8_percent_encode(value, UNRESERVED).to_string()
}
