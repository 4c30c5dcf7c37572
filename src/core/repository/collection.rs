//! Repository collections
//!
//! A workspace advertises its well-known collections as `app:collection`
//! links tagged with a `cra:collectionType`.

use crate::adapters::transport::RawResponse;
use crate::domain::namespaces::{APP, CMIS_REST};
use crate::domain::{CmisError, Element};
use std::fmt;
use std::str::FromStr;

/// Well-known collection of a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    /// Children of the root folder
    Root,
    /// Query endpoint
    Query,
    /// Checked-out documents
    CheckedOut,
    /// Objects not filed in any folder
    Unfiled,
    /// Base object types
    Types,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 5] = [
        CollectionKind::Root,
        CollectionKind::Query,
        CollectionKind::CheckedOut,
        CollectionKind::Unfiled,
        CollectionKind::Types,
    ];

    /// `cra:collectionType` token
    pub fn token(&self) -> &'static str {
        match self {
            CollectionKind::Root => "root",
            CollectionKind::Query => "query",
            CollectionKind::CheckedOut => "checkedout",
            CollectionKind::Unfiled => "unfiled",
            CollectionKind::Types => "types",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }

    /// `href` of the first collection link of this kind in `workspace`
    pub fn find_href<'a>(&self, workspace: &'a Element) -> Option<&'a str> {
        workspace
            .children_named(APP, "collection")
            .find(|collection| {
                collection
                    .child(CMIS_REST, "collectionType")
                    .is_some_and(|t| t.text().trim() == self.token())
            })
            .and_then(|collection| collection.attribute("href"))
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for CollectionKind {
    type Err = CmisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CollectionKind::ALL
            .into_iter()
            .find(|kind| kind.token().eq_ignore_ascii_case(s))
            .ok_or_else(|| CmisError::Configuration(format!("Unknown collection type: {s}")))
    }
}

/// A fetched collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub kind: CollectionKind,
    pub href: String,
    pub response: RawResponse,
}

impl Collection {
    pub fn new(kind: CollectionKind, href: impl Into<String>, response: RawResponse) -> Self {
        Self {
            kind,
            href: href.into(),
            response,
        }
    }
}
