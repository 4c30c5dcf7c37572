//! Domain identifier types with validation
//!
//! Newtype wrappers for the identifiers the repository hands out. Each type
//! keeps repository, object and type ids from being mixed up at call sites.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Repository identifier newtype wrapper
///
/// Read from `repositoryInfo/repositoryId` in the service document.
///
/// # Examples
///
/// ```
/// use cmis_client::domain::ids::RepositoryId;
/// use std::str::FromStr;
///
/// let id = RepositoryId::from_str("A1").unwrap();
/// assert_eq!(id.as_str(), "A1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryId(String);

impl RepositoryId {
    /// Creates a new RepositoryId from a string
    ///
    /// # Returns
    ///
    /// Returns `Ok(RepositoryId)` if the ID is valid, `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Repository ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the repository ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RepositoryId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for RepositoryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Object identifier newtype wrapper
///
/// Opaque to the client; the server decides the format (`@root@`,
/// `workspace://SpacesStore/...`, UUIDs). The value is percent-encoded when
/// it is substituted into a URI template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(String);

impl ObjectId {
    /// Creates a new ObjectId from a string
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Object ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the object ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ObjectId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Object-type identifier newtype wrapper
///
/// e.g. `cmis:document`, `cmis:folder`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeId(String);

impl TypeId {
    /// Creates a new TypeId from a string
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Type ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the type ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }

    /// True for the base types every repository must expose
    pub fn is_base_type(&self) -> bool {
        matches!(
            self.0.as_str(),
            "cmis:document" | "cmis:folder" | "cmis:relationship" | "cmis:policy"
        )
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TypeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for TypeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
