//! Property definition records and value extraction

use crate::domain::namespaces::CMIS_CORE;
use crate::domain::{Element, ProtocolViolation, Result, TypeId};
use crate::types::{AtomicType, NativeValue};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Non-owning reference to the object type a definition belongs to
///
/// Only the identifying fields are kept; the type itself stays with whoever
/// parsed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectTypeRef {
    /// Type id, e.g. `cmis:document`
    pub id: TypeId,

    /// Human-readable name used in diagnostics
    pub display_name: String,
}

impl ObjectTypeRef {
    /// Create a new type reference
    pub fn new(id: TypeId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}

/// Metadata for one typed attribute of an object type
///
/// Built once by [`PropertyDefinitionParser`](super::PropertyDefinitionParser)
/// and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDefinition {
    pub(crate) owner: ObjectTypeRef,
    pub(crate) id: String,
    pub(crate) local_name: Option<String>,
    pub(crate) local_namespace: Option<String>,
    pub(crate) query_name: Option<String>,
    pub(crate) display_name: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) property_type: Arc<AtomicType>,
    pub(crate) cardinality: Option<String>,
    pub(crate) repeating: bool,
    pub(crate) updatability: Option<String>,
    pub(crate) inherited: bool,
    pub(crate) required: bool,
    pub(crate) queryable: bool,
    pub(crate) orderable: bool,
    pub(crate) choices: Vec<String>,
    pub(crate) open_choice: bool,
    pub(crate) default_value: Option<String>,
    pub(crate) warnings: Vec<String>,
}

impl PropertyDefinition {
    /// Owning object type
    pub fn owner(&self) -> &ObjectTypeRef {
        &self.owner
    }

    /// Property definition id, e.g. `cmis:name`
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn local_name(&self) -> Option<&str> {
        self.local_name.as_deref()
    }

    pub fn local_namespace(&self) -> Option<&str> {
        self.local_namespace.as_deref()
    }

    pub fn query_name(&self) -> Option<&str> {
        self.query_name.as_deref()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Not read from the definition fragment yet; always `None`
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Atomic type backing this property
    pub fn property_type(&self) -> &Arc<AtomicType> {
        &self.property_type
    }

    /// Raw `cardinality` leaf (`single` / `multi`), as sent by the server
    pub fn cardinality(&self) -> Option<&str> {
        self.cardinality.as_deref()
    }

    /// Whether the property may carry several values.
    ///
    /// The parser does not derive this from `cardinality`; it is only set
    /// through [`with_repeating`](Self::with_repeating).
    pub fn repeating(&self) -> bool {
        self.repeating
    }

    /// Raw `updatability` leaf (`readonly`, `readwrite`, `whencheckedout`, `oncreate`)
    pub fn updatability(&self) -> Option<&str> {
        self.updatability.as_deref()
    }

    pub fn inherited(&self) -> bool {
        self.inherited
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn queryable(&self) -> bool {
        self.queryable
    }

    pub fn orderable(&self) -> bool {
        self.orderable
    }

    /// Not read from the definition fragment yet; always empty
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn open_choice(&self) -> bool {
        self.open_choice
    }

    /// Not read from the definition fragment yet; always `None`
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Non-fatal warnings raised while parsing this definition
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Mark the definition as repeating (or not)
    ///
    /// For callers that map `cardinality` themselves. Call it before the
    /// definition is shared.
    pub fn with_repeating(mut self, repeating: bool) -> Self {
        self.repeating = repeating;
        self
    }

    /// Tag of the property container in a property set, e.g. `propertyString`
    pub fn property_name(&self) -> String {
        format!("property{}", self.property_type.name())
    }

    /// Select this property's value nodes from an object's property set
    ///
    /// Returns `Ok(None)` when the property set has no container for this
    /// definition and the property is not required. `Ok(Some(&[]))` means the
    /// container is present but carries no values.
    ///
    /// # Errors
    ///
    /// - [`ProtocolViolation::MissingRequiredProperty`] when a required
    ///   property has no container or no values
    /// - [`ProtocolViolation::Cardinality`] when a non-repeating property has
    ///   more than one value
    /// - [`ProtocolViolation::DuplicateProperty`] when more than one container
    ///   carries this definition's id
    pub fn extract_values<'a>(&self, properties: &'a Element) -> Result<Option<&'a [Element]>> {
        let container_name = self.property_name();
        let containers: Vec<&Element> = properties
            .children()
            .iter()
            .filter(|node| {
                node.is(CMIS_CORE, &container_name)
                    && node.attribute("propertyDefinitionId") == Some(self.id.as_str())
            })
            .collect();

        match containers.as_slice() {
            [] => {
                if self.required {
                    return Err(ProtocolViolation::MissingRequiredProperty {
                        property: self.to_string(),
                        reason: "not present among properties".to_string(),
                    }
                    .into());
                }
                Ok(None)
            }
            [container] => {
                let values = container.children();
                if self.required && values.is_empty() {
                    return Err(ProtocolViolation::MissingRequiredProperty {
                        property: self.to_string(),
                        reason: "no values specified".to_string(),
                    }
                    .into());
                }
                if !self.repeating && values.len() > 1 {
                    return Err(ProtocolViolation::Cardinality {
                        property: self.to_string(),
                        count: values.len(),
                    }
                    .into());
                }
                Ok(Some(values))
            }
            many => Err(ProtocolViolation::DuplicateProperty {
                property: self.to_string(),
                count: many.len(),
            }
            .into()),
        }
    }

    /// [`extract_values`](Self::extract_values), then convert every value node
    pub fn extract_native(&self, properties: &Element) -> Result<Option<Vec<NativeValue>>> {
        self.extract_values(properties)?
            .map(|values| {
                values
                    .iter()
                    .map(|node| self.property_type.to_native(node))
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()
    }
}

impl fmt::Display for PropertyDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} => {}{}",
            self.owner.display_name,
            self.id,
            self.property_type,
            if self.repeating { "[]" } else { "" }
        )
    }
}
