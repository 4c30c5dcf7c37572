//! Property definition parsing
//!
//! A definition fragment is a flat list of leaves in the CMIS core namespace.
//! The `propertyType` leaf may come before or after the leaves that
//! parameterize it (`maxLength`, `minValue`, `resolution`, ...), so the
//! parameters are buffered as text during the single pass and the atomic
//! type is only built once every leaf has been seen.

use super::definition::{ObjectTypeRef, PropertyDefinition};
use crate::domain::namespaces::CMIS_CORE;
use crate::domain::{Element, ProtocolViolation, Result};
use crate::types::native::{lenient_decimal, lenient_integer};
use crate::types::{parse_bool, AtomicKind, AtomicParams, AtomicTypeRegistry};

/// Resolution used when a DateTime definition does not declare one
const DEFAULT_RESOLUTION: &str = "time";

/// Untyped parameter leaves, kept until the property type is known
#[derive(Debug, Default)]
struct RawParams<'a> {
    max_length: Option<&'a str>,
    precision: Option<&'a str>,
    min_value: Option<&'a str>,
    max_value: Option<&'a str>,
    resolution: Option<&'a str>,
}

fn lenient_unsigned(text: &str) -> u64 {
    u64::try_from(lenient_integer(text)).unwrap_or(0)
}

/// Builds [`PropertyDefinition`]s against an [`AtomicTypeRegistry`]
#[derive(Debug, Clone, Copy)]
pub struct PropertyDefinitionParser<'r> {
    registry: &'r AtomicTypeRegistry,
}

impl Default for PropertyDefinitionParser<'static> {
    fn default() -> Self {
        Self::new(AtomicTypeRegistry::global())
    }
}

impl<'r> PropertyDefinitionParser<'r> {
    /// Create a parser that takes its atomic types from `registry`
    pub fn new(registry: &'r AtomicTypeRegistry) -> Self {
        Self { registry }
    }

    /// Parse one property definition fragment
    ///
    /// # Arguments
    ///
    /// * `owner` - The object type the definition belongs to
    /// * `fragment` - The definition element; its children are the leaves
    ///
    /// # Errors
    ///
    /// - [`CmisError::UnknownPropertyType`](crate::domain::CmisError::UnknownPropertyType)
    ///   when `propertyType` names no known atomic kind
    /// - [`CmisError::Configuration`](crate::domain::CmisError::Configuration)
    ///   for an invalid DateTime resolution
    /// - [`ProtocolViolation::MissingElement`] when `id` or `propertyType` is missing
    /// - [`ProtocolViolation::InvalidValue`] for a malformed boolean leaf
    ///
    /// # Example
    ///
    /// ```
    /// use cmis_client::domain::namespaces::CMIS_CORE;
    /// use cmis_client::domain::{Element, TypeId};
    /// use cmis_client::properties::{ObjectTypeRef, PropertyDefinitionParser};
    ///
    /// # fn example() -> cmis_client::domain::Result<()> {
    /// let fragment = Element::new(CMIS_CORE, "propertyStringDefinition")
    ///     .with_child(Element::leaf(CMIS_CORE, "maxLength", "255"))
    ///     .with_child(Element::leaf(CMIS_CORE, "id", "cmis:name"))
    ///     .with_child(Element::leaf(CMIS_CORE, "propertyType", "string"));
    /// let owner = ObjectTypeRef::new(TypeId::new("cmis:document").unwrap(), "Document");
    ///
    /// let definition = PropertyDefinitionParser::default().parse(owner, &fragment)?;
    /// assert_eq!(definition.to_string(), "Document:cmis:name => String");
    /// # Ok(())
    /// # }
    /// ```
    pub fn parse(&self, owner: ObjectTypeRef, fragment: &Element) -> Result<PropertyDefinition> {
        let mut id = None;
        let mut local_name = None;
        let mut local_namespace = None;
        let mut query_name = None;
        let mut display_name = None;
        let mut cardinality = None;
        let mut updatability = None;
        let mut inherited = false;
        let mut required = false;
        let mut queryable = false;
        let mut orderable = false;
        let mut open_choice = false;
        let mut property_type = None;
        let mut raw = RawParams::default();

        for leaf in fragment.children() {
            if leaf.namespace() != Some(CMIS_CORE) {
                continue;
            }

            // TODO: read `choice` and `defaultValue` children once their value
            // layout per atomic kind is mapped.
            let text = leaf.text();
            match leaf.name.as_str() {
                "id" => id = Some(text.to_string()),
                "localName" => local_name = Some(text.to_string()),
                "localNamespace" => local_namespace = Some(text.to_string()),
                "displayName" => display_name = Some(text.to_string()),
                "queryName" => query_name = Some(text.to_string()),
                "propertyType" => property_type = Some(text),
                "cardinality" => cardinality = Some(text.to_string()),
                "updatability" => updatability = Some(text.to_string()),
                "inherited" => inherited = parse_bool(text)?,
                "required" => required = parse_bool(text)?,
                "queryable" => queryable = parse_bool(text)?,
                "orderable" => orderable = parse_bool(text)?,
                "openChoice" => open_choice = parse_bool(text)?,
                "maxLength" => raw.max_length = Some(text),
                "precision" => raw.precision = Some(text),
                "minValue" => raw.min_value = Some(text),
                "maxValue" => raw.max_value = Some(text),
                "resolution" => raw.resolution = Some(text),
                _ => {}
            }
        }

        let id = id.ok_or_else(|| {
            ProtocolViolation::MissingElement(format!(
                "property definition of {} has no id",
                owner.display_name
            ))
        })?;
        let type_name = property_type.ok_or_else(|| {
            ProtocolViolation::MissingElement(format!(
                "property definition {}:{id} has no propertyType",
                owner.display_name
            ))
        })?;

        let kind: AtomicKind = type_name.parse()?;
        let mut warnings = Vec::new();
        let params = match kind {
            AtomicKind::String => AtomicParams {
                max_length: raw.max_length.map(lenient_unsigned),
                ..Default::default()
            },
            AtomicKind::Decimal => AtomicParams {
                precision: raw.precision.map(lenient_unsigned),
                min_decimal: raw.min_value.map(lenient_decimal),
                max_decimal: raw.max_value.map(lenient_decimal),
                ..Default::default()
            },
            AtomicKind::Integer => AtomicParams {
                min_integer: raw.min_value.map(lenient_integer),
                max_integer: raw.max_value.map(lenient_integer),
                ..Default::default()
            },
            AtomicKind::DateTime => {
                let resolution = raw.resolution.unwrap_or_else(|| {
                    tracing::warn!(
                        owner = %owner.id,
                        property = %id,
                        "No resolution for DateTime, defaulting to time"
                    );
                    warnings.push(format!(
                        "no resolution for DateTime property {id}, using {DEFAULT_RESOLUTION}"
                    ));
                    DEFAULT_RESOLUTION
                });
                AtomicParams {
                    resolution: Some(resolution.to_string()),
                    ..Default::default()
                }
            }
            AtomicKind::Boolean | AtomicKind::Uri | AtomicKind::Id | AtomicKind::Html => {
                AtomicParams::default()
            }
        };
        let atomic = self.registry.construct(kind, &params)?;

        tracing::debug!(
            owner = %owner.id,
            property = %id,
            property_type = %atomic,
            required,
            "Parsed property definition"
        );

        Ok(PropertyDefinition {
            owner,
            id,
            local_name,
            local_namespace,
            query_name,
            display_name,
            description: None,
            property_type: atomic,
            cardinality,
            repeating: false,
            updatability,
            inherited,
            required,
            queryable,
            orderable,
            choices: Vec::new(),
            open_choice,
            default_value: None,
            warnings,
        })
    }
}
