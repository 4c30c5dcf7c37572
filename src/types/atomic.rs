//! Atomic value-type descriptors
//!
//! Every property of a CMIS object is backed by one of eight primitive kinds.
//! [`AtomicKind`] is the closed tag, [`AtomicType`] the immutable descriptor
//! carrying the kind's constraints.

use crate::domain::{CmisError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Granularity of a DateTime property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateTimeResolution {
    /// Only the year is significant
    Year,
    /// Calendar date
    Date,
    /// Full timestamp
    Time,
}

impl DateTimeResolution {
    /// All resolutions, in protocol order
    pub const ALL: [DateTimeResolution; 3] = [
        DateTimeResolution::Year,
        DateTimeResolution::Date,
        DateTimeResolution::Time,
    ];

    /// Protocol token
    pub fn as_str(&self) -> &'static str {
        match self {
            DateTimeResolution::Year => "year",
            DateTimeResolution::Date => "date",
            DateTimeResolution::Time => "time",
        }
    }
}

impl fmt::Display for DateTimeResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateTimeResolution {
    type Err = CmisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "year" => Ok(DateTimeResolution::Year),
            "date" => Ok(DateTimeResolution::Date),
            "time" => Ok(DateTimeResolution::Time),
            _ => Err(CmisError::Configuration(format!(
                "Invalid DateTime resolution '{s}'. Must be one of: year, date, time"
            ))),
        }
    }
}

/// The eight atomic kinds, without parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AtomicKind {
    String,
    Decimal,
    Integer,
    DateTime,
    Boolean,
    Uri,
    Id,
    Html,
}

impl AtomicKind {
    /// Protocol name, as used in `property<Name>` container tags
    pub fn name(&self) -> &'static str {
        match self {
            AtomicKind::String => "String",
            AtomicKind::Decimal => "Decimal",
            AtomicKind::Integer => "Integer",
            AtomicKind::DateTime => "DateTime",
            AtomicKind::Boolean => "Boolean",
            AtomicKind::Uri => "Uri",
            AtomicKind::Id => "Id",
            AtomicKind::Html => "Html",
        }
    }
}

impl fmt::Display for AtomicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AtomicKind {
    type Err = CmisError;

    /// Case-insensitive lookup of a `propertyType` value
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "string" => Ok(AtomicKind::String),
            "decimal" => Ok(AtomicKind::Decimal),
            "integer" => Ok(AtomicKind::Integer),
            "datetime" => Ok(AtomicKind::DateTime),
            "boolean" => Ok(AtomicKind::Boolean),
            "uri" => Ok(AtomicKind::Uri),
            "id" => Ok(AtomicKind::Id),
            "html" => Ok(AtomicKind::Html),
            _ => Err(CmisError::UnknownPropertyType(s.to_string())),
        }
    }
}

/// Immutable atomic type descriptor
///
/// Parameterless kinds (Boolean, Uri, Id, Html) and the three DateTime
/// resolutions are shared instances handed out by
/// [`AtomicTypeRegistry`](super::AtomicTypeRegistry).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AtomicType {
    String {
        max_length: Option<u64>,
    },
    Decimal {
        precision: Option<u64>,
        min_value: Option<f64>,
        max_value: Option<f64>,
    },
    Integer {
        min_value: Option<i64>,
        max_value: Option<i64>,
    },
    DateTime {
        resolution: DateTimeResolution,
    },
    Boolean,
    Uri,
    Id,
    Html,
}

impl AtomicType {
    /// Kind tag of this descriptor
    pub fn kind(&self) -> AtomicKind {
        match self {
            AtomicType::String { .. } => AtomicKind::String,
            AtomicType::Decimal { .. } => AtomicKind::Decimal,
            AtomicType::Integer { .. } => AtomicKind::Integer,
            AtomicType::DateTime { .. } => AtomicKind::DateTime,
            AtomicType::Boolean => AtomicKind::Boolean,
            AtomicType::Uri => AtomicKind::Uri,
            AtomicType::Id => AtomicKind::Id,
            AtomicType::Html => AtomicKind::Html,
        }
    }

    /// Protocol name of the kind
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Resolution, for DateTime types
    pub fn resolution(&self) -> Option<DateTimeResolution> {
        match self {
            AtomicType::DateTime { resolution } => Some(*resolution),
            _ => None,
        }
    }
}

impl fmt::Display for AtomicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
