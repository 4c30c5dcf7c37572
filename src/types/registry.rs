//! Atomic type registry
//!
//! Builds [`AtomicType`] descriptors from a kind and its parameters. The
//! parameterless kinds and the three DateTime resolutions are created once,
//! when the registry is built, and shared from then on: two requests for the
//! same one return the identical `Arc`.
//!
//! The registry is immutable after construction, so one instance can be
//! shared freely between threads. [`AtomicTypeRegistry::global`] is the
//! process-wide instance; it is never invalidated.

use super::atomic::{AtomicKind, AtomicType, DateTimeResolution};
use crate::domain::{CmisError, Result};
use std::sync::{Arc, OnceLock};

static GLOBAL_REGISTRY: OnceLock<AtomicTypeRegistry> = OnceLock::new();

/// Parameters for [`AtomicTypeRegistry::construct`]
///
/// Each kind reads only the fields it understands; the rest are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtomicParams {
    /// String: maximum length
    pub max_length: Option<u64>,
    /// Decimal: precision
    pub precision: Option<u64>,
    /// Decimal: lower bound
    pub min_decimal: Option<f64>,
    /// Decimal: upper bound
    pub max_decimal: Option<f64>,
    /// Integer: lower bound
    pub min_integer: Option<i64>,
    /// Integer: upper bound
    pub max_integer: Option<i64>,
    /// DateTime: resolution token (`year`, `date` or `time`)
    pub resolution: Option<String>,
}

/// Factory and cache for atomic type descriptors
#[derive(Debug)]
pub struct AtomicTypeRegistry {
    boolean: Arc<AtomicType>,
    uri: Arc<AtomicType>,
    id: Arc<AtomicType>,
    html: Arc<AtomicType>,
    year: Arc<AtomicType>,
    date: Arc<AtomicType>,
    time: Arc<AtomicType>,
}

impl AtomicTypeRegistry {
    /// Build a registry with its own set of shared instances
    pub fn new() -> Self {
        let date_time = |resolution| Arc::new(AtomicType::DateTime { resolution });
        Self {
            boolean: Arc::new(AtomicType::Boolean),
            uri: Arc::new(AtomicType::Uri),
            id: Arc::new(AtomicType::Id),
            html: Arc::new(AtomicType::Html),
            year: date_time(DateTimeResolution::Year),
            date: date_time(DateTimeResolution::Date),
            time: date_time(DateTimeResolution::Time),
        }
    }

    /// The process-wide registry
    pub fn global() -> &'static AtomicTypeRegistry {
        GLOBAL_REGISTRY.get_or_init(AtomicTypeRegistry::new)
    }

    /// Build (or fetch the shared) descriptor for `kind`
    ///
    /// # Errors
    ///
    /// Returns [`CmisError::Configuration`] when a DateTime is requested
    /// without a resolution or with a resolution other than year, date or time.
    ///
    /// # Example
    ///
    /// ```
    /// use cmis_client::types::{AtomicKind, AtomicParams, AtomicTypeRegistry};
    /// use std::sync::Arc;
    ///
    /// let registry = AtomicTypeRegistry::global();
    /// let params = AtomicParams { resolution: Some("date".into()), ..Default::default() };
    /// let a = registry.construct(AtomicKind::DateTime, &params).unwrap();
    /// let b = registry.construct(AtomicKind::DateTime, &params).unwrap();
    /// assert!(Arc::ptr_eq(&a, &b));
    /// ```
    pub fn construct(&self, kind: AtomicKind, params: &AtomicParams) -> Result<Arc<AtomicType>> {
        let atomic = match kind {
            AtomicKind::String => Arc::new(AtomicType::String {
                max_length: params.max_length,
            }),
            AtomicKind::Decimal => Arc::new(AtomicType::Decimal {
                precision: params.precision,
                min_value: params.min_decimal,
                max_value: params.max_decimal,
            }),
            AtomicKind::Integer => Arc::new(AtomicType::Integer {
                min_value: params.min_integer,
                max_value: params.max_integer,
            }),
            AtomicKind::DateTime => {
                let token = params.resolution.as_deref().ok_or_else(|| {
                    CmisError::Configuration("DateTime requires a resolution".to_string())
                })?;
                self.date_time(token.parse()?)
            }
            AtomicKind::Boolean => self.boolean(),
            AtomicKind::Uri => self.uri(),
            AtomicKind::Id => self.id(),
            AtomicKind::Html => self.html(),
        };
        Ok(atomic)
    }

    /// Shared DateTime descriptor for `resolution`
    pub fn date_time(&self, resolution: DateTimeResolution) -> Arc<AtomicType> {
        match resolution {
            DateTimeResolution::Year => Arc::clone(&self.year),
            DateTimeResolution::Date => Arc::clone(&self.date),
            DateTimeResolution::Time => Arc::clone(&self.time),
        }
    }

    /// Shared Boolean descriptor
    pub fn boolean(&self) -> Arc<AtomicType> {
        Arc::clone(&self.boolean)
    }

    /// Shared Uri descriptor
    pub fn uri(&self) -> Arc<AtomicType> {
        Arc::clone(&self.uri)
    }

    /// Shared Id descriptor
    pub fn id(&self) -> Arc<AtomicType> {
        Arc::clone(&self.id)
    }

    /// Shared Html descriptor
    pub fn html(&self) -> Arc<AtomicType> {
        Arc::clone(&self.html)
    }
}

impl Default for AtomicTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
