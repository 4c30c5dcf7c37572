// cmis-client - CMIS AtomPub Client
// Copyright (c) 2026 CMIS Client Contributors
// Licensed under the MIT License

//! # cmis-client - CMIS AtomPub client
//!
//! Client-side building blocks for talking to CMIS repositories over the
//! AtomPub binding.
//!
//! ## Overview
//!
//! This library provides:
//! - **Atomic types**: the eight CMIS property types and a registry of
//!   shared instances
//! - **Property definitions**: parsing `cmis:property*Definition` elements of
//!   type entries, and pulling typed values out of object entries
//! - **Repository descriptors**: repository key, collections and by-id lookups
//!   through URI templates
//!
//! ## Architecture
//!
//! - [`types`] - Atomic property types, native values, type registry
//! - [`properties`] - Property definitions and their parser
//! - [`core`] - Repository descriptors
//! - [`adapters`] - Transport to the repository server
//! - [`domain`] - Errors, ids, namespaces, element tree
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//! - [`cli`] - Command-line interface of the `cmis` binary
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cmis_client::domain::{Element, TypeId};
//! use cmis_client::properties::{ObjectTypeRef, PropertyDefinitionParser};
//!
//! # fn example(definition: &Element, properties: &Element) -> cmis_client::domain::Result<()> {
//! let owner = ObjectTypeRef::new(TypeId::new("cmis:document").unwrap(), "Document");
//! let parser = PropertyDefinitionParser::default();
//!
//! let name = parser.parse(owner, definition)?;
//! println!("{name}");
//!
//! if let Some(values) = name.extract_native(properties)? {
//!     println!("{:?}", values);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::CmisError`]. Protocol violations
//! (a response contradicting its own metadata) are distinct from configuration
//! errors and from a repository that simply lacks a URI template:
//!
//! ```rust,no_run
//! use cmis_client::domain::CmisError;
//!
//! fn example() -> Result<(), CmisError> {
//!     let config = cmis_client::config::load_config("cmis.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! The library emits `tracing` events and never installs a subscriber itself;
//! see [`logging::init_logging`] for the one the binary uses.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod properties;
pub mod types;
