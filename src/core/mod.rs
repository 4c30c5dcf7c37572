//! Core repository logic.
//!
//! # Modules
//!
//! - [`repository`] - repository descriptors built from service document
//!   workspaces
//!
//! # Workflow
//!
//! 1. **Fetch**: Get the service document through a transport
//! 2. **Select**: Pick the workspace of the configured repository
//! 3. **Navigate**: Fetch collections, or objects and types by id through
//!    the repository's URI templates
//!
//! Property definitions found in type entries are handled by
//! [`crate::properties`].
//!
//! # Example
//!
//! ```rust,no_run
//! use cmis_client::adapters::transport::{HttpTransport, RawResponse};
//! use cmis_client::config::load_config;
//! use cmis_client::core::repository::{EntryFactory, Repository};
//! use cmis_client::domain::{Element, Result};
//! use std::sync::Arc;
//!
//! struct Entries;
//!
//! impl EntryFactory for Entries {
//!     type Object = RawResponse;
//!     type ObjectType = RawResponse;
//!
//!     fn object_from_entry(&self, entry: RawResponse) -> Result<RawResponse> {
//!         Ok(entry)
//!     }
//!
//!     fn type_from_entry(&self, entry: RawResponse) -> Result<RawResponse> {
//!         Ok(entry)
//!     }
//! }
//!
//! # async fn example(service_document: Element) -> Result<()> {
//! let config = load_config("cmis.toml")?;
//! let transport = Arc::new(HttpTransport::new(&config.repository)?);
//!
//! let repository = Repository::from_service_document(
//!     transport,
//!     Entries,
//!     &service_document,
//!     config.repository.repository_id.as_deref(),
//! )?;
//!
//! if let Some(types) = repository.types().await? {
//!     println!("{} types at {}", repository, types.href);
//! }
//! # Ok(())
//! # }
//! ```

pub mod repository;
