//! Domain models and types for the CMIS client.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`RepositoryId`], [`ObjectId`], [`TypeId`])
//! - **The attribute tree** ([`Element`]) the client navigates instead of raw markup
//! - **Namespace constants** for the AtomPub binding
//! - **Error types** ([`CmisError`], [`ProtocolViolation`], [`TransportError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, CmisError>`]:
//!
//! ```rust
//! use cmis_client::domain::{CmisError, Result};
//! use cmis_client::types::{AtomicTypeRegistry, DateTimeResolution};
//!
//! fn example() -> Result<()> {
//!     let resolution: DateTimeResolution = "date".parse()?;
//!     let _date_type = AtomicTypeRegistry::global().date_time(resolution);
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod ids;
pub mod namespaces;
pub mod result;
pub mod tree;

// Re-export commonly used types for convenience
pub use errors::{CmisError, ProtocolViolation, TransportError};
pub use ids::{ObjectId, RepositoryId, TypeId};
pub use result::Result;
pub use tree::Element;
