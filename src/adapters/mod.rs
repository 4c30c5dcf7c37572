//! External system integrations.
//!
//! - [`transport`] - network access to the repository server
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies and
//! enable testing with mock implementations. The repository core only sees
//! the [`transport::Transport`] trait:
//!
//! ```rust,no_run
//! use cmis_client::adapters::transport::HttpTransport;
//! use cmis_client::config::{secret_string, RepositoryConfig};
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RepositoryConfig {
//!     service_url: "https://cmis.example.com/alfresco/cmisatom".to_string(),
//!     auth_type: "basic".to_string(),
//!     username: Some("admin".to_string()),
//!     password: Some(secret_string("admin".to_string())),
//!     ..Default::default()
//! };
//!
//! let transport = Arc::new(HttpTransport::new(&config)?);
//! # Ok(())
//! # }
//! ```

pub mod transport;
