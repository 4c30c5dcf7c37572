//! Configuration management for the CMIS client.
//!
//! TOML-based configuration with:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `CMIS_<SECTION>_<KEY>` environment overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cmis_client::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("cmis.toml")?;
//! println!("Service document: {}", config.repository.service_url);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [repository]
//! service_url = "https://cmis.example.com/alfresco/cmisatom"
//! auth_type = "basic"
//! username = "admin"
//! password = "${CMIS_PASSWORD}"
//!
//! [logging]
//! local_enabled = true
//! local_path = "/var/log/cmis"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{ApplicationConfig, CmisConfig, LoggingConfig, RepositoryConfig};
pub use secret::{secret_string, SecretString, SecretValue};
