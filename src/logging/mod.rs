//! Logging
//!
//! Console output plus optional JSON log files with daily or hourly rotation.
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the binary (or to the embedding application).
//!
//! # Example
//!
//! ```no_run
//! use cmis_client::logging::init_logging;
//! use cmis_client::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Client started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log a fetch issued by a repository descriptor
///
/// # Example
///
/// ```no_run
/// use cmis_client::log_fetch;
///
/// log_fetch!("collection", "types", "http://localhost:8080/cmisatom/types");
/// ```
#[macro_export]
macro_rules! log_fetch {
    ($what:expr, $kind:expr, $url:expr) => {
        tracing::debug!(
            what = $what,
            kind = %$kind,
            url = %$url,
            "Fetching"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use cmis_client::log_error_with_context;
/// use cmis_client::domain::CmisError;
///
/// let error = CmisError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
