//! Domain error types
//!
//! This module defines the error hierarchy for the CMIS client.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main CMIS client error type
///
/// Every fallible operation in the library returns this type. Failures are
/// never retried internally; the variant tells the caller how far the damage
/// reaches (static setup, a single response, a single resource kind, or the
/// transport).
#[derive(Debug, Error)]
pub enum CmisError {
    /// Invalid static setup (bad DateTime resolution, invalid config, ...)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A property definition names an atomic type this client does not know
    #[error("Unknown property type: {0}")]
    UnknownPropertyType(String),

    /// The server response contradicts its own declared metadata
    #[error("Protocol violation: {0}")]
    Protocol(#[from] ProtocolViolation),

    /// The repository does not declare the URI template a resource needs
    #[error("Repository does not define required URI-template '{0}'")]
    MissingTemplate(String),

    /// Transport failures, passed through unchanged
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CmisError {
    /// True for failures caused by invalid static setup
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            CmisError::Configuration(_) | CmisError::UnknownPropertyType(_)
        )
    }

    /// True when the server response is inconsistent with its own metadata
    pub fn is_protocol_violation(&self) -> bool {
        matches!(self, CmisError::Protocol(_))
    }

    /// True when the requested resource kind is not offered by the repository.
    ///
    /// The repository itself stays usable for other resources.
    pub fn is_resource_unsupported(&self) -> bool {
        matches!(self, CmisError::MissingTemplate(_))
    }
}

/// Server responses that break the protocol's own rules
///
/// Retrying the same request will not change a malformed response, so all of
/// these are final for the operation that produced them.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProtocolViolation {
    /// A required property has no container or no values
    #[error("property {property} is required but {reason}")]
    MissingRequiredProperty { property: String, reason: String },

    /// A single-valued property carries more than one value
    #[error("property {property} is not repeating but {count} values were given")]
    Cardinality { property: String, count: usize },

    /// More than one container for the same property definition id
    #[error("property {property} appears {count} times in one property set")]
    DuplicateProperty { property: String, count: usize },

    /// A value that cannot be converted to its atomic type
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// A required element is missing from a server document
    #[error("missing element: {0}")]
    MissingElement(String),
}

/// Transport-level errors
///
/// These errors don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to connect to the repository server
    #[error("Failed to connect to repository server: {0}")]
    ConnectionFailed(String),

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Response body could not be read
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for CmisError {
    fn from(err: std::io::Error) -> Self {
        CmisError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for CmisError {
    fn from(err: serde_json::Error) -> Self {
        CmisError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for CmisError {
    fn from(err: toml::de::Error) -> Self {
        CmisError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmis_error_display() {
        let err = CmisError::Configuration("Invalid resolution".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid resolution");
    }

    #[test]
    fn test_missing_template_display() {
        let err = CmisError::MissingTemplate("objectbyid".to_string());
        assert_eq!(
            err.to_string(),
            "Repository does not define required URI-template 'objectbyid'"
        );
        assert!(err.is_resource_unsupported());
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_protocol_violation_conversion() {
        let violation = ProtocolViolation::Cardinality {
            property: "cmis:name".to_string(),
            count: 2,
        };
        let err: CmisError = violation.into();
        assert!(err.is_protocol_violation());
        assert!(err.to_string().contains("cmis:name"));
    }

    #[test]
    fn test_transport_error_conversion() {
        let transport_err = TransportError::ServerError {
            status: 503,
            message: "unavailable".to_string(),
        };
        let err: CmisError = transport_err.into();
        assert!(matches!(err, CmisError::Transport(_)));
        assert_eq!(
            err.to_string(),
            "Transport error: Server error: 503 - unavailable"
        );
    }

    #[test]
    fn test_unknown_property_type_is_configuration() {
        let err = CmisError::UnknownPropertyType("blob".to_string());
        assert!(err.is_configuration());
        assert!(!err.is_protocol_violation());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: CmisError = io_err.into();
        assert!(matches!(err, CmisError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: CmisError = toml_err.into();
        assert!(matches!(err, CmisError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_cmis_error_implements_std_error() {
        let err = CmisError::Protocol(ProtocolViolation::InvalidValue("yes".to_string()));
        let _: &dyn std::error::Error = &err;
    }
}
