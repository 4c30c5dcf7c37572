//! Result type alias for the CMIS client
//!
//! This module provides a convenient Result type alias that uses CmisError
//! as the error type.

use super::errors::CmisError;

/// Result type alias for CMIS client operations
///
/// # Examples
///
/// ```
/// use cmis_client::domain::result::Result;
/// use cmis_client::domain::errors::CmisError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(CmisError::Configuration("bad resolution".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, CmisError>;
