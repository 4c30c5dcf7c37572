//! Transport trait definition
//!
//! The repository core never talks HTTP directly. Everything it fetches goes
//! through a [`Transport`], so connection handling, timeouts and credentials
//! stay outside the core and tests can substitute an in-memory transport.

use crate::config::SecretString;
use crate::domain::Result;
use async_trait::async_trait;

/// Authentication method handed to [`Transport::authenticate`]
#[derive(Debug, Clone)]
pub enum AuthMethod {
    /// No credentials
    Anonymous,

    /// HTTP Basic authentication
    Basic {
        username: String,
        password: SecretString,
    },
}

impl AuthMethod {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            AuthMethod::Anonymous => "anonymous",
            AuthMethod::Basic { .. } => "basic",
        }
    }
}

/// Body of a fetched resource, unparsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// URL the response was fetched from
    pub url: String,

    /// Response body
    pub body: String,

    /// `Content-Type` header, if the server sent one
    pub content_type: Option<String>,
}

impl RawResponse {
    /// Create a response without a content type
    pub fn new(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body: body.into(),
            content_type: None,
        }
    }

    /// Set the content type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Network access used by the repository core
///
/// Errors are opaque to the core and propagate unchanged. Retry and timeout
/// policy belong to the implementation.
///
/// # Example
///
/// ```no_run
/// use cmis_client::adapters::transport::{AuthMethod, HttpTransport, Transport};
/// use cmis_client::config::{secret_string, RepositoryConfig};
///
/// # async fn example() -> cmis_client::domain::Result<()> {
/// let transport = HttpTransport::new(&RepositoryConfig::default())?;
/// transport
///     .authenticate(AuthMethod::Basic {
///         username: "admin".to_string(),
///         password: secret_string("admin".to_string()),
///     })
///     .await?;
/// let response = transport.get("http://localhost:8080/alfresco/cmisatom").await?;
/// println!("{} bytes", response.body.len());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url`
    ///
    /// # Errors
    ///
    /// Returns [`CmisError::Transport`](crate::domain::CmisError::Transport)
    /// for connection failures and non-success statuses.
    async fn get(&self, url: &str) -> Result<RawResponse>;

    /// Use `method` for all following requests
    async fn authenticate(&self, method: AuthMethod) -> Result<()>;
}
