//! HTTP transport
//!
//! reqwest-backed [`Transport`] for AtomPub repositories. Credentials are sent
//! with every request (HTTP Basic); there is no token exchange and no retry.

use super::{AuthMethod, RawResponse, Transport};
use crate::config::RepositoryConfig;
use crate::domain::{CmisError, Result, TransportError};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::ExposeSecret;
use std::time::Duration;
use tokio::sync::RwLock;

/// HTTP transport
///
/// # Example
///
/// ```no_run
/// use cmis_client::adapters::transport::{HttpTransport, Transport};
/// use cmis_client::config::RepositoryConfig;
///
/// # async fn example() -> cmis_client::domain::Result<()> {
/// let transport = HttpTransport::new(&RepositoryConfig::default())?;
/// let service_document = transport.get(transport.service_url()).await?;
/// # Ok(())
/// # }
/// ```
pub struct HttpTransport {
    /// Service document URL
    service_url: String,

    /// HTTP client for making requests
    client: Client,

    /// Credentials sent with each request
    auth: RwLock<AuthMethod>,
}

impl HttpTransport {
    /// Create a transport from repository configuration
    ///
    /// Basic credentials from the configuration are installed right away.
    ///
    /// # Errors
    ///
    /// Returns [`CmisError::Configuration`] if the HTTP client cannot be built.
    pub fn new(config: &RepositoryConfig) -> Result<Self> {
        let mut client_builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds));

        if !config.tls_verify {
            tracing::warn!(
                service_url = %config.service_url,
                "TLS certificate verification disabled"
            );
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder
            .build()
            .map_err(|e| CmisError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        let auth = match (&config.auth_type[..], &config.username, &config.password) {
            ("basic", Some(username), Some(password)) => AuthMethod::Basic {
                username: username.clone(),
                password: password.clone(),
            },
            _ => AuthMethod::Anonymous,
        };

        Ok(Self {
            service_url: config.service_url.clone(),
            client,
            auth: RwLock::new(auth),
        })
    }

    /// Service document URL this transport was configured with
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Build authorization header value
    async fn auth_header_value(&self) -> Option<String> {
        match &*self.auth.read().await {
            AuthMethod::Anonymous => None,
            AuthMethod::Basic { username, password } => {
                let credentials = format!("{}:{}", username, password.expose_secret().as_ref());
                let encoded = general_purpose::STANDARD.encode(credentials.as_bytes());
                Some(format!("Basic {encoded}"))
            }
        }
    }
}

fn map_send_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(err.to_string())
    } else {
        TransportError::ConnectionFailed(err.to_string())
    }
}

fn map_status(status: StatusCode, body: String) -> TransportError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            TransportError::AuthenticationFailed(format!("status {status}: {body}"))
        }
        s if s.is_server_error() => TransportError::ServerError {
            status: s.as_u16(),
            message: body,
        },
        s => TransportError::ClientError {
            status: s.as_u16(),
            message: body,
        },
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<RawResponse> {
        tracing::debug!(url = %url, "GET");

        let mut request = self.client.get(url);
        if let Some(auth) = self.auth_header_value().await {
            request = request.header(AUTHORIZATION, auth);
        }

        let resp = request.send().await.map_err(map_send_error)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(url = %url, status = status.as_u16(), "Request failed");
            return Err(map_status(status, body).into());
        }

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = resp
            .text()
            .await
            .map_err(|e| TransportError::InvalidResponse(e.to_string()))?;

        Ok(RawResponse {
            url: url.to_string(),
            body,
            content_type,
        })
    }

    async fn authenticate(&self, method: AuthMethod) -> Result<()> {
        tracing::info!(method = method.name(), "Switching repository authentication");
        *self.auth.write().await = method;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    #[tokio::test]
    async fn test_anonymous_by_default() {
        let transport = HttpTransport::new(&RepositoryConfig::default()).unwrap();
        assert_eq!(transport.auth_header_value().await, None);
        assert_eq!(
            transport.service_url(),
            "http://localhost:8080/alfresco/cmisatom"
        );
    }

    #[tokio::test]
    async fn test_basic_auth_from_config() {
        let config = RepositoryConfig {
            auth_type: "basic".to_string(),
            username: Some("admin".to_string()),
            password: Some(secret_string("admin".to_string())),
            ..Default::default()
        };
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(
            transport.auth_header_value().await,
            Some("Basic YWRtaW46YWRtaW4=".to_string())
        );
    }

    #[tokio::test]
    async fn test_authenticate_replaces_credentials() {
        let transport = HttpTransport::new(&RepositoryConfig::default()).unwrap();
        transport
            .authenticate(AuthMethod::Basic {
                username: "user".to_string(),
                password: secret_string("pass".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(
            transport.auth_header_value().await,
            Some("Basic dXNlcjpwYXNz".to_string())
        );

        transport.authenticate(AuthMethod::Anonymous).await.unwrap();
        assert_eq!(transport.auth_header_value().await, None);
    }

    #[test]
    fn test_map_status() {
        assert!(matches!(
            map_status(StatusCode::UNAUTHORIZED, String::new()),
            TransportError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            map_status(StatusCode::NOT_FOUND, String::new()),
            TransportError::ClientError { status: 404, .. }
        ));
        assert!(matches!(
            map_status(StatusCode::BAD_GATEWAY, String::new()),
            TransportError::ServerError { status: 502, .. }
        ));
    }
}
