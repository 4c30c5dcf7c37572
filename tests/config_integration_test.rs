//! Integration tests for configuration loading and validation
//!
//! Tests that touch environment variables hold `ENV_MUTEX`.

use cmis_client::config::load_config;
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn cleanup_env_vars() {
    for var in [
        "CMIS_APPLICATION_LOG_LEVEL",
        "CMIS_REPOSITORY_SERVICE_URL",
        "CMIS_REPOSITORY_ID",
        "CMIS_REPOSITORY_AUTH_TYPE",
        "CMIS_REPOSITORY_USERNAME",
        "CMIS_REPOSITORY_PASSWORD",
        "CMIS_REPOSITORY_TLS_VERIFY",
        "CMIS_REPOSITORY_TIMEOUT_SECONDS",
        "CMIS_LOGGING_LOCAL_ENABLED",
        "CMIS_LOGGING_LOCAL_PATH",
        "TEST_CMIS_PASSWORD",
    ] {
        std::env::remove_var(var);
    }
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
log_level = "debug"

[repository]
service_url = "https://cmis.example.com/alfresco/cmisatom"
repository_id = "-default-"
auth_type = "basic"
username = "admin"
password = "secret"
tls_verify = false
timeout_seconds = 30
connect_timeout_seconds = 10

[logging]
local_enabled = true
local_path = "/tmp/cmis-logs"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(
        config.repository.service_url,
        "https://cmis.example.com/alfresco/cmisatom"
    );
    assert_eq!(config.repository.repository_id.as_deref(), Some("-default-"));
    assert_eq!(config.repository.username.as_deref(), Some("admin"));
    assert!(config
        .repository
        .password
        .as_ref()
        .unwrap()
        .expose_secret()
        .eq("secret"));
    assert!(!config.repository.tls_verify);
    assert_eq!(config.repository.timeout_seconds, 30);
    assert_eq!(config.repository.connect_timeout_seconds, 10);
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_defaults_for_minimal_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[repository]
service_url = "http://localhost:8080/cmisatom"
auth_type = "none"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "info");
    assert!(config.repository.repository_id.is_none());
    assert!(config.repository.tls_verify);
    assert!(!config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "daily");
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_CMIS_PASSWORD", "from-env");

    let file = write_config(
        r#"
[repository]
service_url = "http://localhost:8080/cmisatom"
username = "admin"
password = "${TEST_CMIS_PASSWORD}"
"#,
    );

    let result = load_config(file.path());
    cleanup_env_vars();

    let config = result.unwrap();
    assert_eq!(config.repository.auth_type, "basic");
    assert!(config
        .repository
        .password
        .as_ref()
        .unwrap()
        .expose_secret()
        .eq("from-env"));
}

#[test]
fn test_missing_env_var_is_reported() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[repository]
service_url = "http://localhost:8080/cmisatom"
username = "admin"
password = "${TEST_CMIS_PASSWORD}"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("TEST_CMIS_PASSWORD"));
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("CMIS_REPOSITORY_SERVICE_URL", "https://override.example.com/atom");
    std::env::set_var("CMIS_REPOSITORY_ID", "repo-2");
    std::env::set_var("CMIS_APPLICATION_LOG_LEVEL", "warn");
    std::env::set_var("CMIS_REPOSITORY_TIMEOUT_SECONDS", "90");

    let file = write_config(
        r#"
[repository]
service_url = "http://localhost:8080/cmisatom"
auth_type = "none"
"#,
    );

    let result = load_config(file.path());
    cleanup_env_vars();

    let config = result.unwrap();
    assert_eq!(
        config.repository.service_url,
        "https://override.example.com/atom"
    );
    assert_eq!(config.repository.repository_id.as_deref(), Some("repo-2"));
    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.repository.timeout_seconds, 90);
}

#[test]
fn test_validation_errors() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    for content in [
        // basic auth without credentials
        "[repository]\nservice_url = \"http://localhost/cmisatom\"\nauth_type = \"basic\"\n",
        // unsupported scheme
        "[repository]\nservice_url = \"ftp://localhost/cmisatom\"\nauth_type = \"none\"\n",
        // unknown auth type
        "[repository]\nservice_url = \"http://localhost/cmisatom\"\nauth_type = \"oauth\"\n",
        // bad rotation
        "[repository]\nservice_url = \"http://localhost/cmisatom\"\nauth_type = \"none\"\n[logging]\nlocal_rotation = \"weekly\"\n",
    ] {
        let file = write_config(content);
        let err = load_config(file.path()).unwrap_err();
        assert!(err.is_configuration(), "expected configuration error for {content:?}");
    }
}

#[test]
fn test_missing_file() {
    let err = load_config("/nonexistent/cmis.toml").unwrap_err();
    assert!(err.to_string().contains("not found"));
}
