//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::CmisConfig;
use super::secret::secret_string;
use crate::domain::errors::CmisError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into CmisConfig
/// 4. Applies environment variable overrides (CMIS_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`CmisError::Configuration`] if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use cmis_client::config::loader::load_config;
///
/// let config = load_config("cmis.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<CmisConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CmisError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        CmisError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: CmisConfig = toml::from_str(&contents)
        .map_err(|e| CmisError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        CmisError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    tracing::debug!(
        path = %path.display(),
        service_url = %config.repository.service_url,
        "Configuration loaded"
    );

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched. All missing variables are reported
/// in one error.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| CmisError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let processed = re.replace_all(line, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                    caps[0].to_string()
                }
            }
        });
        result.push_str(&processed);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(CmisError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the CMIS_* prefix
///
/// Environment variables follow the pattern: CMIS_<SECTION>_<KEY>
/// For example: CMIS_REPOSITORY_SERVICE_URL, CMIS_APPLICATION_LOG_LEVEL
fn apply_env_overrides(config: &mut CmisConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("CMIS_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Repository overrides
    if let Ok(val) = std::env::var("CMIS_REPOSITORY_SERVICE_URL") {
        config.repository.service_url = val;
    }
    if let Ok(val) = std::env::var("CMIS_REPOSITORY_ID") {
        config.repository.repository_id = Some(val);
    }
    if let Ok(val) = std::env::var("CMIS_REPOSITORY_AUTH_TYPE") {
        config.repository.auth_type = val;
    }
    if let Ok(val) = std::env::var("CMIS_REPOSITORY_USERNAME") {
        config.repository.username = Some(val);
    }
    if let Ok(val) = std::env::var("CMIS_REPOSITORY_PASSWORD") {
        config.repository.password = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("CMIS_REPOSITORY_TLS_VERIFY") {
        config.repository.tls_verify = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("CMIS_REPOSITORY_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.repository.timeout_seconds = timeout;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("CMIS_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("CMIS_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("CMIS_LOADER_TEST_VAR", "test_value");
        let input = "password = \"${CMIS_LOADER_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "password = \"test_value\"\n");
        std::env::remove_var("CMIS_LOADER_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("CMIS_LOADER_MISSING_VAR");
        let input = "password = \"${CMIS_LOADER_MISSING_VAR}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("CMIS_LOADER_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("CMIS_LOADER_COMMENTED_VAR");
        let input = "# password = \"${CMIS_LOADER_COMMENTED_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${CMIS_LOADER_COMMENTED_VAR}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(matches!(result, Err(CmisError::Configuration(_))));
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[repository]
service_url = "https://cmis.example.com/alfresco/cmisatom"
auth_type = "none"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(
            config.repository.service_url,
            "https://cmis.example.com/alfresco/cmisatom"
        );
        assert!(config.repository.tls_verify);
        assert!(!config.logging.local_enabled);
    }
}
