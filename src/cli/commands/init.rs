//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "cmis.toml")]
    pub output: String,

    /// Include every option with comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing CMIS client configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Set repository.service_url in {}", self.output);
                println!("  2. For Basic authentication, set auth_type = \"basic\" and");
                println!("     put CMIS_REPOSITORY_USERNAME / CMIS_REPOSITORY_PASSWORD in .env");
                println!("  3. Validate configuration: cmis validate-config");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    fn generate_minimal_config() -> String {
        r#"# CMIS client configuration

[application]
log_level = "info"

[repository]
service_url = "http://localhost:8080/alfresco/cmisatom"
auth_type = "none"
tls_verify = true

[logging]
local_enabled = false
"#
        .to_string()
    }

    fn generate_config_with_examples() -> String {
        r#"# CMIS client configuration
#
# Values of the form ${VAR} are replaced from the environment (and .env).
# Every key can also be overridden with CMIS_<SECTION>_<KEY>, for example
# CMIS_REPOSITORY_SERVICE_URL.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Repository
# ============================================================================
[repository]
# AtomPub service document URL
service_url = "http://localhost:8080/alfresco/cmisatom"

# Repository to use when the service document advertises several
# (default: the first workspace)
# repository_id = "-default-"

# Authentication: "basic" or "none"
auth_type = "none"

# Basic credentials (required when auth_type = "basic")
# username = "${CMIS_USERNAME}"
# password = "${CMIS_PASSWORD}"

# TLS certificate verification
tls_verify = true

# Request and connect timeouts in seconds
timeout_seconds = 60
connect_timeout_seconds = 30

# ============================================================================
# Logging
# ============================================================================
[logging]
# JSON log files in addition to console output
local_enabled = false

# Log directory
local_path = "./logs"

# Rotation: daily or hourly
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use tempfile::TempDir;

    #[test]
    fn test_generated_configs_load() {
        let dir = TempDir::new().unwrap();
        for (name, content) in [
            ("minimal.toml", InitArgs::generate_minimal_config()),
            ("examples.toml", InitArgs::generate_config_with_examples()),
        ] {
            let path = dir.path().join(name);
            fs::write(&path, content).unwrap();
            let config = load_config(&path).unwrap();
            assert_eq!(config.repository.auth_type, "none");
        }
    }

    #[tokio::test]
    async fn test_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("cmis.toml");
        fs::write(&output, "existing").unwrap();

        let mut args = InitArgs {
            output: output.to_string_lossy().to_string(),
            with_examples: false,
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(fs::read_to_string(&output).unwrap(), "existing");

        args.force = true;
        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(fs::read_to_string(&output).unwrap().contains("[repository]"));
    }
}
