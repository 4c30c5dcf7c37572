//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the client configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates as well
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                crate::log_error_with_context!(&e, "Configuration rejected");
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Service URL: {}", config.repository.service_url);
        println!(
            "  Repository: {}",
            config
                .repository
                .repository_id
                .as_deref()
                .unwrap_or("(first advertised)")
        );
        println!("  Authentication: {}", config.repository.auth_type);
        if let Some(ref username) = config.repository.username {
            println!("  Username: {username}");
        }
        println!("  TLS Verify: {}", config.repository.tls_verify);
        println!("  Timeout: {}s", config.repository.timeout_seconds);
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                format!(
                    "{} ({})",
                    config.logging.local_path, config.logging.local_rotation
                )
            } else {
                "disabled".to_string()
            }
        );
        println!();
        Ok(0)
    }
}
