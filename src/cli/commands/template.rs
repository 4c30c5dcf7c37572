//! Fill-template command implementation

use crate::core::repository::fill_template;
use clap::Args;
use std::collections::HashMap;

/// Arguments for the fill-template command
#[derive(Args, Debug)]
pub struct FillTemplateArgs {
    /// URI template, e.g. "http://host/obj?id={id}"
    #[arg(short, long)]
    pub template: String,

    /// Placeholder value as key=value (repeatable)
    #[arg(short = 'v', long = "value")]
    pub values: Vec<String>,
}

impl FillTemplateArgs {
    /// Execute the fill-template command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let values = match parse_values(&self.values) {
            Ok(values) => values,
            Err(bad) => {
                println!("❌ Expected key=value, got: {bad}");
                return Ok(2);
            }
        };

        tracing::debug!(template = %self.template, values = values.len(), "Filling template");
        println!("{}", fill_template(&self.template, &values));
        Ok(0)
    }
}

/// Split `key=value` pairs; a later key overrides an earlier one
///
/// Returns the first malformed entry as the error.
fn parse_values(raw: &[String]) -> Result<HashMap<&str, &str>, &str> {
    raw.iter()
        .map(|entry| match entry.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key, value)),
            _ => Err(entry.as_str()),
        })
        .collect()
}
