//! # Pricing Config Loading
//!
//! ## Configuration Sources (Priority Order)
//! 1. `--config <PATH>` flag
//! 2. `ACME_PRICING_CONFIG` environment variable (handled by clap)
//! 3. Built-in Acme Widget Co price list
//!
//! Rules are built once per invocation and shared by every basket.

use std::fs;
use std::path::Path;

use acme_core::{PricingConfig, PricingRules};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Environment variable naming a JSON pricing config.
pub const CONFIG_ENV_VAR: &str = "ACME_PRICING_CONFIG";

/// Loads the pricing config from `path`, or the built-in one.
pub fn load_rules(path: Option<&Path>) -> CliResult<PricingRules> {
    let config = match path {
        Some(path) => {
            info!(path = %path.display(), "Loading pricing config");
            let json = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
                path: path.to_path_buf(),
                source,
            })?;
            PricingConfig::from_json(&json)?
        }
        None => {
            debug!("Using built-in Acme Widget Co pricing");
            PricingConfig::acme_widgets()
        }
    };

    Ok(config.build()?)
}
