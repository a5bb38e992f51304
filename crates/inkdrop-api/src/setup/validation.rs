//! Configuration validation
//!
//! Validates critical configuration values at startup to catch misconfigurations early.

use anyhow::Result;
use inkdrop_core::Config;

/// Validate critical configuration values
///
/// Structural problems (limits, paths, empty allow-lists) are errors. A
/// wildcard CORS origin in production is only warned about, since editors
/// embedded on arbitrary sites are the intended clients.
pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    if config.is_production() && config.cors_allow_origin() == "*" {
        tracing::warn!(
            "CORS allows all origins (*) in production. \
            Set CORS_ALLOW_ORIGIN to the editor's origin to restrict uploads."
        );
    }

    if config.sniff_content() {
        tracing::info!("Content signature checks enabled for uploaded images");
    }

    Ok(())
}
