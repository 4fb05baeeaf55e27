use std::{fs, path::Path};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::error;

use crate::config::settings::{LoggingConfig, Settings};

static ENV_VAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{(\w+)(?::([^\}]+))?\}").expect("valid env var pattern")
});

/// Load settings from a YAML file
pub fn file_to_settings(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("can't read settings file '{}'", path.display()))?;
    parse_settings(&content)
}

/// Parse settings from YAML, expanding `${VAR}` and `${VAR:default}` first
pub fn parse_settings(content: &str) -> Result<Settings> {
    let expanded = expand_env_vars(content);
    let mut settings: Settings = if expanded.trim().is_empty() {
        Settings::default()
    } else {
        serde_yaml::from_str(&expanded)
            .inspect_err(|e| error!("parse settings error: {}", e))
            .context("invalid settings format")?
    };

    // Apply defaults
    if settings.logging.is_none() {
        settings.logging = Some(LoggingConfig::default());
    }

    Ok(settings)
}

fn expand_env_vars(input: &str) -> String {
    ENV_VAR
        .replace_all(input, |caps: &regex::Captures| {
            let var = &caps[1];
            let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            std::env::var(var).unwrap_or_else(|_| default.to_string())
        })
        .to_string()
}
