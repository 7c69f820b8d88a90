use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use regex::{Captures, Regex};

/// Read a configuration file as UTF-8, dropping a leading BOM
pub fn load_text_file(config_path: &Path) -> Result<String> {
    let bytes = fs::read(config_path)
        .with_context(|| format!("Failed to read configuration file: {}", config_path.display()))?;
    let (content, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(&bytes);
    if had_errors {
        anyhow::bail!("Configuration file is not valid UTF-8: {}", config_path.display());
    }
    Ok(content.into_owned())
}

/// Replace `${VAR_NAME}` references using `lookup`; unknown variables are left as written
pub fn substitute_env_vars<F>(content: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let replaced = pattern.replace_all(content, |caps: &Captures| {
        lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
    });
    Ok(replaced.into_owned())
}

/// Read a configuration file with environment variable substitution
pub fn read_config_text(config_path: &Path) -> Result<String> {
    let content = load_text_file(config_path)?;
    substitute_env_vars(&content, |name| std::env::var(name).ok())
}
