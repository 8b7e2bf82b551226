//! Configuration file support for leed-report.
//!
//! Provides YAML-based configuration through `leed-report.config.yml`
//! files, plus the merge of config values with command-line arguments.
//! Everything the fetch needs travels through here explicitly; there is
//! no ambient session state.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::adapters::outbound::network::pollination_client::DEFAULT_API_BASE;
use crate::application::dto::ReportFormat;
use crate::cli::Args;
use crate::report_generation::domain::DisplayMode;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "leed-report.config.yml";
const DEFAULT_CACHE_DIR: &str = "data";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_key: Option<String>,
    pub api_base: Option<String>,
    pub cache_dir: Option<PathBuf>,
    pub display_mode: Option<String>,
    pub default_run_url: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Fully resolved settings: command-line arguments override config file
/// values, which override the built-in defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub run_url: String,
    pub api_key: Option<String>,
    pub api_base: String,
    pub cache_dir: PathBuf,
    pub display_mode: DisplayMode,
    pub format: ReportFormat,
    pub output: Option<PathBuf>,
    pub refresh: bool,
    pub strict: bool,
}

impl Settings {
    pub fn resolve(args: Args, config: ConfigFile) -> Result<Self> {
        let run_url = args
            .run_url
            .or(config.default_run_url)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No run URL given.\n\n💡 Hint: Pass the run URL as the first argument or set default_run_url in {}.",
                    CONFIG_FILENAME
                )
            })?;

        let display_mode = match args.display_mode {
            Some(mode) => mode,
            None => match config.display_mode.as_deref() {
                Some(raw) => DisplayMode::from_str(raw).map_err(|e| anyhow::anyhow!(e))?,
                None => DisplayMode::default(),
            },
        };

        Ok(Self {
            run_url,
            api_key: args.api_key.or(config.api_key),
            api_base: config
                .api_base
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            cache_dir: args
                .cache_dir
                .or(config.cache_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR)),
            display_mode,
            format: args.format,
            output: args.output,
            refresh: args.refresh,
            strict: args.strict,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    const RUN_URL: &str =
        "https://app.pollination.cloud/projects/o/p/jobs/0cd8f29b-71e1-44be-9ce2-7d4c6e4e5d13/runs/ec6bbd7e-1579-550c-9e89-2ba424cd2d04";

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
api_key: secret-key
api_base: https://api.staging.pollination.cloud
cache_dir: /tmp/leed-cache
display_mode: shaded
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("secret-key"));
        assert_eq!(
            config.api_base.as_deref(),
            Some("https://api.staging.pollination.cloud")
        );
        assert_eq!(config.cache_dir, Some(PathBuf::from("/tmp/leed-cache")));
        assert_eq!(config.display_mode.as_deref(), Some("shaded"));
        assert!(config.default_run_url.is_none());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "api_key: from-discovery\n",
        )
        .unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_some());
        assert_eq!(config.unwrap().api_key.as_deref(), Some("from-discovery"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_unknown_fields_collected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            "api_key: k\nunknown_field: true\nanother_unknown: value\n",
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("unknown_field"));
        assert!(config.unknown_fields.contains_key("another_unknown"));
    }

    #[test]
    fn test_settings_defaults() {
        let args = Args::parse_from(["leed-report", RUN_URL]);
        let settings = Settings::resolve(args, ConfigFile::default()).unwrap();
        assert_eq!(settings.run_url, RUN_URL);
        assert_eq!(settings.api_base, DEFAULT_API_BASE);
        assert_eq!(settings.cache_dir, PathBuf::from(DEFAULT_CACHE_DIR));
        assert_eq!(settings.display_mode, DisplayMode::Wireframe);
        assert!(settings.api_key.is_none());
    }

    #[test]
    fn test_settings_args_override_config() {
        let args = Args::parse_from(["leed-report", RUN_URL, "-k", "cli-key", "-d", "points"]);
        let config = ConfigFile {
            api_key: Some("config-key".to_string()),
            display_mode: Some("shaded".to_string()),
            ..Default::default()
        };
        let settings = Settings::resolve(args, config).unwrap();
        assert_eq!(settings.api_key.as_deref(), Some("cli-key"));
        assert_eq!(settings.display_mode, DisplayMode::Points);
    }

    #[test]
    fn test_settings_config_run_url_fallback() {
        let args = Args::parse_from(["leed-report"]);
        let config = ConfigFile {
            default_run_url: Some(RUN_URL.to_string()),
            ..Default::default()
        };
        let settings = Settings::resolve(args, config).unwrap();
        assert_eq!(settings.run_url, RUN_URL);
    }

    #[test]
    fn test_settings_missing_run_url_fails() {
        let args = Args::parse_from(["leed-report"]);
        let result = Settings::resolve(args, ConfigFile::default());
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("No run URL given"));
    }

    #[test]
    fn test_settings_bad_config_display_mode_fails() {
        let args = Args::parse_from(["leed-report", RUN_URL]);
        let config = ConfigFile {
            display_mode: Some("solid".to_string()),
            ..Default::default()
        };
        assert!(Settings::resolve(args, config).is_err());
    }
}
