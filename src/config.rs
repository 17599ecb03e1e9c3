//! Configuration file support for pc-builder.
//!
//! Provides YAML-based configuration through `pc-builder.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::application::dto::OutputFormat;
use crate::build_configuration::domain::Category;
use crate::shared::security::{read_guarded, MAX_CONFIG_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "pc-builder.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub catalog: Option<PathBuf>,
    pub format: Option<String>,
    pub include_listings: Option<bool>,
    pub thousands_separator: Option<String>,
    pub currency_suffix: Option<String>,
    /// Default component per category key, e.g. `psu: Corsair RM850x`.
    pub selection: Option<BTreeMap<String, String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed output format, if one is configured.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|f| f.parse::<OutputFormat>().map_err(|e| anyhow::anyhow!(e)))
            .transpose()
    }

    /// The `selection` map keyed by category.
    pub fn selection_picks(&self) -> Result<BTreeMap<Category, String>> {
        let mut picks = BTreeMap::new();
        if let Some(selection) = &self.selection {
            for (key, name) in selection {
                let category = key.parse::<Category>().map_err(|e| anyhow::anyhow!(e))?;
                picks.insert(category, name.clone());
            }
        }
        Ok(picks)
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_guarded(path, "config file", MAX_CONFIG_FILE_SIZE).with_context(|| {
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

    validate_config(&config)?;
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

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Err(e) = config.output_format() {
        bail!(
            "Invalid config: {}\n\n💡 Hint: Set 'format' to markdown, csv or json.",
            e
        );
    }

    if let Some(suffix) = &config.currency_suffix {
        if suffix.trim().is_empty() {
            bail!(
                "Invalid config: currency_suffix must not be empty.\n\n\
                 💡 Hint: Remove the field to use the default suffix (\"kr\")."
            );
        }
    }

    if let Some(selection) = &config.selection {
        let mut seen: BTreeMap<Category, &String> = BTreeMap::new();
        for (key, name) in selection {
            let Ok(category) = key.parse::<Category>() else {
                bail!(
                    "Invalid config: selection.{} is not a component category.\n\n\
                     💡 Hint: Use one of gpu, motherboard, cpu, ram, psu, case, cooler.",
                    key
                );
            };
            if let Some(first) = seen.insert(category, key) {
                bail!(
                    "Invalid config: selection.{} and selection.{} both name the {}.\n\n\
                     💡 Hint: Keep a single entry per component category.",
                    first,
                    key,
                    category.noun()
                );
            }
            if name.trim().is_empty() {
                bail!(
                    "Invalid config: selection.{} must not be empty.\n\n\
                     💡 Hint: Each selection entry must name a catalog component.",
                    key
                );
            }
        }
    }

    Ok(())
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
