//! # Global Configuration
//!
//! Handles the global user configuration stored at `~/.config/redeemcode/config`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BATCH_COUNT, DEFAULT_MAX_SCOPE, GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME,
};

/// Valid field names in the global config file.
/// Used for validation to detect unknown/invalid fields.
const VALID_FIELDS: &[&str] = &["max_scope", "batch_count"];

/// Legacy field names that should be migrated to their new names.
/// Format: (`old_name`, `new_name`)
const LEGACY_ALIASES: &[(&str, &str)] = &[("num", "batch_count"), ("MaxScope", "max_scope")];

/// Result of validating a config file.
#[derive(Debug, Default)]
pub struct ConfigValidation {
    /// Fields that were missing and have been added with defaults
    pub missing: Vec<String>,
    /// Fields that were unrecognized and have been removed
    pub invalid: Vec<String>,
    /// Fields that were migrated from old names (`old_name`, `new_name`)
    pub migrated: Vec<(String, String)>,
}

impl ConfigValidation {
    /// Returns true if any changes were made to the config.
    pub fn has_changes(&self) -> bool {
        !self.missing.is_empty() || !self.invalid.is_empty() || !self.migrated.is_empty()
    }
}

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect global config without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Global configuration stored at ~/.config/redeemcode/config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Minimum number of distinct random suffixes per timestamp
    #[serde(default = "default_max_scope", alias = "MaxScope")]
    pub max_scope: u64,

    /// Number of codes generated per batch
    #[serde(default = "default_batch_count", alias = "num")]
    pub batch_count: usize,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            max_scope: DEFAULT_MAX_SCOPE,
            batch_count: DEFAULT_BATCH_COUNT,
        }
    }
}

#[allow(clippy::missing_const_for_fn)] // serde default functions can't be const
fn default_max_scope() -> u64 {
    DEFAULT_MAX_SCOPE
}

#[allow(clippy::missing_const_for_fn)]
fn default_batch_count() -> usize {
    DEFAULT_BATCH_COUNT
}

impl GlobalConfig {
    /// Returns the path to the global config file (~/.config/redeemcode/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        let home = get_home_override().or_else(dirs::home_dir)?;
        Some(
            home.join(".config")
                .join(GLOBAL_CONFIG_DIR)
                .join(GLOBAL_CONFIG_FILENAME),
        )
    }

    /// Loads the global config. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Loads the global config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config: {}", path.display()))
    }

    /// Creates the global config with default values and comments.
    /// Used by `redeem setup`. Returns true if created, false if already exists.
    pub fn create_default_if_missing() -> Result<bool> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        Self::default().save_with_comments(&path)?;
        Ok(true)
    }

    /// Saves config with detailed comments for all options.
    fn save_with_comments(&self, path: &Path) -> Result<()> {
        let content = format!(
            r#"# redeemcode Global Configuration
# This file configures redeemcode defaults for every directory.
# Location: ~/.config/redeemcode/config
# A .redeemcode file in a project directory overrides these values.

# Minimum number of distinct random suffixes available to one timestamp.
# The suffix width is ceil(log2(max_scope)) bits, rounded up so the whole
# code fills complete 5-bit characters. Larger values give longer codes.
# Default: {DEFAULT_MAX_SCOPE}
max_scope = {max_scope}

# Number of codes generated per batch. Must not exceed the suffix domain.
# Default: {DEFAULT_BATCH_COUNT}
batch_count = {batch_count}
"#,
            max_scope = self.max_scope,
            batch_count = self.batch_count,
        );

        fs::write(path, content)
            .with_context(|| format!("Failed to write global config: {}", path.display()))
    }

    /// Validates the global config file and returns any issues found.
    ///
    /// This parses the raw TOML to detect unknown fields, legacy field names
    /// and missing fields. A legacy name next to its canonical name is
    /// reported as invalid; the canonical value wins.
    pub fn validate() -> Result<ConfigValidation> {
        let (_, table) = Self::read_table()?;
        Ok(Self::validate_table(&table))
    }

    fn validate_table(table: &toml::Table) -> ConfigValidation {
        let mut validation = ConfigValidation::default();

        for key in table.keys() {
            if let Some((old, new)) = LEGACY_ALIASES.iter().find(|(old, _)| old == key) {
                if table.contains_key(*new) {
                    validation.invalid.push(key.clone());
                } else {
                    validation
                        .migrated
                        .push(((*old).to_string(), (*new).to_string()));
                }
            } else if !VALID_FIELDS.contains(&key.as_str()) {
                validation.invalid.push(key.clone());
            }
        }

        for &field in VALID_FIELDS {
            if !table.contains_key(field) {
                let covered_by_alias = LEGACY_ALIASES
                    .iter()
                    .any(|(old, new)| *new == field && table.contains_key(*old));
                if !covered_by_alias {
                    validation.missing.push(field.to_string());
                }
            }
        }

        validation
    }

    /// Reads the global config file as a raw TOML table.
    fn read_table() -> Result<(PathBuf, toml::Table)> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        if !path.exists() {
            anyhow::bail!("Global config not found");
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        let table = toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config: {}", path.display()))?;

        Ok((path, table))
    }

    /// Validates and rewrites the global config file if needed.
    ///
    /// Invalid keys are dropped from the raw table before serde fills
    /// defaults and resolves aliases; re-saving writes canonical names.
    pub fn update_if_needed() -> Result<ConfigValidation> {
        let (path, mut table) = Self::read_table()?;
        let validation = Self::validate_table(&table);

        if !validation.has_changes() {
            return Ok(validation);
        }

        for key in &validation.invalid {
            table.remove(key);
        }

        let config: Self = toml::Value::Table(table)
            .try_into()
            .with_context(|| format!("Failed to parse global config: {}", path.display()))?;
        config.save_with_comments(&path)?;

        Ok(validation)
    }
}
