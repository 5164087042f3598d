//! # Project Configuration
//!
//! Handles the project-level configuration stored at `.redeemcode` in a
//! project directory. Every field is optional and overrides the global value.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::PROJECT_CONFIG_FILE;

/// Project configuration stored at .redeemcode in the project root
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Suffix domain override
    #[serde(default)]
    pub max_scope: Option<u64>,

    /// Batch size override
    #[serde(default)]
    pub batch_count: Option<usize>,
}

impl ProjectConfig {
    /// Finds the project root by searching for .redeemcode upward from `start`
    pub fn find_project_root_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if current.join(PROJECT_CONFIG_FILE).exists() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Finds the project root by searching upward from the current directory
    pub fn find_project_root() -> Option<PathBuf> {
        Self::find_project_root_from(&env::current_dir().ok()?)
    }

    /// Returns the path to the project config file
    pub fn path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_CONFIG_FILE)
    }

    /// Loads the project config from .redeemcode in the given directory
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = Self::path(project_root);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read project config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse project config: {}", path.display()))
    }
}
