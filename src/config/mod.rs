//! # Configuration
//!
//! Merged configuration system combining global (~/.config/redeemcode/config)
//! and project (.redeemcode) settings. Command-line flags override both.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod global;
pub mod project;

use std::path::PathBuf;

use anyhow::{Context, Result};

pub use self::{
    global::{set_home_override, GlobalConfig},
    project::ProjectConfig,
};
use crate::code::GenerationConfig;

/// Merged configuration with project settings overriding global
#[derive(Debug, Clone)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,

    /// Project configuration
    pub project: ProjectConfig,

    /// Directory holding the project config, if one was found
    pub project_root: Option<PathBuf>,
}

/// Values given on the command line, taking precedence over config files.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub max_scope: Option<u64>,
    pub batch_count: Option<usize>,
}

impl Config {
    /// Loads configuration from both global and project sources
    pub fn load() -> Result<Self> {
        let global = GlobalConfig::load()?;
        let project_root = ProjectConfig::find_project_root();
        let project = match &project_root {
            Some(root) => ProjectConfig::load(root)?,
            None => ProjectConfig::default(),
        };

        Ok(Self {
            global,
            project,
            project_root,
        })
    }

    /// Returns the effective max scope (project overrides global)
    pub fn max_scope(&self) -> u64 {
        self.project.max_scope.unwrap_or(self.global.max_scope)
    }

    /// Returns the effective batch count (project overrides global)
    pub fn batch_count(&self) -> usize {
        self.project.batch_count.unwrap_or(self.global.batch_count)
    }

    /// Resolves the generation parameters, applying command-line overrides.
    pub fn generation(&self, overrides: Overrides) -> Result<GenerationConfig> {
        let max_scope = overrides.max_scope.unwrap_or_else(|| self.max_scope());
        let batch_count = overrides.batch_count.unwrap_or_else(|| self.batch_count());
        GenerationConfig::new(max_scope, batch_count).context("Invalid generation settings")
    }
}
