// Service List - Configuration
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Application settings read from a local JSON file.
//!
//! The file is optional and never written by the application.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::systemd::ManagerEndpoint;

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Window width.
    #[serde(default = "default_width")]
    pub window_width: i32,
    /// Window height.
    #[serde(default = "default_height")]
    pub window_height: i32,
    /// Service manager queried for units.
    #[serde(default)]
    pub endpoint: ManagerEndpoint,
}

fn default_width() -> i32 { 400 }
fn default_height() -> i32 { 600 }

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: default_width(),
            window_height: default_height(),
            endpoint: ManagerEndpoint::default(),
        }
    }
}

impl Settings {
    /// Location of the settings file.
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("service-list")
            .join("settings.json")
    }

    /// Load settings from the default location, falling back to defaults.
    pub fn load() -> Self {
        let path = Self::path();
        if !path.exists() {
            debug!("No settings file at {}", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load settings: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}
