//! Layout configuration persistence
//!
//! Stores engine preferences in `~/.config/snapdock/config.yaml`

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::snap::OverlapPolicy;

/// Engine configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Tab strip height for docks that don't specify one
    #[serde(default = "default_panel_tabs_height")]
    pub default_panel_tabs_height: f64,

    /// Which dock wins when the pointer is inside several
    #[serde(default)]
    pub overlap_policy: OverlapPolicy,

    /// Stacking indices are re-ranked once the top reaches this value
    #[serde(default = "default_z_index_ceiling")]
    pub z_index_ceiling: i64,
}

fn default_panel_tabs_height() -> f64 {
    24.0
}

fn default_z_index_ceiling() -> i64 {
    i64::MAX / 2
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_panel_tabs_height: default_panel_tabs_height(),
            overlap_policy: OverlapPolicy::default(),
            z_index_ceiling: default_z_index_ceiling(),
        }
    }
}

impl LayoutConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
