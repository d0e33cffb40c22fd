// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run configuration.
//!
//! Settings are plain serde structs with defaults for every field, so a
//! configuration file only needs to name what it changes:
//!
//! ```
//! use tile_symmetry::config::Settings;
//!
//! let settings = Settings::from_json_str(r#"{ "symmetry": { "extended_rotations": false } }"#).unwrap();
//! assert!(!settings.symmetry.extended_rotations);
//! assert!(settings.symmetry.half_turn);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TileError};

/// Which rotations the symmetry engine composes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymmetryConfig {
    /// Also try the hexagonal-plane transforms, which merge orbits of tiles
    /// lying in a hexagonal plane.
    pub extended_rotations: bool,
    /// Follow every alpha-plane turn with the 180-degree turn about a1.
    ///
    /// Without it only 12 of the 24 rotations are reached and the relation
    /// is no longer symmetric; this exists only for diagnostics.
    pub half_turn: bool,
}

impl Default for SymmetryConfig {
    fn default() -> Self {
        Self {
            extended_rotations: true,
            half_turn: true,
        }
    }
}

impl SymmetryConfig {
    /// Only the 24 proper rotations.
    pub fn standard() -> Self {
        Self {
            extended_rotations: false,
            ..Self::default()
        }
    }
}

/// How reduction walks the signature groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReduceConfig {
    /// Reduce signature groups concurrently (requires the `parallel` feature).
    pub parallel: bool,
    /// When reducing a complete enumeration, skip tiles without an arm at a1.
    pub anchor_pruning: bool,
}

impl Default for ReduceConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            anchor_pruning: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub symmetry: SymmetryConfig,
    pub reduce: ReduceConfig,
}

impl Settings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| TileError::Config {
            reason: e.to_string(),
        })
    }

    /// Read settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| TileError::Config {
            reason: format!("{}: {}", path.display(), e),
        })?;
        Self::from_json_str(&text)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| TileError::Config {
            reason: e.to_string(),
        })
    }
}
