//! Controller tunables + RON config loading
//!
//! `ControllerConfig` живёт на player entity (component), `ProjectilePrefab` это resource.
//! Файл конфига (RON) описывает оба:
//!
//! ```text
//! (
//!     controller: (speed: 2.0, rotation_speed: 10.0, jump_force: 10.0),
//!     projectile: (muzzle_speed: 30.0),
//! )
//! ```
//!
//! Отсутствующие поля берутся из `Default`.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::projectile::ProjectilePrefab;

/// Collision group bit used for ground colliders
pub const GROUND_GROUP_BITS: u32 = 0b0001;

/// Character controller tunables
///
/// `ground_groups` is only the collision membership given to ground colliders
/// by `spawn_ground`. Jump resets do NOT filter on it: any contact resets.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct ControllerConfig {
    /// Movement speed multiplier (applied twice to the move input)
    pub speed: f32,
    /// Yaw degrees per second per unit of look input
    pub rotation_speed: f32,
    /// Upward impulse per jump
    pub jump_force: f32,
    /// Extra downward force, every fixed step
    pub fall_force: f32,
    /// Collision membership bits of ground colliders
    pub ground_groups: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            speed: 2.0,
            rotation_speed: 10.0,
            jump_force: 10.0,
            fall_force: 20.0,
            ground_groups: GROUND_GROUP_BITS,
        }
    }
}

/// Whole config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShooterConfig {
    pub controller: ControllerConfig,
    pub projectile: ProjectilePrefab,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

impl ShooterConfig {
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_ron_str(&source)
    }

    /// Load `path` if given; on any error log it and fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match Self::load(path) {
            Ok(config) => {
                crate::log_info(&format!("Loaded config from {}", path.display()));
                config
            }
            Err(err) => {
                crate::log_error(&format!("{} (using defaults)", err));
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_defaults() {
        let config = ControllerConfig::default();
        assert_eq!(config.jump_force, 10.0);
        assert_eq!(config.fall_force, 20.0);
        assert_eq!(config.ground_groups, GROUND_GROUP_BITS);
    }

    #[test]
    fn test_partial_ron_fills_defaults() {
        let config = ShooterConfig::from_ron_str("(controller: (speed: 4.5))").unwrap();

        assert_eq!(config.controller.speed, 4.5);
        assert_eq!(config.controller.jump_force, 10.0);
        assert_eq!(config.projectile, ProjectilePrefab::default());
    }

    #[test]
    fn test_shipped_config_parses() {
        let config = ShooterConfig::from_ron_str(include_str!("../../../config/shooter.ron")).unwrap();
        assert_eq!(config, ShooterConfig::default());
    }

    #[test]
    fn test_empty_ron_is_default() {
        let config = ShooterConfig::from_ron_str("()").unwrap();
        assert_eq!(config, ShooterConfig::default());
    }

    #[test]
    fn test_malformed_ron_is_parse_error() {
        let err = ShooterConfig::from_ron_str("(controller: (speed: \"fast\"))").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "got {:?}", err);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ShooterConfig::load("/definitely/not/here/shooter.ron").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }), "got {:?}", err);
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(ShooterConfig::load_or_default(None), ShooterConfig::default());
    }
}
