//! Data-driven game constants
//!
//! Defaults reproduce the reference layout exactly. Overrides come from JSON:
//! LocalStorage on the web, a file on native.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating tuning
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(&'static str),
}

/// Gameplay constants shared by every arena in a match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub arena_width: f32,
    pub arena_height: f32,
    /// Gap around each arena
    pub arena_margin: f32,
    /// Lockout after a shot, in time units
    pub fire_cooldown: f32,
    pub projectile_speed: f32,
    pub wander_step: f32,
    pub noise_time_scale: f32,
    pub target_speed: f32,
    pub target_patrol_half_width: f32,
    pub target_start_jitter: f32,
    /// Blast-window margins (horizontal each side, vertical below the target)
    pub projectile_window: (f32, f32),
    pub player_arm_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            arena_margin: ARENA_MARGIN,
            fire_cooldown: FIRE_COOLDOWN,
            projectile_speed: PROJECTILE_SPEED,
            wander_step: WANDER_STEP,
            noise_time_scale: NOISE_TIME_SCALE,
            target_speed: TARGET_SPEED,
            target_patrol_half_width: TARGET_PATROL_HALF_WIDTH,
            target_start_jitter: TARGET_START_JITTER,
            projectile_window: (PROJECTILE_WINDOW_X, PROJECTILE_WINDOW_Y),
            player_arm_margin: PLAYER_ARM_MARGIN,
        }
    }
}

impl Tuning {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "twin_intercept_tuning";

    /// Parse from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read and parse a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Reject values that would break the arena geometry
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.arena_width < SPRITE_SIZE * 2.0 || self.arena_height < SPRITE_SIZE * 3.0 {
            return Err(TuningError::Invalid("arena too small to hold its sprites"));
        }
        if self.arena_margin < 0.0 {
            return Err(TuningError::Invalid("arena_margin must not be negative"));
        }
        if self.fire_cooldown < 0.0 {
            return Err(TuningError::Invalid("fire_cooldown must not be negative"));
        }
        if self.projectile_speed <= 0.0 {
            return Err(TuningError::Invalid("projectile_speed must be positive"));
        }
        if self.wander_step < 0.0 || self.noise_time_scale < 0.0 {
            return Err(TuningError::Invalid("wander settings must not be negative"));
        }
        if self.target_speed <= 0.0 || self.target_speed > self.target_patrol_half_width {
            return Err(TuningError::Invalid(
                "target_speed must be positive and at most the patrol half width",
            ));
        }
        if self.target_patrol_half_width < HALF_SPRITE {
            return Err(TuningError::Invalid(
                "target_patrol_half_width must cover the target's start column",
            ));
        }
        if self.target_patrol_half_width + SPRITE_SIZE > self.arena_width / 2.0 {
            return Err(TuningError::Invalid("patrol does not fit inside the arena"));
        }
        if self.target_start_jitter < 0.0
            || self.projectile_window.0 < 0.0
            || self.projectile_window.1 < 0.0
            || self.player_arm_margin < 0.0
        {
            return Err(TuningError::Invalid("margins must not be negative"));
        }
        Ok(())
    }

    /// Load tuning overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring stored tuning: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Native stub; use `from_path` for file overrides
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

/// Everything needed to lay out a match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
}

impl MatchConfig {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            tuning: Tuning::default(),
        }
    }

    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "fire_cooldown": 40.0 }"#).unwrap();
        assert_eq!(tuning.fire_cooldown, 40.0);
        assert_eq!(tuning.projectile_speed, PROJECTILE_SPEED);
        assert_eq!(tuning.projectile_window, (10.0, 60.0));
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Tuning::from_json(r#"{ "projectile_speed": 0.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));

        let err = Tuning::from_json(r#"{ "arena_width": 20.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));

        let err = Tuning::from_json(r#"{ "target_speed": 80.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));

        // Start column sits half a sprite left of the arena middle
        let err = Tuning::from_json(r#"{ "target_patrol_half_width": 4.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));
        assert!(Tuning::from_json(r#"{ "target_patrol_half_width": 8.0, "target_speed": 0.5 }"#).is_ok());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ fire_cooldown: }").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse tuning JSON"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Tuning::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, TuningError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn test_tuning_round_trips_through_json() {
        let tuning = Tuning {
            fire_cooldown: 12.0,
            ..Tuning::default()
        };
        let json = serde_json::to_string(&tuning).unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }
}
