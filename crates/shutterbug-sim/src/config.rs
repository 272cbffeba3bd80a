//! Simulation configuration.
//!
//! Every field has a default taken from `shutterbug_core::constants`, so a
//! config file only needs to name what it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use shutterbug_core::constants::*;
use shutterbug_core::types::{AudioClip, Position};

/// Errors raised while loading or validating a config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    pub spawner: SpawnerConfig,
    pub capture: CaptureConfig,
    pub viewpoint: ViewpointConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            spawner: SpawnerConfig::default(),
            capture: CaptureConfig::default(),
            viewpoint: ViewpointConfig::default(),
        }
    }
}

/// Target spawner cadence and placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    /// Delay before the first spawn (seconds).
    pub warmup_secs: f64,
    /// Interval between spawns (seconds).
    pub spawn_rate_secs: f64,
    /// Horizontal offsets are drawn from `[-spawn_width, spawn_width)`.
    pub spawn_width: f64,
    /// Depth offsets are whole units drawn from `[-spawn_depth, spawn_depth)`.
    pub spawn_depth: i32,
    /// Spawner anchor in scene space.
    pub anchor: Position,
    /// Targets at or below this height are removed.
    pub floor_height: f64,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            warmup_secs: SPAWN_WARMUP_SECS,
            spawn_rate_secs: SPAWN_RATE_SECS,
            spawn_width: SPAWN_WIDTH,
            spawn_depth: SPAWN_DEPTH,
            anchor: Position::new(0.0, SPAWN_HEIGHT, SPAWN_DISTANCE),
            floor_height: FLOOR_HEIGHT,
        }
    }
}

/// Detection geometry and presentation timings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Sphere-cast radius. 0 casts a plain ray.
    pub detection_radius: f64,
    pub max_range: f64,
    /// Delay before a freshly scored target is removed (seconds).
    pub despawn_delay_secs: f64,
    /// Flash overlay opacity lost per second.
    pub flash_fade_rate: f64,
    /// Time the photo is held fully opaque (seconds).
    pub photo_visible_secs: f64,
    /// Photo frame opacity lost per second.
    pub photo_fade_rate: f64,
    /// Shutter sound. `None` plays nothing.
    pub shutter_clip: Option<AudioClip>,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            detection_radius: DETECTION_RADIUS,
            max_range: DETECTION_MAX_RANGE,
            despawn_delay_secs: CAPTURED_DESPAWN_DELAY_SECS,
            flash_fade_rate: FLASH_FADE_RATE,
            photo_visible_secs: PHOTO_VISIBLE_SECS,
            photo_fade_rate: PHOTO_FADE_RATE,
            shutter_clip: Some(AudioClip::new("shutter")),
        }
    }
}

/// Look, crouch and zoom tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewpointConfig {
    /// Body anchor; the eye sits `eye_height` above it.
    pub base: Position,
    pub mouse_sensitivity: f64,
    pub upper_look_limit_deg: f64,
    pub lower_look_limit_deg: f64,
    pub standing_eye_height: f64,
    pub crouching_eye_height: f64,
    pub crouch_speed: f64,
    pub default_fov_deg: f64,
    pub zoomed_fov_deg: f64,
}

impl Default for ViewpointConfig {
    fn default() -> Self {
        Self {
            base: Position::new(0.0, 1.0, 0.0),
            mouse_sensitivity: MOUSE_SENSITIVITY,
            upper_look_limit_deg: UPPER_LOOK_LIMIT_DEG,
            lower_look_limit_deg: LOWER_LOOK_LIMIT_DEG,
            standing_eye_height: STANDING_EYE_HEIGHT,
            crouching_eye_height: CROUCHING_EYE_HEIGHT,
            crouch_speed: CROUCH_SPEED,
            default_fov_deg: DEFAULT_FOV_DEG,
            zoomed_fov_deg: ZOOMED_FOV_DEG,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("time_scale", self.time_scale)?;
        non_negative("spawner.warmup_secs", self.spawner.warmup_secs)?;
        positive("spawner.spawn_rate_secs", self.spawner.spawn_rate_secs)?;
        non_negative("spawner.spawn_width", self.spawner.spawn_width)?;
        if self.spawner.spawn_depth < 0 {
            return Err(ConfigError::Invalid {
                field: "spawner.spawn_depth",
                reason: format!("must be >= 0, got {}", self.spawner.spawn_depth),
            });
        }
        non_negative("capture.detection_radius", self.capture.detection_radius)?;
        positive("capture.max_range", self.capture.max_range)?;
        non_negative("capture.despawn_delay_secs", self.capture.despawn_delay_secs)?;
        positive("capture.flash_fade_rate", self.capture.flash_fade_rate)?;
        non_negative("capture.photo_visible_secs", self.capture.photo_visible_secs)?;
        positive("capture.photo_fade_rate", self.capture.photo_fade_rate)?;
        if self.viewpoint.upper_look_limit_deg > self.viewpoint.lower_look_limit_deg {
            return Err(ConfigError::Invalid {
                field: "viewpoint.upper_look_limit_deg",
                reason: "must not exceed lower_look_limit_deg".to_string(),
            });
        }
        non_negative("viewpoint.crouch_speed", self.viewpoint.crouch_speed)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be > 0, got {value}"),
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be >= 0, got {value}"),
        })
    }
}
