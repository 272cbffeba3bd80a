//! Simulation constants and tuning defaults.
//!
//! Every default here can be overridden through the sim crate's `SimConfig`.

/// Nominal simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per nominal tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Spawner ---

/// Delay before the first spawn (seconds).
pub const SPAWN_WARMUP_SECS: f64 = 2.0;

/// Interval between spawns after the warm-up (seconds).
pub const SPAWN_RATE_SECS: f64 = 1.5;

/// Half-width of the horizontal spawn band (units either side of the spawner).
pub const SPAWN_WIDTH: f64 = 15.0;

/// Depth jitter bound. Offsets are whole units in `[-SPAWN_DEPTH, SPAWN_DEPTH)`.
pub const SPAWN_DEPTH: i32 = 5;

/// Spawner anchor height above the floor.
pub const SPAWN_HEIGHT: f64 = 20.0;

/// Spawner anchor distance in front of the viewpoint.
pub const SPAWN_DISTANCE: f64 = 30.0;

/// Rolls strictly above this are Rare.
pub const RARE_ROLL_THRESHOLD: f64 = 0.9;

/// Rolls strictly above this (and not Rare) are Fast.
pub const FAST_ROLL_THRESHOLD: f64 = 0.7;

// --- Targets ---

pub const COMMON_POINTS: u64 = 1_000;
pub const FAST_POINTS: u64 = 5_000;
pub const RARE_POINTS: u64 = 10_000;

/// Descent speed per category (units/s).
pub const COMMON_SPEED: f64 = 2.0;
pub const FAST_SPEED: f64 = 6.0;
pub const RARE_SPEED: f64 = 3.5;

/// Maximum lateral drift sampled at spawn (units/s).
pub const MAX_LATERAL_DRIFT: f64 = 1.5;

/// Collider radius of a target body.
pub const TARGET_COLLIDER_RADIUS: f64 = 0.6;

/// Height at which a target touches the floor and is removed.
pub const FLOOR_HEIGHT: f64 = 0.0;

/// Maximum `Parent` links followed when resolving a hit to a target.
pub const MAX_PARENT_DEPTH: usize = 8;

// --- Capture ---

/// Sphere-cast radius. Zero selects a plain ray.
pub const DETECTION_RADIUS: f64 = 0.5;

/// Maximum detection range (units).
pub const DETECTION_MAX_RANGE: f64 = 100.0;

/// Delay before a scored target is removed, so it still shows in the photo (seconds).
pub const CAPTURED_DESPAWN_DELAY_SECS: f64 = 0.1;

/// Flash overlay fade rate (opacity per second).
pub const FLASH_FADE_RATE: f64 = 10.0;

/// How long the photo stays fully opaque (seconds).
pub const PHOTO_VISIBLE_SECS: f64 = 2.0;

/// Photo frame fade rate (opacity per second).
pub const PHOTO_FADE_RATE: f64 = 2.0;

// --- Viewpoint ---

pub const MOUSE_SENSITIVITY: f64 = 100.0;

/// Pitch limits (degrees). Negative looks up.
pub const UPPER_LOOK_LIMIT_DEG: f64 = -80.0;
pub const LOWER_LOOK_LIMIT_DEG: f64 = 80.0;

pub const STANDING_EYE_HEIGHT: f64 = 0.8;
pub const CROUCHING_EYE_HEIGHT: f64 = 0.2;
pub const CROUCH_SPEED: f64 = 8.0;

/// Vertical field of view (degrees).
pub const DEFAULT_FOV_DEG: f64 = 60.0;
pub const ZOOMED_FOV_DEG: f64 = 30.0;
