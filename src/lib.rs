//! Twin Intercept - a two-player reaction game
//!
//! Each player's aim wanders on its own; the player fires while the aim sits
//! near a patrolling target and tries to time the shot so it intercepts.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (arenas, entities, proximity, clock)
//! - `renderer`: Sprite surface abstraction and per-frame sync
//! - `platform`: Keyboard input mapping
//! - `tuning`: Data-driven game constants

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{MatchConfig, Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// One nominal frame (60 Hz) in simulation time units
    pub const FRAME_DELTA: f32 = 1.0;
    /// Largest frame delta handed to the clock after a stall (e.g. hidden tab)
    pub const MAX_FRAME_DELTA: f32 = 4.0;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 640.0;
    pub const CANVAS_HEIGHT: f32 = 360.0;

    /// Arena layout: two arenas side by side, each inset by the margin
    pub const ARENA_COUNT: usize = 2;
    pub const ARENA_MARGIN: f32 = 10.0;
    pub const ARENA_WIDTH: f32 = 300.0;
    pub const ARENA_HEIGHT: f32 = 340.0;

    /// Every sprite is a 16x16 square anchored at its top-left corner
    pub const SPRITE_SIZE: f32 = 16.0;
    pub const HALF_SPRITE: f32 = SPRITE_SIZE / 2.0;

    /// Time units a fire action locks out further shots
    pub const FIRE_COOLDOWN: f32 = 80.0;
    /// Projectile vertical speed (units per tick, travelling up)
    pub const PROJECTILE_SPEED: f32 = 4.0;

    /// Aim wander step scale (units per tick at full noise amplitude)
    pub const WANDER_STEP: f32 = 1.0;
    /// Elapsed time to noise-space scale
    pub const NOISE_TIME_SCALE: f32 = 0.01;
    /// Noise seeds are drawn from [0, NOISE_SEED_RANGE)
    pub const NOISE_SEED_RANGE: f32 = 100.0;

    /// Target patrol speed (units per tick)
    pub const TARGET_SPEED: f32 = 0.5;
    /// Patrol extends this far either side of the arena centre line
    pub const TARGET_PATROL_HALF_WIDTH: f32 = 50.0;
    /// Random downward offset of the target's starting row
    pub const TARGET_START_JITTER: f32 = 50.0;

    /// Projectile "blast window" margins around the target box
    pub const PROJECTILE_WINDOW_X: f32 = 10.0;
    pub const PROJECTILE_WINDOW_Y: f32 = 60.0;
    /// Aim-to-target margin that arms the player
    pub const PLAYER_ARM_MARGIN: f32 = 20.0;
}
