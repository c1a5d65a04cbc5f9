//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, driven by the clock
//! - Seeded RNG only
//! - Stable iteration order (arena index, projectile spawn order)
//! - No rendering or platform dependencies

pub mod arena;
pub mod collision;
pub mod geom;
pub mod noise;
pub mod state;
pub mod tick;

pub use arena::{Arena, ArenaStatus};
pub use collision::{aim_in_range, footprint_anchor, projectile_hits, projectile_in_window};
pub use geom::Rect;
pub use noise::NoiseField;
pub use state::{ArenaEvent, PlayerAim, Projectile, ReleaseReason, Target};
pub use tick::{SimulationClock, StopReason, TickInput, TickOutcome, arena_layout};
