//! Simulation entities
//!
//! Positions are sprite top-left corners in canvas coordinates. Entities
//! carry only simulation state; the renderer mirrors them separately.

use glam::Vec2;

use super::geom::Rect;
use super::noise::NoiseField;

/// A target that patrols horizontally between two bounds
#[derive(Debug, Clone)]
pub struct Target {
    pub pos: Vec2,
    /// Horizontal velocity (units per tick); sign flips at the patrol bounds
    pub vel_x: f32,
    /// Allowed range of `pos.x` as (min, max)
    pub patrol: (f32, f32),
}

impl Target {
    pub fn new(pos: Vec2, speed: f32, patrol: (f32, f32)) -> Self {
        Self {
            pos,
            vel_x: speed,
            patrol,
        }
    }

    /// Advance one tick.
    ///
    /// If the step would leave the patrol range the direction reverses
    /// before moving, so the target never crosses a bound.
    pub fn update(&mut self) {
        let next_x = self.pos.x + self.vel_x;
        if next_x < self.patrol.0 || next_x > self.patrol.1 {
            self.vel_x = -self.vel_x;
        }
        self.pos.x += self.vel_x;
    }
}

/// A player's aim point, wandering on noise inside a bounding box
#[derive(Debug, Clone)]
pub struct PlayerAim {
    pub pos: Vec2,
    pub bounds: Rect,
    /// Noise lane for horizontal wander
    pub seed_a: f32,
    /// Noise lane for vertical wander
    pub seed_b: f32,
    /// Units moved per tick at full noise amplitude
    pub step: f32,
    /// Elapsed time to noise-space scale
    pub time_scale: f32,
    /// Set by the arena each tick while the aim is near the target
    pub armed: bool,
}

impl PlayerAim {
    pub fn new(pos: Vec2, bounds: Rect, seeds: (f32, f32), step: f32, time_scale: f32) -> Self {
        Self {
            pos: bounds.clamp(pos),
            bounds,
            seed_a: seeds.0,
            seed_b: seeds.1,
            step,
            time_scale,
            armed: false,
        }
    }

    /// Wander one tick, sampling the shared field at the scaled elapsed time
    pub fn update(&mut self, elapsed: f32, noise: &NoiseField) {
        let t = elapsed * self.time_scale;
        let wander = Vec2::new(noise.sample(self.seed_a, t), noise.sample(self.seed_b, t));
        self.apply_wander(wander);
    }

    /// Move by `wander` (each axis nominally in [-1, 1]) and clamp into bounds
    pub fn apply_wander(&mut self, wander: Vec2) {
        self.pos = self.bounds.clamp(self.pos + wander * self.step);
    }
}

/// A projectile travelling straight up its arena
#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Projectile {
    /// Spawn at `pos` moving up at `speed` units per tick
    pub fn new(id: u32, pos: Vec2, speed: f32) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::new(0.0, -speed),
        }
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
    }

    /// Tear down: yields the notice that detaches the projectile's sprite.
    /// The owning arena removes it from its collection.
    pub fn release(self, reason: ReleaseReason) -> ArenaEvent {
        ArenaEvent::ProjectileReleased {
            id: self.id,
            reason,
        }
    }
}

/// Why a projectile left play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseReason {
    /// Crossed the arena's top edge
    OutOfBounds,
    /// Struck the target
    Hit,
}

/// Changes the renderer has to mirror, queued by an arena until drained
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArenaEvent {
    ProjectileSpawned { id: u32, pos: Vec2 },
    ProjectileReleased { id: u32, reason: ReleaseReason },
    Explosion { pos: Vec2 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn aim_box() -> Rect {
        Rect::from_corners(Vec2::new(10.0, 10.0), Vec2::new(294.0, 123.333))
    }

    #[test]
    fn test_target_reverses_at_bound() {
        let mut target = Target::new(Vec2::new(209.5, 40.0), 0.5, (110.0, 210.0));
        target.update();
        assert_eq!(target.pos.x, 210.0);
        assert_eq!(target.vel_x, 0.5);

        // Next step would overshoot: reverse first, then move
        target.update();
        assert_eq!(target.vel_x, -0.5);
        assert_eq!(target.pos.x, 209.5);
    }

    #[test]
    fn test_target_y_is_fixed() {
        let mut target = Target::new(Vec2::new(150.0, 77.0), 0.5, (110.0, 210.0));
        for _ in 0..1000 {
            target.update();
        }
        assert_eq!(target.pos.y, 77.0);
    }

    #[test]
    fn test_projectile_moves_straight_up() {
        let mut p = Projectile::new(1, Vec2::new(100.0, 350.0), 4.0);
        p.update();
        p.update();
        assert_eq!(p.pos, Vec2::new(100.0, 342.0));
    }

    #[test]
    fn test_release_names_projectile() {
        let p = Projectile::new(7, Vec2::ZERO, 4.0);
        assert_eq!(
            p.release(ReleaseReason::Hit),
            ArenaEvent::ProjectileReleased {
                id: 7,
                reason: ReleaseReason::Hit
            }
        );
    }

    #[test]
    fn test_aim_wander_uses_both_lanes() {
        let noise = NoiseField::new(5);
        let mut aim = PlayerAim::new(Vec2::new(150.0, 60.0), aim_box(), (12.3, 45.6), 1.0, 0.01);
        let start = aim.pos;
        for tick in 1..=200 {
            aim.update(tick as f32, &noise);
        }
        assert_ne!(aim.pos.x, start.x);
        assert_ne!(aim.pos.y, start.y);
    }

    proptest! {
        #[test]
        fn aim_stays_in_bounds(
            moves in prop::collection::vec(
                (prop_oneof![Just(-1.0f32), Just(1.0f32), -1.0f32..=1.0],
                 prop_oneof![Just(-1.0f32), Just(1.0f32), -1.0f32..=1.0]),
                1..400,
            ),
            step in 0.1f32..50.0,
        ) {
            let bounds = aim_box();
            let mut aim = PlayerAim::new(Vec2::new(150.0, 60.0), bounds, (0.0, 0.0), step, 0.01);
            for (dx, dy) in moves {
                aim.apply_wander(Vec2::new(dx, dy));
                prop_assert!(bounds.contains(aim.pos), "escaped to {:?}", aim.pos);
            }
        }

        #[test]
        fn target_stays_on_patrol(start in 110.0f32..=210.0, speed in 0.05f32..5.0, ticks in 1usize..2000) {
            let mut target = Target::new(Vec2::new(start, 40.0), speed, (110.0, 210.0));
            for _ in 0..ticks {
                let before = target.vel_x;
                target.update();
                // At most one reversal per tick
                prop_assert!(target.vel_x == before || target.vel_x == -before);
                prop_assert!(target.pos.x >= 110.0 && target.pos.x <= 210.0, "x = {}", target.pos.x);
            }
        }
    }
}
