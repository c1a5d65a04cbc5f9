//! One player's arena: target, aim, projectiles and fire rate limiting
//!
//! Each tick runs these steps in order; later checks read positions written
//! by earlier ones:
//! 1. advance projectiles
//! 2. release projectiles past the top edge
//! 3. advance target and aim
//! 4. projectile blast-window test (`nearby`)
//! 5. aim range test (`armed`)
//! 6. exact hit test
//! 7. cool down the launcher

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::{aim_in_range, projectile_hits, projectile_in_window};
use super::geom::Rect;
use super::noise::NoiseField;
use super::state::{ArenaEvent, PlayerAim, Projectile, ReleaseReason, Target};
use crate::consts::{HALF_SPRITE, NOISE_SEED_RANGE, SPRITE_SIZE};
use crate::tuning::Tuning;

/// Per-tick summary read by the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArenaStatus {
    /// A projectile sits in the target's blast window
    pub nearby: bool,
    /// A projectile struck the target this tick
    pub hit: bool,
}

#[derive(Debug, Clone)]
pub struct Arena {
    /// Position in the clock's update order
    pub index: usize,
    pub bounds: Rect,
    pub target: Target,
    pub player: PlayerAim,
    /// Live projectiles in spawn order
    pub projectiles: Vec<Projectile>,
    /// Time units until the next shot is allowed (fires when <= 0)
    pub fire_cooldown: f32,
    pub nearby: bool,
    /// Set during the tick in which a hit landed
    pub hit: bool,
    /// Where explosions were spawned
    pub explosions: Vec<Vec2>,
    tuning: Tuning,
    next_projectile_id: u32,
    /// Changes for the renderer; accumulate until drained
    events: Vec<ArenaEvent>,
}

impl Arena {
    /// Lay out an arena at `bounds`, drawing noise lanes and the target's
    /// starting row from `rng`
    pub fn new(index: usize, bounds: Rect, tuning: &Tuning, rng: &mut Pcg32) -> Self {
        let (x, y) = (bounds.left(), bounds.top());
        let (w, h) = (bounds.width(), bounds.height());
        let mid_x = x + w / 2.0;

        let aim_bounds = Rect::from_corners(
            Vec2::new(x, y),
            Vec2::new(x + w - SPRITE_SIZE, y + h / 3.0),
        );
        let seeds = (
            rng.random_range(0.0..NOISE_SEED_RANGE),
            rng.random_range(0.0..NOISE_SEED_RANGE),
        );
        let player = PlayerAim::new(
            Vec2::new(mid_x - HALF_SPRITE, y + h * 0.1 - HALF_SPRITE),
            aim_bounds,
            seeds,
            tuning.wander_step,
            tuning.noise_time_scale,
        );

        let jitter = if tuning.target_start_jitter > 0.0 {
            rng.random_range(0.0..tuning.target_start_jitter)
        } else {
            0.0
        };
        let patrol = (
            mid_x - tuning.target_patrol_half_width,
            mid_x + tuning.target_patrol_half_width,
        );
        // Unvalidated tuning can make the patrol narrower than the start offset
        let start_x = (mid_x - HALF_SPRITE).clamp(patrol.0, patrol.1.max(patrol.0));
        let target = Target::new(
            Vec2::new(start_x, y + h * 0.1 + jitter - HALF_SPRITE),
            tuning.target_speed,
            patrol,
        );

        Self::with_entities(index, bounds, target, player, tuning)
    }

    /// Arena with caller-placed target and aim
    pub fn with_entities(
        index: usize,
        bounds: Rect,
        target: Target,
        player: PlayerAim,
        tuning: &Tuning,
    ) -> Self {
        Self {
            index,
            bounds,
            target,
            player,
            projectiles: Vec::new(),
            fire_cooldown: 0.0,
            nearby: false,
            hit: false,
            explosions: Vec::new(),
            tuning: *tuning,
            next_projectile_id: 1,
            events: Vec::new(),
        }
    }

    pub fn status(&self) -> ArenaStatus {
        ArenaStatus {
            nearby: self.nearby,
            hit: self.hit,
        }
    }

    /// Try to launch a projectile from the aim's column at the arena floor.
    ///
    /// Silently ignored while cooling down or while the aim is not armed.
    /// Returns whether a projectile was spawned.
    pub fn fire(&mut self) -> bool {
        if self.fire_cooldown > 0.0 || !self.player.armed {
            log::trace!(
                "arena {}: fire ignored (cooldown {:.1}, armed {})",
                self.index,
                self.fire_cooldown,
                self.player.armed
            );
            return false;
        }

        self.fire_cooldown = self.tuning.fire_cooldown;
        let id = self.next_projectile_id;
        self.next_projectile_id += 1;
        let pos = Vec2::new(self.player.pos.x, self.bounds.bottom());
        self.projectiles
            .push(Projectile::new(id, pos, self.tuning.projectile_speed));
        self.events.push(ArenaEvent::ProjectileSpawned { id, pos });
        log::debug!("arena {}: fired projectile {} at x={:.1}", self.index, id, pos.x);
        true
    }

    /// Advance one tick
    pub fn update(&mut self, delta: f32, elapsed: f32, noise: &NoiseField) {
        self.hit = false;

        for projectile in &mut self.projectiles {
            projectile.update();
        }

        let top = self.bounds.top();
        let (live, gone): (Vec<_>, Vec<_>) = std::mem::take(&mut self.projectiles)
            .into_iter()
            .partition(|p| p.pos.y > top);
        self.projectiles = live;
        for projectile in gone {
            log::debug!("arena {}: projectile {} left the arena", self.index, projectile.id);
            self.events.push(projectile.release(ReleaseReason::OutOfBounds));
        }

        self.target.update();
        self.player.update(elapsed, noise);

        let target = self.target.pos;
        let window = Vec2::new(self.tuning.projectile_window.0, self.tuning.projectile_window.1);
        self.nearby = self
            .projectiles
            .iter()
            .any(|p| projectile_in_window(target, p.pos, window));

        self.player.armed = aim_in_range(target, self.player.pos, self.tuning.player_arm_margin);

        self.resolve_hits();

        if self.fire_cooldown > 0.0 {
            self.fire_cooldown -= delta;
        }
    }

    /// Release every projectile inside the target box; the first one in
    /// spawn order triggers the (single) explosion
    fn resolve_hits(&mut self) {
        let target = self.target.pos;
        if !self.projectiles.iter().any(|p| projectile_hits(target, p.pos)) {
            return;
        }

        let (hits, live): (Vec<_>, Vec<_>) = std::mem::take(&mut self.projectiles)
            .into_iter()
            .partition(|p| projectile_hits(target, p.pos));
        self.projectiles = live;

        self.hit = true;
        self.explosions.push(target);
        self.events.push(ArenaEvent::Explosion { pos: target });
        log::info!(
            "arena {}: projectile {} hit the target at ({:.1}, {:.1})",
            self.index,
            hits[0].id,
            target.x,
            target.y
        );

        for projectile in hits {
            self.events.push(projectile.release(ReleaseReason::Hit));
        }
    }

    /// Take the queued render events, oldest first
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, ArenaEvent> {
        self.events.drain(..)
    }

    pub fn pending_events(&self) -> &[ArenaEvent] {
        &self.events
    }
}
