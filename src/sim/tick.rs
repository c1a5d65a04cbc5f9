//! Simulation clock
//!
//! Owns the shared elapsed counter and the arenas, advances them once per
//! rendered frame and stops for good when the match ends.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::arena::Arena;
use super::geom::Rect;
use super::noise::NoiseField;
use crate::consts::ARENA_COUNT;
use crate::tuning::MatchConfig;

/// Fire requests for a single tick, indexed by arena
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub fire: Vec<bool>,
}

impl TickInput {
    /// Input with a fire request for each listed arena
    pub fn firing(arenas: &[usize]) -> Self {
        let len = arenas.iter().max().map_or(0, |&max| max + 1);
        let mut fire = vec![false; len];
        for &arena in arenas {
            fire[arena] = true;
        }
        Self { fire }
    }

    pub fn wants_fire(&self, arena: usize) -> bool {
        self.fire.get(arena).copied().unwrap_or(false)
    }
}

/// Why the clock stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A projectile struck the target in this arena (lowest index wins)
    Hit { arena: usize },
    /// Every arena had a projectile in its blast window at once
    AllNearby,
}

/// Result of a call to `SimulationClock::tick`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick ran; the match continues
    Running,
    /// Tick ran and ended the match
    Stopped(StopReason),
    /// Clock was already stopped; nothing ran
    Halted,
}

/// Drives a fixed set of arenas.
///
/// Arenas queue render events as they change. `tick` discards whatever the
/// previous tick left undrained, so a renderer must sync after every tick and
/// a headless driver never accumulates events.
#[derive(Debug)]
pub struct SimulationClock {
    noise: NoiseField,
    arenas: Vec<Arena>,
    elapsed: f32,
    ticks: u64,
    stopped: Option<StopReason>,
}

impl SimulationClock {
    /// Clock driving exactly `arenas`, in the given order. Each arena is
    /// renumbered to its position, which is what input and stop reasons use.
    pub fn new(mut arenas: Vec<Arena>, noise: NoiseField) -> Self {
        for (position, arena) in arenas.iter_mut().enumerate() {
            if arena.index != position {
                log::warn!("arena {} renumbered to {}", arena.index, position);
                arena.index = position;
            }
        }
        Self {
            noise,
            arenas,
            elapsed: 0.0,
            ticks: 0,
            stopped: None,
        }
    }

    /// Standard side-by-side match built from a seed
    pub fn from_config(config: &MatchConfig) -> Self {
        let tuning = &config.tuning;
        let mut rng = Pcg32::seed_from_u64(config.seed);
        let noise = NoiseField::new(rng.random());

        let arenas = arena_layout(config)
            .into_iter()
            .enumerate()
            .map(|(index, bounds)| Arena::new(index, bounds, tuning, &mut rng))
            .collect();

        log::info!("Match laid out with seed {}", config.seed);
        Self::new(arenas, noise)
    }

    pub fn arenas(&self) -> &[Arena] {
        &self.arenas
    }

    pub fn arenas_mut(&mut self) -> &mut [Arena] {
        &mut self.arenas
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.is_some()
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stopped
    }

    /// Advance every arena by one frame of `delta` time units.
    ///
    /// Fire requests are applied to each arena just before its update. Once
    /// stopped the clock never runs again.
    pub fn tick(&mut self, input: &TickInput, delta: f32) -> TickOutcome {
        if self.stopped.is_some() {
            return TickOutcome::Halted;
        }

        self.elapsed += delta;
        self.ticks += 1;

        for (position, arena) in self.arenas.iter_mut().enumerate() {
            let stale = arena.drain_events().count();
            if stale > 0 {
                log::trace!("arena {}: dropped {} undrained events", position, stale);
            }
            if input.wants_fire(position) {
                arena.fire();
            }
            arena.update(delta, self.elapsed, &self.noise);
        }

        let reason = if let Some(position) = self.arenas.iter().position(|a| a.status().hit) {
            Some(StopReason::Hit { arena: position })
        } else if !self.arenas.is_empty() && self.arenas.iter().all(|a| a.status().nearby) {
            Some(StopReason::AllNearby)
        } else {
            None
        };

        match reason {
            Some(reason) => {
                log::info!(
                    "Clock stopped at tick {} (elapsed {:.1}): {:?}",
                    self.ticks,
                    self.elapsed,
                    reason
                );
                self.stopped = Some(reason);
                TickOutcome::Stopped(reason)
            }
            None => TickOutcome::Running,
        }
    }
}

/// Bounds of each arena: equal slots across the canvas, each inset by the
/// margin
pub fn arena_layout(config: &MatchConfig) -> Vec<Rect> {
    let t = &config.tuning;
    let slot = t.arena_width + t.arena_margin * 2.0;
    (0..ARENA_COUNT)
        .map(|i| {
            Rect::new(
                t.arena_margin + slot * i as f32,
                t.arena_margin,
                t.arena_width,
                t.arena_height,
            )
        })
        .collect()
}
