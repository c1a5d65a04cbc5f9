use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use twin_intercept::MatchConfig;
use twin_intercept::Tuning;
use twin_intercept::platform::FireQueue;
use twin_intercept::renderer::{ArenaSprites, SpriteScene, Texture};
use twin_intercept::sim::{
    Arena, ArenaEvent, NoiseField, PlayerAim, Projectile, Rect, ReleaseReason, SimulationClock,
    StopReason, Target, TickInput, TickOutcome, arena_layout,
};

/// Arena in `slot` with a motionless target at `target` and a motionless aim
/// parked in the corner
fn fixed_arena(slot: usize, target: Vec2) -> Arena {
    let bounds = arena_layout(&MatchConfig::new(0))[slot];
    let target = Target::new(target, 0.0, (target.x - 50.0, target.x + 50.0));
    let aim_bounds = Rect::from_corners(
        bounds.min,
        Vec2::new(bounds.right() - 16.0, bounds.top() + bounds.height() / 3.0),
    );
    let player = PlayerAim::new(bounds.min, aim_bounds, (10.0, 20.0), 0.0, 0.01);
    Arena::with_entities(slot, bounds, target, player, &Tuning::default())
}

#[test]
fn projectile_under_target_hits_exactly_once() {
    let mut left = fixed_arena(0, Vec2::new(100.0, 50.0));
    left.projectiles.push(Projectile::new(1, Vec2::new(100.0, 350.0), 4.0));
    let right = fixed_arena(1, Vec2::new(472.0, 50.0));
    let mut clock = SimulationClock::new(vec![left, right], NoiseField::new(11));

    let mut hits = 0;
    for _ in 0..200 {
        match clock.tick(&TickInput::default(), 1.0) {
            TickOutcome::Halted => break,
            _ => {
                if clock.arenas()[0].hit {
                    hits += 1;
                }
            }
        }
    }

    assert_eq!(hits, 1);
    assert_eq!(clock.stop_reason(), Some(StopReason::Hit { arena: 0 }));
    assert_eq!(clock.arenas()[0].explosions, vec![Vec2::new(100.0, 50.0)]);
    assert!(clock.arenas()[0].projectiles.is_empty());
}

#[test]
fn fire_then_immediate_refire() {
    let mut arena = fixed_arena(0, Vec2::new(152.0, 40.0));
    arena.player.pos = arena.target.pos;
    arena.update(1.0, 1.0, &NoiseField::new(3));
    assert!(arena.player.armed);
    assert!(arena.fire_cooldown <= 0.0);

    assert!(arena.fire());
    assert_eq!(arena.projectiles.len(), 1);
    assert_eq!(arena.fire_cooldown, 80.0);

    assert!(!arena.fire());
    assert_eq!(arena.projectiles.len(), 1);
}

#[test]
fn both_arenas_nearby_stops_the_clock() {
    let mut left = fixed_arena(0, Vec2::new(152.0, 60.0));
    let mut right = fixed_arena(1, Vec2::new(472.0, 60.0));
    left.projectiles.push(Projectile::new(1, Vec2::new(152.0, 124.0), 4.0));
    right.projectiles.push(Projectile::new(1, Vec2::new(472.0, 124.0), 4.0));
    let mut clock = SimulationClock::new(vec![left, right], NoiseField::new(5));

    let outcome = clock.tick(&TickInput::default(), 1.0);
    assert_eq!(outcome, TickOutcome::Stopped(StopReason::AllNearby));
    assert!(clock.arenas().iter().all(|a| a.nearby && !a.hit));

    let snapshot: Vec<(Vec2, Vec2)> = clock
        .arenas()
        .iter()
        .map(|a| (a.target.pos, a.projectiles[0].pos))
        .collect();
    for _ in 0..10 {
        assert_eq!(clock.tick(&TickInput::firing(&[0, 1]), 1.0), TickOutcome::Halted);
    }
    let after: Vec<(Vec2, Vec2)> = clock
        .arenas()
        .iter()
        .map(|a| (a.target.pos, a.projectiles[0].pos))
        .collect();
    assert_eq!(snapshot, after);
    assert_eq!(clock.ticks(), 1);
}

#[test]
fn projectile_leaving_top_skips_hit_test() {
    // Target straddling the top edge so the exiting projectile overlaps it
    let mut arena = fixed_arena(0, Vec2::new(150.0, 5.0));
    arena.projectiles.push(Projectile::new(3, Vec2::new(150.0, 10.5), 4.0));

    arena.update(1.0, 1.0, &NoiseField::new(9));

    assert!(arena.projectiles.is_empty());
    assert!(!arena.hit);
    assert!(!arena.nearby);
    let events: Vec<ArenaEvent> = arena.drain_events().collect();
    assert_eq!(
        events,
        vec![ArenaEvent::ProjectileReleased {
            id: 3,
            reason: ReleaseReason::OutOfBounds
        }]
    );
}

#[test]
fn seeded_matches_end_for_a_stated_reason() {
    for seed in 0..20u64 {
        let config = MatchConfig::new(seed);
        let mut clock = SimulationClock::from_config(&config);
        let mut scene = SpriteScene::new();
        let mut sprites: Vec<ArenaSprites> = clock
            .arenas()
            .iter()
            .map(|arena| ArenaSprites::attach(arena, &mut scene))
            .collect();
        let mut keys = FireQueue::default();
        let mut presses = Pcg32::seed_from_u64(seed + 1000);

        for _ in 0..20_000 {
            for key in ["a", "l"] {
                if presses.random_bool(0.1) {
                    keys.key_down(key);
                }
            }
            let outcome = clock.tick(&keys.drain(), 1.0);
            for (binding, arena) in sprites.iter_mut().zip(clock.arenas_mut()) {
                binding.sync(arena, &mut scene);
            }

            for arena in clock.arenas() {
                assert!(arena.player.bounds.contains(arena.player.pos));
                let (lo, hi) = arena.target.patrol;
                assert!(arena.target.pos.x >= lo && arena.target.pos.x <= hi);
                assert!(arena.projectiles.iter().all(|p| p.pos.y > arena.bounds.top()));
            }
            let live: usize = clock.arenas().iter().map(|a| a.projectiles.len()).sum();
            assert_eq!(scene.count(Texture::Missile), live);

            match outcome {
                TickOutcome::Stopped(StopReason::Hit { arena }) => {
                    assert!(clock.arenas()[arena].hit);
                    assert!(scene.count(Texture::Explosion) >= 1);
                    break;
                }
                TickOutcome::Stopped(StopReason::AllNearby) => {
                    assert!(clock.arenas().iter().all(|a| a.nearby));
                    break;
                }
                TickOutcome::Running => {}
                TickOutcome::Halted => unreachable!("loop exits on stop"),
            }
        }
    }
}
