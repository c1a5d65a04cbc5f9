//! Proximity and hit tests between sprites
//!
//! All sprites are 16x16 boxes anchored at their top-left corner. The tests
//! compare a single anchor point of the moving sprite (horizontal centre,
//! top edge) against a box around the target, so "nearby" and "hit" differ
//! only in how far that box extends.

use glam::Vec2;

use super::geom::Rect;
use crate::consts::{HALF_SPRITE, SPRITE_SIZE};

/// The point of a sprite used for proximity tests: horizontal centre, top edge
#[inline]
pub fn footprint_anchor(top_left: Vec2) -> Vec2 {
    Vec2::new(top_left.x + HALF_SPRITE, top_left.y)
}

/// The target's own 16x16 box
#[inline]
pub fn sprite_box(top_left: Vec2) -> Rect {
    Rect::new(top_left.x, top_left.y, SPRITE_SIZE, SPRITE_SIZE)
}

/// Whether a projectile is inside the target's blast-timing window.
///
/// The window widens the target box by `margin.x` on both sides and extends
/// it `margin.y` below the target; projectiles travel upward, so the window
/// covers the approach. Edges are exclusive.
pub fn projectile_in_window(target: Vec2, projectile: Vec2, margin: Vec2) -> bool {
    let window = Rect::from_corners(
        Vec2::new(target.x - margin.x, target.y),
        Vec2::new(target.x + SPRITE_SIZE + margin.x, target.y + SPRITE_SIZE + margin.y),
    );
    window.contains_strict(footprint_anchor(projectile))
}

/// Whether the aim is close enough to the target to arm the player.
/// The target box grows by `margin` on every side; edges are exclusive.
pub fn aim_in_range(target: Vec2, aim: Vec2, margin: f32) -> bool {
    sprite_box(target)
        .expand(Vec2::splat(margin))
        .contains_strict(footprint_anchor(aim))
}

/// Exact hit: the projectile anchor lies inside the target box.
///
/// Min edges are inclusive so a projectile whose box coincides exactly with
/// the target always hits.
pub fn projectile_hits(target: Vec2, projectile: Vec2) -> bool {
    sprite_box(target).contains_half_open(footprint_anchor(projectile))
}
