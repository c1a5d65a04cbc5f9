//! Mirrors an arena's simulation state onto a render surface

use std::collections::HashMap;

use glam::Vec2;

use super::{Layer, RenderSurface, SpriteDesc, SpriteId, Texture};
use crate::consts::SPRITE_SIZE;
use crate::sim::{Arena, ArenaEvent};

/// Sprites owned on behalf of one arena
#[derive(Debug)]
pub struct ArenaSprites {
    target: SpriteId,
    player: SpriteId,
    projectiles: HashMap<u32, SpriteId>,
}

fn sprite(texture: Texture, pos: Vec2, layer: Layer) -> SpriteDesc {
    SpriteDesc {
        texture,
        pos,
        size: Vec2::splat(SPRITE_SIZE),
        layer,
    }
}

impl ArenaSprites {
    /// Create the frame, target and aim sprites for `arena`. The frame and
    /// any explosions never change, so only their surface keeps them.
    pub fn attach(arena: &Arena, surface: &mut impl RenderSurface) -> Self {
        surface.create_frame(arena.bounds);
        let target = surface.create_sprite(sprite(Texture::Target, arena.target.pos, Layer::Target));
        let player = surface.create_sprite(sprite(
            Texture::aim(arena.player.armed),
            arena.player.pos,
            Layer::Player,
        ));

        Self {
            target,
            player,
            projectiles: HashMap::new(),
        }
    }

    /// Apply queued arena events, then push current positions and the aim
    /// texture
    pub fn sync(&mut self, arena: &mut Arena, surface: &mut impl RenderSurface) {
        for event in arena.drain_events() {
            match event {
                ArenaEvent::ProjectileSpawned { id, pos } => {
                    let sprite_id = surface.create_sprite(sprite(Texture::Missile, pos, Layer::Projectile));
                    self.projectiles.insert(id, sprite_id);
                }
                ArenaEvent::ProjectileReleased { id, .. } => {
                    if let Some(sprite_id) = self.projectiles.remove(&id) {
                        surface.remove_sprite(sprite_id);
                    }
                }
                ArenaEvent::Explosion { pos } => {
                    surface.create_sprite(sprite(Texture::Explosion, pos, Layer::Explosion));
                }
            }
        }

        surface.set_position(self.target, arena.target.pos);
        surface.set_position(self.player, arena.player.pos);
        surface.set_texture(self.player, Texture::aim(arena.player.armed));
        for projectile in &arena.projectiles {
            if let Some(&sprite_id) = self.projectiles.get(&projectile.id) {
                surface.set_position(sprite_id, projectile.pos);
            }
        }
    }
}
