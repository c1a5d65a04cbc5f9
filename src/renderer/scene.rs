//! In-memory sprite scene
//!
//! Backs the web painter and doubles as the headless surface.

use std::collections::BTreeMap;

use glam::Vec2;

use super::{Layer, RenderSurface, SpriteDesc, SpriteId, Texture};

#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub texture: Texture,
    pub pos: Vec2,
    pub size: Vec2,
    pub layer: Layer,
}

#[derive(Debug, Default)]
pub struct SpriteScene {
    /// Keyed by id, so iteration follows creation order
    sprites: BTreeMap<SpriteId, Sprite>,
    next_id: u32,
}

impl SpriteScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: SpriteId) -> Option<&Sprite> {
        self.sprites.get(&id)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Number of sprites showing `texture`
    pub fn count(&self, texture: Texture) -> usize {
        self.sprites.values().filter(|s| s.texture == texture).count()
    }

    /// Sprites in paint order: by layer, then creation order
    pub fn draw_order(&self) -> Vec<&Sprite> {
        let mut sprites: Vec<&Sprite> = self.sprites.values().collect();
        sprites.sort_by_key(|s| s.layer);
        sprites
    }
}

impl RenderSurface for SpriteScene {
    fn create_sprite(&mut self, desc: SpriteDesc) -> SpriteId {
        let id = SpriteId(self.next_id);
        self.next_id += 1;
        self.sprites.insert(
            id,
            Sprite {
                texture: desc.texture,
                pos: desc.pos,
                size: desc.size,
                layer: desc.layer,
            },
        );
        id
    }

    fn set_position(&mut self, id: SpriteId, pos: Vec2) {
        match self.sprites.get_mut(&id) {
            Some(sprite) => sprite.pos = pos,
            None => log::warn!("set_position on unknown sprite {:?}", id),
        }
    }

    fn set_texture(&mut self, id: SpriteId, texture: Texture) {
        match self.sprites.get_mut(&id) {
            Some(sprite) => sprite.texture = texture,
            None => log::warn!("set_texture on unknown sprite {:?}", id),
        }
    }

    fn remove_sprite(&mut self, id: SpriteId) {
        if self.sprites.remove(&id).is_none() {
            log::warn!("remove_sprite on unknown sprite {:?}", id);
        }
    }
}
