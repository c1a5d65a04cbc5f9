//! Sprite rendering seam
//!
//! The simulation never touches sprites. Each frame `ArenaSprites::sync`
//! pushes position and texture changes into a `RenderSurface`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;
pub mod sync;

use glam::Vec2;

use crate::sim::Rect;

pub use scene::{Sprite, SpriteScene};
pub use sync::ArenaSprites;

/// Sprite images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Texture {
    /// Arena outline (drawn as a stroked rectangle)
    Frame,
    Target,
    Missile,
    /// Aim while out of range
    AimIdle,
    /// Aim while armed
    AimArmed,
    Explosion,
}

impl Texture {
    pub const IMAGES: [Texture; 5] = [
        Texture::Target,
        Texture::Missile,
        Texture::AimIdle,
        Texture::AimArmed,
        Texture::Explosion,
    ];

    /// Image path relative to the page, if the texture is an image
    pub fn path(&self) -> Option<&'static str> {
        match self {
            Texture::Frame => None,
            Texture::Target => Some("texture/target.png"),
            Texture::Missile => Some("texture/missile.png"),
            Texture::AimIdle => Some("texture/aim1.png"),
            Texture::AimArmed => Some("texture/aim2.png"),
            Texture::Explosion => Some("texture/explosion.png"),
        }
    }

    /// Aim texture for the given armed state
    pub fn aim(armed: bool) -> Self {
        if armed {
            Texture::AimArmed
        } else {
            Texture::AimIdle
        }
    }
}

/// Draw layers, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Frame = 0,
    Target = 10,
    Explosion = 20,
    Projectile = 90,
    Player = 100,
}

/// Handle to a sprite owned by a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpriteId(pub u32);

/// What to create
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDesc {
    pub texture: Texture,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub layer: Layer,
}

/// A retained 2D sprite store
pub trait RenderSurface {
    fn create_sprite(&mut self, desc: SpriteDesc) -> SpriteId;
    fn set_position(&mut self, id: SpriteId, pos: Vec2);
    fn set_texture(&mut self, id: SpriteId, texture: Texture);
    fn remove_sprite(&mut self, id: SpriteId);

    /// Outline of an arena, drawn beneath everything else
    fn create_frame(&mut self, bounds: Rect) -> SpriteId {
        self.create_sprite(SpriteDesc {
            texture: Texture::Frame,
            pos: bounds.min,
            size: bounds.size(),
            layer: Layer::Frame,
        })
    }
}
