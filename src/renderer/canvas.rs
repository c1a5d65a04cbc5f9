//! Canvas 2D painter for the web build
//!
//! Paints a `SpriteScene` each frame. Images load asynchronously; until one
//! is ready its sprites are drawn as flat squares.

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{SpriteScene, Texture};

pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    images: HashMap<Texture, HtmlImageElement>,
}

impl CanvasPainter {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut images = HashMap::new();
        for texture in Texture::IMAGES {
            if let Some(path) = texture.path() {
                let img = HtmlImageElement::new()?;
                img.set_src(path);
                images.insert(texture, img);
            }
        }
        log::info!("Requested {} textures", images.len());

        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            images,
        })
    }

    pub fn paint(&self, scene: &SpriteScene) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str("#ffffff");
        ctx.fill_rect(0.0, 0.0, self.width, self.height);

        for sprite in scene.draw_order() {
            let (x, y) = (sprite.pos.x as f64, sprite.pos.y as f64);
            let (w, h) = (sprite.size.x as f64, sprite.size.y as f64);

            if sprite.texture == Texture::Frame {
                ctx.set_stroke_style_str("#000000");
                ctx.set_line_width(1.0);
                ctx.stroke_rect(x, y, w, h);
                continue;
            }

            match self.images.get(&sprite.texture) {
                Some(img) if img.complete() && img.natural_width() > 0 => {
                    if let Err(e) = ctx.draw_image_with_html_image_element(img, x, y) {
                        log::warn!("drawImage failed: {:?}", e);
                    }
                }
                _ => {
                    ctx.set_fill_style_str(placeholder_color(sprite.texture));
                    ctx.fill_rect(x, y, w, h);
                }
            }
        }
    }
}

fn placeholder_color(texture: Texture) -> &'static str {
    match texture {
        Texture::Frame => "#000000",
        Texture::Target => "#d33",
        Texture::Missile => "#333",
        Texture::AimIdle => "#888",
        Texture::AimArmed => "#3a3",
        Texture::Explosion => "#fa0",
    }
}
