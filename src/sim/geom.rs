//! Axis-aligned rectangle geometry
//!
//! Arena bounds, aim boxes and patrol ranges are all plain rectangles in
//! canvas coordinates (x grows right, y grows down).

use glam::Vec2;

/// An axis-aligned rectangle given by its min (top-left) and max
/// (bottom-right) corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Rectangle from an origin and a size
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    pub fn from_corners(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Clamp a point into the rectangle, each axis independently
    #[inline]
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        point.max(self.min).min(self.max)
    }

    /// Inclusive containment (edges count as inside)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Strict containment (edges count as outside)
    pub fn contains_strict(&self, point: Vec2) -> bool {
        point.x > self.min.x && point.x < self.max.x && point.y > self.min.y && point.y < self.max.y
    }

    /// Half-open containment: min edges are inside, max edges are outside
    pub fn contains_half_open(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x < self.max.x
            && point.y >= self.min.y
            && point.y < self.max.y
    }

    /// Grow the rectangle by `margin` on every side (per axis)
    pub fn expand(&self, margin: Vec2) -> Self {
        Self {
            min: self.min - margin,
            max: self.max + margin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 300.0, 340.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.right(), 310.0);
        assert_eq!(r.bottom(), 360.0);
        assert_eq!(r.size(), Vec2::new(300.0, 340.0));
        assert_eq!(r.center(), Vec2::new(160.0, 190.0));
    }

    #[test]
    fn test_clamp_is_per_axis() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(r.clamp(Vec2::new(-5.0, 4.0)), Vec2::new(0.0, 4.0));
        assert_eq!(r.clamp(Vec2::new(3.0, 12.0)), Vec2::new(3.0, 10.0));
        assert_eq!(r.clamp(Vec2::new(20.0, -1.0)), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_contains_and_expand() {
        let r = Rect::new(0.0, 0.0, 16.0, 16.0);
        assert!(r.contains(Vec2::new(16.0, 0.0)));
        assert!(!r.contains(Vec2::new(16.5, 0.0)));

        assert!(!r.contains_strict(Vec2::new(0.0, 8.0)));
        assert!(r.contains_half_open(Vec2::new(0.0, 0.0)));
        assert!(!r.contains_half_open(Vec2::new(16.0, 8.0)));

        let grown = r.expand(Vec2::new(2.0, 4.0));
        assert_eq!(grown.min, Vec2::new(-2.0, -4.0));
        assert_eq!(grown.max, Vec2::new(18.0, 20.0));
    }
}
