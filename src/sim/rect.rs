//! Axis-aligned rectangle geometry
//!
//! Screen space has y growing upward, so `min` is the bottom-left corner and
//! what the rest of the game calls the entity "position".

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum corner (x, y)
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Maximum corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// False once shrinking has eaten the whole rectangle
    #[inline]
    pub fn has_area(&self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0
    }

    /// Shrink by `margin` on all four sides. May produce a rectangle without area.
    pub fn shrink(&self, margin: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(margin),
            size: self.size - Vec2::splat(2.0 * margin),
        }
    }

    /// Positive-area intersection (touching edges do not count)
    pub fn intersects(&self, other: &Rect) -> bool {
        if !self.has_area() || !other.has_area() {
            return false;
        }
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x
            && other.min.x < a_max.x
            && self.min.y < b_max.y
            && other.min.y < a_max.y
    }

    /// Whether `other` lies fully inside this rectangle (edges inclusive)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        let max = self.max();
        let other_max = other.max();
        other.min.x >= self.min.x
            && other.min.y >= self.min.y
            && other_max.x <= max.x
            && other_max.y <= max.y
    }

    /// Clamp a rectangle of `size` positioned at `pos` to lie inside these bounds.
    ///
    /// Each axis is clamped independently, so a diagonal move into a wall
    /// keeps sliding along the free axis.
    pub fn clamp_position(&self, pos: Vec2, size: Vec2) -> Vec2 {
        let max = self.max();
        let mut out = pos;

        if out.x < self.min.x {
            out.x = self.min.x;
        } else if out.x + size.x > max.x {
            out.x = max.x - size.x;
        }

        if out.y < self.min.y {
            out.y = self.min.y;
        } else if out.y + size.y > max.y {
            out.y = max.y - size.y;
        }

        out
    }
}
