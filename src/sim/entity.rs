//! Moving rectangles: the player and every obstacle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::anim::Animation;
use super::collision::forgiving_overlap;
use super::rect::Rect;

/// Velocity axis selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// A moving axis-aligned rectangle with a looping animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pos: Vec2,
    size: Vec2,
    vel: Vec2,
    /// Movement is clamped to stay inside these, when set
    bounds: Option<Rect>,
    animation: Animation,
}

impl Entity {
    pub fn new(pos: Vec2, size: Vec2, animation: Animation) -> Self {
        debug_assert!(size.x > 0.0 && size.y > 0.0, "entity size must be positive");
        debug_assert!(pos.is_finite(), "entity position must be finite");
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
            bounds: None,
            animation,
        }
    }

    /// Integrate velocity over `dt` seconds, then clamp into bounds
    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;

        if let Some(bounds) = &self.bounds {
            self.pos = bounds.clamp_position(self.pos, self.size);
        }
    }

    /// Forgiving overlap test (both rectangles shrunk by the collision margin)
    pub fn overlaps(&self, other: &Entity) -> bool {
        forgiving_overlap(&self.rect(), &other.rect())
    }

    /// Animation frame for the shared round clock
    pub fn current_frame(&self, elapsed: f32) -> usize {
        self.animation.frame_at(elapsed)
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.pos, self.size)
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    pub fn bounds(&self) -> Option<&Rect> {
        self.bounds.as_ref()
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        debug_assert!(x.is_finite() && y.is_finite());
        self.pos = Vec2::new(x, y);
    }

    pub fn set_velocity(&mut self, vel: Vec2) {
        debug_assert!(vel.is_finite());
        self.vel = vel;
    }

    pub fn set_velocity_component(&mut self, axis: Axis, value: f32) {
        debug_assert!(value.is_finite());
        match axis {
            Axis::X => self.vel.x = value,
            Axis::Y => self.vel.y = value,
        }
    }

    /// Bounds are copied in, never shared with another entity's rectangle
    pub fn set_movement_bounds(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
    }

    pub fn clear_movement_bounds(&mut self) {
        self.bounds = None;
    }

    /// Swap the frame sequence (texture change). Geometry is untouched.
    pub fn set_animation(&mut self, animation: Animation) {
        self.animation = animation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn player() -> Entity {
        Entity::new(Vec2::new(100.0, 200.0), Vec2::new(46.0, 20.0), Animation::still())
    }

    #[test]
    fn test_update_integrates_velocity() {
        let mut e = player();
        e.set_velocity(Vec2::new(10.0, -20.0));
        e.update(0.5);
        assert_eq!(e.pos(), Vec2::new(105.0, 190.0));
    }

    #[test]
    fn test_update_clamps_each_axis() {
        let mut e = player();
        e.set_movement_bounds(Rect::new(0.0, 0.0, 200.0, 480.0));
        e.set_velocity(Vec2::new(1000.0, 30.0));
        e.update(1.0);
        // x pinned to the right edge, y still moves freely
        assert_eq!(e.x(), 200.0 - 46.0);
        assert_eq!(e.y(), 230.0);
    }

    #[test]
    fn test_set_velocity_component() {
        let mut e = player();
        e.set_velocity(Vec2::new(3.0, 4.0));
        e.set_velocity_component(Axis::Y, -9.0);
        assert_eq!(e.vel(), Vec2::new(3.0, -9.0));
        e.set_velocity_component(Axis::X, 0.0);
        assert_eq!(e.vel(), Vec2::new(0.0, -9.0));
    }

    #[test]
    fn test_set_animation_keeps_geometry() {
        let mut e = player();
        let before = e.rect();
        e.set_animation(Animation::new(4, 0.1));
        assert_eq!(e.rect(), before);
        assert_eq!(e.current_frame(0.25), 2);
    }

    #[test]
    fn test_overlaps_uses_margin() {
        let a = Entity::new(Vec2::new(0.0, 0.0), Vec2::new(40.0, 40.0), Animation::still());
        // Raw rectangles share a 9px strip; shrunk ones are 1px apart
        let b = Entity::new(Vec2::new(31.0, 0.0), Vec2::new(40.0, 40.0), Animation::still());
        assert!(a.rect().intersects(&b.rect()));
        assert!(!a.overlaps(&b));
    }

    proptest! {
        #[test]
        fn prop_update_stays_in_bounds(
            x in 0.0f32..150.0,
            y in 0.0f32..400.0,
            vx in -5000.0f32..5000.0,
            vy in -5000.0f32..5000.0,
            dt in 0.0f32..0.5,
        ) {
            let bounds = Rect::new(0.0, 0.0, 200.0, 480.0);
            let mut e = Entity::new(Vec2::new(x, y), Vec2::new(46.0, 20.0), Animation::still());
            e.set_movement_bounds(bounds);
            e.set_velocity(Vec2::new(vx, vy));
            e.update(dt);
            prop_assert!(bounds.contains_rect(&e.rect()));
        }
    }
}
