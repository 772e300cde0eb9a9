//! Collision detection for axis-aligned rectangles
//!
//! Raw rectangle intersection feels unfair with round planet sprites, so both
//! rectangles are shrunk by a margin first. Grazing a corner is a near miss,
//! not a crash.

use super::rect::Rect;
use crate::consts::COLLISION_MARGIN;

/// Overlap test with the forgiveness margin applied to both rectangles
pub fn forgiving_overlap(a: &Rect, b: &Rect) -> bool {
    overlap_with_margin(a, b, COLLISION_MARGIN)
}

/// Overlap test after shrinking both rectangles by `margin` on every side
pub fn overlap_with_margin(a: &Rect, b: &Rect, margin: f32) -> bool {
    a.shrink(margin).intersects(&b.shrink(margin))
}

/// An obstacle has departed once it scrolled fully past the left edge
#[inline]
pub fn has_departed(rect: &Rect) -> bool {
    rect.x() < -rect.width()
}

/// Player hit the floor (y = 0) or pushed its top edge into the ceiling
pub fn outside_play_area(player: &Rect, screen_height: f32) -> bool {
    player.y() <= 0.0 || player.y() + player.height() >= screen_height
}
