//! Location: integer pixel coordinate on the pitch
//!
//! Players are kept in-bounds by clamping every translation;
//! the ball is allowed to leave the rectangle so out-of-play can be observed.

use crate::field::{FIELD_HEIGHT, FIELD_WIDTH};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pixel coordinate (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    pub const IN_BOUNDS_X_MIN: i32 = 0;
    /// Exclusive upper bound on x.
    pub const IN_BOUNDS_X_MAX: i32 = FIELD_WIDTH;
    pub const IN_BOUNDS_Y_MIN: i32 = 0;
    /// Exclusive upper bound on y.
    pub const IN_BOUNDS_Y_MAX: i32 = FIELD_HEIGHT;

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Add `(dx, dy)` in place.
    ///
    /// With `clamp` the result is pinned to `[0, FIELD_WIDTH) × [0, FIELD_HEIGHT)`;
    /// without it the raw sum is stored.
    pub fn move_by(&mut self, dx: i32, dy: i32, clamp: bool) {
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
        if clamp {
            *self = self.clamp_in_bounds();
        }
    }

    /// Clamped translation, the default for anything that must stay on the pitch.
    #[inline]
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.move_by(dx, dy, true);
    }

    #[inline]
    pub fn clamp_in_bounds(self) -> Self {
        Self {
            x: self.x.clamp(Self::IN_BOUNDS_X_MIN, Self::IN_BOUNDS_X_MAX - 1),
            y: self.y.clamp(Self::IN_BOUNDS_Y_MIN, Self::IN_BOUNDS_Y_MAX - 1),
        }
    }

    #[inline]
    pub fn is_in_bounds(&self) -> bool {
        (Self::IN_BOUNDS_X_MIN..Self::IN_BOUNDS_X_MAX).contains(&self.x)
            && (Self::IN_BOUNDS_Y_MIN..Self::IN_BOUNDS_Y_MAX).contains(&self.y)
    }

    /// Component-wise difference `other - self`.
    #[inline]
    pub fn delta_to(&self, other: Location) -> (i32, i32) {
        (other.x - self.x, other.y - self.y)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        assert_eq!(Location::new(53, 34).to_string(), "(53, 34)");
        assert_eq!(Location::new(-4, 0).to_string(), "(-4, 0)");
    }

    #[test]
    fn test_move_unclamped_stores_raw_sum() {
        let mut loc = Location::new(10, 10);
        loc.move_by(-30, 700, false);
        assert_eq!(loc, Location::new(-20, 710));
        assert!(!loc.is_in_bounds());
    }

    #[test]
    fn test_move_clamped_pins_to_field() {
        let mut loc = Location::new(10, 10);
        loc.move_by(-30, 700, true);
        assert_eq!(loc, Location::new(0, FIELD_HEIGHT - 1));

        let mut loc = Location::new(990, 300);
        loc.translate(50, 0);
        assert_eq!(loc, Location::new(FIELD_WIDTH - 1, 300));
        assert!(loc.is_in_bounds());
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let loc = Location::new(-5, 9999).clamp_in_bounds();
        assert_eq!(loc, loc.clamp_in_bounds());
    }

    #[test]
    fn test_delta_to() {
        let a = Location::new(460, 300);
        let b = Location::new(500, 285);
        assert_eq!(a.delta_to(b), (40, -15));
    }
}
