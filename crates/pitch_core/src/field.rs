//! Field geometry constants and team side.
//!
//! All coordinates are pixels with the origin in the top-left corner.
//! x grows towards the right goal, y grows towards the bottom touchline.

use serde::{Deserialize, Serialize};

// ============================================================================
// Field dimensions
// ============================================================================

/// Playable width in pixels.
pub const FIELD_WIDTH: i32 = 1000;

/// Playable height in pixels. The bench row sits at exactly this y.
pub const FIELD_HEIGHT: i32 = 600;

/// Side length of a player glyph.
pub const ROLE_SIZE: i32 = 40;

/// Half-field split used by the goalkeeper confinement rule.
pub const HALF_WIDTH: i32 = FIELD_WIDTH / 2;

/// Which goal a squad defends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn from_left(left_side: bool) -> Self {
        if left_side {
            Side::Left
        } else {
            Side::Right
        }
    }

    pub fn is_left(self) -> bool {
        matches!(self, Side::Left)
    }

    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Reflect a glyph's left edge so the glyph lands the same distance from the other goal line.
    #[inline]
    pub fn mirror_x(width: i32, x: i32) -> i32 {
        width - x - ROLE_SIZE
    }
}
