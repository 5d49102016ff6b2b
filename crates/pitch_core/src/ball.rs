//! Ball adapter: the only thing players need from a ball is its location.

use crate::error::Result;
use crate::geometry::Location;
use crate::render::{Color, Drawable, Surface};
use serde::{Deserialize, Serialize};

pub trait BallState {
    fn location(&self) -> Location;
    fn location_mut(&mut self) -> &mut Location;
}

/// Plain ball value for callers without their own ball entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub radius: i32,
    pub color: Color,
    pub location: Location,
}

impl Ball {
    pub fn new(radius: i32, color: Color, location: Location) -> Self {
        Self { radius, color, location }
    }
}

impl BallState for Ball {
    fn location(&self) -> Location {
        self.location
    }

    fn location_mut(&mut self) -> &mut Location {
        &mut self.location
    }
}

impl Drawable for Ball {
    fn draw(&self, surface: &mut dyn Surface) -> Result<()> {
        let previous = surface.color();
        surface.set_color(self.color);
        let side = self.radius * 2;
        surface.fill_raised_rect(
            self.location.x - self.radius,
            self.location.y - self.radius,
            side,
            side,
            true,
        );
        surface.set_color(previous);
        Ok(())
    }
}
