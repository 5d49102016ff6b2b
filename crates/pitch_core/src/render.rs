//! Rendering adapter
//!
//! The model never talks to a real graphics backend. It draws against the
//! narrow [`Surface`] trait; [`RecordingSurface`] captures the calls as
//! [`DrawCommand`]s so frames can be inspected or replayed elsewhere.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const GREEN: Self = Self::rgb(0, 128, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Label colour that stays readable on top of `self`.
    pub fn label_contrast(self) -> Self {
        if self == Self::WHITE {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Minimal drawing surface.
pub trait Surface {
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);
    fn fill_raised_rect(&mut self, x: i32, y: i32, width: i32, height: i32, raised: bool);
    fn draw_string(&mut self, text: &str, x: i32, y: i32);
}

pub trait Drawable {
    fn draw(&self, surface: &mut dyn Surface) -> Result<()>;
}

/// Draw every item in order, stopping at the first failure.
pub fn draw_roster<D: Drawable>(items: &[D], surface: &mut dyn Surface) -> Result<()> {
    for item in items {
        item.draw(surface)?;
    }
    Ok(())
}

// ============================================================================
// Recording surface
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    SetColor { color: Color },
    FillRect { x: i32, y: i32, width: i32, height: i32, raised: bool, color: Color },
    Text { text: String, x: i32, y: i32, color: Color },
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DrawCommand::SetColor { color } => write!(f, "color {}", color),
            DrawCommand::FillRect { x, y, width, height, raised, color } => write!(
                f,
                "rect {}x{} at ({}, {}) {}{}",
                width,
                height,
                x,
                y,
                color,
                if *raised { " raised" } else { "" }
            ),
            DrawCommand::Text { text, x, y, color } => {
                write!(f, "text {:?} at ({}, {}) {}", text, x, y, color)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    color: Color,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(color: Color) -> Self {
        Self { color, commands: Vec::new() }
    }

    pub fn rects(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::FillRect { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Text { .. }))
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(Color::BLACK)
    }
}

impl Surface for RecordingSurface {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
        self.commands.push(DrawCommand::SetColor { color });
    }

    fn fill_raised_rect(&mut self, x: i32, y: i32, width: i32, height: i32, raised: bool) {
        self.commands.push(DrawCommand::FillRect { x, y, width, height, raised, color: self.color });
    }

    fn draw_string(&mut self, text: &str, x: i32, y: i32) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), x, y, color: self.color });
    }
}
