//! # pitch_core - Positional model for a 2D football pitch
//!
//! Places a roster of players on a rectangular field according to their
//! role, advances them with simple stochastic motion rules, and draws each
//! one as a labeled rectangle.
//!
//! ## Features
//! - Deterministic kick-off placement across role lanes on either side
//! - Seedable motion (`rand` RNG passed in, never global)
//! - Goalkeeper confinement to its own box
//! - Backend-agnostic drawing through a small `Surface` trait
//!
//! ## Usage
//! ```rust
//! use pitch_core::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let name = Name::new("Cristiano", "Ronaldo").unwrap();
//! let mut ronaldo = Player::new(name, 7, Role::Forward, 33, 185)
//!     .unwrap()
//!     .with_speed(Speed::Superfast);
//! ronaldo.place_at(Location::new(460, 300));
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut audio = SilentAudio;
//! let config = SimConfig::standard();
//! let mut ctx = MotionContext::new(&mut rng, &mut audio, &config).unwrap();
//!
//! let step = ronaldo.run(&mut ctx).unwrap();
//! assert!(step.to.is_in_bounds());
//! ```

pub mod ball;
pub mod config;
pub mod error;
pub mod field;
pub mod geometry;
pub mod motion;
pub mod name;
pub mod placement;
pub mod player;
pub mod render;
pub mod roster;

pub use ball::{Ball, BallState};
pub use config::{KickWindow, MotionConfig, SimConfig};
pub use error::{PitchError, Result};
pub use field::{Side, FIELD_HEIGHT, FIELD_WIDTH, ROLE_SIZE};
pub use geometry::Location;
pub use motion::{Action, AudioSink, MotionContext, Movement, RecordingAudio, SilentAudio};
pub use name::Name;
pub use placement::{init_locations, Squad};
pub use player::{Player, Role, Speed};
pub use render::{draw_roster, Color, DrawCommand, Drawable, RecordingSurface, Surface};
pub use roster::Roster;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod prelude {
    pub use crate::ball::{Ball, BallState};
    pub use crate::config::SimConfig;
    pub use crate::field::{Side, FIELD_HEIGHT, FIELD_WIDTH, ROLE_SIZE};
    pub use crate::geometry::Location;
    pub use crate::motion::{AudioSink, MotionContext, Movement, SilentAudio};
    pub use crate::name::Name;
    pub use crate::placement::{init_locations, Squad};
    pub use crate::player::{Player, Role, Speed};
    pub use crate::render::{Color, Drawable, Surface};
}
