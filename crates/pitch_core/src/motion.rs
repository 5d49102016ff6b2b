//! Collaborators and records for the per-tick motion actions.
//!
//! `MotionContext` bundles what `run`/`pass`/`shoot` need from the outside
//! world: a random source, somewhere to send kick sounds, and the config
//! (including the debug flag). Each action hands back a [`Movement`] so a
//! caller can keep its own event log instead of scraping trace output.

use crate::config::SimConfig;
use crate::error::Result;
use crate::geometry::Location;
use crate::player::Speed;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const TRACE_TARGET: &str = "pitch::motion";

// ============================================================================
// Audio
// ============================================================================

/// Fire-and-forget sound output. Implementations must return promptly.
pub trait AudioSink {
    fn play(&mut self, clip: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _clip: &str) {}
}

/// Keeps every requested clip; used by tests and the demo's summary.
#[derive(Debug, Default, Clone)]
pub struct RecordingAudio {
    pub played: Vec<String>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, clip: &str) {
        self.played.push(clip.to_string());
    }
}

// ============================================================================
// Context
// ============================================================================

pub struct MotionContext<'a, R: Rng + ?Sized> {
    pub rng: &'a mut R,
    pub audio: &'a mut dyn AudioSink,
    pub config: &'a SimConfig,
}

impl<'a, R: Rng + ?Sized> MotionContext<'a, R> {
    /// Fails with `PitchError::Config` when the motion windows or kick clips
    /// cannot be sampled from.
    pub fn new(rng: &'a mut R, audio: &'a mut dyn AudioSink, config: &'a SimConfig) -> Result<Self> {
        config.motion.validate()?;
        Ok(Self { rng, audio, config })
    }

    /// Uniform integer in `[low, high)`.
    #[inline]
    pub(crate) fn uniform(&mut self, low: i32, high: i32) -> i32 {
        self.rng.gen_range(low..high)
    }

    #[inline]
    pub(crate) fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// Log the movement when the debug flag is on, then hand it back.
    pub(crate) fn trace(&self, movement: Movement) -> Movement {
        if self.config.debug {
            log::debug!(target: TRACE_TARGET, "{}", movement);
        }
        movement
    }
}

// ============================================================================
// Movement records
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    Run { speed: Speed },
    Pass,
    Shoot,
}

/// One displacement caused by a player action. `from`/`to` are the runner's
/// location for `Run` and the ball's location for `Pass`/`Shoot`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub actor: String,
    pub action: Action,
    pub from: Location,
    pub to: Location,
}

impl Movement {
    pub fn delta(&self) -> (i32, i32) {
        self.from.delta_to(self.to)
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.action {
            Action::Run { speed } => write!(
                f,
                "{} runs with {} speed from {} to {}",
                self.actor, speed, self.from, self.to
            ),
            Action::Pass => write!(
                f,
                "{} passes the ball and it moves from {} to {}",
                self.actor, self.from, self.to
            ),
            Action::Shoot => write!(
                f,
                "{} shoots the ball and it moves from {} to {}",
                self.actor, self.from, self.to
            ),
        }
    }
}
