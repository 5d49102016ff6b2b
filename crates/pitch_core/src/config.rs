//! # Simulation Configuration
//!
//! Every tuning constant the motion rules draw from, in one place.
//!
//! ## Usage
//! ```rust
//! use pitch_core::config::SimConfig;
//!
//! let config = SimConfig::standard();
//! let calm = SimConfig::calm();
//! assert!(calm.motion.shot.dx_max - calm.motion.shot.dx_min
//!     < config.motion.shot.dx_max - config.motion.shot.dx_min);
//! ```

use crate::error::{PitchError, Result};
use crate::field::ROLE_SIZE;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// Env var that switches trace lines on when no explicit config says otherwise.
pub const DEBUG_ENV: &str = "PITCH_DEBUG";

fn env_flag_enabled(name: &str) -> bool {
    std::env::var(name)
        .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

/// Process-wide debug default, read once.
pub fn debug_from_env() -> bool {
    static FLAG: OnceLock<bool> = OnceLock::new();
    *FLAG.get_or_init(|| env_flag_enabled(DEBUG_ENV))
}

// ============================================================================
// Ball displacement windows
// ============================================================================

/// Half-open displacement window `[dx_min, dx_max) × [dy_min, dy_max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KickWindow {
    pub dx_min: i32,
    pub dx_max: i32,
    pub dy_min: i32,
    pub dy_max: i32,
}

impl KickWindow {
    pub const fn new(dx_min: i32, dx_max: i32, dy_min: i32, dy_max: i32) -> Self {
        Self { dx_min, dx_max, dy_min, dy_max }
    }

    pub fn contains(&self, dx: i32, dy: i32) -> bool {
        (self.dx_min..self.dx_max).contains(&dx) && (self.dy_min..self.dy_max).contains(&dy)
    }

    fn is_empty(&self) -> bool {
        self.dx_min >= self.dx_max || self.dy_min >= self.dy_max
    }
}

// ============================================================================
// Motion parameters
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Ball displacement on a shot (default: [-80, 21) × [-60, 21))
    pub shot: KickWindow,
    /// Ball displacement on a pass (default: [-60, 21) × [-48, 21))
    pub pass: KickWindow,
    /// Backward reach of an outfield run along x (default: 20)
    pub run_back_x: i32,
    /// Backward reach of an outfield run along y (default: 15)
    pub run_back_y: i32,
    /// Goalkeeper distance from the goal line, before the half-glyph correction (default: 165)
    pub keeper_reach: i32,
    /// Goalkeeper vertical jitter around the field centre line (default: 40)
    pub keeper_jitter: i32,
    /// Clips the shooter picks from uniformly
    pub kick_clips: Vec<String>,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            shot: KickWindow::new(-80, 21, -60, 21),
            pass: KickWindow::new(-60, 21, -48, 21),
            run_back_x: 20,
            run_back_y: 15,
            keeper_reach: 165,
            keeper_jitter: 40,
            kick_clips: vec!["kick-1.wav".to_string(), "kick-2.wav".to_string()],
        }
    }
}

impl MotionConfig {
    /// Exclusive upper bound of the goalkeeper's distance from its goal line.
    pub fn keeper_range(&self) -> i32 {
        self.keeper_reach - ROLE_SIZE / 2
    }

    pub fn validate(&self) -> Result<()> {
        if self.shot.is_empty() {
            return Err(PitchError::Config(format!("empty shot window: {:?}", self.shot)));
        }
        if self.pass.is_empty() {
            return Err(PitchError::Config(format!("empty pass window: {:?}", self.pass)));
        }
        if self.run_back_x < 0 || self.run_back_y < 0 {
            return Err(PitchError::Config("run reach must be non-negative".to_string()));
        }
        if self.keeper_range() <= 0 {
            return Err(PitchError::Config(format!(
                "keeper_reach {} must exceed half a glyph ({})",
                self.keeper_reach,
                ROLE_SIZE / 2
            )));
        }
        if self.keeper_jitter <= 0 {
            return Err(PitchError::Config("keeper_jitter must be positive".to_string()));
        }
        if self.kick_clips.is_empty() {
            return Err(PitchError::Config("kick_clips must not be empty".to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// Top-level config
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Emit motion trace lines through the `log` facade
    #[serde(default = "debug_from_env")]
    pub debug: bool,
    #[serde(default)]
    pub motion: MotionConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { debug: debug_from_env(), motion: MotionConfig::default() }
    }
}

impl SimConfig {
    pub fn standard() -> Self {
        Self::default()
    }

    /// Short kicks and a steadier keeper; handy for demos that should stay readable.
    pub fn calm() -> Self {
        let mut cfg = Self::default();
        cfg.motion.shot = KickWindow::new(-20, 21, -15, 16);
        cfg.motion.pass = KickWindow::new(-10, 11, -10, 11);
        cfg.motion.keeper_jitter = 10;
        cfg
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(input)?;
        cfg.motion.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml_str(input: &str) -> Result<Self> {
        let cfg: Self = serde_yaml::from_str(input)?;
        cfg.motion.validate()?;
        Ok(cfg)
    }

    /// Load from a `.json`, `.yaml` or `.yml` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| PitchError::Config(format!("{}: {}", path.display(), e)))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&text),
            _ => Self::from_json_str(&text),
        }
    }
}
