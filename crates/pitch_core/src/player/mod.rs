//! Player entity
//!
//! A player carries an immutable identity (name, shirt number, role, age,
//! height), a mutable speed tier, and a location that stays unset until
//! placement assigns one. Motion actions and drawing dispatch on the role tag.

pub mod role;

pub use role::{Role, Speed};

use crate::ball::BallState;
use crate::error::{PitchError, Result};
use crate::field::{FIELD_HEIGHT, FIELD_WIDTH, HALF_WIDTH, ROLE_SIZE};
use crate::geometry::Location;
use crate::motion::{Action, MotionContext, Movement};
use crate::name::Name;
use crate::render::{Color, Drawable, Surface};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Baseline of the initial letter, from the glyph's top edge.
const INITIAL_BASELINE: i32 = 15;
/// Baseline of the shirt number, from the glyph's top edge.
const NUMBER_BASELINE: i32 = 34;
/// Two-digit numbers shift left so they stay roughly centred.
const TWO_DIGIT_NUDGE: i32 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PlayerFields")]
pub struct Player {
    name: Name,
    number: u8,
    role: Role,
    age: u32,
    /// Height in centimetres.
    height: u32,
    #[serde(default)]
    speed: Speed,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<Location>,
}

/// Wire shape of [`Player`]; deserialization rebuilds through [`Player::new`].
#[derive(Deserialize)]
struct PlayerFields {
    name: Name,
    number: i32,
    role: Role,
    age: u32,
    height: u32,
    #[serde(default)]
    speed: Speed,
    #[serde(default)]
    location: Option<Location>,
}

impl TryFrom<PlayerFields> for Player {
    type Error = PitchError;

    fn try_from(fields: PlayerFields) -> Result<Self> {
        let mut player = Player::new(fields.name, fields.number, fields.role, fields.age, fields.height)?
            .with_speed(fields.speed);
        player.location = fields.location;
        Ok(player)
    }
}

impl Player {
    pub const NUMBER_MIN: i32 = 1;
    pub const NUMBER_MAX: i32 = 99;

    pub fn new(name: Name, number: i32, role: Role, age: u32, height: u32) -> Result<Self> {
        if !(Self::NUMBER_MIN..=Self::NUMBER_MAX).contains(&number) {
            return Err(PitchError::InvalidNumber(number));
        }
        Ok(Self {
            name,
            number: number as u8,
            role,
            age,
            height,
            speed: Speed::default(),
            location: None,
        })
    }

    /// Same as [`Player::new`] with the role given by name (`"FORWARD"`, `"gk"`, ...).
    pub fn with_role_str(name: Name, number: i32, role: &str, age: u32, height: u32) -> Result<Self> {
        Self::new(name, number, role.parse()?, age, height)
    }

    pub fn with_speed(mut self, speed: Speed) -> Self {
        self.speed = speed;
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }

    pub fn is_placed(&self) -> bool {
        self.location.is_some()
    }

    /// Put the player at an explicit spot, bypassing squad placement.
    pub fn place_at(&mut self, location: Location) {
        self.location = Some(location);
    }

    fn require_location(&self) -> Result<Location> {
        self.location.ok_or_else(|| PitchError::UnplacedPlayer { name: self.name.to_string() })
    }

    // ========================================================================
    // Motion
    // ========================================================================

    /// Advance one tick.
    ///
    /// Goalkeepers are re-drawn inside their own box: x within
    /// `keeper_range()` of the goal line on whichever half they stand in, y
    /// jittered around the centre line. Everyone else takes a clamped random
    /// step whose window width is the speed tier's magnitude.
    pub fn run<R: Rng + ?Sized>(&mut self, ctx: &mut MotionContext<'_, R>) -> Result<Movement> {
        let from = self.require_location()?;
        let config = ctx.config;
        let motion = &config.motion;
        let mut to = from;

        if self.role.is_goalkeeper() {
            let depth = ctx.uniform(0, motion.keeper_range());
            to.x = if from.x < HALF_WIDTH { depth } else { FIELD_WIDTH - depth };
            let upward = ctx.coin();
            let jitter = ctx.uniform(0, motion.keeper_jitter);
            to.y = FIELD_HEIGHT / 2 + if upward { jitter } else { -jitter };
        } else {
            let window = self.speed.value();
            let dx = ctx.uniform(-motion.run_back_x, window - motion.run_back_x);
            let dy = ctx.uniform(-motion.run_back_y, window - motion.run_back_y);
            to.translate(dx, dy);
        }

        self.location = Some(to);
        Ok(ctx.trace(Movement {
            actor: self.name.to_string(),
            action: Action::Run { speed: self.speed },
            from,
            to,
        }))
    }

    /// Pass: nudge the ball inside the pass window. The ball may leave the field.
    pub fn pass<B, R>(&self, ball: &mut B, ctx: &mut MotionContext<'_, R>) -> Result<Movement>
    where
        B: BallState + ?Sized,
        R: Rng + ?Sized,
    {
        self.require_location()?;
        let window = ctx.config.motion.pass;
        let from = ball.location();
        let dx = ctx.uniform(window.dx_min, window.dx_max);
        let dy = ctx.uniform(window.dy_min, window.dy_max);
        ball.location_mut().move_by(dx, dy, false);

        Ok(ctx.trace(Movement {
            actor: self.name.to_string(),
            action: Action::Pass,
            from,
            to: ball.location(),
        }))
    }

    /// Shoot: play a kick clip, then move the ball inside the shot window.
    pub fn shoot<B, R>(&self, ball: &mut B, ctx: &mut MotionContext<'_, R>) -> Result<Movement>
    where
        B: BallState + ?Sized,
        R: Rng + ?Sized,
    {
        self.require_location()?;
        let config = ctx.config;
        let motion = &config.motion;
        let clip = ctx.rng.gen_range(0..motion.kick_clips.len());
        ctx.audio.play(&motion.kick_clips[clip]);

        let window = motion.shot;
        let from = ball.location();
        let dx = ctx.uniform(window.dx_min, window.dx_max);
        let dy = ctx.uniform(window.dy_min, window.dy_max);
        ball.location_mut().move_by(dx, dy, false);

        Ok(ctx.trace(Movement {
            actor: self.name.to_string(),
            action: Action::Shoot,
            from,
            to: ball.location(),
        }))
    }
}

impl Drawable for Player {
    /// Body in the current colour (keepers get a yellow lower half), then the
    /// initial and shirt number in a contrasting colour. The surface colour is
    /// restored afterwards.
    fn draw(&self, surface: &mut dyn Surface) -> Result<()> {
        let Location { x, y } = self.require_location()?;
        let base = surface.color();

        if self.role.is_goalkeeper() {
            surface.fill_raised_rect(x, y, ROLE_SIZE, ROLE_SIZE / 2, true);
            surface.set_color(Color::YELLOW);
            surface.fill_raised_rect(x, y + ROLE_SIZE / 2, ROLE_SIZE, ROLE_SIZE / 2, true);
        } else {
            surface.fill_raised_rect(x, y, ROLE_SIZE, ROLE_SIZE, true);
        }

        surface.set_color(base.label_contrast());
        surface.draw_string(&self.name.initial(), x + ROLE_SIZE / 2, y + INITIAL_BASELINE);
        let nudge = if self.number >= 10 { TWO_DIGIT_NUDGE } else { 0 };
        surface.draw_string(&self.number.to_string(), x + ROLE_SIZE / 2 - nudge, y + NUMBER_BASELINE);
        surface.set_color(base);
        Ok(())
    }
}
