//! Round components and resources.
//!
//! All ECS components and Bevy resources that describe a round live here.
//! Systems that mutate this state are in the sibling modules:
//! - [`super::control`] — input + paddle movement
//! - [`super::blocks`] — spawning, catching and missing blocks
//! - [`super::hud`] — score display

use crate::config::GameConfig;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Components ─────────────────────────────────────────────────────────────────

/// Marker for the player paddle.
#[derive(Component)]
pub struct Paddle;

/// Marker for a falling block.
#[derive(Component)]
pub struct Block;

/// Tags every entity owned by a round.  All of them are despawned when a new
/// round begins and when the play screen is left.
#[derive(Component)]
pub struct RoundEntity;

// ── Resources ──────────────────────────────────────────────────────────────────

/// Per-round context: constructed fresh on every `OnEnter(RoundPhase::Active)`
/// and removed on `OnExit(Screen::Play)`.
#[derive(Resource, Debug)]
pub struct Round {
    /// Points scored this round.
    pub score: u32,
    /// Blocks caught this round.
    pub caught: u32,
    /// Repeating timer that drops a new block each time it fires.
    pub spawn_timer: Timer,
}

impl Round {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0,
            caught: 0,
            spawn_timer: Timer::from_seconds(config.spawn_interval_secs, TimerMode::Repeating),
        }
    }

    /// Record one caught block worth `points`.
    pub fn award_catch(&mut self, points: u32) {
        self.caught += 1;
        self.score += points;
    }
}

/// Horizontal direction requested by the player this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveDirection {
    Left,
    #[default]
    Idle,
    Right,
}

impl MoveDirection {
    /// Resolve the two direction keys.  Left wins when both are held.
    pub fn from_keys(left: bool, right: bool) -> Self {
        if left {
            Self::Left
        } else if right {
            Self::Right
        } else {
            Self::Idle
        }
    }

    /// Field-space horizontal velocity for this direction.
    pub fn velocity(self, speed: f32) -> f32 {
        match self {
            Self::Left => -speed,
            Self::Idle => 0.0,
            Self::Right => speed,
        }
    }
}

/// What the player asked the paddle to do this tick.
///
/// Written by `keyboard_to_intent_system`, read by `apply_paddle_intent_system`.
/// Tests can populate it directly and run only the apply step.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PaddleIntent {
    pub direction: MoveDirection,
}

/// Random source for block placement.
#[derive(Resource)]
pub struct BlockRng(pub StdRng);

impl BlockRng {
    /// Seeded when `seed` is given, otherwise seeded from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}
