//! Runtime game configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  Before the app is built, [`resolve_game_config`]
//! reads `assets/game.toml`, overwrites the defaults with any values present
//! in the file, and then applies the `BLOCK_CATCH_RESTART` environment
//! override.  Missing keys fall back to the compile-time defaults, so a
//! minimal TOML can override just the values you care about.
//!
//! ## Example
//!
//! ```toml
//! restart_policy = "timed_return"
//! paddle_scale_x = 2.0
//! spawn_interval_secs = 0.75
//! seed = 42
//! ```
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `GameConfig::default()`.

use crate::constants::*;
use crate::error::{validate_positive, validate_spawn_range, GameError, GameResult};
use crate::playfield::Playfield;
use bevy::prelude::*;
use serde::Deserialize;
use std::path::Path;

/// Default location of the configuration file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/game.toml";

/// Environment variable that selects a restart policy preset (`manual` or `timed`).
pub const RESTART_ENV_VAR: &str = "BLOCK_CATCH_RESTART";

// ── Restart policy ────────────────────────────────────────────────────────────

/// What happens once a round is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestartPolicy {
    /// Stay on the game-over message until the confirm key is pressed, then
    /// start a fresh round on the play screen.
    #[default]
    ManualRestart,
    /// Return to the start screen after `timed_return_delay_secs`, whatever
    /// the player does.
    TimedReturn,
}

impl RestartPolicy {
    /// Parse the value of [`RESTART_ENV_VAR`].
    pub fn from_env_value(value: &str) -> GameResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "manual" | "manual_restart" => Ok(Self::ManualRestart),
            "timed" | "timed_return" => Ok(Self::TimedReturn),
            _ => Err(GameError::UnknownRestartPolicy {
                value: value.to_string(),
            }),
        }
    }

    /// Paddle scale that ships with this policy.
    pub fn paddle_scale(self) -> (f32, f32) {
        match self {
            Self::ManualRestart => MANUAL_RESTART_PADDLE_SCALE,
            Self::TimedReturn => TIMED_RETURN_PADDLE_SCALE,
        }
    }
}

// ── Config resource ───────────────────────────────────────────────────────────

/// Runtime-tunable gameplay configuration.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Playfield ────────────────────────────────────────────────────────────
    pub field_width: f32,
    pub field_height: f32,

    // ── Paddle ───────────────────────────────────────────────────────────────
    pub paddle_base_width: f32,
    pub paddle_base_height: f32,
    pub paddle_scale_x: f32,
    pub paddle_scale_y: f32,
    pub paddle_y: f32,
    pub paddle_speed: f32,

    // ── Blocks ───────────────────────────────────────────────────────────────
    pub block_size: f32,
    pub block_fall_speed: f32,
    pub spawn_interval_secs: f32,
    pub spawn_x_min: i32,
    pub spawn_x_max: i32,
    pub spawn_y: f32,
    pub boundary_y: f32,

    // ── Scoring & flow ───────────────────────────────────────────────────────
    pub catch_points: u32,
    pub restart_policy: RestartPolicy,
    pub timed_return_delay_secs: f32,

    /// Seed for block placement.  `None` draws a fresh seed from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::manual_restart()
    }
}

impl GameConfig {
    /// Preset: flat paddle, restart in place on the confirm key.
    pub fn manual_restart() -> Self {
        Self::with_policy(RestartPolicy::ManualRestart)
    }

    /// Preset: wide paddle, automatic return to the start screen.
    pub fn timed_return() -> Self {
        Self::with_policy(RestartPolicy::TimedReturn)
    }

    fn with_policy(policy: RestartPolicy) -> Self {
        let (scale_x, scale_y) = policy.paddle_scale();
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            paddle_base_width: PADDLE_BASE_WIDTH,
            paddle_base_height: PADDLE_BASE_HEIGHT,
            paddle_scale_x: scale_x,
            paddle_scale_y: scale_y,
            paddle_y: PADDLE_Y,
            paddle_speed: PADDLE_SPEED,
            block_size: BLOCK_SIZE,
            block_fall_speed: BLOCK_FALL_SPEED,
            spawn_interval_secs: SPAWN_INTERVAL_SECS,
            spawn_x_min: SPAWN_X_MIN,
            spawn_x_max: SPAWN_X_MAX,
            spawn_y: SPAWN_Y,
            boundary_y: BOUNDARY_Y,
            catch_points: CATCH_POINTS,
            restart_policy: policy,
            timed_return_delay_secs: TIMED_RETURN_DELAY_SECS,
            seed: None,
        }
    }

    /// Switch to `policy` together with its paddle scale preset.
    pub fn apply_policy_preset(&mut self, policy: RestartPolicy) {
        let (scale_x, scale_y) = policy.paddle_scale();
        self.restart_policy = policy;
        self.paddle_scale_x = scale_x;
        self.paddle_scale_y = scale_y;
    }

    /// Paddle size after scaling.
    pub fn paddle_size(&self) -> Vec2 {
        Vec2::new(
            self.paddle_base_width * self.paddle_scale_x,
            self.paddle_base_height * self.paddle_scale_y,
        )
    }

    /// Block size as a square.
    pub fn block_extent(&self) -> Vec2 {
        Vec2::splat(self.block_size)
    }

    /// Coordinate mapping for this playfield.
    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.field_width, self.field_height)
    }

    /// Check every value the game logic relies on.
    pub fn validate(&self) -> GameResult<()> {
        validate_positive("field_width", self.field_width)?;
        validate_positive("field_height", self.field_height)?;
        validate_positive("paddle_base_width", self.paddle_base_width)?;
        validate_positive("paddle_base_height", self.paddle_base_height)?;
        validate_positive("paddle_scale_x", self.paddle_scale_x)?;
        validate_positive("paddle_scale_y", self.paddle_scale_y)?;
        validate_positive("paddle_speed", self.paddle_speed)?;
        validate_positive("block_size", self.block_size)?;
        validate_positive("block_fall_speed", self.block_fall_speed)?;
        validate_positive("spawn_interval_secs", self.spawn_interval_secs)?;
        validate_positive("timed_return_delay_secs", self.timed_return_delay_secs)?;
        validate_spawn_range(self.spawn_x_min, self.spawn_x_max, self.field_width)
    }

    /// `self` if it validates, otherwise the defaults (with a warning).
    pub fn validated_or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                warn!("[config] {e}; using defaults");
                Self::default()
            }
        }
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Parse and validate a configuration document.
///
/// Any paddle scale axis the document leaves out is taken from the preset of
/// its `restart_policy`.  `path` is only used to label errors.
pub fn parse_game_config(contents: &str, path: &str) -> GameResult<GameConfig> {
    let parse_err = |e: toml::de::Error| GameError::ConfigParse {
        path: path.to_string(),
        reason: e.to_string(),
    };
    let table = contents.parse::<toml::Table>().map_err(parse_err)?;
    let mut config = toml::from_str::<GameConfig>(contents).map_err(parse_err)?;

    let (preset_x, preset_y) = config.restart_policy.paddle_scale();
    if !table.contains_key("paddle_scale_x") {
        config.paddle_scale_x = preset_x;
    }
    if !table.contains_key("paddle_scale_y") {
        config.paddle_scale_y = preset_y;
    }

    config.validate()?;
    Ok(config)
}

/// Read `path` into a [`GameConfig`].
///
/// A missing file yields the compiled defaults.  Read, parse and validation
/// errors are printed to stderr and also yield the defaults; they never abort
/// the game.
pub fn load_game_config(path: &Path) -> GameConfig {
    let label = path.display().to_string();
    match std::fs::read_to_string(path) {
        Ok(contents) => match parse_game_config(&contents, &label) {
            Ok(loaded) => {
                println!("✓ Loaded game config from {label}");
                loaded
            }
            Err(e) => {
                eprintln!("⚠ {e}; using defaults");
                GameConfig::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            println!("ℹ No {label} found; using compiled defaults");
            GameConfig::default()
        }
        Err(e) => {
            let err = GameError::ConfigRead {
                path: label,
                reason: e.to_string(),
            };
            eprintln!("⚠ {err}; using defaults");
            GameConfig::default()
        }
    }
}

/// Apply an optional `BLOCK_CATCH_RESTART` value on top of `config`.
///
/// An unrecognised value is reported and leaves `config` untouched.
pub fn apply_restart_override(config: &mut GameConfig, value: Option<&str>) -> GameResult<()> {
    let Some(value) = value else {
        return Ok(());
    };
    let policy = RestartPolicy::from_env_value(value)?;
    config.apply_policy_preset(policy);
    Ok(())
}

/// Load [`CONFIG_PATH`] and apply the environment override.
pub fn resolve_game_config() -> GameConfig {
    let mut config = load_game_config(Path::new(CONFIG_PATH));
    let env_value = std::env::var(RESTART_ENV_VAR).ok();
    if let Err(e) = apply_restart_override(&mut config, env_value.as_deref()) {
        eprintln!("⚠ {e}; keeping {:?}", config.restart_policy);
    }
    config
}
