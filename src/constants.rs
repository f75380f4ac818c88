//! Centralised gameplay constants.
//!
//! All tuneable values live here so they can be found and changed in one
//! place.  They are the compiled defaults behind [`crate::config::GameConfig`];
//! `assets/game.toml` can override any of them at startup.
//!
//! Positions and ranges are in **field coordinates**: origin at the top-left
//! corner of the playfield, x to the right, y downward.

// ── Playfield ─────────────────────────────────────────────────────────────────

/// Playfield width (field units).  Also the window width.
pub const FIELD_WIDTH: f32 = 800.0;

/// Playfield height (field units).  Also the window height.
pub const FIELD_HEIGHT: f32 = 600.0;

// ── Paddle ────────────────────────────────────────────────────────────────────

/// Unscaled paddle width.  At scale 1.0 the paddle spans ±50 around its centre.
pub const PADDLE_BASE_WIDTH: f32 = 100.0;

/// Unscaled paddle height.
pub const PADDLE_BASE_HEIGHT: f32 = 32.0;

/// Field-space y of the paddle centre.
pub const PADDLE_Y: f32 = 550.0;

/// Horizontal paddle speed while a direction key is held (units/s).
///
/// Applied instantaneously: there is no acceleration or easing.
pub const PADDLE_SPEED: f32 = 300.0;

/// Paddle scale used with the manual-restart policy (wide and flat).
pub const MANUAL_RESTART_PADDLE_SCALE: (f32, f32) = (1.0, 0.5);

/// Paddle scale used with the timed-return policy (twice as wide).
pub const TIMED_RETURN_PADDLE_SCALE: (f32, f32) = (2.0, 1.0);

// ── Blocks ────────────────────────────────────────────────────────────────────

/// Side length of a falling block.
pub const BLOCK_SIZE: f32 = 32.0;

/// Constant downward block speed (units/s).
pub const BLOCK_FALL_SPEED: f32 = 200.0;

/// Seconds between block spawns.
pub const SPAWN_INTERVAL_SECS: f32 = 1.0;

/// Smallest spawn x (inclusive).
pub const SPAWN_X_MIN: i32 = 50;

/// Largest spawn x (inclusive).
pub const SPAWN_X_MAX: i32 = 750;

/// Field-space y at which blocks appear.
pub const SPAWN_Y: f32 = 0.0;

/// A block whose field y exceeds this value has been missed and ends the round.
pub const BOUNDARY_Y: f32 = 600.0;

// ── Scoring & flow ────────────────────────────────────────────────────────────

/// Points awarded per caught block.
pub const CATCH_POINTS: u32 = 10;

/// Delay before the timed-return policy sends the player back to the start
/// screen (seconds).
pub const TIMED_RETURN_DELAY_SECS: f32 = 3.0;

// ── Text ──────────────────────────────────────────────────────────────────────

/// Font size of the start prompt and game-over message.
pub const MESSAGE_FONT_SIZE: f32 = 32.0;

/// Font size of the score HUD.
pub const HUD_FONT_SIZE: f32 = 24.0;
