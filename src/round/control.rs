//! Paddle input and movement systems.
//!
//! ## Pipeline (runs in order every `Update` frame while the round is active)
//!
//! 1. [`keyboard_to_intent_system`] — translates the arrow keys into `PaddleIntent`.
//! 2. [`apply_paddle_intent_system`] — converts `PaddleIntent` into `Velocity`.
//!
//! Rapier integrates the velocity; [`clamp_paddle_system`] then keeps the
//! paddle inside the playfield after physics writeback.

use super::state::{MoveDirection, Paddle, PaddleIntent};
use crate::config::GameConfig;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// Overwrite [`PaddleIntent`] from the current key state.
///
/// Level-triggered and memoryless: each tick depends only on which keys are
/// held right now.
pub fn keyboard_to_intent_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut intent: ResMut<PaddleIntent>,
) {
    intent.direction = MoveDirection::from_keys(
        keys.pressed(KeyCode::ArrowLeft),
        keys.pressed(KeyCode::ArrowRight),
    );
}

/// Set the paddle velocity to exactly −speed, 0 or +speed.  No easing.
pub fn apply_paddle_intent_system(
    mut q: Query<&mut Velocity, With<Paddle>>,
    intent: Res<PaddleIntent>,
    config: Res<GameConfig>,
) {
    let Ok(mut velocity) = q.single_mut() else {
        return;
    };
    let field_vel = Vec2::new(intent.direction.velocity(config.paddle_speed), 0.0);
    velocity.linvel = config.playfield().velocity_to_world(field_vel);
    velocity.angvel = 0.0;
}

/// Keep the paddle fully on the playfield.
///
/// Only the position is corrected; the input-driven velocity is left alone.
pub fn clamp_paddle_system(
    mut q: Query<&mut Transform, With<Paddle>>,
    config: Res<GameConfig>,
) {
    let Ok(mut transform) = q.single_mut() else {
        return;
    };
    let field = config.playfield();
    let pos = field.to_field(transform.translation.truncate());
    let clamped_x = field.clamp_x(pos.x, config.paddle_size().x / 2.0);
    if clamped_x != pos.x {
        transform.translation.x = field.to_world(Vec2::new(clamped_x, pos.y)).x;
    }
}
