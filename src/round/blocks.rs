//! Block lifecycle: spawning, catching, and missing.
//!
//! 1. [`block_spawn_system`] ticks the round's spawn timer and drops one block
//!    per expiry at a random x in `[spawn_x_min, spawn_x_max]`.
//! 2. Rapier moves the block (kinematic, constant velocity) and reports
//!    sensor overlaps with the paddle as `CollisionEvent::Started`.
//! 3. [`block_catch_system`] turns those events into points.
//! 4. [`block_boundary_system`] ends the round once a block falls past
//!    `boundary_y`.

use super::state::{Block, BlockRng, Paddle, Round, RoundEntity};
use crate::config::GameConfig;
use crate::graphics::block_color;
use crate::screen::RoundPhase;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

// ── Spawn helpers ─────────────────────────────────────────────────────────────

/// Draw a spawn x uniformly from the inclusive integer range in `config`.
pub fn roll_spawn_x(rng: &mut impl Rng, config: &GameConfig) -> f32 {
    rng.gen_range(config.spawn_x_min..=config.spawn_x_max) as f32
}

/// Spawn one falling block at field x `field_x`, on the spawn line.
///
/// The block is a kinematic sensor: it moves at a fixed velocity and only
/// reports overlaps, it never pushes the paddle.
pub fn spawn_block(commands: &mut Commands, config: &GameConfig, field_x: f32) -> Entity {
    let field = config.playfield();
    let pos = field.to_world(Vec2::new(field_x, config.spawn_y));
    let half = config.block_size / 2.0;
    commands
        .spawn((
            Block,
            RoundEntity,
            Sprite::from_color(block_color(), config.block_extent()),
            Transform::from_translation(pos.extend(0.0)),
            RigidBody::KinematicVelocityBased,
            Velocity::linear(field.velocity_to_world(Vec2::new(0.0, config.block_fall_speed))),
            Collider::cuboid(half, half),
            Sensor,
            ActiveCollisionTypes::KINEMATIC_KINEMATIC,
            ActiveEvents::COLLISION_EVENTS,
        ))
        .id()
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Tick the spawn timer and drop one block per expiry.
pub fn block_spawn_system(
    mut commands: Commands,
    time: Res<Time>,
    mut round: ResMut<Round>,
    mut rng: ResMut<BlockRng>,
    config: Res<GameConfig>,
) {
    round.spawn_timer.tick(time.delta());
    for _ in 0..round.spawn_timer.times_finished_this_tick() {
        let x = roll_spawn_x(&mut rng.0, &config);
        spawn_block(&mut commands, &config, x);
        debug!("[round] Block spawned at x = {x}");
    }
}

/// Award points for every block the paddle overlaps.
///
/// Matches `CollisionEvent::Started` pairs of (paddle, block) in either order;
/// ignores `Stopped`.  A block named by several events is scored once.
pub fn block_catch_system(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionEvent>,
    paddles: Query<(), With<Paddle>>,
    blocks: Query<(), With<Block>>,
    mut round: ResMut<Round>,
    config: Res<GameConfig>,
) {
    let mut caught: Vec<Entity> = Vec::new();

    for event in collision_events.read() {
        let (e1, e2) = match event {
            CollisionEvent::Started(e1, e2, _) => (*e1, *e2),
            CollisionEvent::Stopped(..) => continue,
        };

        let block = if paddles.contains(e1) && blocks.contains(e2) {
            e2
        } else if paddles.contains(e2) && blocks.contains(e1) {
            e1
        } else {
            continue;
        };

        if caught.contains(&block) {
            continue;
        }
        caught.push(block);

        commands.entity(block).despawn();
        round.award_catch(config.catch_points);
        debug!("[round] Block caught; score = {}", round.score);
    }
}

/// Field-space test: has this block fallen past the boundary?
pub fn is_past_boundary(transform: &Transform, config: &GameConfig) -> bool {
    let field = config.playfield();
    field.to_field(transform.translation.truncate()).y > config.boundary_y
}

/// Despawn blocks below the boundary and end the round if there were any.
///
/// Several blocks crossing in one tick still produce a single transition.
pub fn block_boundary_system(
    mut commands: Commands,
    blocks: Query<(Entity, &Transform), With<Block>>,
    config: Res<GameConfig>,
    mut next_phase: ResMut<NextState<RoundPhase>>,
) {
    let mut missed = 0;
    for (entity, transform) in blocks.iter() {
        if is_past_boundary(transform, &config) {
            commands.entity(entity).despawn();
            missed += 1;
        }
    }

    if missed > 0 {
        info!("[round] {missed} block(s) missed; round over");
        next_phase.set(RoundPhase::GameOver);
    }
}

/// After the round ends, blocks still in flight keep falling; drop them
/// quietly once they leave the field.
pub fn cull_missed_blocks_system(
    mut commands: Commands,
    blocks: Query<(Entity, &Transform), With<Block>>,
    config: Res<GameConfig>,
) {
    for (entity, transform) in blocks.iter() {
        if is_past_boundary(transform, &config) {
            commands.entity(entity).despawn();
        }
    }
}
