//! Round module: paddle, falling blocks, scoring, and round lifecycle.
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | ECS components (`Paddle`, `Block`, `RoundEntity`) and resources (`Round`, `PaddleIntent`, `BlockRng`) |
//! | [`control`] | Arrow keys → `PaddleIntent` → paddle `Velocity`; playfield clamp |
//! | [`blocks`] | Spawn timer, catch scoring from collision events, boundary check |
//! | [`hud`] | Score text |
//!
//! ## Lifecycle
//!
//! | Schedule                  | Systems                                   |
//! |---------------------------|-------------------------------------------|
//! | `OnEnter(Active)`         | `clear_round_entities` → `begin_round`    |
//! | `Update / in Active`      | intent → velocity → spawn → catch → boundary |
//! | `OnEnter(GameOver)`       | `despawn_paddle`                          |
//! | `Update / in GameOver`    | `cull_missed_blocks_system`               |
//! | `OnExit(Play)`            | `end_round`                               |

pub mod blocks;
pub mod control;
pub mod hud;
pub mod state;

pub use blocks::{
    block_boundary_system, block_catch_system, block_spawn_system, cull_missed_blocks_system,
    roll_spawn_x, spawn_block,
};
pub use control::{apply_paddle_intent_system, clamp_paddle_system, keyboard_to_intent_system};
pub use hud::{score_display_system, ScoreHud};
pub use state::{Block, BlockRng, MoveDirection, Paddle, PaddleIntent, Round, RoundEntity};

use crate::config::GameConfig;
use crate::graphics::paddle_color;
use crate::screen::{RoundPhase, Screen};
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct RoundPlugin;

impl Plugin for RoundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PaddleIntent>()
            .add_systems(
                OnEnter(RoundPhase::Active),
                (clear_round_entities, begin_round).chain(),
            )
            .add_systems(OnEnter(RoundPhase::GameOver), despawn_paddle)
            .add_systems(OnExit(Screen::Play), end_round)
            .add_systems(
                Update,
                (
                    keyboard_to_intent_system,
                    apply_paddle_intent_system,
                    block_spawn_system,
                    // Catch before the boundary check: a block caught on the
                    // tick it crosses still counts.
                    block_catch_system,
                    block_boundary_system,
                )
                    .chain()
                    .run_if(in_state(RoundPhase::Active)),
            )
            .add_systems(
                Update,
                (
                    cull_missed_blocks_system.run_if(in_state(RoundPhase::GameOver)),
                    score_display_system.run_if(in_state(Screen::Play)),
                ),
            )
            // Rapier writes integrated positions back in PostUpdate.
            .add_systems(
                PostUpdate,
                clamp_paddle_system
                    .after(PhysicsSet::Writeback)
                    .run_if(in_state(Screen::Play)),
            );
    }
}

// ── Paddle spawn ──────────────────────────────────────────────────────────────

/// Spawn the paddle centred horizontally on `paddle_y`.
///
/// Kinematic and velocity-driven: input sets the velocity, Rapier integrates
/// it.  Collision events are enabled so overlaps with block sensors are
/// reported.
pub fn spawn_paddle(commands: &mut Commands, config: &GameConfig) -> Entity {
    let field = config.playfield();
    let size = config.paddle_size();
    let pos = field.to_world(Vec2::new(config.field_width / 2.0, config.paddle_y));
    commands
        .spawn((
            Paddle,
            RoundEntity,
            Sprite::from_color(paddle_color(), size),
            Transform::from_translation(pos.extend(1.0)),
            RigidBody::KinematicVelocityBased,
            Velocity::zero(),
            Collider::cuboid(size.x / 2.0, size.y / 2.0),
            ActiveCollisionTypes::KINEMATIC_KINEMATIC,
            ActiveEvents::COLLISION_EVENTS,
        ))
        .id()
}

// ── Lifecycle systems ─────────────────────────────────────────────────────────

/// Despawn everything left over from a previous round.
pub fn clear_round_entities(mut commands: Commands, query: Query<Entity, With<RoundEntity>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Start a fresh round: new context, new paddle, new HUD.
pub fn begin_round(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut intent: ResMut<PaddleIntent>,
) {
    commands.insert_resource(Round::new(&config));
    *intent = PaddleIntent::default();
    spawn_paddle(&mut commands, &config);
    hud::spawn_score_hud(&mut commands);
    info!("[round] Round started ({:?})", config.restart_policy);
}

/// The round is over: the paddle goes away, everything else stays on screen.
pub fn despawn_paddle(mut commands: Commands, query: Query<Entity, With<Paddle>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Leaving the play screen: drop every round entity and the round context.
pub fn end_round(mut commands: Commands, query: Query<Entity, With<RoundEntity>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
    commands.remove_resource::<Round>();
    info!("[round] Play screen torn down");
}
