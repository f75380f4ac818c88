//! Catch, miss and clamp with the real Rapier backend.
//!
//! Unlike `screen_flow_tests.rs`, nothing here is faked: blocks are moved by
//! Rapier and overlaps arrive as genuine `CollisionEvent`s.  The app is the
//! windowed build minus window and renderer, stepped at a fixed 60 Hz.
//!
//! The spawn interval is pushed far out so every block in play is one the
//! test placed itself.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier2d::prelude::*;
use block_catch::config::GameConfig;
use block_catch::host::GamePlugin;
use block_catch::round::{spawn_block, Block, Paddle, Round};
use block_catch::screen::{RoundPhase, CONFIRM_KEY};
use std::time::Duration;

// ── Helpers ───────────────────────────────────────────────────────────────────

const MAX_FRAMES: usize = 600;

fn test_config() -> GameConfig {
    GameConfig {
        spawn_interval_secs: 600.0,
        seed: Some(3),
        ..GameConfig::default()
    }
}

/// Headless app with physics, already on the play screen.
fn physics_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, TransformPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / 60.0,
        )))
        .init_resource::<ButtonInput<KeyCode>>()
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(1.0))
        .add_plugins(GamePlugin::new(test_config()));

    step(&mut app);
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(CONFIRM_KEY);
    step(&mut app);
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .release(CONFIRM_KEY);
    step(&mut app);

    assert_eq!(phase(&app), Some(RoundPhase::Active));
    app
}

fn step(app: &mut App) {
    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .clear();
}

fn phase(app: &App) -> Option<RoundPhase> {
    app.world()
        .get_resource::<State<RoundPhase>>()
        .map(|s| *s.get())
}

fn drop_block(app: &mut App, field_x: f32) -> Entity {
    let config = test_config();
    let world = app.world_mut();
    let block = {
        let mut commands = world.commands();
        spawn_block(&mut commands, &config, field_x)
    };
    world.flush();
    block
}

fn block_count(app: &mut App) -> usize {
    let world = app.world_mut();
    let mut q = world.query_filtered::<Entity, With<Block>>();
    q.iter(world).count()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn block_over_the_paddle_is_caught() {
    let mut app = physics_app();
    let block = drop_block(&mut app, 400.0);

    let mut frames = 0;
    while app.world().resource::<Round>().score == 0 && frames < MAX_FRAMES {
        step(&mut app);
        frames += 1;
    }

    assert_eq!(app.world().resource::<Round>().score, 10, "no catch after {frames} frames");
    assert!(app.world().get_entity(block).is_err());
    assert_eq!(block_count(&mut app), 0);
    assert_eq!(phase(&app), Some(RoundPhase::Active));
}

#[test]
fn block_beside_the_paddle_ends_the_round() {
    let mut app = physics_app();
    drop_block(&mut app, 100.0);

    let mut frames = 0;
    while phase(&app) != Some(RoundPhase::GameOver) && frames < MAX_FRAMES {
        step(&mut app);
        frames += 1;
    }

    assert_eq!(phase(&app), Some(RoundPhase::GameOver), "no miss after {frames} frames");
    assert_eq!(app.world().resource::<Round>().score, 0);
    assert_eq!(block_count(&mut app), 0);
}

#[test]
fn held_left_arrow_pins_paddle_at_the_left_edge() {
    let mut app = physics_app();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ArrowLeft);

    // 350 units at 300 units/s is about 70 frames.
    for _ in 0..120 {
        step(&mut app);
    }

    let world = app.world_mut();
    let mut q = world.query_filtered::<(&Transform, &Velocity), With<Paddle>>();
    let (transform, velocity) = q.single(world).expect("one paddle");
    let field = test_config().playfield();
    let field_pos = field.to_field(transform.translation.truncate());

    // Half of a 100-wide paddle from the left edge.
    assert_eq!(field_pos.x, 50.0);
    assert_eq!(field_pos.y, 550.0);
    // The clamp moves the paddle, never the input velocity.
    assert_eq!(velocity.linvel, Vec2::new(-300.0, 0.0));
}
