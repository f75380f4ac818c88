//! Headless tests for the Start → Play → GameOver flow.
//!
//! These tests drive the game through [`GameHost`] (no window, no renderer,
//! no physics backend) with a fixed 100 ms frame so timers are exact.
//! Collision events are written by hand, the way Rapier would report them.
//!
//! Covered scenarios:
//! 1. The game opens on the start screen.
//! 2. Space starts a fresh round; held Space does not retrigger.
//! 3. Blocks spawn once per second while the round is active.
//! 4. A catch scores 10 and removes the block.
//! 5. A missed block ends the round and removes the paddle.
//! 6. Manual restart: no scoring in GameOver; Space resets to a fresh round.
//! 7. Timed return: back to Start after 3 s regardless of input.

use bevy::prelude::*;
use bevy_rapier2d::prelude::CollisionEvent;
use bevy_rapier2d::rapier::geometry::CollisionEventFlags;
use block_catch::config::GameConfig;
use block_catch::host::GameHost;
use block_catch::round::{Block, Paddle, Round};
use block_catch::screen::{GameOverRoot, RoundPhase, Screen, StartScreenRoot, CONFIRM_KEY};
use std::time::Duration;

// ── Helpers ───────────────────────────────────────────────────────────────────

const FRAME: Duration = Duration::from_millis(100);

fn started_host(config: GameConfig) -> GameHost {
    let mut host = GameHost::new(GameConfig {
        seed: Some(1234),
        ..config
    })
    .with_frame(FRAME);
    host.start();
    host
}

/// Host already on the play screen with an active round.
fn playing_host(config: GameConfig) -> GameHost {
    let mut host = started_host(config);
    host.tap(CONFIRM_KEY);
    host.update();
    assert_eq!(screen(&host), Screen::Play);
    host
}

fn world(host: &mut GameHost) -> &mut World {
    host.world_mut().expect("host is running")
}

fn screen(host: &GameHost) -> Screen {
    *host
        .world()
        .expect("host is running")
        .resource::<State<Screen>>()
        .get()
}

fn phase(host: &GameHost) -> Option<RoundPhase> {
    host.world()
        .expect("host is running")
        .get_resource::<State<RoundPhase>>()
        .map(|s| *s.get())
}

fn count<C: Component>(host: &mut GameHost) -> usize {
    let w = world(host);
    let mut q = w.query_filtered::<Entity, With<C>>();
    q.iter(w).count()
}

fn score(host: &GameHost) -> u32 {
    host.world()
        .expect("host is running")
        .resource::<Round>()
        .score
}

fn paddle(host: &mut GameHost) -> Entity {
    let w = world(host);
    let mut q = w.query_filtered::<Entity, With<Paddle>>();
    q.single(w).expect("exactly one paddle")
}

/// Spawn a block right on the paddle and report the overlap.
fn catch_one(host: &mut GameHost) {
    let paddle = paddle(host);
    let w = world(host);
    let block = w
        .spawn((Block, Transform::from_xyz(0.0, -250.0, 0.0)))
        .id();
    w.write_message(CollisionEvent::Started(
        paddle,
        block,
        CollisionEventFlags::SENSOR,
    ));
    host.update();
}

/// Put a block below the lower boundary and let the round notice.
fn miss_one(host: &mut GameHost) {
    world(host).spawn((Block, Transform::from_xyz(0.0, -301.0, 0.0)));
    host.update(); // boundary check requests GameOver
    host.update(); // transition applies
}

// ── Start screen ──────────────────────────────────────────────────────────────

#[test]
fn game_opens_on_start_screen() {
    let mut host = started_host(GameConfig::default());

    assert_eq!(screen(&host), Screen::Start);
    assert_eq!(phase(&host), None);
    assert_eq!(count::<StartScreenRoot>(&mut host), 2);
    assert_eq!(count::<Paddle>(&mut host), 0);
}

#[test]
fn start_screen_waits_for_confirm() {
    let mut host = started_host(GameConfig::default());

    host.tap(KeyCode::ArrowLeft);
    host.tap(KeyCode::Enter);
    for _ in 0..20 {
        host.update();
    }

    assert_eq!(screen(&host), Screen::Start);
}

#[test]
fn confirm_starts_a_fresh_round() {
    let mut host = playing_host(GameConfig::default());

    assert_eq!(phase(&host), Some(RoundPhase::Active));
    assert_eq!(count::<StartScreenRoot>(&mut host), 0);
    assert_eq!(count::<Paddle>(&mut host), 1);
    assert_eq!(score(&host), 0);
}

#[test]
fn held_confirm_does_not_retrigger_anything() {
    let mut host = started_host(GameConfig::default());
    host.press(CONFIRM_KEY);
    for _ in 0..5 {
        host.update();
    }

    assert_eq!(screen(&host), Screen::Play);
    assert_eq!(phase(&host), Some(RoundPhase::Active));
    assert_eq!(count::<Paddle>(&mut host), 1);
}

// ── Active round ──────────────────────────────────────────────────────────────

#[test]
fn blocks_spawn_once_per_second() {
    let mut host = playing_host(GameConfig::default());
    let before = count::<Block>(&mut host);

    for _ in 0..30 {
        host.update();
    }

    // 3 s of game time at 100 ms per frame.
    assert_eq!(count::<Block>(&mut host) - before, 3);
}

#[test]
fn spawned_blocks_fall_at_fixed_speed_from_the_spawn_range() {
    use bevy_rapier2d::prelude::Velocity;

    let mut host = playing_host(GameConfig::default());
    for _ in 0..50 {
        host.update();
    }

    let w = world(&mut host);
    let mut q = w.query_filtered::<(&Transform, &Velocity), With<Block>>();
    let mut seen = 0;
    for (transform, velocity) in q.iter(w) {
        // World x = field x - 400.
        let field_x = transform.translation.x + 400.0;
        assert!((50.0..=750.0).contains(&field_x), "x = {field_x}");
        assert_eq!(velocity.linvel, Vec2::new(0.0, -200.0));
        seen += 1;
    }
    assert!(seen >= 4);
}

#[test]
fn paddle_velocity_follows_arrow_keys() {
    use bevy_rapier2d::prelude::Velocity;

    let mut host = playing_host(GameConfig::default());
    let paddle = paddle(&mut host);
    let vx = |host: &GameHost| {
        host.world()
            .unwrap()
            .get::<Velocity>(paddle)
            .unwrap()
            .linvel
            .x
    };

    host.press(KeyCode::ArrowRight);
    host.update();
    assert_eq!(vx(&host), 300.0);

    host.press(KeyCode::ArrowLeft);
    host.update();
    assert_eq!(vx(&host), -300.0);

    host.release(KeyCode::ArrowLeft);
    host.release(KeyCode::ArrowRight);
    host.update();
    assert_eq!(vx(&host), 0.0);
}

#[test]
fn catching_blocks_scores_ten_each() {
    let mut host = playing_host(GameConfig::default());

    catch_one(&mut host);
    assert_eq!(score(&host), 10);

    catch_one(&mut host);
    catch_one(&mut host);
    assert_eq!(score(&host), 30);
}

#[test]
fn missed_block_ends_the_round() {
    let mut host = playing_host(GameConfig::default());

    miss_one(&mut host);

    assert_eq!(screen(&host), Screen::Play);
    assert_eq!(phase(&host), Some(RoundPhase::GameOver));
    assert_eq!(count::<Paddle>(&mut host), 0);
    assert_eq!(count::<GameOverRoot>(&mut host), 1);
}

// ── Manual restart ────────────────────────────────────────────────────────────

#[test]
fn game_over_ignores_overlaps() {
    let mut host = playing_host(GameConfig::manual_restart());
    catch_one(&mut host);
    miss_one(&mut host);
    assert_eq!(score(&host), 10);

    let w = world(&mut host);
    let stray_paddle = w.spawn(Paddle).id();
    let block = w.spawn(Block).id();
    w.write_message(CollisionEvent::Started(
        stray_paddle,
        block,
        CollisionEventFlags::SENSOR,
    ));
    host.update();

    assert_eq!(score(&host), 10);
}

#[test]
fn manual_restart_waits_for_confirm_then_resets() {
    let mut host = playing_host(GameConfig::manual_restart());
    catch_one(&mut host);
    miss_one(&mut host);

    // Well past the timed-return delay: nothing happens on its own.
    for _ in 0..50 {
        host.update();
    }
    assert_eq!(phase(&host), Some(RoundPhase::GameOver));
    // The round ended before the first spawn; none appear after it.
    assert_eq!(count::<Block>(&mut host), 0);

    host.tap(CONFIRM_KEY);
    host.update();

    assert_eq!(screen(&host), Screen::Play);
    assert_eq!(phase(&host), Some(RoundPhase::Active));
    assert_eq!(score(&host), 0);
    assert_eq!(count::<Paddle>(&mut host), 1);
    assert_eq!(count::<GameOverRoot>(&mut host), 0);
    assert_eq!(count::<Block>(&mut host), 0);
}

// ── Timed return ──────────────────────────────────────────────────────────────

#[test]
fn timed_return_goes_back_to_start_after_three_seconds() {
    let mut host = playing_host(GameConfig::timed_return());
    miss_one(&mut host);
    assert_eq!(phase(&host), Some(RoundPhase::GameOver));

    // Input has no effect.
    host.tap(CONFIRM_KEY);

    // 1 entry frame + 1 tap frame + 23 = 2.5 s elapsed.
    for _ in 0..23 {
        host.update();
    }
    assert_eq!(phase(&host), Some(RoundPhase::GameOver));

    for _ in 0..10 {
        host.update();
    }
    assert_eq!(screen(&host), Screen::Start);
    assert_eq!(phase(&host), None);
    assert!(host.world().unwrap().get_resource::<Round>().is_none());
    assert_eq!(count::<Block>(&mut host), 0);
    assert_eq!(count::<GameOverRoot>(&mut host), 0);
    assert_eq!(count::<StartScreenRoot>(&mut host), 2);
}

#[test]
fn timed_return_allows_a_new_game() {
    let mut host = playing_host(GameConfig::timed_return());
    catch_one(&mut host);
    miss_one(&mut host);
    for _ in 0..40 {
        host.update();
    }
    assert_eq!(screen(&host), Screen::Start);

    host.tap(CONFIRM_KEY);
    host.update();

    assert_eq!(phase(&host), Some(RoundPhase::Active));
    assert_eq!(score(&host), 0);
    assert_eq!(count::<Paddle>(&mut host), 1);
}

// ── Host lifecycle ────────────────────────────────────────────────────────────

#[test]
fn destroy_tears_down_mid_round() {
    let mut host = playing_host(GameConfig::default());
    for _ in 0..15 {
        host.update();
    }

    host.destroy();

    assert!(!host.is_running());
    assert!(host.world().is_none());
}
