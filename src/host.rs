//! Host lifecycle: building, driving, and tearing down the game.
//!
//! | Entry point            | Use                                                    |
//! |------------------------|--------------------------------------------------------|
//! | [`GamePlugin`]         | All game logic; add to any app that already has states |
//! | [`build_windowed_app`] | Window + rendering + Rapier + game (used by `main.rs`) |
//! | [`GameHost`]           | Headless `start()` / `update()` / `destroy()` wrapper   |
//!
//! The headless host runs without a renderer or physics backend.  Bodies keep
//! whatever velocity the game gives them but only move when a driver moves
//! them, which is what tests and scripted drivers want.

use crate::config::GameConfig;
use crate::graphics;
use crate::round::{BlockRng, RoundPlugin};
use crate::screen::ScreenPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use bevy::window::WindowResolution;
use bevy_rapier2d::prelude::*;
use std::time::Duration;

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers the configuration, the block RNG, collision messages, and the
/// screen + round plugins.
///
/// The configuration is validated here; an invalid one is reported and
/// replaced by the defaults.  Requires `StatesPlugin` (part of
/// `DefaultPlugins`).
pub struct GamePlugin {
    pub config: GameConfig,
}

impl GamePlugin {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }
}

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone().validated_or_default();
        app.insert_resource(BlockRng::new(config.seed))
            .insert_resource(config)
            // Already registered by RapierPhysicsPlugin when physics runs;
            // the headless host needs it for the catch system.
            .add_message::<CollisionEvent>()
            .add_plugins((ScreenPlugin, RoundPlugin))
            .add_systems(Startup, setup_physics_config);
    }
}

/// Configure Rapier physics: no gravity, blocks fall at a fixed velocity.
///
/// Does nothing when no Rapier context exists (headless host).
pub fn setup_physics_config(mut config: Query<&mut RapierConfiguration>) {
    for mut cfg in config.iter_mut() {
        cfg.gravity = Vec2::ZERO;
    }
}

// ── Windowed build ────────────────────────────────────────────────────────────

/// Escape closes the game.
pub fn quit_on_escape_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut exit: MessageWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        info!("[host] Escape pressed; shutting down");
        exit.write(AppExit::Success);
    }
}

/// Build the full windowed game.  `app.run()` blocks until the window closes.
pub fn build_windowed_app(config: GameConfig) -> App {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Block Catch".into(),
            resolution: WindowResolution::new(
                config.field_width as u32,
                config.field_height as u32,
            ),
            resizable: false,
            ..Default::default()
        }),
        ..Default::default()
    }))
    .insert_resource(ClearColor(Color::BLACK))
    // pixels_per_meter(1.0) keeps world units equal to field units, so the
    // configured speeds are pixels per second.
    .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(1.0))
    .add_plugins(GamePlugin::new(config))
    .add_systems(Startup, graphics::setup_camera)
    .add_systems(Update, quit_on_escape_system);

    app
}

// ── Headless host ─────────────────────────────────────────────────────────────

/// Frame length used by a headless host unless told otherwise (60 Hz).
pub const DEFAULT_FRAME: Duration = Duration::from_micros(16_667);

/// Headless game host with an explicit mount/unmount lifecycle.
///
/// Every frame advances game time by a fixed `frame` duration, so timers are
/// deterministic.  Key edges last exactly one [`GameHost::update`].
pub struct GameHost {
    config: GameConfig,
    frame: Duration,
    app: Option<App>,
}

impl GameHost {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            frame: DEFAULT_FRAME,
            app: None,
        }
    }

    /// Use `frame` as the fixed time step.  Takes effect on the next `start()`.
    pub fn with_frame(mut self, frame: Duration) -> Self {
        self.frame = frame;
        self
    }

    /// Build the game and run its first frame (the start screen appears).
    ///
    /// Calling `start()` on a running host does nothing.
    pub fn start(&mut self) {
        if self.app.is_some() {
            return;
        }

        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .insert_resource(TimeUpdateStrategy::ManualDuration(self.frame))
            .init_resource::<ButtonInput<KeyCode>>()
            .add_plugins(GamePlugin::new(self.config.clone()));

        self.app = Some(app);
        self.update();
        info!("[host] Game started");
    }

    /// Advance one frame.  No-op when the host is not running.
    pub fn update(&mut self) {
        let Some(app) = self.app.as_mut() else {
            return;
        };
        app.update();
        // Same per-frame edge reset the input plugin performs in a real app.
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .clear();
    }

    /// Tear everything down: screens, round, timers, listeners.
    ///
    /// Calling `destroy()` on a stopped host does nothing.
    pub fn destroy(&mut self) {
        if self.app.take().is_some() {
            info!("[host] Game destroyed");
        }
    }

    pub fn is_running(&self) -> bool {
        self.app.is_some()
    }

    /// Hold `key` down from the next frame on.
    pub fn press(&mut self, key: KeyCode) {
        if let Some(app) = self.app.as_mut() {
            app.world_mut()
                .resource_mut::<ButtonInput<KeyCode>>()
                .press(key);
        }
    }

    /// Let go of `key`.
    pub fn release(&mut self, key: KeyCode) {
        if let Some(app) = self.app.as_mut() {
            app.world_mut()
                .resource_mut::<ButtonInput<KeyCode>>()
                .release(key);
        }
    }

    /// Press `key` for exactly one frame.
    pub fn tap(&mut self, key: KeyCode) {
        self.press(key);
        self.update();
        self.release(key);
    }

    pub fn world(&self) -> Option<&World> {
        self.app.as_ref().map(|app| app.world())
    }

    pub fn world_mut(&mut self) -> Option<&mut World> {
        self.app.as_mut().map(|app| app.world_mut())
    }
}

impl Drop for GameHost {
    fn drop(&mut self) {
        self.destroy();
    }
}
