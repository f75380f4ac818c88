//! Screen flow: `Screen` / `RoundPhase` definitions and `ScreenPlugin`.
//!
//! ## States
//!
//! | State                   | Description                                   |
//! |-------------------------|-----------------------------------------------|
//! | `Screen::Start`         | Initial state; background and prompt shown    |
//! | `Screen::Play`          | A round is running or has just ended          |
//! | `RoundPhase::Active`    | Sub-state of `Play`; blocks fall, paddle moves |
//! | `RoundPhase::GameOver`  | Sub-state of `Play`; restart policy applies   |
//!
//! ## Systems (registered by `ScreenPlugin`)
//!
//! | System                    | Schedule                     | Purpose                          |
//! |---------------------------|------------------------------|----------------------------------|
//! | `setup_start_screen`      | `OnEnter(Start)`             | Spawn background and prompt      |
//! | `cleanup_start_screen`    | `OnExit(Start)`              | Despawn start-screen entities    |
//! | `start_on_confirm_system` | `Update / in Start`          | Confirm key → `Play`             |
//! | `setup_game_over`         | `OnEnter(GameOver)`          | Spawn overlay, arm return timer  |
//! | `cleanup_game_over`       | `OnExit(GameOver)`           | Despawn overlay, drop timer      |
//! | `manual_restart_system`   | `Update / in GameOver`       | Confirm key → fresh `Active`     |
//! | `timed_return_system`     | `Update / in GameOver`       | Timer expiry → `Start`           |

mod common;
mod game_over;
mod start;
pub mod types;

pub use common::CONFIRM_KEY;
pub use types::*;

use crate::config::{GameConfig, RestartPolicy};
use bevy::prelude::*;
use common::*;

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers `Screen` and `RoundPhase`, the start screen, and the game-over
/// flow for both restart policies.
///
/// This plugin must be added **before** any plugin that calls
/// `.run_if(in_state(Screen::Play))`, so the states are always registered
/// first.
pub struct ScreenPlugin;

impl Plugin for ScreenPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<Screen>()
            .add_sub_state::<RoundPhase>()
            .add_systems(OnEnter(Screen::Start), start::setup_start_screen)
            .add_systems(OnExit(Screen::Start), start::cleanup_start_screen)
            .add_systems(
                Update,
                start::start_on_confirm_system.run_if(in_state(Screen::Start)),
            )
            .add_systems(OnEnter(RoundPhase::GameOver), game_over::setup_game_over)
            .add_systems(OnExit(RoundPhase::GameOver), game_over::cleanup_game_over)
            .add_systems(
                Update,
                (
                    game_over::manual_restart_system
                        .run_if(restart_policy_is(RestartPolicy::ManualRestart)),
                    game_over::timed_return_system.run_if(resource_exists::<ReturnTimer>),
                )
                    .run_if(in_state(RoundPhase::GameOver)),
            );
    }
}

/// Run condition: the configured restart policy is `policy`.
pub fn restart_policy_is(policy: RestartPolicy) -> impl FnMut(Res<GameConfig>) -> bool + Clone {
    move |config: Res<GameConfig>| config.restart_policy == policy
}
