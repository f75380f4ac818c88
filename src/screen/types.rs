use bevy::prelude::*;

/// Top-level screen state machine.
///
/// Every gameplay system in [`crate::round::RoundPlugin`] runs under a
/// `.run_if(in_state(..))` guard on [`Screen::Play`] or one of its
/// [`RoundPhase`]s, so nothing round-related ticks on the start screen.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// Prompt shown on startup; waits for the confirm key.
    #[default]
    Start,
    /// Blocks are falling (or the round has just ended).
    Play,
}

/// Phase of the current round.  Only exists while [`Screen::Play`] is active.
///
/// Entering `Active` always starts a brand-new round (score, paddle, blocks,
/// spawn timer).  `GameOver` is terminal for the round.
#[derive(SubStates, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[source(Screen = Screen::Play)]
pub enum RoundPhase {
    #[default]
    Active,
    GameOver,
}

/// Background and prompt of the start screen; despawned on `OnExit(Start)`.
#[derive(Component)]
pub struct StartScreenRoot;

/// Root node of the game-over overlay; despawned on `OnExit(GameOver)`.
#[derive(Component)]
pub struct GameOverRoot;

/// Countdown used by [`crate::config::RestartPolicy::TimedReturn`].
///
/// Inserted on `OnEnter(GameOver)`, removed on `OnExit(GameOver)`.
#[derive(Resource, Debug)]
pub struct ReturnTimer(pub Timer);
