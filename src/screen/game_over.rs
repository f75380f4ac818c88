use super::*;
use crate::constants::{HUD_FONT_SIZE, MESSAGE_FONT_SIZE};
use crate::round::Round;

/// Spawn the game-over overlay and, for the timed-return policy, arm the
/// return countdown.
///
/// Manual restart shows "Game Over" plus the restart hint; timed return shows
/// "Game Over" alone.  Both show the final score and the number of blocks
/// caught.
pub(super) fn setup_game_over(
    mut commands: Commands,
    config: Res<GameConfig>,
    round: Res<Round>,
) {
    let policy = config.restart_policy;

    commands
        .spawn((centered_overlay(), ZIndex(300), GameOverRoot))
        .with_children(|overlay| {
            overlay.spawn((
                Text::new("Game Over"),
                TextFont {
                    font_size: MESSAGE_FONT_SIZE,
                    ..default()
                },
                TextColor(game_over_color()),
            ));

            if policy == RestartPolicy::ManualRestart {
                overlay.spawn((
                    Text::new("Press SPACE to Restart"),
                    TextFont {
                        font_size: MESSAGE_FONT_SIZE,
                        ..default()
                    },
                    TextColor(game_over_color()),
                ));
            }

            spacer(overlay, 12.0);

            for line in [
                format!("Final score: {}", round.score),
                format!("Blocks caught: {}", round.caught),
            ] {
                overlay.spawn((
                    Text::new(line),
                    TextFont {
                        font_size: HUD_FONT_SIZE,
                        ..default()
                    },
                    TextColor(subtitle_color()),
                ));
            }
        });

    if policy == RestartPolicy::TimedReturn {
        commands.insert_resource(ReturnTimer(Timer::from_seconds(
            config.timed_return_delay_secs,
            TimerMode::Once,
        )));
    }

    info!(
        "[screen] Game over with score {} ({:?})",
        round.score, policy
    );
}

/// Despawn the overlay and drop any pending return countdown.
pub(super) fn cleanup_game_over(mut commands: Commands, query: Query<Entity, With<GameOverRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
    commands.remove_resource::<ReturnTimer>();
}

/// Policy A: a confirm down-edge starts a fresh round.
pub(super) fn manual_restart_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_phase: ResMut<NextState<RoundPhase>>,
) {
    if keys.just_pressed(CONFIRM_KEY) {
        info!("[screen] GameOver → Active (manual restart)");
        next_phase.set(RoundPhase::Active);
    }
}

/// Policy B: once the countdown expires, go back to the start screen.
///
/// Input is never consulted.
pub(super) fn timed_return_system(
    time: Res<Time>,
    mut timer: ResMut<ReturnTimer>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    if timer.0.tick(time.delta()).just_finished() {
        info!("[screen] GameOver → Start (timed return)");
        next_screen.set(Screen::Start);
    }
}
