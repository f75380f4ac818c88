//! Score HUD: a single text node in the top-left corner.

use super::state::{Round, RoundEntity};
use crate::constants::HUD_FONT_SIZE;
use bevy::prelude::*;

/// Marker for the score text node.
#[derive(Component)]
pub struct ScoreHud;

/// HUD label for `score`.
pub fn score_label(score: u32) -> String {
    format!("Score: {score}")
}

/// Spawn the score text for a new round.
pub fn spawn_score_hud(commands: &mut Commands) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            ..default()
        },
        Text::new(score_label(0)),
        TextFont {
            font_size: HUD_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        ScoreHud,
        RoundEntity,
    ));
}

/// Refresh the HUD whenever the round's score changes.
pub fn score_display_system(round: Res<Round>, mut text_query: Query<&mut Text, With<ScoreHud>>) {
    if !round.is_changed() {
        return;
    }
    for mut text in text_query.iter_mut() {
        *text = Text::new(score_label(round.score));
    }
}
