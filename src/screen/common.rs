use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

/// Edge-triggered key that starts the game and (policy A) restarts a round.
pub const CONFIRM_KEY: KeyCode = KeyCode::Space;

pub(super) fn prompt_color() -> Color {
    Color::WHITE
}
pub(super) fn game_over_color() -> Color {
    Color::srgb(1.0, 0.0, 0.0)
}
pub(super) fn subtitle_color() -> Color {
    Color::srgb(0.75, 0.75, 0.82)
}
pub(super) fn sky_color() -> Color {
    Color::srgb(0.05, 0.06, 0.16)
}

/// Full-screen node that centres its children.
pub(super) fn centered_overlay() -> Node {
    Node {
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        flex_direction: FlexDirection::Column,
        position_type: PositionType::Absolute,
        left: Val::Px(0.0),
        top: Val::Px(0.0),
        ..default()
    }
}

pub(super) fn spacer(parent: &mut ChildSpawnerCommands<'_>, px: f32) {
    parent.spawn(Node {
        height: Val::Px(px),
        ..default()
    });
}
