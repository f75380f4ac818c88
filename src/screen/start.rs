use super::*;
use crate::constants::MESSAGE_FONT_SIZE;

/// Spawn the start screen: a sky-coloured backdrop covering the playfield and
/// the centred prompt.
pub(super) fn setup_start_screen(mut commands: Commands, config: Res<GameConfig>) {
    commands.spawn((
        Sprite::from_color(
            sky_color(),
            Vec2::new(config.field_width, config.field_height),
        ),
        Transform::from_xyz(0.0, 0.0, -10.0),
        StartScreenRoot,
    ));

    commands
        .spawn((centered_overlay(), StartScreenRoot))
        .with_children(|root| {
            root.spawn((
                Text::new("Press SPACE to Start"),
                TextFont {
                    font_size: MESSAGE_FONT_SIZE,
                    ..default()
                },
                TextColor(prompt_color()),
            ));
        });

    info!("[screen] Start screen shown");
}

/// Recursively despawn all start-screen entities.
pub(super) fn cleanup_start_screen(
    mut commands: Commands,
    query: Query<Entity, With<StartScreenRoot>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// First down-edge of [`CONFIRM_KEY`] moves on to the play screen.
///
/// Only runs while `Screen::Start` is current, so the transition is requested
/// at most once per visit.
pub(super) fn start_on_confirm_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    if keys.just_pressed(CONFIRM_KEY) {
        info!("[screen] Start → Play");
        next_screen.set(Screen::Play);
    }
}
