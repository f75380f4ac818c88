use bevy::prelude::*;

/// Setup camera for 2D rendering.
///
/// A default `Camera2d` centred on the origin shows exactly the playfield when
/// the window is the size of the field.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    info!("[setup] Camera spawned");
}

pub fn paddle_color() -> Color {
    Color::srgb(0.35, 0.80, 0.45)
}

pub fn block_color() -> Color {
    Color::srgb(0.95, 0.62, 0.18)
}
