//! Mapping between field coordinates and Bevy world coordinates.
//!
//! Gameplay rules are written in field coordinates (top-left origin, y down)
//! while Bevy's 2D camera looks at a world with the origin at the window
//! centre and y up.  With a default `Camera2d` and a window the size of the
//! field, the two line up exactly.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Field position → world position.
    pub fn to_world(&self, field: Vec2) -> Vec2 {
        Vec2::new(field.x - self.width / 2.0, self.height / 2.0 - field.y)
    }

    /// World position → field position.
    pub fn to_field(&self, world: Vec2) -> Vec2 {
        Vec2::new(world.x + self.width / 2.0, self.height / 2.0 - world.y)
    }

    /// Field velocity (y down) → world velocity (y up).
    pub fn velocity_to_world(&self, field: Vec2) -> Vec2 {
        Vec2::new(field.x, -field.y)
    }

    /// Keep a body of `half_width` fully inside the field horizontally.
    pub fn clamp_x(&self, field_x: f32, half_width: f32) -> f32 {
        let lo = half_width.min(self.width / 2.0);
        let hi = (self.width - half_width).max(self.width / 2.0);
        field_x.clamp(lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Playfield {
        Playfield::new(800.0, 600.0)
    }

    #[test]
    fn corners_map_to_window_edges() {
        let f = field();
        assert_eq!(f.to_world(Vec2::ZERO), Vec2::new(-400.0, 300.0));
        assert_eq!(f.to_world(Vec2::new(800.0, 600.0)), Vec2::new(400.0, -300.0));
        assert_eq!(f.to_world(Vec2::new(400.0, 300.0)), Vec2::ZERO);
    }

    #[test]
    fn to_field_inverts_to_world() {
        let f = field();
        let p = Vec2::new(123.0, 456.0);
        assert_eq!(f.to_field(f.to_world(p)), p);
    }

    #[test]
    fn falling_is_negative_world_y() {
        assert_eq!(
            field().velocity_to_world(Vec2::new(0.0, 200.0)),
            Vec2::new(0.0, -200.0)
        );
    }

    #[test]
    fn clamp_keeps_paddle_on_field() {
        let f = field();
        assert_eq!(f.clamp_x(10.0, 50.0), 50.0);
        assert_eq!(f.clamp_x(790.0, 50.0), 750.0);
        assert_eq!(f.clamp_x(400.0, 50.0), 400.0);
        // Wider than the field: pinned to the centre.
        assert_eq!(f.clamp_x(0.0, 500.0), 400.0);
    }
}
