//! Base entity kinematics and circle geometry
//!
//! Every gameplay object shares the same body: position, velocity, facing
//! angle and an active flag. Inactive bodies are never drawn and are swept
//! from their owning collection at the tick boundary, never mid-tick.

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Shared kinematic state for ship, asteroids and projectiles
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Facing angle in degrees, [0, 360)
    pub angle: f32,
    pub active: bool,
}

impl Body {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            angle: 0.0,
            active: true,
        }
    }

    /// Advance position by one tick and wrap toroidally at all four edges.
    ///
    /// All entity types wrap, projectiles included; their lifetime expires
    /// long before a wrap matters in practice, but one policy for every body
    /// keeps the integrator uniform.
    pub fn integrate(&mut self) {
        self.pos += self.vel;
        self.pos.x = wrap_coord(self.pos.x, SCREEN_WIDTH);
        self.pos.y = wrap_coord(self.pos.y, SCREEN_HEIGHT);
    }
}

#[inline]
fn wrap_coord(v: f32, extent: f32) -> f32 {
    if v < 0.0 {
        v + extent
    } else if v >= extent {
        v - extent
    } else {
        v
    }
}

/// Circle-circle intersection, strict inequality.
///
/// Touching circles do not count as a collision.
#[inline]
pub fn circles_overlap(pos_a: Vec2, radius_a: f32, pos_b: Vec2, radius_b: f32) -> bool {
    pos_a.distance(pos_b) < radius_a + radius_b
}
