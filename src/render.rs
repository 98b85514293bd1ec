//! Abstract render surface and entity draw routines
//!
//! The core draws through a primitive 2D canvas (lines, filled rects, text)
//! and never knows what backs it. Draw order and shapes live here so the
//! simulation module stays free of rendering concerns.

use glam::Vec2;

use crate::consts::*;
use crate::heading;
use crate::sim::{Asteroid, Projectile, Session, SessionPhase, Ship};

/// Primitive 2D drawing surface provided by the platform layer
pub trait Canvas {
    /// Clear the whole surface to the background
    fn clear(&mut self);
    fn line(&mut self, from: Vec2, to: Vec2);
    fn fill_rect(&mut self, min: Vec2, size: Vec2);
    /// Draw text centered at `center` with the given point size
    fn text(&mut self, text: &str, center: Vec2, size: f32);
}

/// No-op surface for headless runs and tests
#[derive(Debug, Default)]
pub struct NullCanvas;

impl Canvas for NullCanvas {
    fn clear(&mut self) {}
    fn line(&mut self, _from: Vec2, _to: Vec2) {}
    fn fill_rect(&mut self, _min: Vec2, _size: Vec2) {}
    fn text(&mut self, _text: &str, _center: Vec2, _size: f32) {}
}

/// Ship as the classic three-line wedge
pub fn draw_ship(ship: &Ship, canvas: &mut dyn Canvas) {
    if !ship.body.active {
        return;
    }
    let nose = ship.body.pos + heading(ship.body.angle) * PLAYER_RADIUS;
    let left = ship.body.pos + heading(ship.body.angle + 140.0) * PLAYER_RADIUS;
    let right = ship.body.pos + heading(ship.body.angle - 140.0) * PLAYER_RADIUS;
    canvas.line(nose, left);
    canvas.line(left, right);
    canvas.line(right, nose);
}

/// Asteroid as a 12-segment circle outline
pub fn draw_asteroid(asteroid: &Asteroid, canvas: &mut dyn Canvas) {
    if !asteroid.body.active {
        return;
    }
    const SEGMENTS: u32 = 12;
    let r = asteroid.radius();
    let step = std::f32::consts::TAU / SEGMENTS as f32;
    for i in 0..SEGMENTS {
        let a = i as f32 * step;
        let b = a + step;
        let from = asteroid.body.pos + Vec2::new(a.cos(), a.sin()) * r;
        let to = asteroid.body.pos + Vec2::new(b.cos(), b.sin()) * r;
        canvas.line(from, to);
    }
}

/// Projectile as a short streak along its direction of travel
pub fn draw_projectile(projectile: &Projectile, canvas: &mut dyn Canvas) {
    if !projectile.body.active {
        return;
    }
    let dir = projectile.body.vel.normalize_or_zero();
    canvas.line(projectile.body.pos, projectile.body.pos + dir * 4.0);
}

/// Draw the whole session: entities, HUD, and the game-over overlay
pub fn draw_session(session: &Session, status_message: Option<&str>, canvas: &mut dyn Canvas) {
    canvas.clear();

    draw_ship(&session.ship, canvas);
    for projectile in &session.projectiles {
        draw_projectile(projectile, canvas);
    }
    for asteroid in &session.asteroids {
        draw_asteroid(asteroid, canvas);
    }

    canvas.text(
        &format!("Score: {}", session.score),
        Vec2::new(80.0, 24.0),
        36.0,
    );
    canvas.text(
        &format!("Round: {}", session.level),
        Vec2::new(SCREEN_WIDTH - 90.0, 24.0),
        36.0,
    );

    if session.game_over() {
        let center = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
        canvas.text("GAME OVER", center - Vec2::new(0.0, 50.0), 74.0);

        if session.phase == SessionPhase::NameEntry {
            canvas.text(
                "New Highscore! Enter your name:",
                center + Vec2::new(0.0, 50.0),
                36.0,
            );
            if let Some(status) = status_message {
                canvas.text(status, center, 24.0);
            }
            canvas.text(&session.player_name, center + Vec2::new(0.0, 100.0), 48.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::AsteroidSize;

    /// Counts primitive calls so tests can assert what was drawn
    #[derive(Debug, Default)]
    struct CountingCanvas {
        lines: usize,
        texts: Vec<String>,
    }

    impl Canvas for CountingCanvas {
        fn clear(&mut self) {}
        fn line(&mut self, _from: Vec2, _to: Vec2) {
            self.lines += 1;
        }
        fn fill_rect(&mut self, _min: Vec2, _size: Vec2) {}
        fn text(&mut self, text: &str, _center: Vec2, _size: f32) {
            self.texts.push(text.to_string());
        }
    }

    #[test]
    fn test_inactive_entities_are_not_drawn() {
        let mut session = Session::new(5);
        session.fire();
        session.projectiles[0].body.active = false;
        session.asteroids.iter_mut().for_each(|a| a.body.active = false);

        let mut canvas = CountingCanvas::default();
        for projectile in &session.projectiles {
            draw_projectile(projectile, &mut canvas);
        }
        for asteroid in &session.asteroids {
            draw_asteroid(asteroid, &mut canvas);
        }
        assert_eq!(canvas.lines, 0);
    }

    #[test]
    fn test_session_hud_shows_score_and_round() {
        let mut session = Session::new(6);
        session.score = 520;
        session.level = 3;

        let mut canvas = CountingCanvas::default();
        draw_session(&session, None, &mut canvas);
        assert!(canvas.texts.iter().any(|t| t == "Score: 520"));
        assert!(canvas.texts.iter().any(|t| t == "Round: 3"));
        assert!(!canvas.texts.iter().any(|t| t == "GAME OVER"));
    }

    #[test]
    fn test_name_entry_overlay() {
        let mut session = Session::new(7);
        session.phase = SessionPhase::NameEntry;
        session.name_entry_push('a');
        session.name_entry_push('b');

        let mut canvas = CountingCanvas::default();
        draw_session(&session, Some("offline"), &mut canvas);
        assert!(canvas.texts.iter().any(|t| t == "GAME OVER"));
        assert!(canvas.texts.iter().any(|t| t == "AB"));
        assert!(canvas.texts.iter().any(|t| t == "offline"));
    }

    #[test]
    fn test_asteroid_outline_segment_count() {
        let mut session = Session::new(8);
        let id = session.next_entity_id();
        let asteroid = Asteroid::at_position(
            &mut session.rng,
            Vec2::new(100.0, 100.0),
            AsteroidSize::Large,
            1.0,
            id,
        );
        let mut canvas = CountingCanvas::default();
        draw_asteroid(&asteroid, &mut canvas);
        assert_eq!(canvas.lines, 12);
    }
}
