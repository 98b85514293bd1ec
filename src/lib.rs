//! Asteroid Field - a classic Asteroids arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, session state)
//! - `app`: Top-level scene state machine (intro, menu, game, pause)
//! - `audio` / `highscores`: narrow traits over the external services
//! - `render` / `input`: abstract canvas and input snapshot consumed per tick

pub mod app;
pub mod audio;
pub mod highscores;
pub mod input;
pub mod render;
pub mod scene;
pub mod settings;
pub mod sim;

pub use audio::{AudioService, Cue, NullAudio};
pub use highscores::{HighScoreEntry, LocalScoreStore, ScoreService};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (classic arcade 60 Hz)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const TICK_DT: f32 = 1.0 / TICK_RATE as f32;

    /// Logical playfield dimensions
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Ship tuning
    pub const PLAYER_ACCELERATION: f32 = 0.15;
    pub const PLAYER_MAX_SPEED: f32 = 4.0;
    /// Degrees per rotate command
    pub const PLAYER_ROTATION_SPEED: f32 = 5.0;
    /// Velocity decay applied every tick, unconditionally
    pub const PLAYER_FRICTION: f32 = 0.98;
    pub const PLAYER_RADIUS: f32 = 12.0;

    /// Projectile tuning
    pub const PROJECTILE_SPEED: f32 = 12.0;
    pub const PROJECTILE_RADIUS: f32 = 2.0;
    /// Ticks a projectile survives without hitting anything
    pub const PROJECTILE_LIFETIME: u32 = 60;

    /// Asteroids never spawn within this distance of screen center
    pub const SPAWN_SAFE_RADIUS: f32 = 150.0;
    /// Level scaling cap for asteroid speed
    pub const SPEED_MULTIPLIER_CAP: f32 = 2.0;

    /// Displayed on the menu
    pub const GAME_VERSION: &str = "v2.2.4";
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(mut angle: f32) -> f32 {
    angle %= 360.0;
    if angle < 0.0 {
        angle += 360.0;
    }
    angle
}

/// Unit vector of a ship facing `angle` degrees.
///
/// Screen coordinates are y-down: 0 degrees points up and positive angles
/// turn counterclockwise (to the player's left).
#[inline]
pub fn heading(angle_degrees: f32) -> Vec2 {
    let rad = angle_degrees.to_radians();
    Vec2::new(-rad.sin(), -rad.cos())
}
