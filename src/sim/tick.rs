//! Fixed timestep simulation tick
//!
//! Advances one gameplay session deterministically: input application,
//! kinematic updates, collision resolution, deferred sweep, level advance.

use super::collision;
use super::state::{Session, SessionPhase};

/// Input commands for a single tick.
///
/// Rotation and thrust reflect held keys; `fire` is an edge event and spawns
/// exactly one projectile per tick it is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub reverse: bool,
    pub fire: bool,
}

/// Advance the session by one fixed timestep.
///
/// Once the session leaves `Playing` the simulation freezes; the game-over
/// and name-entry sub-flows are driven by the application layer since they
/// are gated on the audio service and keyboard text input.
pub fn tick(session: &mut Session, input: &TickInput) {
    if session.phase != SessionPhase::Playing {
        return;
    }
    session.time_ticks += 1;

    // Held input: rotation steps are discrete, one increment per tick
    if input.rotate_left {
        session.ship.rotate(1.0);
    }
    if input.rotate_right {
        session.ship.rotate(-1.0);
    }
    if input.thrust {
        session.ship.accelerate(true);
    }
    if input.reverse {
        session.ship.accelerate(false);
    }
    if input.fire {
        session.fire();
    }

    // Kinematics for every active body
    session.ship.update();
    for asteroid in &mut session.asteroids {
        asteroid.update();
    }
    for projectile in &mut session.projectiles {
        projectile.update();
    }

    collision::resolve(session);
    session.sweep();

    // Level clear: field emptied by this tick's resolution
    if session.phase == SessionPhase::Playing && session.asteroids.is_empty() {
        session.level += 1;
        log::info!("Level cleared, advancing to level {}", session.level);
        session.spawn_wave();
    }
}
