//! Per-tick collision resolution
//!
//! Runs once per tick after all kinematic updates. Order matters:
//! ship-vs-asteroid first (a hit latches game-over and aborts the rest of the
//! pass), then projectile-vs-asteroid all-pairs in stable id order. Entities
//! are only deactivated here; the owning session sweeps them afterwards.

use super::entity::circles_overlap;
use super::state::{GameEvent, Session, SessionPhase};

/// Resolve all collisions for this tick.
///
/// A projectile destroys at most one asteroid per tick: the first overlap in
/// iteration order wins and the remaining asteroids are not checked for that
/// projectile.
pub fn resolve(session: &mut Session) {
    // 1. Ship vs asteroids. First hit ends the session; no further checks
    //    this tick since the session effectively stops.
    for asteroid in &session.asteroids {
        if !asteroid.body.active {
            continue;
        }
        if circles_overlap(
            session.ship.body.pos,
            session.ship.radius(),
            asteroid.body.pos,
            asteroid.radius(),
        ) {
            log::info!(
                "Ship hit a {:?} asteroid at level {}, final score {}",
                asteroid.size,
                session.level,
                session.score
            );
            session.phase = SessionPhase::GameOver;
            session.events.push(GameEvent::GameOverEntered);
            return;
        }
    }

    // 2. Projectiles vs asteroids. Split children spawn after the pass so the
    //    sets are never grown mid-iteration.
    let mut spawned = Vec::new();
    for pi in 0..session.projectiles.len() {
        if !session.projectiles[pi].body.active {
            continue;
        }
        for ai in 0..session.asteroids.len() {
            if !session.asteroids[ai].body.active {
                continue;
            }
            let projectile = &session.projectiles[pi];
            let asteroid = &session.asteroids[ai];
            if !circles_overlap(
                projectile.body.pos,
                projectile.radius(),
                asteroid.body.pos,
                asteroid.radius(),
            ) {
                continue;
            }

            let value = asteroid.size.score();
            session.score += value;
            log::debug!(
                "Destroyed {:?} asteroid (+{}), score {}",
                asteroid.size,
                value,
                session.score
            );

            session.projectiles[pi].body.active = false;
            session.asteroids[ai].body.active = false;

            let parent = session.asteroids[ai].clone();
            spawned.extend(session.split_asteroid(&parent));
            break;
        }
    }
    session.asteroids.extend(spawned);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Asteroid, AsteroidSize, Projectile};
    use glam::Vec2;

    fn empty_session() -> Session {
        let mut session = Session::new(1234);
        session.asteroids.clear();
        session.events.clear();
        session
    }

    fn asteroid_at(session: &mut Session, pos: Vec2, size: AsteroidSize) -> u32 {
        let id = session.next_entity_id();
        let mut asteroid = Asteroid::at_position(&mut session.rng, pos, size, 1.0, id);
        asteroid.body.vel = Vec2::ZERO;
        session.asteroids.push(asteroid);
        id
    }

    #[test]
    fn test_ship_hit_latches_game_over() {
        let mut session = empty_session();
        let ship_pos = session.ship.body.pos;
        asteroid_at(&mut session, ship_pos, AsteroidSize::Large);

        // A projectile overlapping another asteroid the same tick must not be
        // resolved once game-over latches.
        let far = Vec2::new(100.0, 100.0);
        asteroid_at(&mut session, far, AsteroidSize::Small);
        let pid = session.next_entity_id();
        let mut projectile = Projectile::new(far, 0.0, pid);
        projectile.body.vel = Vec2::ZERO;
        session.projectiles.push(projectile);

        resolve(&mut session);

        assert_eq!(session.phase, SessionPhase::GameOver);
        assert!(session.events.contains(&GameEvent::GameOverEntered));
        assert_eq!(session.score, 0);
        assert!(session.projectiles[0].body.active);
    }

    #[test]
    fn test_projectile_destroys_first_asteroid_only() {
        let mut session = empty_session();
        let pos = Vec2::new(200.0, 200.0);
        // Two small rocks stacked on the same spot: first by id wins
        let first = asteroid_at(&mut session, pos, AsteroidSize::Small);
        let second = asteroid_at(&mut session, pos, AsteroidSize::Small);

        let pid = session.next_entity_id();
        let mut projectile = Projectile::new(pos, 0.0, pid);
        projectile.body.vel = Vec2::ZERO;
        session.projectiles.push(projectile);

        resolve(&mut session);
        session.sweep();

        assert_eq!(session.score, AsteroidSize::Small.score());
        assert_eq!(session.asteroids.len(), 1);
        assert_eq!(session.asteroids[0].id, second);
        assert_ne!(session.asteroids[0].id, first);
        assert!(session.projectiles.is_empty());
    }

    #[test]
    fn test_split_children_enqueued() {
        let mut session = empty_session();
        let pos = Vec2::new(300.0, 300.0);
        asteroid_at(&mut session, pos, AsteroidSize::Large);

        let pid = session.next_entity_id();
        let mut projectile = Projectile::new(pos, 0.0, pid);
        projectile.body.vel = Vec2::ZERO;
        session.projectiles.push(projectile);

        resolve(&mut session);
        session.sweep();

        assert_eq!(session.score, AsteroidSize::Large.score());
        assert_eq!(session.asteroids.len(), 2);
        for child in &session.asteroids {
            assert_eq!(child.size, AsteroidSize::Medium);
            assert_eq!(child.body.pos, pos);
        }
    }

    #[test]
    fn test_touching_is_not_a_collision() {
        let mut session = empty_session();
        // Asteroid exactly radius-sum away from the ship: no hit
        let ship_pos = session.ship.body.pos;
        let gap = session.ship.radius() + AsteroidSize::Large.radius();
        asteroid_at(
            &mut session,
            ship_pos + Vec2::new(gap, 0.0),
            AsteroidSize::Large,
        );

        resolve(&mut session);
        assert_eq!(session.phase, SessionPhase::Playing);
    }
}
