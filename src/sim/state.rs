//! Session state and concrete entity types
//!
//! Everything a single gameplay attempt owns lives here: the ship, the
//! asteroid and projectile sets, score, level, and the game-over / name-entry
//! sub-flow. All randomness comes from the session's seeded RNG so a session
//! replays identically from the same seed and inputs.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::Body;
use crate::consts::*;
use crate::{heading, normalize_degrees};

/// Asteroid size class. Radius, base speed and score value derive from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsteroidSize {
    Large,
    Medium,
    Small,
}

impl AsteroidSize {
    pub fn radius(self) -> f32 {
        match self {
            AsteroidSize::Large => 40.0,
            AsteroidSize::Medium => 20.0,
            AsteroidSize::Small => 10.0,
        }
    }

    /// Base drift speed before level scaling. Smaller rocks move faster.
    pub fn base_speed(self) -> f32 {
        match self {
            AsteroidSize::Large => 1.0,
            AsteroidSize::Medium => 2.0,
            AsteroidSize::Small => 3.0,
        }
    }

    /// Score awarded for destroying an asteroid of this size
    pub fn score(self) -> u32 {
        match self {
            AsteroidSize::Large => 20,
            AsteroidSize::Medium => 50,
            AsteroidSize::Small => 100,
        }
    }

    /// Next-smaller size, or None for Small (fully destroyed, no children)
    pub fn next_smaller(self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }
}

/// The player's ship. Exactly one per session, never deactivated; a collision
/// latches game-over on the session instead.
#[derive(Debug, Clone)]
pub struct Ship {
    pub body: Body,
}

impl Ship {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body::new(pos),
        }
    }

    /// Turn by one rotation step. Positive direction turns left.
    pub fn rotate(&mut self, direction: f32) {
        self.body.angle = normalize_degrees(self.body.angle + direction * PLAYER_ROTATION_SPEED);
    }

    /// Apply thrust along the facing direction, then clamp to max speed
    pub fn accelerate(&mut self, forward: bool) {
        let sign = if forward { 1.0 } else { -1.0 };
        self.body.vel += heading(self.body.angle) * PLAYER_ACCELERATION * sign;
        let speed = self.body.vel.length();
        if speed > PLAYER_MAX_SPEED {
            self.body.vel *= PLAYER_MAX_SPEED / speed;
        }
    }

    /// Per-tick kinematics: friction applies every tick, thrusting or not,
    /// so the ship decays exponentially toward rest.
    pub fn update(&mut self) {
        self.body.vel *= PLAYER_FRICTION;
        self.body.integrate();
    }

    pub fn radius(&self) -> f32 {
        PLAYER_RADIUS
    }
}

/// A drifting rock
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub id: u32,
    pub body: Body,
    pub size: AsteroidSize,
    /// Level scaling factor, capped at [`SPEED_MULTIPLIER_CAP`]
    pub speed_multiplier: f32,
}

impl Asteroid {
    /// Spawn at a random position outside the safe zone around screen center,
    /// drifting in a random direction at size-scaled speed.
    pub fn spawn(rng: &mut Pcg32, size: AsteroidSize, speed_multiplier: f32, id: u32) -> Self {
        let center = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
        let pos = loop {
            let candidate = Vec2::new(
                rng.random_range(0.0..SCREEN_WIDTH),
                rng.random_range(0.0..SCREEN_HEIGHT),
            );
            if candidate.distance(center) > SPAWN_SAFE_RADIUS {
                break candidate;
            }
        };
        Self::at_position(rng, pos, size, speed_multiplier, id)
    }

    /// Spawn at an exact position (used for split children)
    pub fn at_position(
        rng: &mut Pcg32,
        pos: Vec2,
        size: AsteroidSize,
        speed_multiplier: f32,
        id: u32,
    ) -> Self {
        let mut body = Body::new(pos);
        let dir = rng.random_range(0.0..std::f32::consts::TAU);
        let speed = size.base_speed() * speed_multiplier.min(SPEED_MULTIPLIER_CAP);
        body.vel = Vec2::new(dir.cos(), dir.sin()) * speed;
        Self {
            id,
            body,
            size,
            speed_multiplier,
        }
    }

    pub fn update(&mut self) {
        self.body.integrate();
    }

    pub fn radius(&self) -> f32 {
        self.size.radius()
    }
}

/// A fired shot. Construction is pure; the laser cue is emitted as a session
/// event, not from in here.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: u32,
    pub body: Body,
    /// Ticks remaining before expiry
    pub lifetime: u32,
}

impl Projectile {
    pub fn new(pos: Vec2, angle: f32, id: u32) -> Self {
        let mut body = Body::new(pos);
        body.angle = angle;
        body.vel = heading(angle) * PROJECTILE_SPEED;
        Self {
            id,
            body,
            lifetime: PROJECTILE_LIFETIME,
        }
    }

    /// Move and burn one tick of lifetime; deactivates at zero
    pub fn update(&mut self) {
        self.body.integrate();
        self.lifetime = self.lifetime.saturating_sub(1);
        if self.lifetime == 0 {
            self.body.active = false;
        }
    }

    pub fn radius(&self) -> f32 {
        PROJECTILE_RADIUS
    }
}

/// Phase of a gameplay session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Normal play: movement, firing, collisions, level advance
    Playing,
    /// Ship hit an asteroid; waiting for the terminal cue to finish
    GameOver,
    /// Score qualified; collecting the player's 3-letter name
    NameEntry,
}

/// Events the session emits for the application layer (audio side effects
/// stay out of entity constructors).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A projectile was fired this tick
    ProjectileFired,
    /// Ship collided with an asteroid this tick
    GameOverEntered,
    /// The asteroid field was cleared and a new wave spawned
    WaveSpawned { level: u32, count: u32 },
}

/// Result the session reports upward once its sub-flow resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSignal {
    /// Session is finished; discard it and show the menu
    ReturnToMenu,
    /// Score qualified for the table; switch to the name-entry scene
    RequestHighScoreEntry,
}

/// One gameplay attempt: ship spawn through game-over resolution
#[derive(Debug, Clone)]
pub struct Session {
    pub seed: u64,
    pub rng: Pcg32,
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    pub projectiles: Vec<Projectile>,
    pub score: u32,
    pub level: u32,
    pub phase: SessionPhase,
    /// Name being typed during name entry, uppercase, max 3 chars
    pub player_name: String,
    /// Events produced this tick, drained by the application layer
    pub events: Vec<GameEvent>,
    /// Tick counter since session start
    pub time_ticks: u64,
    next_id: u32,
}

impl Session {
    /// Create a session with the ship centered and the level-1 wave spawned
    pub fn new(seed: u64) -> Self {
        let center = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
        let mut session = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            ship: Ship::new(center),
            asteroids: Vec::new(),
            projectiles: Vec::new(),
            score: 0,
            level: 1,
            phase: SessionPhase::Playing,
            player_name: String::new(),
            events: Vec::new(),
            time_ticks: 0,
            next_id: 1,
        };
        session.spawn_wave();
        session
    }

    pub fn game_over(&self) -> bool {
        !matches!(self.phase, SessionPhase::Playing)
    }

    pub fn awaiting_name_entry(&self) -> bool {
        self.phase == SessionPhase::NameEntry
    }

    /// Allocate a stable entity id (iteration stays in spawn order)
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Number of asteroids in the wave for a given level
    pub fn wave_count(level: u32) -> u32 {
        3 + level
    }

    /// Asteroid speed scaling for a given level, capped at 2x
    pub fn wave_speed_multiplier(level: u32) -> f32 {
        (1.0 + level as f32 * 0.1).min(SPEED_MULTIPLIER_CAP)
    }

    /// Spawn the wave for the current level, all large asteroids
    pub fn spawn_wave(&mut self) {
        let count = Self::wave_count(self.level);
        let multiplier = Self::wave_speed_multiplier(self.level);
        log::info!(
            "Spawning wave: level {} with {} asteroids at {:.1}x speed",
            self.level,
            count,
            multiplier
        );
        for _ in 0..count {
            let id = self.next_entity_id();
            let asteroid = Asteroid::spawn(&mut self.rng, AsteroidSize::Large, multiplier, id);
            self.asteroids.push(asteroid);
        }
        self.events.push(GameEvent::WaveSpawned {
            level: self.level,
            count,
        });
    }

    /// Fire one projectile from the ship's nose. One shot per fire input;
    /// ignored once the session is over.
    pub fn fire(&mut self) {
        if self.game_over() {
            return;
        }
        let id = self.next_entity_id();
        let projectile = Projectile::new(self.ship.body.pos, self.ship.body.angle, id);
        self.projectiles.push(projectile);
        self.events.push(GameEvent::ProjectileFired);
    }

    /// Split an asteroid into its children at its last position.
    ///
    /// Large and Medium always yield exactly two children of the next size
    /// down with re-randomized directions and the parent's multiplier; Small
    /// yields nothing.
    pub fn split_asteroid(&mut self, parent: &Asteroid) -> Vec<Asteroid> {
        let Some(child_size) = parent.size.next_smaller() else {
            return Vec::new();
        };
        (0..2)
            .map(|_| {
                let id = self.next_entity_id();
                Asteroid::at_position(
                    &mut self.rng,
                    parent.body.pos,
                    child_size,
                    parent.speed_multiplier,
                    id,
                )
            })
            .collect()
    }

    /// Remove deactivated entities. Runs once at the tick boundary so no
    /// collection is mutated while the collision pass iterates it.
    pub fn sweep(&mut self) {
        self.asteroids.retain(|a| a.body.active);
        self.projectiles.retain(|p| p.body.active);
    }

    /// Decide where the session goes once the terminal cue has finished.
    ///
    /// A qualifying score moves the session into name entry; otherwise the
    /// session is done and asks to be discarded.
    pub fn resolve_game_over(&mut self, score_qualifies: bool) -> SessionSignal {
        if score_qualifies {
            self.phase = SessionPhase::NameEntry;
            SessionSignal::RequestHighScoreEntry
        } else {
            SessionSignal::ReturnToMenu
        }
    }

    /// Append an alphabetic character to the name being entered (max 3,
    /// forced uppercase). Non-letters are ignored.
    pub fn name_entry_push(&mut self, c: char) {
        if self.player_name.chars().count() < 3 && c.is_ascii_alphabetic() {
            self.player_name.push(c.to_ascii_uppercase());
        }
    }

    /// Remove the last character of the name being entered
    pub fn name_entry_backspace(&mut self) {
        self.player_name.pop();
    }

    /// Final name to submit: whatever was typed, or "AAA" if empty
    pub fn confirmed_name(&self) -> String {
        let trimmed = self.player_name.trim();
        if trimmed.is_empty() {
            "AAA".to_string()
        } else {
            trimmed.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_split_counts_by_size() {
        let mut session = Session::new(7);
        session.asteroids.clear();

        for (size, expected_children) in [
            (AsteroidSize::Large, 2),
            (AsteroidSize::Medium, 2),
            (AsteroidSize::Small, 0),
        ] {
            let id = session.next_entity_id();
            let parent =
                Asteroid::at_position(&mut session.rng, Vec2::new(100.0, 100.0), size, 1.0, id);
            let children = session.split_asteroid(&parent);
            assert_eq!(children.len(), expected_children);
            for child in &children {
                assert_eq!(Some(child.size), size.next_smaller());
                assert_eq!(child.body.pos, parent.body.pos);
                assert_eq!(child.speed_multiplier, parent.speed_multiplier);
            }
        }
    }

    #[test]
    fn test_full_destruction_score_total() {
        // One large rock fully ground down: 1 large + 2 medium + 4 small
        let total = AsteroidSize::Large.score()
            + 2 * AsteroidSize::Medium.score()
            + 4 * AsteroidSize::Small.score();
        assert_eq!(total, 520);
    }

    #[test]
    fn test_wave_parameters() {
        assert_eq!(Session::wave_count(1), 4);
        assert_eq!(Session::wave_count(5), 8);
        assert!((Session::wave_speed_multiplier(1) - 1.1).abs() < 1e-6);
        assert!((Session::wave_speed_multiplier(10) - 2.0).abs() < 1e-6);
        // Capped, never above 2x
        assert_eq!(Session::wave_speed_multiplier(50), 2.0);
    }

    #[test]
    fn test_initial_wave_spawned_outside_safe_zone() {
        let session = Session::new(42);
        assert_eq!(session.asteroids.len(), 4);
        let center = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
        for asteroid in &session.asteroids {
            assert!(asteroid.body.pos.distance(center) > SPAWN_SAFE_RADIUS);
            assert_eq!(asteroid.size, AsteroidSize::Large);
        }
    }

    #[test]
    fn test_projectile_expires_after_lifetime() {
        let mut projectile = Projectile::new(Vec2::new(100.0, 100.0), 0.0, 1);
        for _ in 0..PROJECTILE_LIFETIME - 1 {
            projectile.update();
            assert!(projectile.body.active);
        }
        projectile.update();
        assert!(!projectile.body.active);
    }

    #[test]
    fn test_fire_ignored_when_game_over() {
        let mut session = Session::new(3);
        session.phase = SessionPhase::GameOver;
        session.fire();
        assert!(session.projectiles.is_empty());
    }

    #[test]
    fn test_name_entry_rules() {
        let mut session = Session::new(1);
        session.name_entry_push('a');
        session.name_entry_push('b');
        session.name_entry_backspace();
        session.name_entry_push('c');
        assert_eq!(session.player_name, "AC");

        // Non-letters ignored, length capped at 3
        session.name_entry_push('5');
        session.name_entry_push('x');
        session.name_entry_push('y');
        assert_eq!(session.player_name, "ACX");
        assert_eq!(session.confirmed_name(), "ACX");
    }

    #[test]
    fn test_empty_name_defaults_to_aaa() {
        let session = Session::new(1);
        assert_eq!(session.confirmed_name(), "AAA");
    }

    proptest! {
        #[test]
        fn prop_ship_speed_never_exceeds_max(commands in proptest::collection::vec(any::<bool>(), 0..200)) {
            let mut ship = Ship::new(Vec2::new(640.0, 360.0));
            for forward in commands {
                ship.accelerate(forward);
                prop_assert!(ship.body.vel.length() <= PLAYER_MAX_SPEED + 1e-4);
            }
        }

        #[test]
        fn prop_rotation_stays_normalized(steps in proptest::collection::vec(-1.0f32..=1.0, 0..500)) {
            let mut ship = Ship::new(Vec2::new(640.0, 360.0));
            for dir in steps {
                ship.rotate(dir);
                prop_assert!(ship.body.angle >= 0.0 && ship.body.angle < 360.0);
            }
        }
    }
}
