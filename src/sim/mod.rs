//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order, by entity id)
//! - No rendering, audio or platform dependencies; side effects are emitted
//!   as [`GameEvent`]s for the application layer

pub mod collision;
pub mod entity;
pub mod state;
pub mod tick;

pub use entity::{circles_overlap, Body};
pub use state::{
    Asteroid, AsteroidSize, GameEvent, Projectile, Session, SessionPhase, SessionSignal, Ship,
};
pub use tick::{tick, TickInput};
