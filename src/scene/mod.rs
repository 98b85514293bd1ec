//! Non-gameplay scenes: intro, menu, pause
//!
//! Each scene consumes the per-tick input frame and reports its outcome as a
//! closed action enum, exhaustively matched by the application state machine.
//! No string-keyed results.

pub mod intro;
pub mod menu;
pub mod pause;

pub use intro::{IntroAction, IntroScene};
pub use menu::{MenuAction, MenuScene};
pub use pause::{PauseAction, PauseScene};
