//! Audio service boundary
//!
//! The core never touches an audio device. It asks the service to start and
//! stop named cues and polls whether the current cue is still playing (the
//! game-over flow is gated on its terminal cue finishing). Implementations
//! must swallow missing or corrupt asset failures; a silent game is still a
//! playable game.

/// Named audio cues the core can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Intro sequence backing track
    IntroMusic,
    /// Menu backing track
    MenuMusic,
    /// Gameplay backing track
    GameMusic,
    /// One-shot laser blast on projectile fire
    Laser,
    /// One-shot terminal sting on game over
    GameOver,
}

/// Playback interface consumed by the application layer.
///
/// All calls are fire-and-forget; failures are an implementation concern and
/// never surface to the caller.
pub trait AudioService {
    /// Start a cue, optionally looping, replacing the current one
    fn play_cue(&mut self, cue: Cue, looping: bool);
    /// Stop the current cue
    fn stop_cue(&mut self);
    /// Pause the current cue in place
    fn pause_cue(&mut self);
    /// Resume a paused cue
    fn resume_cue(&mut self);
    /// Whether a cue is currently audible
    fn is_cue_playing(&self) -> bool;
}

/// No-op audio service for headless runs and tests.
///
/// Reports cues as never playing, so flows gated on cue completion resolve
/// immediately.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioService for NullAudio {
    fn play_cue(&mut self, cue: Cue, looping: bool) {
        log::debug!("audio: play {:?} (looping: {})", cue, looping);
    }

    fn stop_cue(&mut self) {}

    fn pause_cue(&mut self) {}

    fn resume_cue(&mut self) {}

    fn is_cue_playing(&self) -> bool {
        false
    }
}
