//! Timed intro sequence shown once at startup

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, TICK_RATE};
use crate::input::InputFrame;
use crate::render::Canvas;

/// Ticks the intro runs before handing over to the menu (3 seconds)
pub const INTRO_DURATION_TICKS: u32 = 3 * TICK_RATE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroAction {
    /// Sequence finished (or was skipped); show the menu
    Finished,
}

#[derive(Debug, Default)]
pub struct IntroScene {
    ticks: u32,
}

impl IntroScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one tick. Any key press skips the rest of the sequence.
    pub fn update(&mut self, input: &InputFrame) -> Option<IntroAction> {
        self.ticks += 1;
        if self.ticks >= INTRO_DURATION_TICKS || !input.pressed.is_empty() {
            return Some(IntroAction::Finished);
        }
        None
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.clear();
        let center = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
        canvas.text("ASTEROIDS", center, 72.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;

    #[test]
    fn test_intro_finishes_after_duration() {
        let mut intro = IntroScene::new();
        let idle = InputFrame::new();
        for _ in 0..INTRO_DURATION_TICKS - 1 {
            assert_eq!(intro.update(&idle), None);
        }
        assert_eq!(intro.update(&idle), Some(IntroAction::Finished));
    }

    #[test]
    fn test_any_key_skips_intro() {
        let mut intro = IntroScene::new();
        let frame = InputFrame::new().press(Key::Space);
        assert_eq!(intro.update(&frame), Some(IntroAction::Finished));
    }
}
