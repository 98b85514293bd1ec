//! Pause overlay: resume or abandon to the menu

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::input::{InputFrame, Key};
use crate::render::Canvas;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseAction {
    /// Return to the running session
    Resume,
    /// Discard the session and show the menu
    Menu,
}

const OPTIONS: [&str; 2] = ["RESUME", "MENU"];

#[derive(Debug, Default)]
pub struct PauseScene {
    selected: usize,
}

impl PauseScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection resets to RESUME each time the game pauses
    pub fn reset(&mut self) {
        self.selected = 0;
    }

    pub fn handle_input(&mut self, input: &InputFrame) -> Option<PauseAction> {
        for key in &input.pressed {
            match key {
                Key::Up | Key::Down => {
                    self.selected = (self.selected + 1) % OPTIONS.len();
                }
                Key::Escape => return Some(PauseAction::Resume),
                Key::Return => {
                    return Some(match self.selected {
                        0 => PauseAction::Resume,
                        _ => PauseAction::Menu,
                    });
                }
                _ => {}
            }
        }
        None
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let cx = SCREEN_WIDTH / 2.0;
        canvas.text("PAUSED", Vec2::new(cx, SCREEN_HEIGHT / 3.0), 74.0);
        for (i, label) in OPTIONS.iter().enumerate() {
            let pos = Vec2::new(cx, SCREEN_HEIGHT / 2.0 + i as f32 * 80.0);
            if i == self.selected {
                canvas.fill_rect(pos - Vec2::new(120.0, 30.0), Vec2::new(240.0, 60.0));
            }
            canvas.text(label, pos, 24.0);
        }
    }
}
