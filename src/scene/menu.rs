//! Main menu: play / controls / high scores / quit
//!
//! Keyboard-driven button list with wrap-around selection, plus two overlay
//! views (controls and the high score table) dismissed by any key. The score
//! table is re-read from the service every time the view opens.

use glam::Vec2;

use crate::consts::{GAME_VERSION, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::highscores::{HighScoreEntry, ScoreService, MAX_HIGH_SCORES};
use crate::input::{InputFrame, Key};
use crate::render::Canvas;

/// Outcome the menu reports to the application state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Start a new gameplay session
    Play,
    /// Exit the process
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuView {
    Main,
    Controls,
    HighScores,
}

const BUTTONS: [&str; 4] = ["PLAY", "CONTROLS", "HIGH SCORES", "QUIT"];

#[derive(Debug)]
pub struct MenuScene {
    selected: usize,
    view: MenuView,
    /// Snapshot taken when the high score view opens
    scores_snapshot: Vec<HighScoreEntry>,
    status_message: Option<String>,
}

impl Default for MenuScene {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuScene {
    pub fn new() -> Self {
        Self {
            selected: 0,
            view: MenuView::Main,
            scores_snapshot: Vec::new(),
            status_message: None,
        }
    }

    /// Process one tick of input. Overlay views swallow everything and close
    /// on any key press.
    pub fn handle_input(
        &mut self,
        input: &InputFrame,
        scores: &dyn ScoreService,
    ) -> Option<MenuAction> {
        if self.view != MenuView::Main {
            if !input.pressed.is_empty() {
                self.view = MenuView::Main;
            }
            return None;
        }

        for key in &input.pressed {
            match key {
                Key::Up => {
                    self.selected = (self.selected + BUTTONS.len() - 1) % BUTTONS.len();
                }
                Key::Down => {
                    self.selected = (self.selected + 1) % BUTTONS.len();
                }
                Key::Return => match BUTTONS[self.selected] {
                    "PLAY" => return Some(MenuAction::Play),
                    "CONTROLS" => self.view = MenuView::Controls,
                    "HIGH SCORES" => {
                        self.scores_snapshot = scores.get_top_scores();
                        self.status_message = scores.get_status_message();
                        self.view = MenuView::HighScores;
                    }
                    "QUIT" => return Some(MenuAction::Quit),
                    _ => unreachable!(),
                },
                _ => {}
            }
        }
        None
    }

    pub fn selected_label(&self) -> &'static str {
        BUTTONS[self.selected]
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.clear();
        match self.view {
            MenuView::Main => self.draw_main(canvas),
            MenuView::Controls => self.draw_controls(canvas),
            MenuView::HighScores => self.draw_highscores(canvas),
        }
    }

    fn draw_main(&self, canvas: &mut dyn Canvas) {
        let cx = SCREEN_WIDTH / 2.0;
        canvas.text("ASTEROIDS", Vec2::new(cx, SCREEN_HEIGHT / 4.0), 48.0);
        canvas.text(
            "A CLASSIC ARCADE GAME",
            Vec2::new(cx, SCREEN_HEIGHT / 4.0 + 60.0),
            24.0,
        );
        canvas.text(
            GAME_VERSION,
            Vec2::new(SCREEN_WIDTH - 60.0, SCREEN_HEIGHT - 20.0),
            24.0,
        );

        for (i, label) in BUTTONS.iter().enumerate() {
            let pos = Vec2::new(cx, SCREEN_HEIGHT / 2.0 + i as f32 * 80.0);
            if i == self.selected {
                canvas.fill_rect(pos - Vec2::new(140.0, 30.0), Vec2::new(280.0, 60.0));
            }
            canvas.text(label, pos, 24.0);
        }
    }

    fn draw_controls(&self, canvas: &mut dyn Canvas) {
        let lines = [
            "CONTROLS:",
            "",
            "UP - Forward",
            "DOWN - Backward",
            "LEFT, RIGHT - Rotate",
            "SPACE - Shoot",
            "ESC - Pause",
            "",
            "Press any key to return",
        ];
        let mut y = SCREEN_HEIGHT / 3.0;
        for line in lines {
            canvas.text(line, Vec2::new(SCREEN_WIDTH / 2.0, y), 24.0);
            y += 40.0;
        }
    }

    fn draw_highscores(&self, canvas: &mut dyn Canvas) {
        let cx = SCREEN_WIDTH / 2.0;
        canvas.text("HIGH SCORES", Vec2::new(cx, SCREEN_HEIGHT / 6.0), 48.0);

        if let Some(status) = &self.status_message {
            canvas.text(status, Vec2::new(cx, SCREEN_HEIGHT / 4.0), 24.0);
        }

        let y_start = SCREEN_HEIGHT / 2.5;
        for idx in 0..MAX_HIGH_SCORES {
            let row = match self.scores_snapshot.get(idx) {
                Some(entry) => format!("{}. {} - {}", idx + 1, entry.name, entry.score),
                None => format!("{}. ---- - 0", idx + 1),
            };
            canvas.text(&row, Vec2::new(cx, y_start + idx as f32 * 50.0), 28.0);
        }

        canvas.text(
            "Press any key to return",
            Vec2::new(cx, SCREEN_HEIGHT - 60.0),
            28.0,
        );
    }
}
