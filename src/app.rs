//! Top-level application state machine
//!
//! Sequences Intro -> Menu -> Game -> Pause -> NewHighscore. Owns the
//! gameplay session, dispatches one input frame per tick to the active
//! state, and owns exactly one background cue per state: entering a state
//! stops the previous cue and starts the new one once, and re-entering the
//! same state never restarts it. Any transition away from the game discards
//! the whole session at once.

use crate::audio::{AudioService, Cue};
use crate::highscores::ScoreService;
use crate::input::{InputFrame, Key};
use crate::render::{self, Canvas};
use crate::scene::{IntroAction, IntroScene, MenuAction, MenuScene, PauseAction, PauseScene};
use crate::sim::{self, GameEvent, Session, SessionPhase, SessionSignal};

/// Top-level states, one per scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Intro,
    Menu,
    Game,
    Pause,
    NewHighscore,
}

/// Whether the tick loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppControl {
    Continue,
    /// Normal quit from the menu; process exits with code 0
    Exit,
}

/// The application: scenes, session, and the service handles
pub struct App<A: AudioService, S: ScoreService> {
    state: AppState,
    intro: IntroScene,
    menu: MenuScene,
    pause: PauseScene,
    session: Option<Session>,
    audio: A,
    scores: S,
    /// Background cue currently looping, if any
    current_cue: Option<Cue>,
    /// Terminal cue requested for the current session's game over
    game_over_cue_started: bool,
    next_seed: u64,
}

impl<A: AudioService, S: ScoreService> App<A, S> {
    pub fn new(audio: A, mut scores: S, seed: u64) -> Self {
        scores.load();
        Self {
            state: AppState::Intro,
            intro: IntroScene::new(),
            menu: MenuScene::new(),
            pause: PauseScene::new(),
            session: None,
            audio,
            scores,
            current_cue: None,
            game_over_cue_started: false,
            next_seed: seed,
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Advance the application by one tick
    pub fn update(&mut self, input: &InputFrame) -> AppControl {
        match self.state {
            AppState::Intro => self.update_intro(input),
            AppState::Menu => self.update_menu(input),
            AppState::Game => self.update_game(input),
            AppState::Pause => self.update_pause(input),
            AppState::NewHighscore => self.update_highscore_entry(input),
        }
    }

    /// Draw the active scene
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        match self.state {
            AppState::Intro => self.intro.draw(canvas),
            AppState::Menu => self.menu.draw(canvas),
            AppState::Game | AppState::NewHighscore => {
                if let Some(session) = &self.session {
                    let status = self.scores.get_status_message();
                    render::draw_session(session, status.as_deref(), canvas);
                }
            }
            AppState::Pause => {
                if let Some(session) = &self.session {
                    render::draw_session(session, None, canvas);
                }
                self.pause.draw(canvas);
            }
        }
    }

    /// Start the state's looping cue unless it is already the current one
    fn ensure_background_cue(&mut self, cue: Cue) {
        if self.current_cue != Some(cue) {
            self.audio.stop_cue();
            self.audio.play_cue(cue, true);
            self.current_cue = Some(cue);
        }
    }

    fn stop_background_cue(&mut self) {
        if self.current_cue.take().is_some() {
            self.audio.stop_cue();
        }
    }

    fn update_intro(&mut self, input: &InputFrame) -> AppControl {
        self.ensure_background_cue(Cue::IntroMusic);
        if self.intro.update(input) == Some(IntroAction::Finished) {
            log::info!("Intro complete, entering menu");
            self.state = AppState::Menu;
        }
        AppControl::Continue
    }

    fn update_menu(&mut self, input: &InputFrame) -> AppControl {
        self.ensure_background_cue(Cue::MenuMusic);
        match self.menu.handle_input(input, &self.scores) {
            Some(MenuAction::Play) => {
                let seed = self.next_seed;
                self.next_seed = self.next_seed.wrapping_add(1);
                log::info!("Starting new session with seed {}", seed);
                self.session = Some(Session::new(seed));
                self.game_over_cue_started = false;
                self.state = AppState::Game;
            }
            Some(MenuAction::Quit) => {
                log::info!("Quit selected, shutting down");
                self.stop_background_cue();
                return AppControl::Exit;
            }
            None => {}
        }
        AppControl::Continue
    }

    fn update_game(&mut self, input: &InputFrame) -> AppControl {
        let Some(phase) = self.session.as_ref().map(|s| s.phase) else {
            // A session must exist in Game state; recover to the menu
            log::warn!("Game state without a session, returning to menu");
            self.state = AppState::Menu;
            return AppControl::Continue;
        };

        if phase == SessionPhase::Playing {
            if input.was_pressed(Key::Escape) {
                log::info!("Pausing session");
                self.audio.pause_cue();
                self.pause.reset();
                self.state = AppState::Pause;
                return AppControl::Continue;
            }

            self.ensure_background_cue(Cue::GameMusic);

            let session = self.session.as_mut().expect("session checked above");
            sim::tick(session, &input.to_tick_input());
            let events: Vec<GameEvent> = session.events.drain(..).collect();

            for event in events {
                match event {
                    GameEvent::ProjectileFired => self.audio.play_cue(Cue::Laser, false),
                    GameEvent::GameOverEntered => {
                        // Terminal cue starts below, once, from the phase check
                    }
                    GameEvent::WaveSpawned { level, count } => {
                        log::debug!("Wave spawned: level {} ({} asteroids)", level, count);
                    }
                }
            }
        }

        let phase = self.session.as_ref().expect("session checked above").phase;
        if phase == SessionPhase::GameOver {
            if !self.game_over_cue_started {
                self.stop_background_cue();
                self.audio.play_cue(Cue::GameOver, false);
                self.game_over_cue_started = true;
            } else if !self.audio.is_cue_playing() {
                let score = self.session.as_ref().expect("session checked above").score;
                let qualifies = self.scores.is_high_score(score);
                let signal = self
                    .session
                    .as_mut()
                    .expect("session checked above")
                    .resolve_game_over(qualifies);
                match signal {
                    SessionSignal::RequestHighScoreEntry => {
                        log::info!("Score {} qualifies, entering name entry", score);
                        self.state = AppState::NewHighscore;
                    }
                    SessionSignal::ReturnToMenu => {
                        log::info!("Session over with score {}", score);
                        self.discard_session();
                        self.state = AppState::Menu;
                    }
                }
            }
        }
        AppControl::Continue
    }

    fn update_pause(&mut self, input: &InputFrame) -> AppControl {
        match self.pause.handle_input(input) {
            Some(PauseAction::Resume) => {
                log::info!("Resuming session");
                self.audio.resume_cue();
                self.state = AppState::Game;
            }
            Some(PauseAction::Menu) => {
                log::info!("Abandoning session from pause");
                self.discard_session();
                self.state = AppState::Menu;
            }
            None => {}
        }
        AppControl::Continue
    }

    fn update_highscore_entry(&mut self, input: &InputFrame) -> AppControl {
        if self.session.is_none() {
            self.state = AppState::Menu;
            return AppControl::Continue;
        }

        for key in &input.pressed {
            match key {
                Key::Return => {
                    let (name, score) = {
                        let session = self.session.as_ref().expect("session checked above");
                        (session.confirmed_name(), session.score)
                    };
                    self.scores.add_high_score(&name, score);
                    log::info!("New high score: {} - {}", name, score);
                    self.discard_session();
                    self.state = AppState::Menu;
                    return AppControl::Continue;
                }
                Key::Backspace => {
                    self.session
                        .as_mut()
                        .expect("session checked above")
                        .name_entry_backspace();
                }
                Key::Char(c) => {
                    self.session
                        .as_mut()
                        .expect("session checked above")
                        .name_entry_push(*c);
                }
                // Movement and fire are ignored entirely in this state
                _ => {}
            }
        }
        AppControl::Continue
    }

    /// Cancellation is immediate and total: the whole session goes at once,
    /// pending cue included.
    fn discard_session(&mut self) {
        self.session = None;
        self.game_over_cue_started = false;
        self.stop_background_cue();
    }
}
