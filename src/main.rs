//! Asteroid Field entry point
//!
//! Wires the core to stand-in services (no window, no audio device) and runs
//! the fixed-rate tick loop. Without a platform layer attached the binary
//! plays a short scripted demo session and exits through the menu.

use std::path::Path;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use asteroid_field::app::{App, AppControl};
use asteroid_field::consts::{TICK_DT, TICK_RATE};
use asteroid_field::input::{InputFrame, Key};
use asteroid_field::render::NullCanvas;
use asteroid_field::{LocalScoreStore, NullAudio, Settings};

/// Scripted input for the demo run: sit through the intro, start a game,
/// fly and shoot for a while, then pause out to the menu and quit.
fn demo_input(tick: u64) -> InputFrame {
    let t = tick as u32;
    let intro_end = 3 * TICK_RATE;
    let game_start = intro_end + 2;
    let game_end = game_start + 20 * TICK_RATE;

    if t == intro_end {
        return InputFrame::new().press(Key::Return); // PLAY
    }
    if t > game_start && t < game_end {
        let mut frame = InputFrame::new().hold(Key::Up);
        if (t / 120) % 2 == 0 {
            frame = frame.hold(Key::Left);
        }
        if t % 30 == 0 {
            frame = frame.press(Key::Space);
        }
        return frame;
    }
    // Escape to pause, select MENU, then walk down to QUIT
    match t.checked_sub(game_end) {
        Some(0) => InputFrame::new().press(Key::Escape),
        Some(2) => InputFrame::new().press(Key::Down),
        Some(4) => InputFrame::new().press(Key::Return), // pause -> MENU
        Some(6) | Some(8) | Some(10) => InputFrame::new().press(Key::Down),
        Some(12) => InputFrame::new().press(Key::Return), // QUIT
        _ => InputFrame::new(),
    }
}

fn main() {
    env_logger::init();
    log::info!("Asteroid Field starting at {} Hz", TICK_RATE);

    let settings = Settings::load(Path::new("settings.json"));
    log::info!(
        "Volumes: sfx {:.2}, music {:.2}",
        settings.effective_sfx_volume(),
        settings.effective_music_volume()
    );

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let scores = LocalScoreStore::new("highscores.json");
    let mut app = App::new(NullAudio, scores, seed);
    let mut canvas = NullCanvas;

    let tick_duration = Duration::from_secs_f32(TICK_DT);
    let mut next_tick = Instant::now();
    let mut tick: u64 = 0;

    loop {
        let frame = demo_input(tick);
        if app.update(&frame) == AppControl::Exit {
            break;
        }
        app.draw(&mut canvas);
        tick += 1;

        // Frame pacing: the only blocking in the whole loop
        next_tick += tick_duration;
        let now = Instant::now();
        if next_tick > now {
            thread::sleep(next_tick - now);
        } else {
            // Fell behind; catch up without spiraling
            next_tick = now;
        }
    }

    log::info!("Clean exit after {} ticks", tick);
}
