//! Retro Typer headless host
//!
//! Runs the simulation at a fixed cadence without rendering. Input comes
//! from the built-in autoplayer or, with autoplay off, from stdin: one line
//! per submission, `quit` to stop.

use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use retro_typer::Settings;
use retro_typer::consts::TICK_RATE;
use retro_typer::sim::{Autoplayer, GameEvent, GamePhase, GameState, TickInput, tick};

/// Where the next tick's input comes from
enum InputSource {
    Autoplay(Autoplayer),
    Stdin(Receiver<String>),
}

impl InputSource {
    fn next_input(&mut self, state: &GameState) -> TickInput {
        match self {
            InputSource::Autoplay(bot) => bot.next_input(state),
            InputSource::Stdin(lines) => match lines.try_recv() {
                Ok(line) if line.trim().eq_ignore_ascii_case("quit") => TickInput::quit(),
                Ok(line) => TickInput::submit(line.trim_end()),
                Err(TryRecvError::Empty) => TickInput::default(),
                Err(TryRecvError::Disconnected) => TickInput::quit(),
            },
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}

fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::KeyTyped => {}
        GameEvent::LevelUp { level } => log::info!("LEVEL {}!", level),
        GameEvent::PowerUpCollected { kind, .. } => log::info!("{}!", kind.as_str().to_uppercase()),
        GameEvent::LifeLost => log::info!("-LIFE!"),
        other => log::debug!("{:?}", other),
    }
}

fn main() {
    env_logger::init();
    log::info!("Retro Typer (headless) starting...");

    let settings = Settings::load().unwrap_or_else(|err| {
        log::error!("{}; using default settings", err);
        Settings::default()
    });

    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Seed {}", seed);

    let mut state = GameState::new(seed);
    state.press_to_start = settings.press_to_start;

    let mut source = if settings.autoplay {
        let mut bot = Autoplayer::new(settings.difficulty(), settings.autoplay_interval_ticks);
        bot.restart_after_game_over = settings.autoplay_loop;
        InputSource::Autoplay(bot)
    } else {
        log::info!("Type 1/2/3 to pick a difficulty, then one word per line; 'quit' exits");
        InputSource::Stdin(spawn_stdin_reader())
    };

    let frame = Duration::from_secs(1) / TICK_RATE;
    let mut next_frame = Instant::now();

    loop {
        let input = source.next_input(&state);
        let outcome = tick(&mut state, &input);

        for event in state.drain_events() {
            log_event(&event);
        }

        if settings.snapshot_log_interval > 0
            && state.time_ticks % settings.snapshot_log_interval == 0
            && log::log_enabled!(log::Level::Trace)
        {
            match serde_json::to_string(&state.snapshot()) {
                Ok(json) => log::trace!("{}", json),
                Err(err) => log::warn!("Snapshot serialization failed: {}", err),
            }
        }

        if outcome.quit {
            break;
        }
        if settings.max_ticks.is_some_and(|max| state.time_ticks >= max) {
            log::info!("Reached tick limit");
            break;
        }
        if state.phase == GamePhase::GameOver
            && matches!(&source, InputSource::Autoplay(bot) if !bot.restart_after_game_over)
        {
            break;
        }

        if settings.realtime {
            next_frame += frame;
            let now = Instant::now();
            if next_frame > now {
                std::thread::sleep(next_frame - now);
            } else {
                // Running behind; don't try to catch up
                next_frame = now;
            }
        }
    }

    let snapshot = state.snapshot();
    log::info!(
        "Finished after {} ticks ({:?}): score {}, level {}, lives {}, {} wpm, {}% accuracy",
        state.time_ticks,
        snapshot.phase,
        snapshot.progress.score,
        snapshot.progress.level,
        snapshot.progress.lives,
        snapshot.progress.wpm,
        snapshot.progress.accuracy
    );
}
