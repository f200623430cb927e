use glam::Vec2;

use retro_typer::consts::*;
use retro_typer::sim::{
    Autoplayer, Difficulty, EffectKind, GameEvent, GamePhase, GameState, Key, PowerUpKind,
    TickInput, tick,
};

/// Menu -> playing on the given difficulty, with an empty field
fn start(difficulty: Difficulty) -> GameState {
    let mut state = GameState::new(2024);
    tick(&mut state, &TickInput::key(Key::Digit(difficulty.digit())));
    assert_eq!(state.phase, GamePhase::Playing);
    state.field.clear();
    state.last_spawn_tick = Some(state.time_ticks);
    state.drain_events();
    state
}

#[test]
fn hard_match_is_case_insensitive() {
    let mut state = start(Difficulty::Hard);
    let profile = state.profile();
    assert_eq!(profile.lives, 2);
    assert_eq!(profile.spawn_delay_ms, 2200);
    assert_eq!(profile.max_word_length, 12);

    state.field.push_word("code", Vec2::new(200.0, 40.0));
    let before = state.progress.words_until_level_up;

    tick(&mut state, &TickInput::submit("CODE"));

    assert_eq!(state.progress.score, 1);
    assert_eq!(state.progress.words_until_level_up, before - 1);
    assert_eq!(state.field.active_words().count(), 0);
    assert!(state.input.is_empty());
    assert!(matches!(
        state.drain_events().as_slice(),
        [.., GameEvent::WordMatched { text, .. }] if text == "code"
    ));
}

#[test]
fn shield_absorbs_missed_words() {
    let mut state = start(Difficulty::Medium);
    state.effects.activate(EffectKind::Shield, SHIELD_DURATION_TICKS);
    for x in [50.0, 250.0, 450.0] {
        state.field.push_word("late", Vec2::new(x, WORD_MISS_Y - 5.0));
    }
    let lives = state.progress.lives;

    let mut missed = 0;
    for _ in 0..20 {
        missed += tick(&mut state, &TickInput::default()).missed_words;
    }

    assert_eq!(missed, 3);
    assert_eq!(state.progress.lives, lives);
    assert_eq!(state.field.active_words().count(), 0);
    assert!(state.field.words.is_empty());
    assert_eq!(state.phase, GamePhase::Playing);
}

#[test]
fn missed_words_without_shield_cost_lives() {
    let mut state = start(Difficulty::Medium);
    state.field.push_word("late", Vec2::new(50.0, WORD_MISS_Y - 0.5));

    let outcome = tick(&mut state, &TickInput::default());
    assert_eq!(outcome.lives_lost, 1);
    assert_eq!(state.progress.lives, 2);
    assert!(state.pending_events().contains(&GameEvent::LifeLost));
}

#[test]
fn match_beats_miss_in_same_tick() {
    let mut state = start(Difficulty::Medium);
    // Would cross the miss line during this tick's step
    state.field.push_word("edge", Vec2::new(50.0, WORD_MISS_Y - 0.5));

    let outcome = tick(&mut state, &TickInput::submit("edge"));
    assert_eq!(outcome.missed_words, 0);
    assert_eq!(state.progress.score, 1);
    assert_eq!(state.progress.lives, 3);
}

#[test]
fn enter_on_blank_buffer_is_noop() {
    let mut state = start(Difficulty::Easy);
    state.field.push_word("cat", Vec2::new(50.0, 50.0));

    tick(&mut state, &TickInput::key(Key::Enter));
    assert!(state.input.is_empty());
    assert!(state.drain_events().is_empty());

    tick(&mut state, &TickInput::submit(" \t"));
    assert_eq!(state.field.active_words().count(), 1);
    assert!(!state.drain_events().contains(&GameEvent::Miss));
}

#[test]
fn wrong_word_is_a_miss_and_clears_buffer() {
    let mut state = start(Difficulty::Easy);
    state.field.push_word("cat", Vec2::new(50.0, 50.0));

    tick(&mut state, &TickInput::submit("dog"));
    assert!(state.input.is_empty());
    assert_eq!(state.progress.score, 0);
    assert!(state.drain_events().contains(&GameEvent::Miss));
    assert_eq!(state.field.active_words().count(), 1);
}

#[test]
fn level_up_speeds_words_up() {
    let mut state = start(Difficulty::Medium);
    let base = state.field.word_speed();

    for i in 0..WORDS_FOR_LEVEL_UP {
        state
            .field
            .push_word(format!("w{i}"), Vec2::new(50.0 + 100.0 * i as f32, 100.0));
    }
    for i in 0..WORDS_FOR_LEVEL_UP {
        tick(&mut state, &TickInput::submit(&format!("W{i}")));
    }

    assert_eq!(state.progress.level, 2);
    assert!((state.field.word_speed() - base * SPEED_INCREASE_FACTOR).abs() < 1e-5);
    assert!(state.drain_events().contains(&GameEvent::LevelUp { level: 2 }));
}

#[test]
fn clear_power_up_wipes_the_field() {
    let mut state = start(Difficulty::Medium);
    state.field.push_word("clear", Vec2::new(100.0, 100.0));
    state.field.push_word("other", Vec2::new(400.0, 100.0));
    state.field.push_power_up(PowerUpKind::Clear, Vec2::new(130.0, 100.0));
    state.field.push_power_up(PowerUpKind::Life, Vec2::new(500.0, 300.0));

    tick(&mut state, &TickInput::submit("clear"));

    assert!(state.field.words.is_empty());
    // Anything left was rolled in during this tick's step, above the field
    assert!(state
        .field
        .power_ups
        .iter()
        .all(|p| p.pos.y == POWER_UP_SPAWN_Y));
}

#[test]
fn freeze_then_thaw() {
    let mut state = start(Difficulty::Medium);
    state.field.push_word("freeze", Vec2::new(100.0, 100.0));
    state.field.push_word("statue", Vec2::new(400.0, 100.0));
    state.field.push_power_up(PowerUpKind::Freeze, Vec2::new(136.0, 100.0));

    tick(&mut state, &TickInput::submit("freeze"));
    assert!(state.effects.is_active(EffectKind::Freeze));

    // The collected word is purged in the same tick
    assert_eq!(state.field.words[0].text(), "statue");
    let y = state.field.words[0].pos.y;

    // The collection tick already counted one frozen step
    for _ in 0..FREEZE_DURATION_TICKS - 2 {
        tick(&mut state, &TickInput::default());
    }
    assert_eq!(state.field.words[0].pos.y, y);
    assert!(state.effects.is_active(EffectKind::Freeze));

    tick(&mut state, &TickInput::default());
    assert!(!state.effects.is_active(EffectKind::Freeze));
    assert!(state.field.words[0].pos.y > y);
}

#[test]
fn game_over_and_reset_round_trip() {
    let mut state = start(Difficulty::Hard);
    for x in [100.0, 300.0] {
        state.field.push_word("late", Vec2::new(x, WORD_MISS_Y));
    }
    tick(&mut state, &TickInput::default());
    assert_eq!(state.phase, GamePhase::GameOver);
    assert!(state
        .drain_events()
        .contains(&GameEvent::GameOver { score: 0, level: 1 }));

    // Game over ignores typing; the key only resets
    tick(&mut state, &TickInput::key(Key::Char('a')));
    assert_eq!(state.phase, GamePhase::SelectingDifficulty);
    assert!(state.input.is_empty());

    let snapshot = state.snapshot();
    assert_eq!(snapshot.progress.score, 0);
    assert_eq!(snapshot.progress.lives, 2);
    assert_eq!(snapshot.progress.level, 1);
    assert_eq!(snapshot.progress.accuracy, 0);
    assert_eq!(snapshot.progress.wpm, 0);

    tick(&mut state, &TickInput::key(Key::Digit(1)));
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.progress.lives, 5);
}

#[test]
fn autoplayer_scores_on_easy() {
    let mut state = GameState::new(7);
    let mut bot = Autoplayer::new(Difficulty::Easy, 2);

    for _ in 0..60 * TICK_RATE {
        let input = bot.next_input(&state);
        tick(&mut state, &input);
    }

    assert!(state.progress.score > 0);
    assert!(state.progress.accuracy() > 0);
    assert!(state.progress.typing_rate(state.time_ticks) > 0);
}

#[test]
fn same_seed_same_game() {
    let run = || {
        let mut state = GameState::new(31337);
        let mut bot = Autoplayer::new(Difficulty::Medium, 3);
        bot.restart_after_game_over = true;
        for _ in 0..20 * TICK_RATE {
            let input = bot.next_input(&state);
            tick(&mut state, &input);
        }
        serde_json::to_string(&state.snapshot()).unwrap()
    };
    assert_eq!(run(), run());
}
