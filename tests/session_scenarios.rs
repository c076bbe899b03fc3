use std::sync::{Arc, Mutex};

use unscramble::core::scramble::is_permutation;
use unscramble::core::{GameEvent, GameEventHandler, GameEventType};
use unscramble::utils::GameError;
use unscramble::{GameEngine, GameRules, WordBank, MAX_ROUNDS, MAX_WORDS, SCORE_INCREASE};

fn single_word_engine(seed: u64) -> GameEngine {
    let bank = WordBank::new(["kotlin"]).unwrap();
    let rules = GameRules {
        max_words: 1,
        max_rounds: 10,
        score_increase: SCORE_INCREASE,
    };
    GameEngine::with_seed(bank, rules, seed).unwrap()
}

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<GameEventType>>>);

impl GameEventHandler for Recorder {
    fn handle_event(&mut self, event: &GameEvent) {
        self.0.lock().unwrap().push(event.event_type.clone());
    }
}

#[test]
fn single_word_bank_ends_after_one_correct_guess() {
    for (seed, guess) in [(1, "kotlin"), (2, "KOTLIN"), (3, "KotLin")] {
        let mut engine = single_word_engine(seed);
        engine.reset();

        let snapshot = engine.snapshot();
        assert!(is_permutation(&snapshot.scrambled_word, "kotlin"));
        assert_ne!(snapshot.scrambled_word, "kotlin");

        engine.update_guess(guess);
        engine.submit();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.score, SCORE_INCREASE);
        assert!(snapshot.is_game_over);
        assert_eq!(snapshot.round, 1);
    }
}

#[test]
fn wrong_guess_then_correct_guess() {
    let mut engine = single_word_engine(9);

    engine.update_guess("kotiln");
    engine.submit();
    let snapshot = engine.snapshot();
    assert!(snapshot.is_guessed_word_wrong);
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.round, 1);

    engine.update_guess("kotlin");
    engine.submit();
    let snapshot = engine.snapshot();
    assert!(!snapshot.is_guessed_word_wrong);
    assert_eq!(snapshot.score, SCORE_INCREASE);
}

#[test]
fn repeated_skips_reach_game_over_within_bounds() {
    let mut engine = GameEngine::with_seed(WordBank::default(), GameRules::default(), 2024).unwrap();

    let mut skips = 0;
    while !engine.is_game_over() {
        let session = engine.session();
        assert!(session.used_words.len() <= MAX_WORDS);
        assert!(session.round <= MAX_ROUNDS);
        engine.skip();
        skips += 1;
        assert!(skips <= MAX_ROUNDS as usize, "game never ended");
    }

    let frozen = engine.snapshot();
    for _ in 0..5 {
        engine.skip();
        engine.submit();
    }
    let after = engine.snapshot();
    assert_eq!(after.score, frozen.score);
    assert_eq!(after.round, frozen.round);
    assert!(after.is_game_over);
}

#[test]
fn used_words_never_repeat_within_a_session() {
    let words = ["alpha", "bravo", "charlie", "delta", "echo", "foxtrot"];
    let bank = WordBank::new(words).unwrap();
    let rules = GameRules {
        max_words: 6,
        max_rounds: 10,
        score_increase: 5,
    };
    let mut engine = GameEngine::with_seed(bank, rules, 11).unwrap();

    let mut seen = vec![engine.session().current_word];
    while !engine.is_game_over() {
        engine.skip();
        if !engine.is_game_over() {
            seen.push(engine.session().current_word);
        }
    }

    let mut unique = seen.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), seen.len());
    assert_eq!(seen.len(), 6);
}

#[test]
fn reset_after_game_over_starts_fresh() {
    let mut engine = single_word_engine(5);
    engine.skip();
    assert!(engine.is_game_over());

    engine.reset();

    let session = engine.session();
    assert_eq!(session.score, 0);
    assert_eq!(session.round, 1);
    assert!(!session.is_game_over);
    assert_eq!(session.used_words.len(), 1);
}

#[test]
fn misconfigured_bank_fails_at_construction() {
    let bank = WordBank::new(["one", "two", "three"]).unwrap();
    let result = GameEngine::with_seed(bank, GameRules::default(), 0);
    assert!(matches!(result, Err(GameError::WordBank { .. })));
}

#[test]
fn registered_handlers_observe_every_intent() {
    let recorder = Recorder::default();
    let mut engine = single_word_engine(3);
    engine.add_event_handler(recorder.clone());

    engine.update_guess("nope");
    engine.submit();
    engine.update_guess("kotlin");
    engine.submit();
    engine.reset();

    let seen = recorder.0.lock().unwrap().clone();
    assert_eq!(
        seen,
        vec![
            GameEventType::GuessUpdated,
            GameEventType::GuessWrong,
            GameEventType::GuessUpdated,
            GameEventType::GuessCorrect,
            GameEventType::GameOver,
            GameEventType::GameStarted,
        ]
    );
}

#[tokio::test]
async fn shared_engine_serializes_intents() {
    let engine = Arc::new(tokio::sync::Mutex::new(
        GameEngine::with_seed(WordBank::default(), GameRules::default(), 77).unwrap(),
    ));
    let mut rx = engine.lock().await.subscribe();

    let mut tasks = Vec::new();
    for _ in 0..4 {
        let engine = Arc::clone(&engine);
        tasks.push(tokio::spawn(async move {
            engine.lock().await.skip();
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    rx.changed().await.unwrap();
    let latest = rx.borrow_and_update().clone();
    assert_eq!(latest.round, 5);
    assert_eq!(latest, engine.lock().await.snapshot());
}
