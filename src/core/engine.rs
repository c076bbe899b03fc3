use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tokio::sync::watch;
use tracing::{debug, error, info, trace};

use crate::config::{Config, GameRules};
use crate::core::scramble::{self, can_scramble, is_permutation};
use crate::core::{
    CompositeEventHandler, EventLogger, GameEvent, GameEventHandler, GameSnapshot, SessionState,
    SessionStatistics, WordBank,
};
use crate::utils::{GameError, GameResult};

/// Uniform redraws tried before picking directly among the unused words.
pub const MAX_DRAW_ATTEMPTS: usize = 256;

/// Sole owner of a session's state.
///
/// Every mutation goes through one of the intents (`update_guess`, `submit`,
/// `skip`, `reset`). Each intent runs to completion before a single snapshot is
/// published on the watch channel, so observers never see a partial update.
/// Share across tasks behind `Arc<tokio::sync::Mutex<_>>` when intents arrive
/// from a concurrent dispatcher.
pub struct GameEngine<R = StdRng> {
    word_bank: WordBank,
    rules: GameRules,
    rng: R,
    session: SessionState,
    state_tx: watch::Sender<GameSnapshot>,
    event_log: EventLogger,
    handlers: CompositeEventHandler,
}

impl GameEngine<StdRng> {
    pub fn new(word_bank: WordBank, rules: GameRules) -> GameResult<Self> {
        Self::with_rng(word_bank, rules, StdRng::from_entropy())
    }

    pub fn with_seed(word_bank: WordBank, rules: GameRules, seed: u64) -> GameResult<Self> {
        Self::with_rng(word_bank, rules, StdRng::seed_from_u64(seed))
    }

    /// Engine over the built-in word list, seeded when the config names a seed.
    pub fn from_config(config: &Config) -> GameResult<Self> {
        let rules = config.rules();
        match config.game.seed {
            Some(seed) => Self::with_seed(WordBank::default(), rules, seed),
            None => Self::new(WordBank::default(), rules),
        }
    }
}

impl<R: Rng> GameEngine<R> {
    /// Fails fast when the rules cannot be satisfied by the word bank.
    pub fn with_rng(word_bank: WordBank, rules: GameRules, mut rng: R) -> GameResult<Self> {
        rules.validate()?;

        if word_bank.len() < rules.max_words {
            return Err(GameError::word_bank(format!(
                "Word bank holds {} words but a session may use up to {}",
                word_bank.len(),
                rules.max_words
            )));
        }

        let (word, scrambled) = select_next_word(&word_bank, &BTreeSet::new(), &mut rng)
            .ok_or_else(|| GameError::word_bank("Word bank has no words to draw from"))?;
        let session = SessionState::new(word, scrambled);
        let (state_tx, _) = watch::channel(session.snapshot());

        info!(
            "Game engine ready: {} words, {} word budget, {} rounds",
            word_bank.len(),
            rules.max_words,
            rules.max_rounds
        );

        let mut engine = Self {
            word_bank,
            rules,
            rng,
            session,
            state_tx,
            event_log: EventLogger::default(),
            handlers: CompositeEventHandler::new(),
        };
        engine.emit(GameEvent::game_started(
            engine.session.session_id,
            &engine.session.snapshot(),
        ));

        Ok(engine)
    }

    /// Starts a fresh session: round 1, score 0, one used word.
    /// The event history only covers the current session.
    pub fn reset(&mut self) {
        match select_next_word(&self.word_bank, &BTreeSet::new(), &mut self.rng) {
            Some((word, scrambled)) => {
                self.session = SessionState::new(word, scrambled);
                self.event_log.clear();
                info!("New session started: {}", self.session.session_id);
                self.emit(GameEvent::game_started(
                    self.session.session_id,
                    &self.session.snapshot(),
                ));
            }
            None => {
                error!("Word bank is empty; cannot start a new session");
                self.session.finish();
            }
        }

        self.publish_state();
    }

    pub fn update_guess<S: Into<String>>(&mut self, text: S) {
        let text = text.into();
        if self.session.user_guess == text {
            return;
        }

        self.session.user_guess = text;
        self.emit(GameEvent::guess_updated(&self.session.snapshot()));
        self.publish_state();
    }

    /// Checks the current guess case-insensitively. Ignored once the game is over.
    pub fn submit(&mut self) {
        if self.session.is_game_over {
            debug!("Submit ignored: game is over");
            return;
        }

        if self.session.guess_matches() {
            self.session.score = self.session.score.saturating_add(self.rules.score_increase);
            self.session.correct_guesses = self.session.correct_guesses.saturating_add(1);
            // The accepted guess spells the target word.
            self.session.user_guess.clear();
            info!(
                "Correct guess in round {}, score now {}",
                self.session.round, self.session.score
            );
            self.emit(GameEvent::guess_correct(
                self.rules.score_increase,
                &self.session.snapshot(),
            ));
            self.advance_round();
        } else {
            self.session.guess_was_wrong = true;
            self.session.wrong_attempts = self.session.wrong_attempts.saturating_add(1);
            debug!("Wrong guess in round {}", self.session.round);
            self.emit(GameEvent::guess_wrong(
                &self.session.user_guess,
                &self.session.snapshot(),
            ));
        }

        self.publish_state();
    }

    /// Moves on to the next word without scoring. Ignored once the game is over.
    pub fn skip(&mut self) {
        if self.session.is_game_over {
            debug!("Skip ignored: game is over");
            return;
        }

        self.session.skipped_words = self.session.skipped_words.saturating_add(1);
        debug!("Skipped word in round {}", self.session.round);
        self.emit(GameEvent::word_skipped(&self.session.snapshot()));
        self.advance_round();
        self.publish_state();
    }

    fn advance_round(&mut self) {
        let under_word_budget = self.session.used_words.len() < self.rules.max_words;
        let under_round_cap = self.session.round < self.rules.max_rounds;

        if under_word_budget && under_round_cap {
            match select_next_word(&self.word_bank, &self.session.used_words, &mut self.rng) {
                Some((word, scrambled)) => {
                    self.session.begin_round(word, scrambled);
                    debug!("Round {} started", self.session.round);
                    self.emit(GameEvent::round_started(&self.session.snapshot()));
                    return;
                }
                None => error!("Word bank exhausted before the word budget; ending session"),
            }
        }

        self.session.finish();
        info!(
            "Game over after {} rounds with score {}",
            self.session.round, self.session.score
        );
        self.emit(GameEvent::game_over(self.session.score, &self.session.snapshot()));
    }

    /// Replaces the session with a previously captured one after checking it
    /// against this engine's word bank and rules.
    pub fn restore(&mut self, state: SessionState) -> GameResult<()> {
        self.validate_session(&state)?;

        self.session = state;
        info!("Session restored: {}", self.session.session_id);
        self.emit(GameEvent::session_restored(
            self.session.session_id,
            &self.session.snapshot(),
        ));
        self.publish_state();

        Ok(())
    }

    pub fn export_session(&self) -> GameResult<String> {
        Ok(serde_json::to_string_pretty(&self.session)?)
    }

    pub fn import_session(&mut self, json: &str) -> GameResult<()> {
        let state: SessionState = serde_json::from_str(json)?;
        self.restore(state)
    }

    fn validate_session(&self, state: &SessionState) -> GameResult<()> {
        if !is_permutation(&state.scrambled_word, &state.current_word) {
            return Err(GameError::invalid_session(
                "Scrambled word is not a permutation of the current word",
            ));
        }
        if can_scramble(&state.current_word) && state.scrambled_word == state.current_word {
            return Err(GameError::invalid_session("Scrambled word equals the current word"));
        }
        if !state.used_words.contains(&state.current_word) {
            return Err(GameError::invalid_session("Current word is not marked as used"));
        }
        if let Some(unknown) = state.used_words.iter().find(|w| !self.word_bank.contains(w)) {
            return Err(GameError::invalid_session(format!(
                "Word '{}' is not in the word bank",
                unknown
            )));
        }
        if state.used_words.len() > self.rules.max_words {
            return Err(GameError::invalid_session(format!(
                "{} used words exceed the word budget of {}",
                state.used_words.len(),
                self.rules.max_words
            )));
        }
        if state.round == 0 || state.round > self.rules.max_rounds {
            return Err(GameError::invalid_session(format!(
                "Round {} is outside 1..={}",
                state.round, self.rules.max_rounds
            )));
        }
        Ok(())
    }

    fn emit(&mut self, event: GameEvent) {
        self.event_log.handle_event(&event);
        self.handlers.handle_event(&event);
    }

    fn publish_state(&self) {
        self.state_tx.send_replace(self.session.snapshot());
    }
}

impl<R> GameEngine<R> {
    pub fn snapshot(&self) -> GameSnapshot {
        self.session.snapshot()
    }

    /// Stream of snapshots; the receiver always holds the latest published state.
    pub fn subscribe(&self) -> watch::Receiver<GameSnapshot> {
        self.state_tx.subscribe()
    }

    pub fn add_event_handler<H: GameEventHandler + Send + 'static>(&mut self, handler: H) {
        self.handlers.add_handler(handler);
    }

    /// Copy of the full session, including the target word, for save/restore.
    pub fn session(&self) -> SessionState {
        self.session.clone()
    }

    pub fn statistics(&self) -> SessionStatistics {
        self.session.get_statistics()
    }

    pub fn rules(&self) -> GameRules {
        self.rules
    }

    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over
    }

    pub fn event_history(&self) -> Vec<GameEvent> {
        self.event_log.get_events().into_iter().cloned().collect()
    }

    pub fn recent_events(&self, count: usize) -> Vec<GameEvent> {
        self.event_log
            .get_recent_events(count)
            .into_iter()
            .cloned()
            .collect()
    }
}

/// Draws an unused word and its scramble, or `None` if every word is used.
fn select_next_word<R: Rng + ?Sized>(
    word_bank: &WordBank,
    used_words: &BTreeSet<String>,
    rng: &mut R,
) -> Option<(String, String)> {
    if word_bank.is_empty() {
        return None;
    }

    let mut chosen = None;
    for _ in 0..MAX_DRAW_ATTEMPTS {
        let index = rng.gen_range(0..word_bank.len());
        if let Some(word) = word_bank.get(index) {
            if !used_words.contains(word) {
                chosen = Some(word);
                break;
            }
        }
    }

    let word = match chosen {
        Some(word) => word,
        None => {
            debug!("Random draws kept hitting used words, choosing among the remainder");
            let remaining: Vec<&str> = word_bank
                .iter()
                .filter(|word| !used_words.contains(*word))
                .collect();
            *remaining.choose(rng)?
        }
    };

    trace!("Selected word '{}'", word);
    let scrambled = scramble::shuffle(word, rng);
    Some((word.to_string(), scrambled))
}
