use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Mutable state of one game session. Owned exclusively by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub current_word: String,
    pub scrambled_word: String,
    pub used_words: BTreeSet<String>,
    pub user_guess: String,
    pub guess_was_wrong: bool,
    pub round: u32,
    pub score: u32,
    pub is_game_over: bool,
    pub correct_guesses: u32,
    pub skipped_words: u32,
    pub wrong_attempts: u32,
}

impl SessionState {
    /// Fresh session positioned on round 1 with its first word.
    pub fn new(current_word: String, scrambled_word: String) -> Self {
        let mut used_words = BTreeSet::new();
        used_words.insert(current_word.clone());

        Self {
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
            current_word,
            scrambled_word,
            used_words,
            user_guess: String::new(),
            guess_was_wrong: false,
            round: 1,
            score: 0,
            is_game_over: false,
            correct_guesses: 0,
            skipped_words: 0,
            wrong_attempts: 0,
        }
    }

    pub fn begin_round(&mut self, current_word: String, scrambled_word: String) {
        self.used_words.insert(current_word.clone());
        self.current_word = current_word;
        self.scrambled_word = scrambled_word;
        self.guess_was_wrong = false;
        self.round += 1;
        self.user_guess.clear();
    }

    pub fn finish(&mut self) {
        self.guess_was_wrong = false;
        self.is_game_over = true;
    }

    pub fn guess_matches(&self) -> bool {
        self.user_guess.to_lowercase() == self.current_word.to_lowercase()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            scrambled_word: self.scrambled_word.clone(),
            user_guess: self.user_guess.clone(),
            round: self.round,
            score: self.score,
            is_guessed_word_wrong: self.guess_was_wrong,
            is_game_over: self.is_game_over,
        }
    }

    pub fn get_statistics(&self) -> SessionStatistics {
        SessionStatistics {
            session_id: self.session_id,
            score: self.score,
            rounds_played: self.round,
            words_seen: self.used_words.len(),
            correct_guesses: self.correct_guesses,
            skipped_words: self.skipped_words,
            wrong_attempts: self.wrong_attempts,
            started_at: self.started_at,
        }
    }
}

/// Immutable view of a session handed to observers. Never carries the target word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub scrambled_word: String,
    pub user_guess: String,
    pub round: u32,
    pub score: u32,
    pub is_guessed_word_wrong: bool,
    pub is_game_over: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStatistics {
    pub session_id: Uuid,
    pub score: u32,
    pub rounds_played: u32,
    pub words_seen: usize,
    pub correct_guesses: u32,
    pub skipped_words: u32,
    pub wrong_attempts: u32,
    pub started_at: DateTime<Utc>,
}

impl SessionStatistics {
    pub fn accuracy_percent(&self) -> u32 {
        let attempts = u64::from(self.correct_guesses) + u64::from(self.wrong_attempts);
        if attempts == 0 {
            0
        } else {
            (u64::from(self.correct_guesses) * 100 / attempts) as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_session_creation() {
        let state = SessionState::new("kotlin".to_string(), "tonlik".to_string());

        assert_eq!(state.round, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.used_words.len(), 1);
        assert!(state.used_words.contains("kotlin"));
        assert!(!state.is_game_over);
        assert!(state.user_guess.is_empty());
    }

    #[test]
    fn test_begin_round() {
        let mut state = SessionState::new("kotlin".to_string(), "tonlik".to_string());
        state.user_guess = "kotlni".to_string();
        state.guess_was_wrong = true;

        state.begin_round("rust".to_string(), "tsur".to_string());

        assert_eq!(state.round, 2);
        assert_eq!(state.current_word, "rust");
        assert_eq!(state.scrambled_word, "tsur");
        assert_eq!(state.used_words.len(), 2);
        assert!(state.user_guess.is_empty());
        assert!(!state.guess_was_wrong);
    }

    #[test]
    fn test_guess_matching_ignores_case() {
        let mut state = SessionState::new("kotlin".to_string(), "tonlik".to_string());

        state.user_guess = "KoTLiN".to_string();
        assert!(state.guess_matches());

        state.user_guess = "kotlin ".to_string();
        assert!(!state.guess_matches());
    }

    #[test]
    fn test_snapshot_hides_target_word() {
        let mut state = SessionState::new("kotlin".to_string(), "tonlik".to_string());
        state.user_guess = "tol".to_string();
        state.score = 40;

        let snapshot = state.snapshot();
        assert_eq!(
            snapshot,
            GameSnapshot {
                scrambled_word: "tonlik".to_string(),
                user_guess: "tol".to_string(),
                round: 1,
                score: 40,
                is_guessed_word_wrong: false,
                is_game_over: false,
            }
        );

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(!json.contains("\"kotlin\""));
    }

    #[test]
    fn test_statistics() {
        let mut state = SessionState::new("kotlin".to_string(), "tonlik".to_string());
        state.correct_guesses = 3;
        state.wrong_attempts = 1;
        state.skipped_words = 2;

        let stats = state.get_statistics();
        assert_eq!(stats.words_seen, 1);
        assert_eq!(stats.accuracy_percent(), 75);
        assert_eq!(stats.skipped_words, 2);
    }

    #[test]
    fn test_accuracy_with_extreme_counts() {
        let mut state = SessionState::new("kotlin".to_string(), "tonlik".to_string());
        state.correct_guesses = u32::MAX;
        state.wrong_attempts = u32::MAX;
        assert_eq!(state.get_statistics().accuracy_percent(), 50);

        state.wrong_attempts = 0;
        assert_eq!(state.get_statistics().accuracy_percent(), 100);
    }
}
