use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::GameSnapshot;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEvent {
    pub id: Uuid,
    pub event_type: GameEventType,
    pub timestamp: DateTime<Utc>,
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEventType {
    GameStarted,
    RoundStarted,
    GuessUpdated,
    GuessCorrect,
    GuessWrong,
    WordSkipped,
    GameOver,
    SessionRestored,
}

impl GameEvent {
    pub fn new(event_type: GameEventType, data: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_type,
            timestamp: Utc::now(),
            data,
        }
    }

    fn with_snapshot(event_type: GameEventType, snapshot: &GameSnapshot) -> Self {
        let data = serde_json::json!({ "snapshot": snapshot });
        Self::new(event_type, data)
    }

    pub fn game_started(session_id: Uuid, snapshot: &GameSnapshot) -> Self {
        let data = serde_json::json!({
            "session_id": session_id,
            "snapshot": snapshot
        });
        Self::new(GameEventType::GameStarted, data)
    }

    pub fn round_started(snapshot: &GameSnapshot) -> Self {
        Self::with_snapshot(GameEventType::RoundStarted, snapshot)
    }

    pub fn guess_updated(snapshot: &GameSnapshot) -> Self {
        Self::with_snapshot(GameEventType::GuessUpdated, snapshot)
    }

    pub fn guess_correct(points: u32, snapshot: &GameSnapshot) -> Self {
        let data = serde_json::json!({
            "points": points,
            "snapshot": snapshot
        });
        Self::new(GameEventType::GuessCorrect, data)
    }

    pub fn guess_wrong(guess: &str, snapshot: &GameSnapshot) -> Self {
        let data = serde_json::json!({
            "guess": guess,
            "snapshot": snapshot
        });
        Self::new(GameEventType::GuessWrong, data)
    }

    pub fn word_skipped(snapshot: &GameSnapshot) -> Self {
        Self::with_snapshot(GameEventType::WordSkipped, snapshot)
    }

    pub fn game_over(final_score: u32, snapshot: &GameSnapshot) -> Self {
        let data = serde_json::json!({
            "final_score": final_score,
            "snapshot": snapshot
        });
        Self::new(GameEventType::GameOver, data)
    }

    pub fn session_restored(session_id: Uuid, snapshot: &GameSnapshot) -> Self {
        let data = serde_json::json!({
            "session_id": session_id,
            "snapshot": snapshot
        });
        Self::new(GameEventType::SessionRestored, data)
    }
}

pub trait GameEventHandler {
    fn handle_event(&mut self, event: &GameEvent);
}

/// Bounded in-memory event history. Oldest events are dropped first.
pub struct EventLogger {
    events: VecDeque<GameEvent>,
    max_events: usize,
}

impl EventLogger {
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::new(),
            max_events,
        }
    }

    pub fn get_events(&self) -> Vec<&GameEvent> {
        self.events.iter().collect()
    }

    pub fn get_recent_events(&self, count: usize) -> Vec<&GameEvent> {
        self.events.iter().rev().take(count).collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn get_event_count(&self) -> usize {
        self.events.len()
    }
}

impl Default for EventLogger {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl GameEventHandler for EventLogger {
    fn handle_event(&mut self, event: &GameEvent) {
        self.events.push_back(event.clone());

        while self.events.len() > self.max_events {
            self.events.pop_front();
        }
    }
}

// Fans one event out to every registered handler, in registration order.
pub struct CompositeEventHandler {
    handlers: Vec<Box<dyn GameEventHandler + Send>>,
}

impl CompositeEventHandler {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler<H: GameEventHandler + Send + 'static>(&mut self, handler: H) {
        self.handlers.push(Box::new(handler));
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for CompositeEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEventHandler for CompositeEventHandler {
    fn handle_event(&mut self, event: &GameEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event);
        }
    }
}
