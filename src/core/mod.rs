pub mod engine;
pub mod game_state;
pub mod events;
pub mod scramble;
pub mod word_bank;

pub use engine::GameEngine;
pub use game_state::{GameSnapshot, SessionState, SessionStatistics};
pub use events::{CompositeEventHandler, EventLogger, GameEvent, GameEventHandler, GameEventType};
pub use word_bank::WordBank;
