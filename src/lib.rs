pub mod core;
pub mod ui;
pub mod config;
pub mod utils;

pub use crate::core::{engine::GameEngine, game_state::GameSnapshot, word_bank::WordBank};
pub use crate::ui::GameInterface;
pub use crate::config::{Config, GameRules, MAX_ROUNDS, MAX_WORDS, SCORE_INCREASE};

// Re-export commonly used types
pub type Result<T> = anyhow::Result<T>;

// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
