use thiserror::Error;

pub type GameResult<T> = Result<T, GameError>;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Word bank error: {message}")]
    WordBank { message: String },

    #[error("Invalid session: {message}")]
    InvalidSession { message: String },

    #[error("Input error: {message}")]
    Input { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

impl GameError {
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn word_bank<S: Into<String>>(message: S) -> Self {
        Self::WordBank {
            message: message.into(),
        }
    }

    pub fn invalid_session<S: Into<String>>(message: S) -> Self {
        Self::InvalidSession {
            message: message.into(),
        }
    }

    pub fn input<S: Into<String>>(message: S) -> Self {
        Self::Input {
            message: message.into(),
        }
    }
}
