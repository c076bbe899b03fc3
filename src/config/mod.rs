use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::utils::{GameError, GameResult};

/// Maximum distinct words presented in one session.
pub const MAX_WORDS: usize = 10;
/// Maximum rounds in one session. Independent of `MAX_WORDS`.
pub const MAX_ROUNDS: u32 = 10;
/// Points awarded for a correct guess.
pub const SCORE_INCREASE: u32 = 20;

/// Environment prefix for overrides, e.g. `UNSCRAMBLE__GAME__MAX_ROUNDS=5`.
pub const ENV_PREFIX: &str = "UNSCRAMBLE";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub max_words: usize,
    pub max_rounds: u32,
    pub score_increase: u32,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: String,
    pub show_score_in_header: bool,
    pub animation_speed: AnimationSpeed,
    pub text_width: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnimationSpeed {
    None,
    Slow,
    Medium,
    Fast,
}

/// Bounds and scoring that drive a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    pub max_words: usize,
    pub max_rounds: u32,
    pub score_increase: u32,
}

impl GameRules {
    pub fn validate(&self) -> GameResult<()> {
        if self.max_words == 0 {
            return Err(GameError::configuration("max_words must be at least 1"));
        }
        if self.max_rounds == 0 {
            return Err(GameError::configuration("max_rounds must be at least 1"));
        }
        Ok(())
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            max_words: MAX_WORDS,
            max_rounds: MAX_ROUNDS,
            score_increase: SCORE_INCREASE,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_words: MAX_WORDS,
            max_rounds: MAX_ROUNDS,
            score_increase: SCORE_INCREASE,
            seed: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            show_score_in_header: true,
            animation_speed: AnimationSpeed::Medium,
            text_width: 60,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> GameResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to_file(path)?;
            return Ok(default_config);
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;

        Ok(config)
    }

    /// Layers an optional TOML file and `UNSCRAMBLE__*` environment variables over the defaults.
    pub fn load(path: Option<&Path>) -> GameResult<Self> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(false));
        }

        let settings = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> GameResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| GameError::configuration(format!("Failed to create config directory: {}", e)))?;
        }

        let toml_content = toml::to_string_pretty(self)
            .map_err(|e| GameError::configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, toml_content)
            .map_err(|e| GameError::configuration(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    pub fn rules(&self) -> GameRules {
        GameRules {
            max_words: self.game.max_words,
            max_rounds: self.game.max_rounds,
            score_increase: self.game.score_increase,
        }
    }

    pub fn validate(&self) -> GameResult<()> {
        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => return Err(GameError::configuration("Invalid logging level")),
        }

        if self.ui.text_width < 40 {
            return Err(GameError::configuration("Text width must be at least 40"));
        }

        self.rules().validate()
    }

    pub fn merge_with_cli(&mut self, cli_config: CliConfig) {
        if let Some(log_level) = cli_config.log_level {
            self.logging.level = log_level;
        }
        if cli_config.debug {
            self.logging.level = "debug".to_string();
        }
        if let Some(theme) = cli_config.theme {
            self.ui.theme = theme;
        }
        if let Some(seed) = cli_config.seed {
            self.game.seed = Some(seed);
        }
    }

    pub fn get_animation_delay_ms(&self) -> u64 {
        match self.ui.animation_speed {
            AnimationSpeed::None => 0,
            AnimationSpeed::Slow => 600,
            AnimationSpeed::Medium => 300,
            AnimationSpeed::Fast => 100,
        }
    }
}

// Configuration that can be overridden by CLI arguments
#[derive(Debug, Default)]
pub struct CliConfig {
    pub log_level: Option<String>,
    pub debug: bool,
    pub theme: Option<String>,
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.game.max_words, MAX_WORDS);
        assert_eq!(config.game.max_rounds, MAX_ROUNDS);
        assert_eq!(config.game.score_increase, SCORE_INCREASE);
        assert_eq!(config.game.seed, None);
        assert_eq!(config.ui.theme, "default");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.rules(), GameRules::default());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.logging.level = "invalid".to_string();
        assert!(config.validate().is_err());

        config = Config::default();
        config.game.max_rounds = 0;
        assert!(matches!(config.validate(), Err(GameError::Configuration { .. })));

        config = Config::default();
        config.game.max_words = 0;
        assert!(config.validate().is_err());

        config = Config::default();
        config.ui.text_width = 20;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut original_config = Config::default();
        original_config.game.max_rounds = 7;
        original_config.game.seed = Some(99);
        original_config.save_to_file(&config_path).unwrap();

        let loaded_config = Config::from_file(&config_path).unwrap();

        assert_eq!(loaded_config.game.max_rounds, 7);
        assert_eq!(loaded_config.game.seed, Some(99));
        assert_eq!(original_config.ui.theme, loaded_config.ui.theme);
    }

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config::from_file(&config_path).unwrap();

        assert!(config_path.exists());
        assert_eq!(config.game.max_words, MAX_WORDS);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[game]\nmax_words = 3\n").unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.game.max_words, 3);
        assert_eq!(config.game.max_rounds, MAX_ROUNDS);
        assert_eq!(config.ui.text_width, 60);

        let layered = Config::load(Some(config_path.as_path())).unwrap();
        assert_eq!(layered.game.max_words, 3);
        assert_eq!(layered.game.score_increase, SCORE_INCREASE);
    }

    #[test]
    fn test_environment_overrides_file_and_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[game]\nmax_rounds = 7\n").unwrap();

        let from_file = Config::load(Some(config_path.as_path())).unwrap();
        assert_eq!(from_file.game.max_rounds, 7);

        std::env::set_var("UNSCRAMBLE__GAME__MAX_ROUNDS", "5");
        std::env::set_var("UNSCRAMBLE__GAME__SEED", "9");
        let layered = Config::load(Some(config_path.as_path()));
        let env_only = Config::load(None);
        std::env::remove_var("UNSCRAMBLE__GAME__MAX_ROUNDS");
        std::env::remove_var("UNSCRAMBLE__GAME__SEED");

        let layered = layered.unwrap();
        assert_eq!(layered.game.max_rounds, 5);
        assert_eq!(layered.game.seed, Some(9));
        assert_eq!(layered.game.max_words, MAX_WORDS);

        let env_only = env_only.unwrap();
        assert_eq!(env_only.game.max_rounds, 5);
        assert_eq!(env_only.game.seed, Some(9));
        assert_eq!(env_only.ui.theme, "default");
    }

    #[test]
    fn test_malformed_file_is_rejected() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[game\nmax_words = ").unwrap();

        assert!(matches!(Config::from_file(&config_path), Err(GameError::Toml(_))));
    }

    #[test]
    fn test_cli_config_merge() {
        let mut config = Config::default();
        let cli_config = CliConfig {
            log_level: Some("warn".to_string()),
            debug: true,
            theme: Some("dark".to_string()),
            seed: Some(7),
        };

        config.merge_with_cli(cli_config);

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.ui.theme, "dark");
        assert_eq!(config.game.seed, Some(7));
    }

    #[test]
    fn test_animation_delay() {
        let mut config = Config::default();

        config.ui.animation_speed = AnimationSpeed::None;
        assert_eq!(config.get_animation_delay_ms(), 0);

        config.ui.animation_speed = AnimationSpeed::Fast;
        assert_eq!(config.get_animation_delay_ms(), 100);
    }
}
