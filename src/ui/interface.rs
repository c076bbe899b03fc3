use dialoguer::{Confirm, Input, Select};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::sleep;

use crate::config::Config;
use crate::core::{GameEngine, GameSnapshot};
use crate::ui::Display;
use crate::ui::ThemeManager;
use crate::utils::{GameError, GameResult};
use tracing::{error, info, warn};

/// Terminal front end. Renders snapshots and forwards player intents to the engine.
pub struct GameInterface {
    engine: GameEngine,
    state_rx: watch::Receiver<GameSnapshot>,
    display: Display,
    config: Config,
}

enum RoundAction {
    Guess,
    Skip,
    Quit,
}

impl GameInterface {
    pub fn new(config: Config) -> GameResult<Self> {
        info!("Initializing game interface");

        let engine = GameEngine::from_config(&config)?;
        let state_rx = engine.subscribe();

        let mut display = Display::new(ThemeManager::new(), config.ui.text_width)
            .map_err(|e| GameError::configuration(format!("Failed to create display: {}", e)))?;

        if !display.set_theme(&config.ui.theme) {
            warn!("Unknown theme '{}', using default", config.ui.theme);
        }

        Ok(Self {
            engine,
            state_rx,
            display,
            config,
        })
    }

    pub async fn run(&mut self) -> GameResult<()> {
        info!("Starting game interface");

        loop {
            match self.show_main_menu().await {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    error!("Main menu error: {}", e);
                    self.display.show_error(&format!("An error occurred: {}", e)).ok();
                    self.display.wait_for_enter().ok();
                }
            }
        }

        self.display.show_message("Thanks for playing!", "success").ok();
        Ok(())
    }

    pub async fn show_main_menu(&mut self) -> GameResult<bool> {
        self.display.clear_screen().ok();
        self.display.show_title(&format!("UNSCRAMBLE  v{}", crate::VERSION))?;

        let choices = vec!["🎮 Play", "🎨 Change Theme", "🚪 Exit"];

        let selection = Select::new()
            .with_prompt("What would you like to do?")
            .items(&choices)
            .default(0)
            .interact()
            .map_err(|e| GameError::input(format!("Menu selection error: {}", e)))?;

        match selection {
            0 => self.play().await?,
            1 => self.change_theme()?,
            2 => return Ok(false),
            _ => unreachable!(),
        }

        Ok(true)
    }

    /// Plays sessions until the player declines another one or quits.
    pub async fn play(&mut self) -> GameResult<()> {
        self.engine.reset();

        loop {
            let snapshot = self.state_rx.borrow_and_update().clone();
            self.render(&snapshot)?;

            if snapshot.is_game_over {
                self.display.show_final_score(&self.engine.statistics())?;
                if self.confirm("Play again?", true)? {
                    self.engine.reset();
                    continue;
                }
                break;
            }

            match self.prompt_action()? {
                RoundAction::Guess => {
                    let guess: String = Input::new()
                        .with_prompt("Your guess")
                        .allow_empty(true)
                        .interact_text()
                        .map_err(|e| GameError::input(format!("Guess input error: {}", e)))?;

                    self.engine.update_guess(guess.trim());
                    self.engine.submit();

                    if self.state_rx.borrow().score > snapshot.score {
                        self.display.show_success("Correct!")?;
                        self.pause().await;
                    }
                }
                RoundAction::Skip => self.engine.skip(),
                RoundAction::Quit => {
                    if self.confirm("Quit this game? Your score will be lost.", false)? {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&self, snapshot: &GameSnapshot) -> GameResult<()> {
        self.display.clear_screen().ok();

        if self.config.ui.show_score_in_header {
            self.display.show_header(snapshot, self.engine.rules().max_rounds)?;
        }
        if !snapshot.is_game_over {
            self.display.show_round(snapshot)?;
        }

        Ok(())
    }

    fn prompt_action(&self) -> GameResult<RoundAction> {
        let choices = vec!["✍️ Guess", "⏭️ Skip", "🚪 Quit"];

        let selection = Select::new()
            .with_prompt("Your move")
            .items(&choices)
            .default(0)
            .interact()
            .map_err(|e| GameError::input(format!("Action selection error: {}", e)))?;

        Ok(match selection {
            0 => RoundAction::Guess,
            1 => RoundAction::Skip,
            _ => RoundAction::Quit,
        })
    }

    fn change_theme(&mut self) -> GameResult<()> {
        let themes = self.display.get_available_themes();

        let selection = Select::new()
            .with_prompt("Choose theme")
            .items(&themes)
            .interact()
            .map_err(|e| GameError::input(format!("Theme selection error: {}", e)))?;

        let selected_theme = &themes[selection];

        if self.display.set_theme(selected_theme) {
            self.config.ui.theme = selected_theme.clone();
            self.display.show_success(&format!("Theme changed to '{}'", selected_theme))?;
        } else {
            self.display.show_warning(&format!("Failed to set theme '{}'", selected_theme))?;
        }

        self.display.wait_for_enter()?;
        Ok(())
    }

    fn confirm(&self, prompt: &str, default: bool) -> GameResult<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| GameError::input(format!("Confirmation error: {}", e)))
    }

    async fn pause(&self) {
        let delay = self.config.get_animation_delay_ms();
        if delay > 0 {
            sleep(Duration::from_millis(delay)).await;
        }
    }
}
