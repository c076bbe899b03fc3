use console::Term;
use std::io::{self, Write};
use crate::core::{GameSnapshot, SessionStatistics};
use crate::ui::ThemeManager;

pub struct Display {
    term: Term,
    theme_manager: ThemeManager,
    text_width: usize,
}

impl Display {
    pub fn new(theme_manager: ThemeManager, text_width: usize) -> io::Result<Self> {
        Ok(Self {
            term: Term::stdout(),
            theme_manager,
            text_width,
        })
    }

    pub fn clear_screen(&self) -> io::Result<()> {
        self.term.clear_screen()
    }

    pub fn show_title(&self, title: &str) -> io::Result<()> {
        let styled_title = self.theme_manager.apply_style(title, "title");
        writeln!(io::stdout(), "{}", styled_title)?;
        self.show_separator()?;
        writeln!(io::stdout())?;
        Ok(())
    }

    pub fn show_header(&self, snapshot: &GameSnapshot, max_rounds: u32) -> io::Result<()> {
        let stats = self.theme_manager.apply_style(&header_text(snapshot, max_rounds), "stats");
        writeln!(io::stdout(), "{}", stats)?;
        self.show_separator()
    }

    pub fn show_round(&self, snapshot: &GameSnapshot) -> io::Result<()> {
        writeln!(io::stdout())?;
        writeln!(io::stdout(), "Unscramble this word:")?;

        let scrambled = self
            .theme_manager
            .apply_style(&spaced_letters(&snapshot.scrambled_word), "scrambled");
        writeln!(io::stdout(), "    {}", scrambled)?;
        writeln!(io::stdout())?;

        if snapshot.is_guessed_word_wrong {
            self.show_error(&format!("\"{}\" is not it. Try again!", snapshot.user_guess))?;
        }

        Ok(())
    }

    pub fn show_final_score(&self, statistics: &SessionStatistics) -> io::Result<()> {
        self.show_title("Game Over")?;
        self.show_success(&format!("Final score: {}", statistics.score))?;
        self.show_message(
            &format!(
                "Words: {} | Correct: {} | Skipped: {} | Wrong attempts: {} | Accuracy: {}%",
                statistics.words_seen,
                statistics.correct_guesses,
                statistics.skipped_words,
                statistics.wrong_attempts,
                statistics.accuracy_percent()
            ),
            "info",
        )?;
        self.show_separator()
    }

    pub fn show_message(&self, message: &str, style: &str) -> io::Result<()> {
        let styled_message = self.theme_manager.apply_style(message, style);
        writeln!(io::stdout(), "{}", styled_message)?;
        Ok(())
    }

    pub fn show_error(&self, error: &str) -> io::Result<()> {
        self.show_message(&format!("❌ {}", error), "error")
    }

    pub fn show_success(&self, message: &str) -> io::Result<()> {
        self.show_message(&format!("✅ {}", message), "success")
    }

    pub fn show_warning(&self, message: &str) -> io::Result<()> {
        self.show_message(&format!("⚠️ {}", message), "warning")
    }

    pub fn show_separator(&self) -> io::Result<()> {
        let separator = "━".repeat(self.text_width);
        let styled = self.theme_manager.apply_style(&separator, "separator");
        writeln!(io::stdout(), "{}", styled)?;
        Ok(())
    }

    pub fn wait_for_enter(&self) -> io::Result<()> {
        let styled_prompt = self.theme_manager.apply_style("Press Enter to continue...", "info");
        print!("{}", styled_prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(())
    }

    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        self.theme_manager.set_theme(theme_name)
    }

    pub fn get_available_themes(&self) -> Vec<String> {
        self.theme_manager.list_themes()
    }
}

fn header_text(snapshot: &GameSnapshot, max_rounds: u32) -> String {
    format!(
        "Word {}/{}   |   Score: {}",
        snapshot.round, max_rounds, snapshot.score
    )
}

fn spaced_letters(word: &str) -> String {
    word.chars()
        .map(|c| c.to_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
