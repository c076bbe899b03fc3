use colored::{Color, Colorize};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: HashMap<String, ColorConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorConfig {
    pub foreground: Option<String>,
    pub style: Vec<String>,
}

impl ColorConfig {
    fn new(foreground: &str, style: &str) -> Self {
        Self {
            foreground: Some(foreground.to_string()),
            style: style.split_whitespace().map(str::to_string).collect(),
        }
    }
}

impl Theme {
    fn from_entries(name: &str, entries: &[(&str, &str, &str)]) -> Self {
        let colors = entries
            .iter()
            .map(|(key, fg, style)| (key.to_string(), ColorConfig::new(fg, style)))
            .collect();

        Self {
            name: name.to_string(),
            colors,
        }
    }
}

pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme: String,
}

impl ThemeManager {
    pub fn new() -> Self {
        let mut manager = Self {
            themes: HashMap::new(),
            current_theme: "default".to_string(),
        };

        manager.load_default_themes();
        manager
    }

    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        if self.themes.contains_key(theme_name) {
            self.current_theme = theme_name.to_string();
            true
        } else {
            false
        }
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme
    }

    pub fn apply_style(&self, text: &str, style_name: &str) -> String {
        let color_config = self
            .themes
            .get(&self.current_theme)
            .and_then(|theme| theme.colors.get(style_name));

        let Some(color_config) = color_config else {
            return text.to_string();
        };

        let mut styled_text = text.to_string();

        if let Some(color) = color_config.foreground.as_deref().and_then(parse_color) {
            styled_text = styled_text.color(color).to_string();
        }

        for style in &color_config.style {
            styled_text = match style.as_str() {
                "bold" => styled_text.bold().to_string(),
                "italic" => styled_text.italic().to_string(),
                "underline" => styled_text.underline().to_string(),
                "dimmed" => styled_text.dimmed().to_string(),
                _ => styled_text,
            };
        }

        styled_text
    }

    pub fn list_themes(&self) -> Vec<String> {
        let mut names: Vec<String> = self.themes.keys().cloned().collect();
        names.sort();
        names
    }

    fn load_default_themes(&mut self) {
        let default_theme = Theme::from_entries(
            "default",
            &[
                ("title", "cyan", "bold"),
                ("scrambled", "magenta", "bold"),
                ("guess", "white", ""),
                ("stats", "yellow", ""),
                ("error", "red", "bold"),
                ("success", "green", "bold"),
                ("warning", "yellow", "bold"),
                ("info", "blue", ""),
                ("separator", "bright_black", "dimmed"),
            ],
        );

        let dark_theme = Theme::from_entries(
            "dark",
            &[
                ("title", "bright_cyan", "bold"),
                ("scrambled", "bright_magenta", "bold"),
                ("guess", "bright_white", ""),
                ("stats", "bright_yellow", ""),
                ("error", "bright_red", "bold"),
                ("success", "bright_green", "bold"),
                ("warning", "bright_yellow", "bold"),
                ("info", "bright_blue", ""),
                ("separator", "white", "dimmed"),
            ],
        );

        let light_theme = Theme::from_entries(
            "light",
            &[
                ("title", "blue", "bold"),
                ("scrambled", "black", "bold underline"),
                ("guess", "black", ""),
                ("stats", "magenta", ""),
                ("error", "red", "bold"),
                ("success", "green", ""),
            ],
        );

        for theme in [default_theme, dark_theme, light_theme] {
            self.themes.insert(theme.name.clone(), theme);
        }
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_color(color_name: &str) -> Option<Color> {
    match color_name.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "bright_black" => Some(Color::BrightBlack),
        "bright_red" => Some(Color::BrightRed),
        "bright_green" => Some(Color::BrightGreen),
        "bright_yellow" => Some(Color::BrightYellow),
        "bright_blue" => Some(Color::BrightBlue),
        "bright_magenta" => Some(Color::BrightMagenta),
        "bright_cyan" => Some(Color::BrightCyan),
        "bright_white" => Some(Color::BrightWhite),
        _ => None,
    }
}
