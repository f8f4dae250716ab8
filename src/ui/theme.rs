//! Theme management and ANSI escape sequence generation.
//!
//! Colors come from a built-in Catppuccin palette or a custom TOML file, and
//! are turned into 24-bit ANSI escapes at render time.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! focus_fg = "#89b4fa"
//! error_fg = "#f38ba8"
//! spinner_fg = "#94e2d5"
//! card_border = "#585b70"
//! title_fg = "#f5e0dc"
//! author_fg = "#a6adc8"
//! modal_border = "#cba6f7"
//! empty_state_fg = "#89b4fa"
//! ```
//!
//! # Example
//!
//! ```rust
//! use shelfscout::ui::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! println!("{}Bold{}", Theme::bold(), Theme::reset());
//! println!("{}Title", Theme::fg(&theme.colors.title_fg));
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::error::{Result, ShelfError};

/// How much of each channel survives when the page is dimmed behind an overlay.
const DIM_FACTOR: f32 = 0.45;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected card foreground.
    pub selection_fg: String,
    /// Selected card background.
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer and secondary text.
    pub text_dim: String,

    /// Separator lines.
    pub border: String,

    pub search_bar_border: String,
    /// Focused control (query field border, search button).
    pub focus_fg: String,

    /// Error banner and alert border.
    pub error_fg: String,
    pub spinner_fg: String,

    pub card_border: String,
    pub title_fg: String,
    pub author_fg: String,

    pub modal_border: String,

    /// Prompt heading shown before the first search.
    pub empty_state_fg: String,
}

impl ThemeColors {
    fn map(&self, f: impl Fn(&str) -> String) -> Self {
        Self {
            header_fg: f(&self.header_fg),
            header_bg: self.header_bg.as_deref().map(&f),
            selection_fg: f(&self.selection_fg),
            selection_bg: f(&self.selection_bg),
            text_normal: f(&self.text_normal),
            text_dim: f(&self.text_dim),
            border: f(&self.border),
            search_bar_border: f(&self.search_bar_border),
            focus_fg: f(&self.focus_fg),
            error_fg: f(&self.error_fg),
            spinner_fg: f(&self.spinner_fg),
            card_border: f(&self.card_border),
            title_fg: f(&self.title_fg),
            author_fg: f(&self.author_fg),
            modal_border: f(&self.modal_border),
            empty_state_fg: f(&self.empty_state_fg),
        }
    }
}

impl Theme {
    /// Loads a built-in theme by name, `None` if the name is unknown.
    ///
    /// ```rust
    /// use shelfscout::ui::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// [`ShelfError::Io`] when the file cannot be read, [`ShelfError::Theme`]
    /// when its content is not a complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| ShelfError::Theme(e.to_string()))
    }

    /// The same palette darkened, used for the page behind an overlay.
    #[must_use]
    pub fn dimmed(&self) -> Self {
        Self {
            name: format!("{}-dimmed", self.name),
            colors: self.colors.map(|hex| Self::scale(hex, DIM_FACTOR)),
        }
    }

    fn scale(hex: &str, factor: f32) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        // Channels stay within 0..=255 because factor is below 1.
        let s = |c: u8| (f32::from(c) * factor).round() as u8;
        format!("#{:02x}{:02x}{:02x}", s(r), s(g), s(b))
    }

    /// Parses `#rrggbb` (or `rrggbb`); anything else is white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape for `hex`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn italic() -> &'static str {
        "\u{001b}[3m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the bundled theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn all_builtin_themes_parse() {
        for name in [
            "catppuccin-mocha",
            "catppuccin-latte",
            "catppuccin-frappe",
            "catppuccin-macchiato",
        ] {
            let theme = Theme::from_name(name).unwrap_or_else(|| panic!("{name} should parse"));
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn escapes_use_rgb_channels() {
        assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("bogus"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn dimmed_darkens_every_color() {
        let theme = Theme::default();
        let dimmed = theme.dimmed();
        assert_ne!(dimmed.colors.title_fg, theme.colors.title_fg);
        assert_eq!(Theme::scale("#c8c8c8", DIM_FACTOR), "#5a5a5a");
        assert_eq!(dimmed.colors.header_bg.is_some(), theme.colors.header_bg.is_some());
    }

    #[test]
    fn from_file_reads_custom_theme() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let custom = toml::to_string(&Theme {
            name: "custom".into(),
            ..Theme::default()
        })
        .unwrap();
        file.write_all(custom.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
    }

    #[test]
    fn from_file_reports_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = Theme::from_file(dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(ShelfError::Io(_))));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "name = \"x\"\n").unwrap();
        assert!(matches!(Theme::from_file(&broken), Err(ShelfError::Theme(_))));
    }
}
