//! Colour theme for the biochat TUI.
//!
//! Themes are defined as TOML files embedded in the binary via
//! [`include_str!`], so the application works without any files on disk.
//! Pick one by name with [`Theme::by_name`].
//!
//! # Confidence bands
//!
//! The `Confianza` line under each answer is styled by band: `high` above
//! 0.6, `medium` above the engine's configured match threshold, `low`
//! otherwise.

use crate::transcript::Sender;
use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_DARK_THEME_SRC: &str = include_str!("themes/gruvbox_dark.toml");

const HIGH_CONFIDENCE: f32 = 0.6;

// ---------------------------------------------------------------------------
// Raw (serde) types: mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(c) = self.fg.as_deref().and_then(parse_color) {
            style = style.fg(c);
        }
        if let Some(c) = self.bg.as_deref().and_then(parse_color) {
            style = style.bg(c);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawSenders {
    user: RawStyle,
    bot: RawStyle,
    system: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawConfidence {
    high: RawStyle,
    medium: RawStyle,
    low: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawStatus {
    bar: RawStyle,
    reloading: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    senders: RawSenders,
    confidence: RawConfidence,
    borders: RawBorders,
    status: RawStatus,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme. All styles are pre-resolved ratatui [`Style`]
/// values.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    pub sender_user: Style,
    pub sender_bot: Style,
    pub sender_system: Style,

    pub confidence_high: Style,
    pub confidence_medium: Style,
    pub confidence_low: Style,

    pub border_focused: Style,
    pub border_unfocused: Style,

    pub status_bar: Style,
    pub status_reloading: Style,
}

impl Theme {
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_default() -> Self {
        Self::from_toml_str("default", DEFAULT_THEME_SRC)
            .expect("embedded default theme must be valid TOML")
    }

    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_gruvbox_dark() -> Self {
        Self::from_toml_str("gruvbox", GRUVBOX_DARK_THEME_SRC)
            .expect("embedded gruvbox dark theme must be valid TOML")
    }

    /// Resolve a theme name from config or the `:theme` command. Returns
    /// `None` for unknown names.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" => Some(Self::load_default()),
            "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Some(Self::load_gruvbox_dark()),
            _ => None,
        }
    }

    /// Parse a theme from a TOML string. Unknown keys are ignored.
    pub fn from_toml_str(name: &'static str, src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            name,
            sender_user: raw.senders.user.into_style(),
            sender_bot: raw.senders.bot.into_style(),
            sender_system: raw.senders.system.into_style(),
            confidence_high: raw.confidence.high.into_style(),
            confidence_medium: raw.confidence.medium.into_style(),
            confidence_low: raw.confidence.low.into_style(),
            border_focused: raw.borders.focused.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            status_bar: raw.status.bar.into_style(),
            status_reloading: raw.status.reloading.into_style(),
        })
    }

    pub fn sender_style(&self, sender: Sender) -> Style {
        match sender {
            Sender::User => self.sender_user,
            Sender::Bot => self.sender_bot,
            Sender::System => self.sender_system,
        }
    }

    /// Style for a confidence value given the engine's match threshold.
    pub fn confidence_style(&self, confidence: f32, threshold: f32) -> Style {
        if confidence > HIGH_CONFIDENCE.max(threshold) {
            self.confidence_high
        } else if confidence > threshold {
            self.confidence_medium
        } else {
            self.confidence_low
        }
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.border_focused
        } else {
            self.border_unfocused
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a colour name into a ratatui [`Color`].
///
/// Accepts named terminal colours (`red`, `dark_gray`, ...), hex `#rrggbb`
/// and `indexed:N`.
fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGray),
        "light_red" => Some(Color::LightRed),
        "light_green" => Some(Color::LightGreen),
        "light_yellow" => Some(Color::LightYellow),
        "light_blue" => Some(Color::LightBlue),
        "light_magenta" => Some(Color::LightMagenta),
        "light_cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        s if s.starts_with('#') && s.len() == 7 => {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::Indexed(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
