//! Theme system for consistent UI colors across dark and light modes.
//!
//! The keyboard popup, the demo text field, and the status bar all draw from
//! one [`Theme`]. `Auto` mode asks the OS through `dark-light`.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Borders and titles
    pub primary: Color,
    /// Focused button and selection highlight
    pub accent: Color,
    /// Error messages
    pub error: Color,

    /// Primary text content color
    pub text: Color,
    /// Muted text for help lines and hints
    pub text_muted: Color,

    /// Main background color
    pub background: Color,
    /// Popup surface
    pub surface: Color,

    /// Printable key labels
    pub key_text: Color,
    /// Control key labels (Tab, Shift, Enter, ...)
    pub control_key_text: Color,
    /// Shift indicator and shifted labels
    pub shift_active: Color,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves the configured mode to a theme.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            error: Color::Red,

            text: Color::White,
            text_muted: Color::DarkGray,

            background: Color::Black,
            surface: Color::Rgb(30, 30, 30),

            key_text: Color::White,
            control_key_text: Color::Cyan,
            shift_active: Color::Magenta,
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            error: Color::Red,

            text: Color::Black,
            text_muted: Color::Gray,

            background: Color::White,
            surface: Color::Rgb(245, 245, 245),

            key_text: Color::Black,
            control_key_text: Color::Blue,
            shift_active: Color::Rgb(140, 0, 140),
        }
    }
}
