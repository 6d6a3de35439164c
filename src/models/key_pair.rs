//! Key pairs: what a single key position produces.

use serde::Serialize;
use std::fmt;

/// Legend used in layout tables for the Backspace key.
pub const BACKSPACE_LEGEND: &str = "⌫";
/// Legend used in layout tables for the Enter key.
pub const ENTER_LEGEND: &str = "⏎";

/// Named control keys. These have a label instead of a character pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ControlKey {
    /// Deletes the last character of the target
    Backspace,
    /// Inserts a tab character
    Tab,
    /// Latches the shift level
    CapsLock,
    /// Inserts a newline
    Enter,
    /// Toggles the shift level
    Shift,
    /// Inserts a single space; spans the whole row
    Space,
}

impl ControlKey {
    /// Label shown on the button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Backspace => BACKSPACE_LEGEND,
            Self::Tab => "Tab",
            Self::CapsLock => "CapsLock",
            Self::Enter => ENTER_LEGEND,
            Self::Shift => "Shift",
            Self::Space => "Space",
        }
    }

    /// Matches a table legend against the well-known control names.
    ///
    /// Space is matched by substring because its legend carries padding.
    #[must_use]
    pub fn from_legend(legend: &str) -> Option<Self> {
        let trimmed = legend.trim();
        match trimmed {
            BACKSPACE_LEGEND => Some(Self::Backspace),
            ENTER_LEGEND => Some(Self::Enter),
            "Tab" => Some(Self::Tab),
            "CapsLock" => Some(Self::CapsLock),
            "Shift" => Some(Self::Shift),
            _ if trimmed.contains("Space") => Some(Self::Space),
            _ => None,
        }
    }

    /// Whether pressing this key changes the shift level instead of editing text.
    #[must_use]
    pub const fn is_shift_modifier(self) -> bool {
        matches!(self, Self::Shift | Self::CapsLock)
    }
}

impl fmt::Display for ControlKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The unshifted/shifted definition of one key position.
///
/// The first element is always present. Printable keys usually carry a
/// shifted character as well; control keys are a single named label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KeyPair {
    /// A key that produces a character
    Printable {
        /// Character produced without shift
        unshifted: char,
        /// Character produced with shift, if the key has one
        shifted: Option<char>,
    },
    /// A named control key
    Control(ControlKey),
}

impl KeyPair {
    /// Creates a printable pair with both levels.
    #[must_use]
    pub const fn printable(unshifted: char, shifted: char) -> Self {
        Self::Printable {
            unshifted,
            shifted: Some(shifted),
        }
    }

    /// Parses a table legend.
    ///
    /// Returns `None` for blank legends, which mark an empty slot. Characters
    /// past the second one (AltGr glyphs printed on some keycaps) are not part
    /// of the pair.
    #[must_use]
    pub fn from_legend(legend: &str) -> Option<Self> {
        if legend.trim().is_empty() {
            return None;
        }

        if let Some(control) = ControlKey::from_legend(legend) {
            return Some(Self::Control(control));
        }

        let mut chars = legend.trim().chars();
        let unshifted = chars.next()?;
        let shifted = chars.next();
        Some(Self::Printable { unshifted, shifted })
    }

    /// Returns the control key, if this is one.
    #[must_use]
    pub const fn control(&self) -> Option<ControlKey> {
        match self {
            Self::Control(key) => Some(*key),
            Self::Printable { .. } => None,
        }
    }

    /// Whether the pair has a shifted element (and so is relabeled on shift).
    #[must_use]
    pub const fn has_shifted(&self) -> bool {
        matches!(self, Self::Printable { shifted: Some(_), .. })
    }

    /// Character produced for the given shift state, for printable keys.
    #[must_use]
    pub fn char_for(&self, shift_active: bool) -> Option<char> {
        match *self {
            Self::Printable { unshifted, shifted } => {
                if shift_active {
                    Some(shifted.unwrap_or(unshifted))
                } else {
                    Some(unshifted)
                }
            }
            Self::Control(_) => None,
        }
    }

    /// Button label for the given shift state.
    #[must_use]
    pub fn label(&self, shift_active: bool) -> String {
        match self {
            Self::Control(key) => key.label().to_string(),
            Self::Printable { .. } => self
                .char_for(shift_active)
                .map(String::from)
                .unwrap_or_default(),
        }
    }
}
