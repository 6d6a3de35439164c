//! Built-in layout registry.
//!
//! The registry maps a language display name to its [`Layout`]. Names keep
//! their insertion order, which is the order the language selector shows.
//! The built-in registry is parsed from the legend tables once per process.

pub mod english;
pub mod french;
pub mod ukrainian;

use std::sync::OnceLock;

use crate::error::{KeyboardError, KeyboardResult};
use crate::models::Layout;

/// Ordered, immutable mapping from language name to layout.
#[derive(Debug, Clone)]
pub struct LayoutRegistry {
    entries: Vec<(String, Layout)>,
}

impl LayoutRegistry {
    /// Builds a registry from `(name, layout)` entries.
    ///
    /// Later entries with a name already present are ignored so that names
    /// stay unique.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Layout)>) -> Self {
        let mut unique: Vec<(String, Layout)> = Vec::new();
        for (name, layout) in entries {
            if !unique.iter().any(|(existing, _)| *existing == name) {
                unique.push((name, layout));
            }
        }
        Self { entries: unique }
    }

    /// The process-wide registry with the English, French and Ukrainian layouts.
    pub fn builtin() -> &'static Self {
        static REGISTRY: OnceLock<LayoutRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            Self::from_entries([
                (english::NAME.to_string(), Layout::from_legends(english::ROWS)),
                (french::NAME.to_string(), Layout::from_legends(french::ROWS)),
                (ukrainian::NAME.to_string(), Layout::from_legends(ukrainian::ROWS)),
            ])
        })
    }

    /// Looks up a layout by display name.
    pub fn get_layout(&self, name: &str) -> KeyboardResult<&Layout> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, layout)| layout)
            .ok_or_else(|| KeyboardError::LayoutNotFound(name.to_string()))
    }

    /// Layout names in selector order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Whether a layout with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(entry_name, _)| entry_name == name)
    }

    /// Name of the layout shown when nothing else is requested.
    ///
    /// This is English QWERTY for the built-in registry.
    #[must_use]
    pub fn default_name(&self) -> &str {
        self.entries
            .first()
            .map_or(english::NAME, |(name, _)| name.as_str())
    }

    /// Name following `current` in selector order, wrapping around.
    #[must_use]
    pub fn next_name<'a>(&'a self, current: &'a str) -> &'a str {
        let idx = self
            .entries
            .iter()
            .position(|(name, _)| name == current)
            .map_or(0, |idx| (idx + 1) % self.entries.len());
        self.entries
            .get(idx)
            .map_or(current, |(name, _)| name.as_str())
    }

    /// Number of layouts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no layouts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
