//! Language selector popup.
//!
//! Lists the registry's layout names in order and reports the chosen one.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use crate::layouts::LayoutRegistry;
use crate::shortcuts::{Action, ShortcutContext, ShortcutRegistry};

use super::{Component, Theme};

/// Events emitted by the language picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguagePickerEvent {
    /// A layout name was chosen
    Selected(String),
    /// The picker was dismissed without a choice
    Cancelled,
}

/// Language picker state.
#[derive(Debug, Clone)]
pub struct LanguagePicker {
    names: Vec<String>,
    selected: usize,
    closed: bool,
    shortcuts: ShortcutRegistry,
}

impl LanguagePicker {
    /// Creates a picker over the registry names, preselecting `current`.
    #[must_use]
    pub fn new(registry: &LayoutRegistry, current: &str) -> Self {
        let names: Vec<String> = registry.names().into_iter().map(String::from).collect();
        let selected = names.iter().position(|n| n == current).unwrap_or(0);
        Self {
            names,
            selected,
            closed: false,
            shortcuts: ShortcutRegistry::new(),
        }
    }

    /// Currently highlighted name.
    #[must_use]
    pub fn selected_name(&self) -> Option<&str> {
        self.names.get(self.selected).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Area the picker occupies when drawn over `popup`.
    #[must_use]
    pub fn area(&self, popup: Rect) -> Rect {
        let widest = self
            .names
            .iter()
            .map(|n| n.chars().count())
            .max()
            .unwrap_or(0) as u16;
        let width = (widest + 6).min(popup.width);
        let height = (self.names.len() as u16 + 2).min(popup.height);
        Rect {
            x: popup.x + (popup.width - width) / 2,
            y: popup.y + (popup.height - height) / 2,
            width,
            height,
        }
    }

    /// Entry index under a screen position, for mouse clicks.
    #[must_use]
    pub fn item_at(&self, popup: Rect, column: u16, row: u16) -> Option<usize> {
        let area = self.area(popup);
        let inner_top = area.y + 1;
        let inside_x = column > area.x && column < area.x + area.width.saturating_sub(1);
        if !inside_x || row < inner_top {
            return None;
        }
        let idx = (row - inner_top) as usize;
        (idx < self.names.len()).then_some(idx)
    }

    /// Chooses the entry at `idx`.
    pub fn choose(&mut self, idx: usize) -> Option<LanguagePickerEvent> {
        let name = self.names.get(idx)?.clone();
        self.selected = idx;
        self.closed = true;
        Some(LanguagePickerEvent::Selected(name))
    }
}

impl Component for LanguagePicker {
    type Event = LanguagePickerEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match self.shortcuts.lookup(ShortcutContext::LanguagePicker, key)? {
            Action::PickerUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            Action::PickerDown => {
                if self.selected + 1 < self.names.len() {
                    self.selected += 1;
                }
                None
            }
            Action::PickerConfirm => self.choose(self.selected),
            Action::PickerCancel => {
                self.closed = true;
                Some(LanguagePickerEvent::Cancelled)
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let picker_area = self.area(area);
        f.render_widget(Clear, picker_area);

        let items: Vec<ListItem> = self
            .names
            .iter()
            .map(|name| ListItem::new(format!(" {name}")).style(Style::default().fg(theme.text)))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Language ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.surface)),
            )
            .highlight_style(
                Style::default()
                    .fg(theme.background)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            );

        let mut state = ListState::default();
        state.select(Some(self.selected));
        f.render_stateful_widget(list, picker_area, &mut state);
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_preselects_current() {
        let picker = LanguagePicker::new(LayoutRegistry::builtin(), "Français (AZERTY)");
        assert_eq!(picker.selected_name(), Some("Français (AZERTY)"));
        assert_eq!(picker.len(), 3);
    }

    #[test]
    fn test_navigate_and_confirm() {
        let mut picker = LanguagePicker::new(LayoutRegistry::builtin(), "English (QWERTY)");

        assert_eq!(picker.handle_input(key(KeyCode::Down)), None);
        assert_eq!(picker.handle_input(key(KeyCode::Down)), None);
        assert_eq!(picker.handle_input(key(KeyCode::Down)), None);
        let event = picker.handle_input(key(KeyCode::Enter));

        assert_eq!(
            event,
            Some(LanguagePickerEvent::Selected("Українська (ЙЦУКЕН)".to_string()))
        );
        assert!(picker.should_close());
    }

    #[test]
    fn test_cancel() {
        let mut picker = LanguagePicker::new(LayoutRegistry::builtin(), "English (QWERTY)");
        assert_eq!(
            picker.handle_input(key(KeyCode::Esc)),
            Some(LanguagePickerEvent::Cancelled)
        );
        assert!(picker.should_close());
    }

    #[test]
    fn test_item_at() {
        let picker = LanguagePicker::new(LayoutRegistry::builtin(), "English (QWERTY)");
        let popup = Rect::new(0, 0, 88, 21);
        let area = picker.area(popup);

        assert_eq!(picker.item_at(popup, area.x + 2, area.y + 1), Some(0));
        assert_eq!(picker.item_at(popup, area.x + 2, area.y + 3), Some(2));
        assert_eq!(picker.item_at(popup, area.x + 2, area.y), None);
        assert_eq!(picker.item_at(popup, 0, 0), None);
    }
}
