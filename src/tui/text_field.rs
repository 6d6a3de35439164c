//! Demo text field the keyboard types into.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::TargetField;

use super::Theme;

/// A multi-line text buffer with the cursor pinned at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    closed: bool,
}

impl TextField {
    /// Creates an empty, open field.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            closed: false,
        }
    }

    /// Creates a field with initial content.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            closed: false,
        }
    }

    /// Current content.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the field.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Marks the field as destroyed; further edits are refused by the keyboard.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Renders the field. A focused field shows a cursor at the end.
    pub fn render(&self, f: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let border_style = if focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.primary)
        };

        let block = Block::default()
            .title(" Text ")
            .borders(Borders::ALL)
            .border_style(border_style);

        if self.closed {
            let closed = Paragraph::new("(field closed)")
                .style(Style::default().fg(theme.text_muted))
                .block(block);
            f.render_widget(closed, area);
            return;
        }

        let mut lines: Vec<Line> = self
            .text
            .split('\n')
            .map(|line| Line::from(Span::styled(line.replace('\t', "    "), Style::default().fg(theme.text))))
            .collect();

        if focused {
            if let Some(last) = lines.last_mut() {
                last.spans.push(Span::styled(
                    "▏",
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::SLOW_BLINK),
                ));
            }
        }

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }
}

impl TargetField for TextField {
    fn current_text(&self) -> String {
        self.text.clone()
    }

    fn insert_at_end(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn delete_range(&mut self, start: usize, end: usize) {
        if start >= end {
            return;
        }
        self.text = self
            .text
            .chars()
            .enumerate()
            .filter(|(idx, _)| *idx < start || *idx >= end)
            .map(|(_, ch)| ch)
            .collect();
    }

    fn exists(&self) -> bool {
        !self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_delete_by_char() {
        let mut field = TextField::with_text("жук");
        field.insert_at_end("!");
        assert_eq!(field.text(), "жук!");

        field.delete_range(1, 3);
        assert_eq!(field.text(), "ж!");
        assert_eq!(field.char_count(), 2);
    }

    #[test]
    fn test_empty_range_is_noop() {
        let mut field = TextField::with_text("abc");
        field.delete_range(2, 2);
        field.delete_range(3, 1);
        assert_eq!(field.text(), "abc");
    }

    #[test]
    fn test_close() {
        let mut field = TextField::new();
        assert!(field.exists());
        field.close();
        assert!(!field.exists());
    }
}
