//! Status bar widget for status messages and contextual key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{App, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: message or error on top, key hints below.
    pub fn render(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        let message_line = if let Some(error) = &app.error_message {
            Line::from(Span::styled(
                error.as_str(),
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
            ))
        } else {
            let state = app.keyboard.state();
            Line::from(vec![
                Span::styled("Layout: ", Style::default().fg(theme.primary)),
                Span::styled(state.active_layout_name.as_str(), Style::default().fg(theme.text)),
                Span::styled(" | Chars: ", Style::default().fg(theme.primary)),
                Span::styled(
                    app.field.borrow().char_count().to_string(),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    format!("  {}", app.status_message),
                    Style::default().fg(theme.text_muted),
                ),
            ])
        };

        let mut hint_spans = Vec::new();
        for (keys, description) in app.shortcuts.hints(app.shortcut_context()) {
            if !hint_spans.is_empty() {
                hint_spans.push(Span::styled(" | ", Style::default().fg(theme.text_muted)));
            }
            hint_spans.push(Span::styled(keys, Style::default().fg(theme.accent)));
            hint_spans.push(Span::styled(
                format!(": {description}"),
                Style::default().fg(theme.text_muted),
            ));
        }

        let paragraph = Paragraph::new(vec![message_line, Line::from(hint_spans)])
            .block(Block::default().borders(Borders::TOP));
        f.render_widget(paragraph, area);
    }
}
