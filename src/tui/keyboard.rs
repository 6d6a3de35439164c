//! Keyboard popup rendering and hit-testing.
//!
//! Geometry is computed by pure functions so that rendering, mouse clicks and
//! focus movement all agree on where each button is.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::config::KeyboardConfig;
use crate::constants::{KEY_HEIGHT, NARROW_KEY_WIDTH, WIDE_KEY_WIDTH};
use crate::models::KeyPair;
use crate::widget::{Control, ControlId, KeyboardWidget, WidthClass};

use super::Theme;

/// Height of the language selector line, including its border.
const SELECTOR_HEIGHT: u16 = 3;

/// What a click inside the popup landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupHit {
    /// A key button
    Key(ControlId),
    /// The language selector line
    LanguageSelector,
}

/// Direction for focus movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    /// Previous button
    Left,
    /// Next button
    Right,
    /// Row above
    Up,
    /// Row below
    Down,
}

/// Places the popup at the bottom center of `screen`.
///
/// The popup keeps its configured size and is clamped when the screen is
/// smaller.
#[must_use]
pub fn popup_area(screen: Rect, config: &KeyboardConfig) -> Rect {
    let width = config.popup_width.min(screen.width);
    let height = config.popup_height.min(screen.height);
    let x = screen.x + (screen.width - width) / 2;
    let lowest_y = screen.y + screen.height - height;
    let y = lowest_y.saturating_sub(config.bottom_margin).max(screen.y);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn inner(popup: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(popup)
}

/// Area of the language selector line inside the popup.
#[must_use]
pub fn selector_area(popup: Rect) -> Rect {
    let inner = inner(popup);
    Rect {
        height: SELECTOR_HEIGHT.min(inner.height),
        ..inner
    }
}

/// Smallest button width that still shows a one-cell label between borders.
const MIN_KEY_WIDTH: u16 = 3;

/// Button widths for one layout row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RowMetrics {
    narrow: u16,
    wide: u16,
    gap: u16,
}

impl RowMetrics {
    fn width_of(self, width: WidthClass, row_width: u16) -> u16 {
        match width {
            WidthClass::Narrow => self.narrow,
            WidthClass::Wide => self.wide,
            WidthClass::FullRow => row_width,
        }
    }

    fn total(self, row: &[Control]) -> u16 {
        let keys: u16 = row
            .iter()
            .map(|control| match control.width {
                WidthClass::Narrow => self.narrow,
                WidthClass::Wide => self.wide,
                WidthClass::FullRow => MIN_KEY_WIDTH,
            })
            .sum();
        keys + self.gap * (row.len() as u16).saturating_sub(1)
    }

    /// Shrinks the configured widths until `row` fits in `available` cells.
    ///
    /// Wide keys give up cells first while they are more than two cells wider
    /// than narrow ones, then both shrink together down to three cells, and
    /// finally the gaps go.
    fn fit(row: &[Control], available: u16) -> Self {
        let mut metrics = Self {
            narrow: NARROW_KEY_WIDTH,
            wide: WIDE_KEY_WIDTH,
            gap: 1,
        };
        while metrics.total(row) > available {
            if metrics.wide > metrics.narrow + 2 {
                metrics.wide -= 1;
            } else if metrics.narrow > MIN_KEY_WIDTH {
                metrics.narrow -= 1;
            } else if metrics.wide > MIN_KEY_WIDTH {
                metrics.wide -= 1;
            } else if metrics.gap > 0 {
                metrics.gap = 0;
            } else {
                break;
            }
        }
        metrics
    }
}

/// Screen rectangles of every button that fits inside the popup.
///
/// Buttons flow left to right within their layout row; rows stack below the
/// selector line. Rows wider than the popup are drawn with smaller keys.
/// Buttons are only left out when the popup is too short for their row or
/// too narrow even for minimum-width keys.
#[must_use]
pub fn button_rects(widget: &KeyboardWidget, popup: Rect) -> Vec<(ControlId, Rect)> {
    let inner = inner(popup);
    let keys_top = inner.y + SELECTOR_HEIGHT;
    let right = inner.x + inner.width;
    let bottom = inner.y + inner.height;

    let mut rects = Vec::with_capacity(widget.controls().len());

    for row in widget
        .controls()
        .chunk_by(|a, b| a.position.row == b.position.row)
    {
        let Some(first) = row.first() else {
            continue;
        };
        let y = keys_top + KEY_HEIGHT * first.position.row as u16;
        if y + KEY_HEIGHT > bottom {
            continue;
        }

        let metrics = RowMetrics::fit(row, inner.width);
        let mut x = inner.x;
        for control in row {
            let width = metrics
                .width_of(control.width, inner.width)
                .min(right.saturating_sub(x));
            if width < MIN_KEY_WIDTH {
                continue;
            }
            rects.push((control.id, Rect::new(x, y, width, KEY_HEIGHT)));
            x += width + metrics.gap;
        }
    }

    rects
}

/// Finds what lies under a screen position.
#[must_use]
pub fn hit_test(widget: &KeyboardWidget, popup: Rect, column: u16, row: u16) -> Option<PopupHit> {
    let point = Rect::new(column, row, 1, 1);
    if selector_area(popup).intersects(point) {
        return Some(PopupHit::LanguageSelector);
    }
    button_rects(widget, popup)
        .into_iter()
        .find(|(_, rect)| rect.intersects(point))
        .map(|(id, _)| PopupHit::Key(id))
}

/// Moves focus from `current` in `direction`.
///
/// Left and right step through buttons in order. Up and down pick the button
/// in the neighboring row whose center is horizontally closest.
#[must_use]
pub fn move_focus(
    widget: &KeyboardWidget,
    popup: Rect,
    current: ControlId,
    direction: FocusMove,
) -> ControlId {
    let rects = button_rects(widget, popup);
    let Some(pos) = rects.iter().position(|(id, _)| *id == current) else {
        return rects.first().map_or(current, |(id, _)| *id);
    };
    let (_, from) = rects[pos];

    match direction {
        FocusMove::Left => rects[pos.saturating_sub(1)].0,
        FocusMove::Right => rects[(pos + 1).min(rects.len() - 1)].0,
        FocusMove::Up | FocusMove::Down => {
            let target_y = if direction == FocusMove::Up {
                from.y.checked_sub(KEY_HEIGHT)
            } else {
                Some(from.y + KEY_HEIGHT)
            };
            let center = i32::from(from.x) + i32::from(from.width) / 2;
            target_y
                .and_then(|y| {
                    rects
                        .iter()
                        .filter(|(_, rect)| rect.y == y)
                        .min_by_key(|(_, rect)| {
                            (i32::from(rect.x) + i32::from(rect.width) / 2 - center).abs()
                        })
                        .map(|(id, _)| *id)
                })
                .unwrap_or(current)
        }
    }
}

/// Renders the keyboard popup over whatever is below it.
pub fn render(
    f: &mut Frame,
    popup: Rect,
    widget: &KeyboardWidget,
    focused: Option<ControlId>,
    theme: &Theme,
) {
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" {} ", widget.title()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .style(Style::default().bg(theme.surface));
    f.render_widget(block, popup);

    render_selector(f, selector_area(popup), widget, theme);

    let shift_active = widget.state().shift_active;
    for (id, rect) in button_rects(widget, popup) {
        let Some(control) = widget.controls().get(id.0) else {
            continue;
        };
        let is_control_key = matches!(widget.binding(id), Some(KeyPair::Control(_)));
        let is_focused = focused == Some(id);

        let label_style = if is_focused {
            Style::default()
                .fg(theme.background)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else if is_control_key {
            Style::default().fg(theme.control_key_text)
        } else if shift_active {
            Style::default().fg(theme.shift_active)
        } else {
            Style::default().fg(theme.key_text)
        };

        let border_style = if is_focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.text_muted)
        };

        let button = Paragraph::new(control.label.as_str())
            .style(label_style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        f.render_widget(button, rect);
    }
}

fn render_selector(f: &mut Frame, area: Rect, widget: &KeyboardWidget, theme: &Theme) {
    let state = widget.state();
    let shift_span = if state.shift_active {
        Span::styled(
            "Shift: ON",
            Style::default()
                .fg(theme.shift_active)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("Shift: off", Style::default().fg(theme.text_muted))
    };

    let line = Line::from(vec![
        Span::styled("Language: ", Style::default().fg(theme.text_muted)),
        Span::styled(
            format!("{} ▾", state.active_layout_name),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        shift_span,
    ]);

    let selector = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.text_muted)),
        );
    f.render_widget(selector, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ControlKey;
    use crate::tui::TextField;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn widget() -> KeyboardWidget {
        let field = Rc::new(RefCell::new(TextField::new()));
        KeyboardWidget::new(&field)
    }

    #[test]
    fn test_popup_bottom_center() {
        let screen = Rect::new(0, 0, 120, 40);
        let popup = popup_area(screen, &KeyboardConfig::default());
        assert_eq!(popup, Rect::new(16, 17, 88, 21));
    }

    #[test]
    fn test_popup_clamped_to_small_screen() {
        let screen = Rect::new(0, 0, 60, 15);
        let popup = popup_area(screen, &KeyboardConfig::default());
        assert_eq!(popup, Rect::new(0, 0, 60, 15));
    }

    #[test]
    fn test_all_buttons_fit_default_popup() {
        let widget = widget();
        let popup = Rect::new(0, 0, 88, 21);
        assert_eq!(button_rects(&widget, popup).len(), widget.controls().len());
    }

    #[test]
    fn test_all_buttons_fit_80_column_screen() {
        let widget = widget();
        let popup = popup_area(Rect::new(0, 0, 80, 24), &KeyboardConfig::default());
        let rects = button_rects(&widget, popup);

        assert_eq!(rects.len(), widget.controls().len());

        let backspace = widget
            .find_control(&KeyPair::Control(ControlKey::Backspace))
            .unwrap();
        let (_, rect) = rects.iter().find(|(id, _)| *id == backspace).copied().unwrap();
        assert!(rect.x + rect.width <= popup.x + popup.width - 1);
        assert!(rect.width >= MIN_KEY_WIDTH);
    }

    #[test]
    fn test_every_layout_fits_minimum_popup_width() {
        let mut widget = widget();
        let config = KeyboardConfig::default();
        let popup = popup_area(Rect::new(0, 0, 60, 24), &config);

        for name in widget.registry().names() {
            widget.rebuild_for_layout(name).unwrap();
            let rects = button_rects(&widget, popup);
            assert_eq!(rects.len(), widget.controls().len(), "{name}");
            for pair in rects.windows(2) {
                let ((_, a), (_, b)) = (pair[0], pair[1]);
                assert!(!a.intersects(b), "{name}: {a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn test_wide_popup_keeps_configured_widths() {
        let widget = widget();
        let popup = Rect::new(0, 0, 88, 21);
        let rects = button_rects(&widget, popup);

        assert_eq!(rects[0].1.width, NARROW_KEY_WIDTH);
        let tab = widget.find_control(&KeyPair::Control(ControlKey::Tab)).unwrap();
        let (_, tab_rect) = rects.iter().find(|(id, _)| *id == tab).copied().unwrap();
        assert_eq!(tab_rect.width, WIDE_KEY_WIDTH);
    }

    #[test]
    fn test_space_spans_row() {
        let widget = widget();
        let popup = Rect::new(0, 0, 88, 21);
        let (_, space) = *button_rects(&widget, popup).last().unwrap();
        assert_eq!(space.width, 86);
        assert_eq!(space.x, 1);
    }

    #[test]
    fn test_hit_test() {
        let widget = widget();
        let popup = Rect::new(0, 0, 88, 21);

        assert_eq!(hit_test(&widget, popup, 10, 2), Some(PopupHit::LanguageSelector));
        // First key starts at (1, 4)
        assert_eq!(hit_test(&widget, popup, 2, 5), Some(PopupHit::Key(ControlId(0))));
        // Gap between first and second key
        assert_eq!(hit_test(&widget, popup, 6, 5), None);
    }

    #[test]
    fn test_move_focus() {
        let widget = widget();
        let popup = Rect::new(0, 0, 88, 21);
        let first = ControlId(0);

        assert_eq!(move_focus(&widget, popup, first, FocusMove::Left), first);
        assert_eq!(move_focus(&widget, popup, first, FocusMove::Right), ControlId(1));
        assert_eq!(move_focus(&widget, popup, first, FocusMove::Up), first);

        let below = move_focus(&widget, popup, first, FocusMove::Down);
        assert_eq!(
            widget.binding(below),
            Some(&KeyPair::Control(ControlKey::Tab))
        );
    }
}
