//! Terminal user interface: the demo host for the keyboard popup.
//!
//! This module contains the main TUI loop, the [`App`] state, event handling,
//! and the widgets drawn with Ratatui. The screen shows a single text field;
//! whenever the field gains focus the keyboard popup is shown.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

pub mod component;
pub mod keyboard;
pub mod language_picker;
pub mod status_bar;
pub mod text_field;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::dispatch::{self, PressOutcome};
use crate::models::{ControlKey, KeyPair};
use crate::shortcuts::{Action, ShortcutContext, ShortcutRegistry};
use crate::widget::{ControlId, KeyboardWidget};

pub use component::Component;
pub use keyboard::{FocusMove, PopupHit};
pub use language_picker::{LanguagePicker, LanguagePickerEvent};
pub use status_bar::StatusBar;
pub use text_field::TextField;
pub use theme::Theme;

/// Which part of the screen receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The text field
    Field,
    /// The keyboard popup
    Keyboard,
}

/// Application state for the demo.
pub struct App {
    /// The text field, shared weakly with the keyboard
    pub field: Rc<RefCell<TextField>>,
    /// The on-screen keyboard
    pub keyboard: KeyboardWidget,
    /// Where key input goes
    pub focus: Focus,
    /// Button with keyboard focus inside the popup
    pub focused_key: ControlId,
    /// Open language picker, if any
    pub picker: Option<LanguagePicker>,
    /// Loaded configuration
    pub config: Config,
    /// Active theme
    pub theme: Theme,
    /// Key bindings
    pub shortcuts: ShortcutRegistry,
    /// Last status line message
    pub status_message: String,
    /// Error shown in the status bar until the next action
    pub error_message: Option<String>,
    /// Set when the user asked to quit
    pub should_quit: bool,
    /// Last known screen area, for mouse hit-testing
    pub screen: Rect,
}

impl App {
    /// Creates the app with the start layout from `config`.
    ///
    /// The field starts focused, so the keyboard starts visible.
    pub fn new(config: Config, theme: Theme) -> Result<Self> {
        let field = Rc::new(RefCell::new(TextField::new()));
        let keyboard = KeyboardWidget::with_layout(&field, config.start_layout())
            .context("Failed to build keyboard for start layout")?;

        let mut app = Self {
            field,
            keyboard,
            focus: Focus::Field,
            focused_key: ControlId(0),
            picker: None,
            config,
            theme,
            shortcuts: ShortcutRegistry::new(),
            status_message: String::new(),
            error_message: None,
            should_quit: false,
            screen: Rect::new(0, 0, 120, 40),
        };
        app.focus_field();
        Ok(app)
    }

    /// Context used for shortcut lookup and hints.
    #[must_use]
    pub fn shortcut_context(&self) -> ShortcutContext {
        if self.picker.is_some() {
            ShortcutContext::LanguagePicker
        } else if self.focus == Focus::Keyboard && self.keyboard.is_visible() {
            ShortcutContext::Keyboard
        } else {
            ShortcutContext::Field
        }
    }

    /// Screen area of the keyboard popup.
    #[must_use]
    pub fn popup_area(&self) -> Rect {
        keyboard::popup_area(self.screen, &self.config.keyboard)
    }

    /// Focus-in on the field: the keyboard is shown.
    pub fn focus_field(&mut self) {
        self.focus = Focus::Field;
        self.keyboard.show();
    }

    /// Switches the keyboard to `name`. Unknown names are reported, not substituted.
    pub fn change_language(&mut self, name: &str) {
        match self.keyboard.rebuild_for_layout(name) {
            Ok(()) => {
                self.focused_key = ControlId(0);
                self.error_message = None;
                self.status_message = format!("Switched to {name}");
                info!(layout = name, "language changed");
            }
            Err(e) => {
                warn!(layout = name, "language change failed: {e}");
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// Presses a keyboard button and reports the result in the status line.
    pub fn press_key(&mut self, id: ControlId) {
        let Some(outcome) = self.keyboard.press(id) else {
            return;
        };
        self.error_message = None;
        self.status_message = match outcome {
            PressOutcome::Inserted(text) => format!("Typed {text:?}"),
            PressOutcome::Deleted(ch) => format!("Deleted {ch:?}"),
            PressOutcome::Unchanged => "Nothing to delete".to_string(),
            PressOutcome::ToggleShift => {
                if self.keyboard.state().shift_active {
                    "Shift on".to_string()
                } else {
                    "Shift off".to_string()
                }
            }
            PressOutcome::NoTarget => "Text field is closed".to_string(),
        };
    }

    fn dispatch_action(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::Quit => {
                self.should_quit = true;
                return Ok(true);
            }
            Action::ShowKeyboard => {
                self.keyboard.show();
                self.focus = Focus::Keyboard;
            }
            Action::HideKeyboard => {
                self.keyboard.hide();
                self.focus = Focus::Field;
            }
            Action::FocusUp => self.move_focus(FocusMove::Up),
            Action::FocusDown => self.move_focus(FocusMove::Down),
            Action::FocusLeft => self.move_focus(FocusMove::Left),
            Action::FocusRight => self.move_focus(FocusMove::Right),
            Action::ActivateKey => self.press_key(self.focused_key),
            Action::ToggleShift => {
                self.keyboard.toggle_shift();
                self.status_message = if self.keyboard.state().shift_active {
                    "Shift on".to_string()
                } else {
                    "Shift off".to_string()
                };
            }
            Action::OpenLanguagePicker => self.open_picker(),
            Action::NextLanguage => {
                let current = self.keyboard.state().active_layout_name.clone();
                let next = self.keyboard.registry().next_name(&current).to_string();
                self.change_language(&next);
            }
            Action::PickerUp | Action::PickerDown | Action::PickerConfirm | Action::PickerCancel => {}
        }
        Ok(false)
    }

    fn move_focus(&mut self, direction: FocusMove) {
        self.focused_key =
            keyboard::move_focus(&self.keyboard, self.popup_area(), self.focused_key, direction);
    }

    fn open_picker(&mut self) {
        self.picker = Some(LanguagePicker::new(
            self.keyboard.registry(),
            &self.keyboard.state().active_layout_name,
        ));
    }

    fn apply_picker_event(&mut self, event: LanguagePickerEvent) {
        self.picker = None;
        if let LanguagePickerEvent::Selected(name) = event {
            self.change_language(&name);
        }
    }

    /// Types a physical key into the field through the same dispatcher as the popup.
    fn type_into_field(&mut self, key: KeyEvent) {
        let pair = match key.code {
            KeyCode::Char(ch) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                KeyPair::Printable {
                    unshifted: ch,
                    shifted: None,
                }
            }
            KeyCode::Backspace => KeyPair::Control(ControlKey::Backspace),
            KeyCode::Enter => KeyPair::Control(ControlKey::Enter),
            KeyCode::Tab => KeyPair::Control(ControlKey::Tab),
            _ => return,
        };
        let mut field = self.field.borrow_mut();
        dispatch::handle_press(&pair, false, Some(&mut *field));
    }

    /// Handles a key event. Returns `true` when the app should quit.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<bool> {
        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }

        let context = self.shortcut_context();
        if context == ShortcutContext::LanguagePicker {
            if let Some(picker) = self.picker.as_mut() {
                if let Some(event) = picker.handle_input(key) {
                    self.apply_picker_event(event);
                }
            }
            return Ok(false);
        }

        match self.shortcuts.lookup(context, key) {
            Some(action) => self.dispatch_action(action),
            None => {
                if context == ShortcutContext::Field {
                    self.type_into_field(key);
                }
                Ok(false)
            }
        }
    }

    /// Handles a mouse event using the last rendered geometry.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let (column, row) = (mouse.column, mouse.row);
        let popup = self.popup_area();

        if let Some(picker) = self.picker.as_mut() {
            let event = match picker.item_at(popup, column, row) {
                Some(idx) => picker.choose(idx),
                None => Some(LanguagePickerEvent::Cancelled),
            };
            if let Some(event) = event {
                self.apply_picker_event(event);
            }
            return;
        }

        if self.keyboard.is_visible() && popup.intersects(Rect::new(column, row, 1, 1)) {
            match keyboard::hit_test(&self.keyboard, popup, column, row) {
                Some(PopupHit::Key(id)) => {
                    self.focused_key = id;
                    self.press_key(id);
                }
                Some(PopupHit::LanguageSelector) => self.open_picker(),
                None => {}
            }
            return;
        }

        let [_, field_area, _] = screen_chunks(self.screen);
        if field_area.intersects(Rect::new(column, row, 1, 1)) {
            self.focus_field();
        }
    }
}

/// Splits the screen into title bar, field and status bar.
#[must_use]
pub fn screen_chunks(area: Rect) -> [Rect; 3] {
    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(3),    // Text field
            Constraint::Length(3), // Status bar
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Sets up the terminal for TUI mode.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restores the terminal to its original state.
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Runs the main event loop until the user quits.
pub fn run_tui(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            app.screen = f.area();
            render(f, app);
        })?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if app.handle_key_event(key)? {
                        break;
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse_event(mouse),
                // Terminal resized or focus change, will re-render on next loop
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Draws the whole screen.
pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let [title_area, field_area, status_area] = screen_chunks(f.area());

    let title = Paragraph::new(format!("{APP_NAME} - On-Screen Keyboard Demo"))
        .style(Style::default().fg(theme.primary).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, title_area);

    app.field
        .borrow()
        .render(f, field_area, app.focus == Focus::Field, theme);

    StatusBar::render(f, status_area, app, theme);

    if app.keyboard.is_visible() {
        let popup = app.popup_area();
        let focused = (app.focus == Focus::Keyboard).then_some(app.focused_key);
        keyboard::render(f, popup, &app.keyboard, focused, theme);

        if let Some(picker) = &app.picker {
            picker.render(f, popup, theme);
        }
    }
}
