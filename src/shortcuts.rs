//! Centralized shortcut and action system.
//!
//! Maps key events to actions per input context. The status bar reads the
//! same table to print its hints.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Where input is currently going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutContext {
    /// The demo text field has focus
    Field,
    /// The keyboard popup has focus
    Keyboard,
    /// The language picker is open
    LanguagePicker,
}

/// All possible actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === POPUP ===
    ShowKeyboard,
    HideKeyboard,

    // === KEY NAVIGATION ===
    FocusUp,
    FocusDown,
    FocusLeft,
    FocusRight,
    ActivateKey,

    // === LAYOUT & SHIFT ===
    OpenLanguagePicker,
    NextLanguage,
    ToggleShift,

    // === PICKER ===
    PickerUp,
    PickerDown,
    PickerConfirm,
    PickerCancel,

    // === GENERAL ===
    Quit,
}

impl Action {
    /// Short description used in the status bar.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ShowKeyboard => "keyboard",
            Self::HideKeyboard => "hide",
            Self::FocusUp | Self::FocusDown | Self::FocusLeft | Self::FocusRight => "move",
            Self::ActivateKey => "press",
            Self::OpenLanguagePicker => "language",
            Self::NextLanguage => "next language",
            Self::ToggleShift => "shift",
            Self::PickerUp | Self::PickerDown => "select",
            Self::PickerConfirm => "apply",
            Self::PickerCancel => "cancel",
            Self::Quit => "quit",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
#[derive(Debug, Clone)]
pub struct ShortcutRegistry {
    bindings: HashMap<(ShortcutContext, KeyBinding), Action>,
    hints: Vec<(ShortcutContext, &'static str, Action)>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
            hints: Vec::new(),
        };

        registry.register_field_shortcuts();
        registry.register_keyboard_shortcuts();
        registry.register_picker_shortcuts();
        registry
    }

    fn register_field_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = ShortcutContext::Field;
        self.register(ctx, K::F(2), M::NONE, Action::ShowKeyboard);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);

        self.hint(ctx, "F2", Action::ShowKeyboard);
        self.hint(ctx, "Ctrl+Q", Action::Quit);
    }

    fn register_keyboard_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = ShortcutContext::Keyboard;

        // === NAVIGATION ===
        self.register(ctx, K::Up, M::NONE, Action::FocusUp);
        self.register(ctx, K::Down, M::NONE, Action::FocusDown);
        self.register(ctx, K::Left, M::NONE, Action::FocusLeft);
        self.register(ctx, K::Right, M::NONE, Action::FocusRight);
        self.register(ctx, K::Char('k'), M::NONE, Action::FocusUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::FocusDown);
        self.register(ctx, K::Char('h'), M::NONE, Action::FocusLeft);
        self.register(ctx, K::Char('l'), M::NONE, Action::FocusRight);

        // === ACTIVATION ===
        self.register(ctx, K::Enter, M::NONE, Action::ActivateKey);
        self.register(ctx, K::Char(' '), M::NONE, Action::ActivateKey);

        // === LAYOUT & SHIFT ===
        self.register(ctx, K::F(3), M::NONE, Action::OpenLanguagePicker);
        self.register(ctx, K::Tab, M::NONE, Action::NextLanguage);
        self.register(ctx, K::F(4), M::NONE, Action::ToggleShift);

        // === GENERAL ===
        self.register(ctx, K::Esc, M::NONE, Action::HideKeyboard);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);

        self.hint(ctx, "Arrows", Action::FocusUp);
        self.hint(ctx, "Enter", Action::ActivateKey);
        self.hint(ctx, "F3", Action::OpenLanguagePicker);
        self.hint(ctx, "Tab", Action::NextLanguage);
        self.hint(ctx, "F4", Action::ToggleShift);
        self.hint(ctx, "Esc", Action::HideKeyboard);
        self.hint(ctx, "Ctrl+Q", Action::Quit);
    }

    fn register_picker_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = ShortcutContext::LanguagePicker;
        self.register(ctx, K::Up, M::NONE, Action::PickerUp);
        self.register(ctx, K::Down, M::NONE, Action::PickerDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::PickerUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::PickerDown);
        self.register(ctx, K::Enter, M::NONE, Action::PickerConfirm);
        self.register(ctx, K::Esc, M::NONE, Action::PickerCancel);

        self.hint(ctx, "Up/Down", Action::PickerUp);
        self.hint(ctx, "Enter", Action::PickerConfirm);
        self.hint(ctx, "Esc", Action::PickerCancel);
    }

    /// Register a shortcut binding.
    fn register(
        &mut self,
        context: ShortcutContext,
        code: KeyCode,
        modifiers: KeyModifiers,
        action: Action,
    ) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context, binding), action);
    }

    fn hint(&mut self, context: ShortcutContext, keys: &'static str, action: Action) {
        self.hints.push((context, keys, action));
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: ShortcutContext, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context, binding)).copied()
    }

    /// `(keys, description)` hints for the status bar, in registration order.
    #[must_use]
    pub fn hints(&self, context: ShortcutContext) -> Vec<(&'static str, &'static str)> {
        self.hints
            .iter()
            .filter(|(ctx, _, _)| *ctx == context)
            .map(|(_, keys, action)| (*keys, action.description()))
            .collect()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
