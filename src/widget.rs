//! Keyboard widget: the control set of the popup and its state.
//!
//! The widget is independent of any terminal. It owns the list of rendered
//! controls for the active layout, and a side table from [`ControlId`] to the
//! [`KeyPair`] each control was built from. Presses are routed through
//! [`KeyboardWidget::press`], which looks the pair up and hands it to the
//! dispatcher. Controls do not capture callbacks.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use tracing::{debug, info};

use crate::constants::WINDOW_TITLE;
use crate::dispatch::{self, PressOutcome};
use crate::error::KeyboardResult;
use crate::layouts::LayoutRegistry;
use crate::models::{ControlKey, KeyPair, KeyPosition, TargetField};

/// Identity of a rendered control.
///
/// Ids are handed out in rendering order and are only valid until the next
/// rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(pub usize);

/// How wide a control is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthClass {
    /// Printable keys
    Narrow,
    /// Named control keys
    Wide,
    /// The Space bar, spanning the whole row
    FullRow,
}

impl WidthClass {
    fn for_key(key: &KeyPair) -> Self {
        match key {
            KeyPair::Printable { .. } => Self::Narrow,
            KeyPair::Control(ControlKey::Space) => Self::FullRow,
            KeyPair::Control(_) => Self::Wide,
        }
    }
}

/// A rendered button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    /// Control identity (key into the binding table)
    pub id: ControlId,
    /// Grid position in the source layout
    pub position: KeyPosition,
    /// Text currently shown on the button
    pub label: String,
    /// Width class used by the renderer
    pub width: WidthClass,
}

/// Active layout and shift level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardState {
    /// Display name of the active layout
    pub active_layout_name: String,
    /// Whether presses produce the shifted element
    pub shift_active: bool,
}

/// The on-screen keyboard.
pub struct KeyboardWidget {
    registry: &'static LayoutRegistry,
    target: Option<Weak<RefCell<dyn TargetField>>>,
    state: KeyboardState,
    controls: Vec<Control>,
    bindings: HashMap<ControlId, KeyPair>,
    title: String,
    visible: bool,
}

impl KeyboardWidget {
    /// Creates a keyboard bound to `target`, showing the default layout.
    ///
    /// The target is held weakly: once every strong reference is dropped,
    /// presses become no-ops.
    pub fn new<T: TargetField + 'static>(target: &Rc<RefCell<T>>) -> Self {
        let registry = LayoutRegistry::builtin();
        let mut widget = Self::detached(registry);
        widget.bind_target(target);
        widget
    }

    /// Creates a keyboard bound to `target`, showing the named layout.
    pub fn with_layout<T: TargetField + 'static>(
        target: &Rc<RefCell<T>>,
        layout_name: &str,
    ) -> KeyboardResult<Self> {
        let mut widget = Self::new(target);
        widget.rebuild_for_layout(layout_name)?;
        Ok(widget)
    }

    /// Creates a keyboard with no target, using the given registry.
    #[must_use]
    pub fn detached(registry: &'static LayoutRegistry) -> Self {
        let name = registry.default_name().to_string();
        let mut widget = Self {
            registry,
            target: None,
            state: KeyboardState {
                active_layout_name: name.clone(),
                shift_active: false,
            },
            controls: Vec::new(),
            bindings: HashMap::new(),
            title: String::new(),
            visible: false,
        };
        // Only an empty registry fails here
        if widget.rebuild_for_layout(&name).is_err() {
            widget.title = WINDOW_TITLE.to_string();
        }
        widget
    }

    /// Replaces the edit target.
    pub fn bind_target<T: TargetField + 'static>(&mut self, target: &Rc<RefCell<T>>) {
        let target: Rc<RefCell<dyn TargetField>> = target.clone();
        self.target = Some(Rc::downgrade(&target));
    }

    /// Clears the controls and renders them again for `name`.
    ///
    /// Shift is reset. On an unknown name the widget is left untouched.
    pub fn rebuild_for_layout(&mut self, name: &str) -> KeyboardResult<()> {
        let layout = self.registry.get_layout(name)?;

        self.controls.clear();
        self.bindings.clear();
        self.state.active_layout_name = name.to_string();
        self.state.shift_active = false;

        for (position, key) in layout.keys() {
            let id = ControlId(self.controls.len());
            self.controls.push(Control {
                id,
                position,
                label: key.label(false),
                width: WidthClass::for_key(key),
            });
            self.bindings.insert(id, *key);
        }

        self.title = format!("{WINDOW_TITLE} – {name}");
        info!(layout = name, controls = self.controls.len(), "keyboard rebuilt");
        Ok(())
    }

    /// Flips the shift level and relabels every key that has a shifted element.
    pub fn toggle_shift(&mut self) {
        self.state.shift_active = !self.state.shift_active;
        let shift_active = self.state.shift_active;

        for control in &mut self.controls {
            if let Some(key) = self.bindings.get(&control.id) {
                if key.has_shifted() {
                    control.label = key.label(shift_active);
                }
            }
        }
        debug!(shift_active, "shift toggled");
    }

    /// Presses a control.
    ///
    /// Shift and CapsLock toggle the shift level; every other key goes to the
    /// dispatcher with the live target. Returns `None` for an unknown id.
    pub fn press(&mut self, id: ControlId) -> Option<PressOutcome> {
        let key = *self.bindings.get(&id)?;

        if key.control().is_some_and(ControlKey::is_shift_modifier) {
            self.toggle_shift();
            return Some(PressOutcome::ToggleShift);
        }

        let shift_active = self.state.shift_active;
        let target = self.target.as_ref().and_then(Weak::upgrade);
        let outcome = match target.as_ref().map(|cell| cell.try_borrow_mut()) {
            Some(Ok(mut field)) => dispatch::handle_press(&key, shift_active, Some(&mut *field)),
            _ => dispatch::handle_press(&key, shift_active, None),
        };
        debug!(?id, ?key, ?outcome, "key pressed");
        Some(outcome)
    }

    /// Makes the popup visible. Layout and shift state are kept as is.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hides the popup.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Whether the popup is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Window title, e.g. `Virtual Keyboard – English (QWERTY)`.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Active layout and shift level.
    #[must_use]
    pub const fn state(&self) -> &KeyboardState {
        &self.state
    }

    /// Rendered controls in row-major order.
    #[must_use]
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Key pair bound to a control.
    #[must_use]
    pub fn binding(&self, id: ControlId) -> Option<&KeyPair> {
        self.bindings.get(&id)
    }

    /// First control bound to `key`, if the active layout has one.
    #[must_use]
    pub fn find_control(&self, key: &KeyPair) -> Option<ControlId> {
        self.controls
            .iter()
            .find(|control| self.bindings.get(&control.id) == Some(key))
            .map(|control| control.id)
    }

    /// Current button labels in row-major order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.controls.iter().map(|c| c.label.as_str()).collect()
    }

    /// Registry the widget reads layouts from.
    #[must_use]
    pub const fn registry(&self) -> &'static LayoutRegistry {
        self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::{english, ukrainian};

    #[derive(Default)]
    struct Sink(String);

    impl TargetField for Sink {
        fn current_text(&self) -> String {
            self.0.clone()
        }

        fn insert_at_end(&mut self, text: &str) {
            self.0.push_str(text);
        }

        fn delete_range(&mut self, start: usize, end: usize) {
            self.0 = self
                .0
                .chars()
                .enumerate()
                .filter(|(i, _)| *i < start || *i >= end)
                .map(|(_, c)| c)
                .collect();
        }

        fn exists(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_new_uses_default_layout() {
        let sink = Rc::new(RefCell::new(Sink::default()));
        let widget = KeyboardWidget::new(&sink);

        assert_eq!(widget.state().active_layout_name, english::NAME);
        assert!(!widget.state().shift_active);
        assert_eq!(widget.title(), "Virtual Keyboard – English (QWERTY)");
        assert!(!widget.is_visible());
        // 14 + 14 + 13 + 12 + 1
        assert_eq!(widget.controls().len(), 54);
    }

    #[test]
    fn test_width_classes() {
        let sink = Rc::new(RefCell::new(Sink::default()));
        let widget = KeyboardWidget::new(&sink);

        let first = &widget.controls()[0];
        assert_eq!(first.width, WidthClass::Narrow);

        let backspace = widget
            .find_control(&KeyPair::Control(ControlKey::Backspace))
            .unwrap();
        assert_eq!(widget.controls()[backspace.0].width, WidthClass::Wide);

        let last = widget.controls().last().unwrap();
        assert_eq!(last.width, WidthClass::FullRow);
        assert_eq!(last.label, "Space");
    }

    #[test]
    fn test_shift_button_toggles_and_relabels() {
        let sink = Rc::new(RefCell::new(Sink::default()));
        let mut widget = KeyboardWidget::new(&sink);
        let shift = widget
            .find_control(&KeyPair::Control(ControlKey::Shift))
            .unwrap();

        assert_eq!(widget.press(shift), Some(PressOutcome::ToggleShift));
        assert!(widget.state().shift_active);
        assert_eq!(widget.controls()[0].label, "~");
        assert_eq!(widget.controls()[shift.0].label, "Shift");
        assert_eq!(sink.borrow().0, "");
    }

    #[test]
    fn test_unknown_layout_leaves_widget_untouched() {
        let sink = Rc::new(RefCell::new(Sink::default()));
        let mut widget = KeyboardWidget::new(&sink);
        widget.toggle_shift();

        assert!(widget.rebuild_for_layout("Esperanto").is_err());
        assert_eq!(widget.state().active_layout_name, english::NAME);
        assert!(widget.state().shift_active);
    }

    #[test]
    fn test_rebuild_resets_shift() {
        let sink = Rc::new(RefCell::new(Sink::default()));
        let mut widget = KeyboardWidget::new(&sink);
        widget.toggle_shift();

        widget.rebuild_for_layout(ukrainian::NAME).unwrap();

        assert!(!widget.state().shift_active);
        assert_eq!(widget.title(), "Virtual Keyboard – Українська (ЙЦУКЕН)");
        let id = widget.find_control(&KeyPair::printable('й', 'Й')).unwrap();
        widget.press(id);
        assert_eq!(sink.borrow().0, "й");
    }

    #[test]
    fn test_unknown_control_id() {
        let sink = Rc::new(RefCell::new(Sink::default()));
        let mut widget = KeyboardWidget::new(&sink);
        assert_eq!(widget.press(ControlId(9999)), None);
    }

    #[test]
    fn test_show_keeps_state() {
        let sink = Rc::new(RefCell::new(Sink::default()));
        let mut widget = KeyboardWidget::new(&sink);
        widget.toggle_shift();

        widget.show();

        assert!(widget.is_visible());
        assert!(widget.state().shift_active);
        widget.hide();
        assert!(!widget.is_visible());
    }
}
