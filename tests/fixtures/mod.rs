//! Shared test fixtures.
#![allow(dead_code)] // Not every test binary uses every fixture

use lazyosk::models::TargetField;
use lazyosk::tui::TextField;
use lazyosk::KeyboardWidget;
use std::cell::RefCell;
use std::rc::Rc;

/// A field plus a keyboard bound to it, on the default layout.
pub fn bound_keyboard() -> (Rc<RefCell<TextField>>, KeyboardWidget) {
    let field = Rc::new(RefCell::new(TextField::new()));
    let keyboard = KeyboardWidget::new(&field);
    (field, keyboard)
}

/// A plain in-memory target that records every call.
#[derive(Debug, Default)]
pub struct RecordingField {
    pub text: String,
    pub calls: Vec<String>,
    pub alive: bool,
}

impl RecordingField {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            calls: Vec::new(),
            alive: true,
        }
    }
}

impl TargetField for RecordingField {
    fn current_text(&self) -> String {
        self.text.clone()
    }

    fn insert_at_end(&mut self, text: &str) {
        self.calls.push(format!("insert {text:?}"));
        self.text.push_str(text);
    }

    fn delete_range(&mut self, start: usize, end: usize) {
        self.calls.push(format!("delete {start}..{end}"));
        self.text = self
            .text
            .chars()
            .enumerate()
            .filter(|(i, _)| *i < start || *i >= end)
            .map(|(_, c)| c)
            .collect();
    }

    fn exists(&self) -> bool {
        self.alive
    }
}
