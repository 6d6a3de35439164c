//! Input dispatcher: turns a key press into an edit of the target field.

use tracing::debug;

use crate::models::{ControlKey, KeyPair, TargetField};

/// What a key press did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PressOutcome {
    /// Text was appended to the target
    Inserted(String),
    /// The last character was removed
    Deleted(char),
    /// Backspace on an empty field
    Unchanged,
    /// Shift or CapsLock; the caller owns the shift state
    ToggleShift,
    /// There was no live target to edit
    NoTarget,
}

/// Applies a key press to the target field.
///
/// The first matching rule wins: Backspace, Enter, Space, Tab, the shift
/// modifiers, then printable characters. A missing or destroyed target is a
/// silent no-op.
pub fn handle_press(
    key: &KeyPair,
    shift_active: bool,
    target: Option<&mut dyn TargetField>,
) -> PressOutcome {
    let Some(target) = target.filter(|field| field.exists()) else {
        debug!(?key, "press ignored, target field is gone");
        return PressOutcome::NoTarget;
    };

    match key {
        KeyPair::Control(ControlKey::Backspace) => delete_last_char(target),
        KeyPair::Control(ControlKey::Enter) => insert(target, "\n"),
        KeyPair::Control(ControlKey::Space) => insert(target, " "),
        KeyPair::Control(ControlKey::Tab) => insert(target, "\t"),
        KeyPair::Control(ControlKey::Shift | ControlKey::CapsLock) => PressOutcome::ToggleShift,
        KeyPair::Printable { .. } => match key.char_for(shift_active) {
            Some(ch) => insert(target, ch.encode_utf8(&mut [0; 4])),
            None => PressOutcome::Unchanged,
        },
    }
}

fn insert(target: &mut dyn TargetField, text: &str) -> PressOutcome {
    target.insert_at_end(text);
    PressOutcome::Inserted(text.to_string())
}

fn delete_last_char(target: &mut dyn TargetField) -> PressOutcome {
    let current = target.current_text();
    let Some(last) = current.chars().last() else {
        return PressOutcome::Unchanged;
    };
    let len = current.chars().count();
    target.delete_range(len - 1, len);
    PressOutcome::Deleted(last)
}
