//! Integration tests for the keyboard widget: layout switching, shift state,
//! rebuild idempotence and target lifetime.

mod fixtures;

use fixtures::bound_keyboard;
use lazyosk::dispatch::PressOutcome;
use lazyosk::models::{ControlKey, KeyPair, TargetField};
use lazyosk::tui::TextField;
use lazyosk::{KeyboardError, KeyboardWidget, LayoutRegistry};
use std::cell::RefCell;
use std::rc::Rc;

const ENGLISH: &str = "English (QWERTY)";
const FRENCH: &str = "Français (AZERTY)";
const UKRAINIAN: &str = "Українська (ЙЦУКЕН)";

fn press_key(keyboard: &mut KeyboardWidget, key: KeyPair) -> PressOutcome {
    let id = keyboard
        .find_control(&key)
        .unwrap_or_else(|| panic!("{key:?} not on {}", keyboard.state().active_layout_name));
    keyboard.press(id).unwrap()
}

#[test]
fn test_typing_through_buttons() {
    let (field, mut keyboard) = bound_keyboard();

    press_key(&mut keyboard, KeyPair::printable('h', 'H'));
    press_key(&mut keyboard, KeyPair::printable('i', 'I'));
    press_key(&mut keyboard, KeyPair::Control(ControlKey::Space));
    press_key(&mut keyboard, KeyPair::Control(ControlKey::Shift));
    press_key(&mut keyboard, KeyPair::printable('1', '!'));
    press_key(&mut keyboard, KeyPair::Control(ControlKey::Enter));

    assert_eq!(field.borrow().text(), "hi !\n");
}

#[test]
fn test_caps_lock_toggles_shift() {
    let (field, mut keyboard) = bound_keyboard();

    press_key(&mut keyboard, KeyPair::Control(ControlKey::CapsLock));
    press_key(&mut keyboard, KeyPair::printable('a', 'A'));
    press_key(&mut keyboard, KeyPair::Control(ControlKey::CapsLock));
    press_key(&mut keyboard, KeyPair::printable('a', 'A'));

    assert_eq!(field.borrow().text(), "Aa");
}

#[test]
fn test_switching_layout_resets_shift() {
    let (field, mut keyboard) = bound_keyboard();
    keyboard.toggle_shift();
    assert!(keyboard.state().shift_active);

    keyboard.rebuild_for_layout(FRENCH).unwrap();
    assert!(!keyboard.state().shift_active);

    // AZERTY: '&' unshifted, '1' shifted
    press_key(&mut keyboard, KeyPair::printable('&', '1'));
    assert_eq!(field.borrow().text(), "&");
}

#[test]
fn test_switching_layout_shows_new_labels() {
    let (_field, mut keyboard) = bound_keyboard();
    keyboard.rebuild_for_layout(UKRAINIAN).unwrap();

    let labels = keyboard.labels();
    assert_eq!(labels[0], "ґ");
    assert!(labels.contains(&"й"));
    assert!(!labels.contains(&"q"));
    assert_eq!(keyboard.title(), "Virtual Keyboard – Українська (ЙЦУКЕН)");
}

#[test]
fn test_unknown_layout_fails_without_partial_state() {
    let (_field, mut keyboard) = bound_keyboard();
    let before = keyboard.labels().iter().map(ToString::to_string).collect::<Vec<_>>();

    let err = keyboard.rebuild_for_layout("Dvorak").unwrap_err();

    assert_eq!(err, KeyboardError::LayoutNotFound("Dvorak".to_string()));
    assert_eq!(keyboard.labels(), before);
    assert_eq!(keyboard.state().active_layout_name, ENGLISH);
    assert!(LayoutRegistry::builtin().get_layout("Dvorak").is_err());
}

#[test]
fn test_rebuild_is_idempotent() {
    let registry = LayoutRegistry::builtin();
    let (_field, mut keyboard) = bound_keyboard();

    for name in registry.names() {
        keyboard.rebuild_for_layout(name).unwrap();
        let first: Vec<String> = keyboard.labels().iter().map(ToString::to_string).collect();
        let first_controls = keyboard.controls().to_vec();

        keyboard.rebuild_for_layout(name).unwrap();
        let second: Vec<String> = keyboard.labels().iter().map(ToString::to_string).collect();

        assert_eq!(first, second, "{name}");
        assert_eq!(first_controls, keyboard.controls(), "{name}");
        assert_eq!(
            keyboard.controls().len(),
            registry.get_layout(name).unwrap().key_count()
        );
    }
}

#[test]
fn test_shift_relabels_only_printable_keys() {
    let (_field, mut keyboard) = bound_keyboard();
    keyboard.rebuild_for_layout(FRENCH).unwrap();
    let before: Vec<String> = keyboard.labels().iter().map(ToString::to_string).collect();

    keyboard.toggle_shift();

    for (control, old_label) in keyboard.controls().iter().zip(&before) {
        let key = keyboard.binding(control.id).unwrap();
        match key {
            KeyPair::Control(_) => assert_eq!(&control.label, old_label),
            KeyPair::Printable { shifted, .. } => {
                assert_eq!(control.label, shifted.unwrap().to_string());
            }
        }
    }

    keyboard.toggle_shift();
    assert_eq!(
        keyboard.labels().iter().map(ToString::to_string).collect::<Vec<_>>(),
        before
    );
}

#[test]
fn test_dropped_field_makes_presses_noops() {
    let field = Rc::new(RefCell::new(TextField::new()));
    let mut keyboard = KeyboardWidget::new(&field);
    drop(field);

    assert_eq!(
        press_key(&mut keyboard, KeyPair::printable('q', 'Q')),
        PressOutcome::NoTarget
    );
    // Shift still works without a target
    assert_eq!(
        press_key(&mut keyboard, KeyPair::Control(ControlKey::Shift)),
        PressOutcome::ToggleShift
    );
}

#[test]
fn test_closed_field_is_left_alone() {
    let (field, mut keyboard) = bound_keyboard();
    field.borrow_mut().insert_at_end("abc");
    field.borrow_mut().close();

    press_key(&mut keyboard, KeyPair::Control(ControlKey::Backspace));

    assert_eq!(field.borrow().text(), "abc");
}

#[test]
fn test_with_layout() {
    let field = Rc::new(RefCell::new(TextField::new()));

    let keyboard = KeyboardWidget::with_layout(&field, UKRAINIAN).unwrap();
    assert_eq!(keyboard.state().active_layout_name, UKRAINIAN);

    assert!(KeyboardWidget::with_layout(&field, "Nope").is_err());
}
