use super::*;
use crate::catalog::TokenKind;

// =============================================================
// Cursor
// =============================================================

#[test]
fn cursor_default_is_default() {
    assert_eq!(Cursor::default(), Cursor::Default);
}

#[test]
fn cursor_css_values() {
    assert_eq!(Cursor::Default.css(), "default");
    assert_eq!(Cursor::Grab.css(), "grab");
    assert_eq!(Cursor::Grabbing.css(), "grabbing");
}

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_has_no_hover() {
    let ui = UiState::default();
    assert!(ui.hovered_id.is_none());
    assert_eq!(ui.cursor, Cursor::Default);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
    assert!(!InputState::Idle.is_dragging());
    assert!(InputState::Idle.dragging().is_none());
}

#[test]
fn dragging_reports_id_and_live_position() {
    let state = InputState::DraggingToken {
        id: 4,
        kind: TokenKind::Sony,
        grab_offset: Point::new(10.0, 10.0),
        live: Point::new(200.0, 150.0),
        epoch: 0,
    };
    assert!(state.is_dragging());
    assert_eq!(state.dragging(), Some((4, Point::new(200.0, 150.0))));
}

#[test]
fn button_equality() {
    assert_eq!(Button::Primary, Button::Primary);
    assert_ne!(Button::Primary, Button::Secondary);
}
