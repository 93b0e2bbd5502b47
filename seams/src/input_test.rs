#![allow(clippy::float_cmp)]

use super::*;
use crate::layout::Pane;

// =============================================================
// Helpers
// =============================================================

fn layout() -> Layout {
    Layout::compute(840.0, 600.0)
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn anchored_left() -> PairingState {
    let mut state = PairingState::Idle;
    state.click(pt(100.0, 50.0), &layout(), Button::Primary);
    state
}

// =============================================================
// Button / Key
// =============================================================

#[test]
fn button_from_dom_codes() {
    assert_eq!(Button::from_dom(0), Some(Button::Primary));
    assert_eq!(Button::from_dom(1), Some(Button::Middle));
    assert_eq!(Button::from_dom(2), Some(Button::Secondary));
    assert_eq!(Button::from_dom(3), None);
    assert_eq!(Button::from_dom(-1), None);
}

#[test]
fn button_categories() {
    assert_eq!(Button::Primary.category(), Some(Category::Front));
    assert_eq!(Button::Secondary.category(), Some(Category::Back));
    assert_eq!(Button::Middle.category(), None);
}

#[test]
fn escape_key_detected() {
    assert!(Key("Escape".into()).is_escape());
    assert!(!Key("Enter".into()).is_escape());
}

// =============================================================
// Idle transitions
// =============================================================

#[test]
fn default_is_idle() {
    let state = PairingState::default();
    assert_eq!(state, PairingState::Idle);
    assert!(state.anchor().is_none());
    assert!(state.cursor().is_none());
}

#[test]
fn idle_gap_click_is_noop() {
    let mut state = PairingState::Idle;
    let out = state.click(pt(420.0, 10.0), &layout(), Button::Primary);
    assert_eq!(out, PairingOutcome::Ignored);
    assert_eq!(state, PairingState::Idle);
}

#[test]
fn idle_pane_click_anchors() {
    let mut state = PairingState::Idle;
    let out = state.click(pt(100.0, 50.0), &layout(), Button::Primary);
    let expected = PanePoint::new(100.0, 50.0, Pane::Left);
    assert_eq!(out, PairingOutcome::Started(expected));
    assert_eq!(state.anchor(), Some(expected));
    assert_eq!(state.cursor(), Some(pt(100.0, 50.0)));
}

#[test]
fn secondary_click_also_anchors() {
    let mut state = PairingState::Idle;
    let out = state.click(pt(500.0, 20.0), &layout(), Button::Secondary);
    assert!(matches!(out, PairingOutcome::Started(p) if p.pane == Pane::Right));
}

#[test]
fn middle_click_is_ignored() {
    let mut state = PairingState::Idle;
    assert_eq!(state.click(pt(100.0, 50.0), &layout(), Button::Middle), PairingOutcome::Ignored);
    assert_eq!(state, PairingState::Idle);

    let mut anchored = anchored_left();
    assert_eq!(anchored.click(pt(500.0, 50.0), &layout(), Button::Middle), PairingOutcome::Ignored);
    assert!(anchored.is_anchored());
}

// =============================================================
// Anchored transitions
// =============================================================

#[test]
fn anchored_gap_click_cancels() {
    let mut state = anchored_left();
    let out = state.click(pt(410.0, 50.0), &layout(), Button::Primary);
    assert_eq!(out, PairingOutcome::Cancelled);
    assert_eq!(state, PairingState::Idle);
}

#[test]
fn anchored_same_pane_click_rejects_and_resets() {
    let mut state = anchored_left();
    let out = state.click(pt(200.0, 80.0), &layout(), Button::Primary);
    assert_eq!(out, PairingOutcome::Rejected);
    assert_eq!(state, PairingState::Idle);
}

#[test]
fn anchored_other_pane_primary_completes_front() {
    let mut state = anchored_left();
    let out = state.click(pt(440.5, 60.0), &layout(), Button::Primary);
    let PairingOutcome::Completed(seg) = out else {
        panic!("expected completion, got {out:?}");
    };
    assert_eq!(seg.category(), Category::Front);
    assert_eq!(seg.start(), PanePoint::new(100.0, 50.0, Pane::Left));
    assert_eq!(seg.end().pane, Pane::Right);
    assert_eq!(state, PairingState::Idle);
}

#[test]
fn second_click_button_decides_category() {
    let mut state = anchored_left();
    let out = state.click(pt(600.0, 60.0), &layout(), Button::Secondary);
    let PairingOutcome::Completed(seg) = out else {
        panic!("expected completion, got {out:?}");
    };
    assert_eq!(seg.category(), Category::Back);
}

#[test]
fn right_to_left_pairing_keeps_direction() {
    let mut state = PairingState::Idle;
    state.click(pt(700.0, 10.0), &layout(), Button::Primary);
    let PairingOutcome::Completed(seg) = state.click(pt(5.0, 20.0), &layout(), Button::Primary) else {
        panic!("expected completion");
    };
    assert_eq!(seg.start().pane, Pane::Right);
    assert_eq!(seg.end().pane, Pane::Left);
}

// =============================================================
// Pointer move / leave / cancel
// =============================================================

#[test]
fn move_while_idle_does_nothing() {
    let mut state = PairingState::Idle;
    assert!(!state.pointer_move(pt(1.0, 1.0)));
    assert_eq!(state, PairingState::Idle);
}

#[test]
fn move_while_anchored_updates_cursor_only() {
    let mut state = anchored_left();
    let anchor = state.anchor();
    assert!(state.pointer_move(pt(300.0, 300.0)));
    assert_eq!(state.cursor(), Some(pt(300.0, 300.0)));
    assert_eq!(state.anchor(), anchor);
}

#[test]
fn move_into_gap_does_not_cancel() {
    let mut state = anchored_left();
    state.pointer_move(pt(420.0, 10.0));
    assert!(state.is_anchored());
}

#[test]
fn leave_while_anchored_cancels() {
    let mut state = anchored_left();
    assert_eq!(state.pointer_leave(), PairingOutcome::Cancelled);
    assert_eq!(state, PairingState::Idle);
}

#[test]
fn leave_while_idle_is_ignored() {
    let mut state = PairingState::Idle;
    assert_eq!(state.pointer_leave(), PairingOutcome::Ignored);
}

#[test]
fn cancel_clears_cursor_and_anchor() {
    let mut state = anchored_left();
    state.pointer_move(pt(50.0, 50.0));
    state.cancel();
    assert!(state.anchor().is_none());
    assert!(state.cursor().is_none());
}
