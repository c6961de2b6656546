//! Controller integration tests.
//!
//! These tests drive `GameController` through prepared positions and check
//! status transitions, terminal suppression, the selection protocol and
//! View notifications.

mod common;

use aces_up::{Activation, EngineError, Status};
use common::{game_at, position, seeded_game, tops};

// =============================================================================
// Terminal States
// =============================================================================

/// Removing the last non-ace card wins, even with cards left in the deck.
#[test]
fn test_win_by_remove() {
    let table = position([&["AS"], &["AH", "5D"], &["AD"], &["AC"]], &[], true);
    let (mut game, _clock) = game_at(table);
    assert!(!game.table().deck.is_empty());

    assert!(game.attempt_remove(1).unwrap());
    assert_eq!(game.status(), Status::Won);
    assert_eq!(tops(&game), ["AS", "AH", "AD", "AC"]);
}

/// Once won, deal/remove/move/redo are no-ops until a new game.
#[test]
fn test_terminal_suppression_after_win() {
    let table = position([&["AS"], &["AH", "5D"], &["AD"], &["AC"]], &[], true);
    let (mut game, _clock) = game_at(table);
    game.attempt_remove(1).unwrap();
    let won = game.table().clone();
    let renders = game.view().render_count();

    assert!(!game.deal().unwrap());
    assert!(!game.attempt_remove(0).unwrap());
    assert!(!game.attempt_move(0, 1).unwrap());
    assert!(!game.redo().unwrap());
    assert_eq!(game.on_card_activated(0).unwrap(), Activation::Rejected);
    assert_eq!(game.on_empty_stack_activated(2).unwrap(), Activation::Rejected);
    assert!(game.show_hint().is_none());
    assert!(game.legal_actions().is_empty());

    assert_eq!(game.table(), &won);
    assert_eq!(game.view().render_count(), renders);

    game.new_game().unwrap();
    assert_eq!(game.status(), Status::NotStarted);
    assert_eq!(game.move_count(), 0);
    assert!(!game.history().can_undo());
}

/// The last legal remove with an empty deck and no gap loses.
#[test]
fn test_loss_by_remove() {
    let table = position([&["2S"], &["3H"], &["4D"], &["5C", "2H"]], &[], false);
    let (mut game, _clock) = game_at(table);

    assert!(game.attempt_remove(3).unwrap());
    assert_eq!(game.status(), Status::Lost);
    assert!(!game.deal().unwrap());
    assert!(!game.attempt_remove(1).unwrap());
    assert!(!game.attempt_move(0, 1).unwrap());
}

/// Undo leaves a terminal state and the game continues.
#[test]
fn test_undo_out_of_terminal() {
    let table = position([&["2S"], &["3H"], &["4D"], &["5C", "2H"]], &[], false);
    let (mut game, _clock) = game_at(table);
    game.attempt_remove(3).unwrap();
    assert_eq!(game.status(), Status::Lost);

    assert!(game.undo().unwrap());
    assert_eq!(game.status(), Status::Playing);
    assert_eq!(tops(&game), ["2S", "3H", "4D", "2H"]);
    assert_eq!(game.move_count(), 0);
    assert!(game.history().can_redo());

    // Redo back into the loss is allowed from Playing.
    assert!(game.redo().unwrap());
    assert_eq!(game.status(), Status::Lost);
}

/// Elapsed time freezes at the end and resumes after undo.
#[test]
fn test_elapsed_freezes_when_terminal() {
    use std::time::Duration;

    let table = position([&["2S"], &["3H"], &["4D"], &["5C", "2H"]], &[], false);
    let (mut game, clock) = game_at(table);

    clock.advance(Duration::from_secs(1));
    game.attempt_remove(3).unwrap();
    clock.advance(Duration::from_secs(5));
    assert_eq!(game.snapshot().elapsed_ms, 0);

    game.undo().unwrap();
    clock.advance(Duration::from_secs(2));
    assert_eq!(game.snapshot().elapsed_ms, 7000);
}

// =============================================================================
// Primitive Actions
// =============================================================================

/// An ace on top is never removed, whatever else is showing.
#[test]
fn test_ace_immunity() {
    let table = position([&["AH"], &["KH"], &["QH"], &["2H"]], &[], true);
    let (mut game, _clock) = game_at(table);

    assert!(!game.attempt_remove(0).unwrap());
    assert_eq!(tops(&game)[0], "AH");
    assert!(game.attempt_remove(1).unwrap());
}

/// Moves onto a non-empty stack fail and change nothing.
#[test]
fn test_move_needs_empty_target() {
    let table = position([&["7H"], &["9S"], &["2C"], &[]], &[], true);
    let (mut game, _clock) = game_at(table);
    let before = game.table().clone();

    assert!(!game.attempt_move(0, 1).unwrap());
    assert!(!game.attempt_move(0, 0).unwrap());
    assert!(!game.attempt_move(3, 0).unwrap());
    assert_eq!(game.table(), &before);
    assert_eq!(game.move_count(), 0);

    assert!(game.attempt_move(0, 3).unwrap());
    assert_eq!(tops(&game), ["-", "9S", "2C", "7H"]);
    assert_eq!(game.move_count(), 1);
}

/// Out-of-range stacks are contract violations, not rejections.
#[test]
fn test_invalid_stack_errors() {
    let (mut game, _clock) = seeded_game(3);
    assert_eq!(game.attempt_remove(4), Err(EngineError::InvalidStack(4)));
    assert_eq!(game.attempt_move(4, 0), Err(EngineError::InvalidStack(4)));
    assert_eq!(
        game.on_empty_stack_activated(12),
        Err(EngineError::InvalidStack(12))
    );
}

/// Empty deck makes deal a reported no-op.
#[test]
fn test_deal_empty_deck() {
    let table = position([&["2S"], &["3H"], &[], &[]], &[], false);
    let (mut game, _clock) = game_at(table);

    assert!(!game.deal().unwrap());
    assert_eq!(game.status(), Status::NotStarted);
    assert_eq!(game.move_count(), 0);
}

/// A deal clears the selection.
#[test]
fn test_deal_clears_selection() {
    let table = position([&["7H"], &["9S"], &["2C"], &["5D"]], &[], true);
    let (mut game, _clock) = game_at(table);

    assert_eq!(game.on_card_activated(2).unwrap(), Activation::Selected);
    assert!(game.deal().unwrap());
    assert!(game.selection().is_none());
}

// =============================================================================
// Selection Protocol
// =============================================================================

/// Walk through every branch of the click protocol.
#[test]
fn test_selection_protocol() {
    let table = position([&["7H"], &["9H"], &["2C"], &[]], &[], true);
    let (mut game, _clock) = game_at(table);

    // No selection: remove fails, so the card is selected.
    assert_eq!(game.on_card_activated(1).unwrap(), Activation::Selected);
    assert_eq!(game.selection().map(|s| s.stack), Some(1));
    assert_eq!(game.status(), Status::Playing);
    assert_eq!(game.move_count(), 0);

    // Same card again: deselect.
    assert_eq!(game.on_card_activated(1).unwrap(), Activation::Deselected);
    assert!(game.selection().is_none());

    // Another card replaces the selection.
    assert_eq!(game.on_card_activated(1).unwrap(), Activation::Selected);
    assert_eq!(game.on_card_activated(2).unwrap(), Activation::Selected);
    assert_eq!(game.selection().map(|s| s.stack), Some(2));

    // A removable card is removed even with a selection active.
    assert_eq!(game.on_card_activated(0).unwrap(), Activation::Removed);
    assert!(game.selection().is_none());
    assert_eq!(tops(&game), ["-", "9H", "2C", "-"]);

    // Selected card onto an empty stack.
    assert_eq!(game.on_card_activated(2).unwrap(), Activation::Selected);
    assert_eq!(game.on_empty_stack_activated(3).unwrap(), Activation::Moved);
    assert!(game.selection().is_none());
    assert_eq!(tops(&game), ["-", "9H", "-", "2C"]);

    // Empty stack without a selection does nothing.
    assert_eq!(game.on_empty_stack_activated(2).unwrap(), Activation::Rejected);
    assert_eq!(game.on_card_activated(0).unwrap(), Activation::Rejected);

    // Clicking an empty stack as a card behaves like an empty-stack click.
    assert_eq!(game.on_card_activated(1).unwrap(), Activation::Selected);
    assert_eq!(game.on_card_activated(0).unwrap(), Activation::Moved);
    assert_eq!(tops(&game), ["9H", "-", "-", "2C"]);

    assert_eq!(game.move_count(), 3);
}

/// A non-empty stack passed as "empty" is handled as a card click.
#[test]
fn test_empty_activation_on_card() {
    let table = position([&["7H"], &["9H"], &["2C"], &[]], &[], true);
    let (mut game, _clock) = game_at(table);

    assert_eq!(game.on_empty_stack_activated(0).unwrap(), Activation::Removed);
    assert_eq!(game.on_empty_stack_activated(2).unwrap(), Activation::Selected);
}

// =============================================================================
// View Notifications
// =============================================================================

/// Snapshots follow accepted changes only.
#[test]
fn test_render_on_accepted_only() {
    let table = position([&["7H"], &["9S"], &["2C"], &["5D"]], &[], true);
    let (mut game, _clock) = game_at(table);
    assert_eq!(game.view().render_count(), 1);

    assert!(!game.attempt_remove(0).unwrap());
    assert!(!game.undo().unwrap());
    assert_eq!(game.view().render_count(), 1);

    assert!(game.deal().unwrap());
    assert_eq!(game.view().render_count(), 2);

    let last = game.view().last().unwrap();
    assert_eq!(last.move_count, 1);
    assert_eq!(last.deck_remaining, game.table().deck.len());
    assert_eq!(last.status, Status::Playing);
    assert!(last.can_undo);
    assert!(!last.can_redo);
    assert!(last.stacks.iter().all(|s| s.len() == 2));
    assert!(last.stacks.iter().flatten().all(|c| c.face_up));
}

/// Snapshot carries the selection as a stack index.
#[test]
fn test_snapshot_selection() {
    let table = position([&["7H"], &["9S"], &["2C"], &["5D"]], &[], true);
    let (mut game, _clock) = game_at(table);

    game.on_card_activated(3).unwrap();
    assert_eq!(game.view().last().unwrap().selection, Some(3));
}
