//! Tests for completion popup state

use super::*;

fn suggestions(texts: &[&str]) -> Vec<Suggestion> {
    texts.iter().map(|t| Suggestion::new(*t, "")).collect()
}

#[test]
fn test_new_state_is_hidden() {
    let state = CompletionState::new();
    assert!(!state.is_visible());
    assert!(state.selected().is_none());
    assert!(state.suggestions().is_empty());
}

#[test]
fn test_update_shows_and_selects_first() {
    let mut state = CompletionState::new();
    state.update_suggestions(suggestions(&["run", "rm", "rmi"]));

    assert!(state.is_visible());
    assert_eq!(state.selected_index(), 0);
    assert_eq!(state.selected().unwrap().text, "run");
}

#[test]
fn test_update_with_empty_list_hides() {
    let mut state = CompletionState::new();
    state.update_suggestions(suggestions(&["run"]));
    state.update_suggestions(Vec::new());

    assert!(!state.is_visible());
    assert!(state.selected().is_none());
}

#[test]
fn test_update_resets_selection() {
    let mut state = CompletionState::new();
    state.update_suggestions(suggestions(&["run", "rm"]));
    state.select_next();
    state.update_suggestions(suggestions(&["rm", "rmi"]));

    assert_eq!(state.selected_index(), 0);
}

#[test]
fn test_select_next_wraps() {
    let mut state = CompletionState::new();
    state.update_suggestions(suggestions(&["a", "b", "c"]));

    state.select_next();
    assert_eq!(state.selected_index(), 1);
    state.select_next();
    state.select_next();
    assert_eq!(state.selected_index(), 0);
}

#[test]
fn test_select_previous_wraps() {
    let mut state = CompletionState::new();
    state.update_suggestions(suggestions(&["a", "b", "c"]));

    state.select_previous();
    assert_eq!(state.selected_index(), 2);
    state.select_previous();
    assert_eq!(state.selected_index(), 1);
}

#[test]
fn test_navigation_on_empty_is_noop() {
    let mut state = CompletionState::new();
    state.select_next();
    state.select_previous();
    assert_eq!(state.selected_index(), 0);
}

#[test]
fn test_hide_clears_everything() {
    let mut state = CompletionState::new();
    state.update_suggestions(suggestions(&["a", "b"]));
    state.select_next();
    state.hide();

    assert!(!state.is_visible());
    assert!(state.suggestions().is_empty());
    assert_eq!(state.selected_index(), 0);
}

#[test]
fn test_is_unique() {
    let mut state = CompletionState::new();
    assert!(!state.is_unique());

    state.update_suggestions(suggestions(&["pull"]));
    assert!(state.is_unique());

    state.update_suggestions(suggestions(&["ps", "pull"]));
    assert!(!state.is_unique());
}

#[test]
fn test_scroll_offset_follows_selection() {
    let mut state = CompletionState::new();
    state.update_suggestions(suggestions(&["a", "b", "c", "d", "e"]));

    assert_eq!(state.scroll_offset(3), 0);
    state.select_next();
    state.select_next();
    assert_eq!(state.scroll_offset(3), 0);
    state.select_next();
    assert_eq!(state.scroll_offset(3), 1);
    state.select_next();
    assert_eq!(state.scroll_offset(3), 2);
    assert_eq!(state.scroll_offset(0), 0);
}
