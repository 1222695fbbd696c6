//! Tests for prompt key handling

use super::*;
use crate::test_utils::test_helpers::{StubRuntime, key, key_with_mods, stub_resolver};

fn prompt() -> Prompt {
    Prompt::new(stub_resolver(StubRuntime::with_containers())).unwrap()
}

fn type_text(prompt: &mut Prompt, text: &str) {
    for c in text.chars() {
        prompt.handle_key_event(key(KeyCode::Char(c)));
    }
}

fn selected_text(prompt: &Prompt) -> Option<String> {
    prompt.completion.selected().map(|s| s.text.clone())
}

#[test]
fn test_typing_updates_suggestions() {
    let mut prompt = prompt();
    type_text(&mut prompt, "ima");

    assert_eq!(prompt.input.line(), "ima");
    assert_eq!(selected_text(&prompt).as_deref(), Some("image"));
}

#[test]
fn test_typing_flag_prefix_offers_command_flags() {
    let mut prompt = prompt();
    type_text(&mut prompt, "run --rm");

    let texts: Vec<_> = prompt
        .completion
        .suggestions()
        .iter()
        .map(|s| s.text.as_str())
        .collect();
    assert_eq!(texts, vec!["--rm"]);
}

#[test]
fn test_down_and_up_move_selection() {
    let mut prompt = prompt();
    type_text(&mut prompt, "exec ");
    assert_eq!(selected_text(&prompt).as_deref(), Some("a1b2c3"));

    prompt.handle_key_event(key(KeyCode::Down));
    assert_eq!(selected_text(&prompt).as_deref(), Some("d4e5f6"));

    prompt.handle_key_event(key(KeyCode::Up));
    assert_eq!(selected_text(&prompt).as_deref(), Some("a1b2c3"));
    assert_eq!(prompt.input.line(), "exec ");
}

#[test]
fn test_tab_cycles_when_several_candidates() {
    let mut prompt = prompt();
    type_text(&mut prompt, "exec ");

    prompt.handle_key_event(key(KeyCode::Tab));
    assert_eq!(selected_text(&prompt).as_deref(), Some("d4e5f6"));

    prompt.handle_key_event(key(KeyCode::BackTab));
    assert_eq!(selected_text(&prompt).as_deref(), Some("a1b2c3"));
    assert_eq!(prompt.input.line(), "exec ");
}

#[test]
fn test_tab_accepts_single_candidate() {
    let mut prompt = prompt();
    type_text(&mut prompt, "ins");

    prompt.handle_key_event(key(KeyCode::Tab));

    assert_eq!(prompt.input.line(), "inspect");
    assert_eq!(prompt.input.cursor_col(), 7);
}

#[test]
fn test_right_at_line_end_accepts_selection() {
    let mut prompt = prompt();
    type_text(&mut prompt, "exec ");
    prompt.handle_key_event(key(KeyCode::Down));

    prompt.handle_key_event(key(KeyCode::Right));

    assert_eq!(prompt.input.line(), "exec d4e5f6");
}

#[test]
fn test_right_mid_line_moves_cursor() {
    let mut prompt = prompt();
    type_text(&mut prompt, "ps");
    prompt.handle_key_event(key(KeyCode::Left));
    prompt.handle_key_event(key(KeyCode::Right));

    assert_eq!(prompt.input.line(), "ps");
    assert_eq!(prompt.input.cursor_col(), 2);
}

#[test]
fn test_esc_hides_and_tab_restores() {
    let mut prompt = prompt();
    type_text(&mut prompt, "p");
    assert!(prompt.completion.is_visible());

    prompt.handle_key_event(key(KeyCode::Esc));
    assert!(!prompt.completion.is_visible());

    prompt.handle_key_event(key(KeyCode::Tab));
    assert!(prompt.completion.is_visible());
    assert_eq!(prompt.input.line(), "p");
}

#[test]
fn test_backspace_refreshes() {
    let mut prompt = prompt();
    type_text(&mut prompt, "zz");
    assert!(!prompt.completion.is_visible());

    prompt.handle_key_event(key(KeyCode::Backspace));
    prompt.handle_key_event(key(KeyCode::Backspace));

    assert_eq!(prompt.input.line(), "");
    assert!(prompt.completion.is_visible());
}

#[test]
fn test_enter_submits_line() {
    let mut prompt = prompt();
    type_text(&mut prompt, "ps -a");
    prompt.handle_key_event(key(KeyCode::Enter));

    assert!(prompt.should_quit());
    assert_eq!(prompt.submitted(), Some("ps -a"));
}

#[test]
fn test_enter_on_exit_quits() {
    let mut prompt = prompt();
    type_text(&mut prompt, "exit");
    prompt.handle_key_event(key(KeyCode::Enter));

    assert!(prompt.should_quit());
    assert!(prompt.submitted().is_none());
}

#[test]
fn test_ctrl_c_and_ctrl_d_quit() {
    let mut prompt = prompt();
    type_text(&mut prompt, "ps");
    prompt.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(prompt.should_quit());
    assert!(prompt.submitted().is_none());

    let mut prompt = self::prompt();
    prompt.handle_key_event(key_with_mods(KeyCode::Char('d'), KeyModifiers::CONTROL));
    assert!(prompt.should_quit());
}

#[test]
fn test_paste_inserts_single_line() {
    let mut prompt = prompt();
    prompt.handle_paste_event("run\n--rm".to_string());

    assert_eq!(prompt.input.line(), "run --rm");
    assert_eq!(selected_text(&prompt).as_deref(), Some("--rm"));
}
