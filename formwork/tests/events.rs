//! Tests for control event handling.

use formwork::{
    ActionBus, ActionStream, ControlEvents, EventResult, FormAction, FormControlState, Key,
    Modifiers, RadioGroup,
};

const COLORS: [&str; 3] = ["red", "green", "blue"];

fn setup() -> (RadioGroup<String>, ActionStream<String>) {
    let bus = ActionBus::new();
    let stream = bus.subscribe();
    let group = RadioGroup::new(
        FormControlState::new("color", COLORS[1].to_string()),
        &bus,
    )
    .with_options(COLORS.iter().map(|c| c.to_string()).collect());
    (group, stream)
}

fn next_value(stream: &mut ActionStream<String>) -> String {
    match stream
        .try_next()
        .expect("stream healthy")
        .expect("action dispatched")
    {
        FormAction::SetValue { value, .. } => value,
    }
}

fn assert_drained(stream: &mut ActionStream<String>) {
    assert_eq!(stream.try_next().expect("stream healthy"), None);
}

#[test]
fn test_click_selects_the_option() {
    let (group, mut stream) = setup();

    assert_eq!(group.on_click(2), EventResult::Consumed);

    assert_eq!(next_value(&mut stream), "blue");
    assert_drained(&mut stream);
}

#[test]
fn test_click_out_of_range_is_ignored() {
    let (group, mut stream) = setup();

    assert_eq!(group.on_click(7), EventResult::Ignored);

    assert_drained(&mut stream);
}

#[test]
fn test_click_on_the_checked_option_is_consumed_without_dispatch() {
    let (group, mut stream) = setup();

    assert_eq!(group.on_click(1), EventResult::Consumed);

    assert_drained(&mut stream);
}

#[test]
fn test_key_up_moves_selection_up() {
    let (group, mut stream) = setup();

    assert_eq!(group.on_key(Key::Up, Modifiers::new()), EventResult::Consumed);

    assert_eq!(next_value(&mut stream), "red");
}

#[test]
fn test_key_up_wraps_from_the_first_option() {
    let (group, mut stream) = setup();
    group.set_state(group.state().with_value("red".to_string()));

    group.on_key(Key::Up, Modifiers::new());

    assert_eq!(next_value(&mut stream), "blue");
}

#[test]
fn test_key_down_moves_selection_down() {
    let (group, mut stream) = setup();

    assert_eq!(group.on_key(Key::Down, Modifiers::new()), EventResult::Consumed);

    assert_eq!(next_value(&mut stream), "blue");
}

#[test]
fn test_key_down_wraps_from_the_last_option() {
    let (group, mut stream) = setup();
    group.set_state(group.state().with_value("blue".to_string()));

    group.on_key(Key::Down, Modifiers::new());

    assert_eq!(next_value(&mut stream), "red");
}

#[test]
fn test_vim_keys_move_selection() {
    let (group, mut stream) = setup();

    group.on_key(Key::Char('k'), Modifiers::new());
    assert_eq!(next_value(&mut stream), "red");

    group.on_key(Key::Char('j'), Modifiers::new());
    assert_eq!(next_value(&mut stream), "blue");
}

#[test]
fn test_home_and_end_jump_to_the_edges() {
    let (group, mut stream) = setup();

    group.on_key(Key::Home, Modifiers::new());
    assert_eq!(next_value(&mut stream), "red");

    group.on_key(Key::End, Modifiers::new());
    assert_eq!(next_value(&mut stream), "blue");
}

#[test]
fn test_movement_with_nothing_checked_starts_from_the_top() {
    let (group, mut stream) = setup();
    group.set_state(group.state().with_value("purple".to_string()));

    group.on_key(Key::Down, Modifiers::new());

    assert_eq!(next_value(&mut stream), "green");
}

#[test]
fn test_modified_keys_are_ignored() {
    let (group, mut stream) = setup();

    assert_eq!(group.on_key(Key::Up, Modifiers::ctrl()), EventResult::Ignored);
    assert_eq!(group.on_key(Key::Down, Modifiers::alt()), EventResult::Ignored);
    assert_eq!(group.on_key(Key::Home, Modifiers::shift()), EventResult::Ignored);

    assert_drained(&mut stream);
}

#[test]
fn test_space_and_enter_confirm_without_dispatch() {
    let (group, mut stream) = setup();

    assert_eq!(group.on_key(Key::Char(' '), Modifiers::new()), EventResult::Consumed);
    assert_eq!(group.on_key(Key::Enter, Modifiers::new()), EventResult::Consumed);

    assert_drained(&mut stream);
}

#[test]
fn test_keys_on_an_empty_group_are_ignored() {
    let bus = ActionBus::new();
    let group: RadioGroup<String> =
        RadioGroup::new(FormControlState::new("color", "red".to_string()), &bus);

    assert_eq!(group.on_key(Key::Down, Modifiers::new()), EventResult::Ignored);
}

#[test]
fn test_unmapped_keys_are_ignored() {
    let (group, mut stream) = setup();

    assert_eq!(group.on_key(Key::Left, Modifiers::new()), EventResult::Ignored);
    assert_eq!(group.on_key(Key::Escape, Modifiers::new()), EventResult::Ignored);
    assert_eq!(group.on_key(Key::Char('x'), Modifiers::new()), EventResult::Ignored);

    assert_drained(&mut stream);
}

#[test]
fn test_handling_never_moves_the_checked_flags() {
    let (group, mut stream) = setup();

    group.on_key(Key::Up, Modifiers::new());

    assert_eq!(group.checked_index(), Some(1));
    assert_eq!(next_value(&mut stream), "red");
}

#[test]
fn test_event_result_is_handled() {
    assert!(EventResult::Consumed.is_handled());
    assert!(!EventResult::Ignored.is_handled());
}
