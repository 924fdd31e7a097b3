use egui::Pos2;
use meme_editor::action::{Action, ActionLog};
use meme_editor::text_box::TextBox;

fn add_action(text: &str) -> Action {
    Action::AddTextBox(TextBox::new(text, Pos2::ZERO))
}

fn texts(log: &ActionLog) -> Vec<String> {
    log.iter()
        .map(|action| match action {
            Action::AddTextBox(text_box) => text_box.text.clone(),
            other => panic!("unexpected action {other:?}"),
        })
        .collect()
}

#[test]
fn test_empty_log_cannot_undo_or_redo() {
    let log = ActionLog::new();
    assert!(!log.can_undo());
    assert!(!log.can_redo());
    assert!(log.peek_undo().is_none());
    assert!(log.peek_redo().is_none());
    assert_eq!(log.current_index(), None);
}

#[test]
fn test_history_keeps_only_last_five() {
    let mut log = ActionLog::new();
    for n in 1..=7 {
        log.record(add_action(&n.to_string()));
    }

    assert_eq!(log.len(), 5);
    assert_eq!(texts(&log), ["3", "4", "5", "6", "7"]);
    assert_eq!(log.current_index(), Some(4));
    assert!(log.can_undo());
    assert!(!log.can_redo());
}

#[test]
fn test_recording_after_undo_discards_redo_branch() {
    let mut log = ActionLog::new();
    log.record(add_action("A"));
    log.record(add_action("B"));
    log.record(add_action("C"));

    log.step_back();
    log.step_back();
    assert_eq!(log.current_index(), Some(0));
    assert!(log.can_redo());

    log.record(add_action("D"));

    assert!(!log.can_redo());
    assert_eq!(texts(&log), ["A", "D"]);
    assert_eq!(log.current_index(), Some(1));
}

#[test]
fn test_peek_does_not_move_cursor() {
    let mut log = ActionLog::new();
    let first = add_action("first");
    let second = add_action("second");
    log.record(first.clone());
    log.record(second.clone());

    assert_eq!(log.peek_undo(), Some(&second));
    assert_eq!(log.peek_undo(), Some(&second));
    assert!(log.peek_redo().is_none());

    log.step_back();
    assert_eq!(log.peek_undo(), Some(&first));
    assert_eq!(log.peek_redo(), Some(&second));

    log.step_back();
    assert!(!log.can_undo());
    assert_eq!(log.peek_redo(), Some(&first));

    // Stepping past the start is a no-op
    log.step_back();
    assert_eq!(log.current_index(), None);

    log.step_forward();
    log.step_forward();
    log.step_forward();
    assert_eq!(log.current_index(), Some(1));
}

#[test]
fn test_undo_everything_then_record_starts_fresh() {
    let mut log = ActionLog::new();
    log.record(add_action("A"));
    log.record(add_action("B"));
    log.step_back();
    log.step_back();

    log.record(add_action("C"));
    assert_eq!(texts(&log), ["C"]);
    assert_eq!(log.current_index(), Some(0));
}

#[test]
fn test_limit_is_at_least_one() {
    let mut log = ActionLog::with_limit(0);
    assert_eq!(log.limit(), 1);

    log.record(add_action("A"));
    log.record(add_action("B"));
    assert_eq!(texts(&log), ["B"]);
}

#[test]
fn test_execute_and_undo_are_inverse() {
    let a = TextBox::new("a", Pos2::new(1.0, 1.0));
    let b = TextBox::new("b", Pos2::new(2.0, 2.0));
    let c = TextBox::new("c", Pos2::new(3.0, 3.0));
    let before = vec![a.clone(), b.clone(), c.clone()];

    let actions = [
        Action::DeleteTextBox { text_box: b.clone(), index: 1 },
        Action::MoveTextBox {
            text_box: c.clone(),
            old_position: c.position,
            new_position: Pos2::new(40.0, 40.0),
        },
        Action::AddTextBox(TextBox::new("d", Pos2::ZERO)),
    ];

    for action in &actions {
        let mut boxes = before.clone();
        action.execute(&mut boxes);
        assert_ne!(boxes, before, "{} should change the document", action.label());
        action.undo(&mut boxes);
        assert_eq!(boxes, before, "{} should be reverted", action.label());
    }
}
