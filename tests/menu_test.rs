//! Scripted sessions through the interactive menu.

use std::io::Cursor;

use queue_lab::error::Error;
use queue_lab::menu::Menu;
use queue_lab::model::QueueKind;
use queue_lab::queue::{self, QueueEngine};

/// Run `script` against a fresh queue and return (queue, transcript).
fn session(kind: QueueKind, capacity: usize, script: &str) -> (queue::AnyQueue, String) {
    session_with(kind, capacity, script, false)
}

fn session_with(
    kind: QueueKind,
    capacity: usize,
    script: &str,
    json: bool,
) -> (queue::AnyQueue, String) {
    let mut q = queue::build(kind, capacity).expect("build queue");
    let mut menu = Menu::new(Cursor::new(script.to_string()), Vec::new()).json(json);
    menu.run(&mut q).expect("session should succeed");
    let out = String::from_utf8(menu.into_output()).expect("utf8 transcript");
    (q, out)
}

#[test]
fn linear_growth_session() {
    // insert 5, insert 7, insert 9 (full -> grow to 4), display, exit
    let script = "1\n5\n1\n7\n1\n9\ny\n4\n3\n4\n";
    let (q, out) = session(QueueKind::Linear, 2, script);

    assert!(out.contains("Successfully inserted: 5"));
    assert!(out.contains("Queue is full..."));
    assert!(out.contains("Queue size increased to 4"));
    assert!(out.contains("Successfully inserted: 9"));
    assert!(out.contains("|   5 |   7 |   9 "));
    assert!(out.contains("Front = 0, Rear = 2"));
    assert_eq!(q.capacity(), 4);
    assert_eq!(q.peek_all(), vec![5, 7, 9]);
}

#[test]
fn circular_declined_growth_keeps_state() {
    let script = "1\n10\n1\n20\n1\n30\n1\n40\nn\n3\n4\n";
    let (q, out) = session(QueueKind::Circular, 3, script);

    assert!(out.contains("Queue is full..."));
    assert!(out.contains("Item not inserted."));
    assert!(!out.contains("Successfully inserted: 40"));
    assert!(out.contains("Front = 0, Rear = 2"));
    assert_eq!(q.peek_all(), vec![10, 20, 30]);
}

#[test]
fn invalid_new_size_is_reported() {
    let script = "1\n1\n1\n2\n1\n3\nY\n1\n4\n";
    let (q, out) = session(QueueKind::Linear, 2, script);

    assert!(out.contains("Invalid size. Must be > 2"));
    assert_eq!(q.capacity(), 2);
    assert_eq!(q.peek_all(), vec![1, 2]);
}

#[test]
fn negative_new_size_is_invalid_for_circular() {
    let script = "1\n1\n1\n2\ny\n-4\n4\n";
    let (q, out) = session(QueueKind::Circular, 1, script);

    assert!(out.contains("Invalid size. Must be > 1"));
    assert_eq!(q.peek_all(), vec![1]);
}

#[test]
fn delete_and_display_on_empty_queue() {
    let (_, out) = session(QueueKind::Circular, 3, "2\n3\n4\n");
    assert!(out.contains("Queue is empty..."));
    assert!(out.contains("Queue is empty...Please insert an item..."));
}

#[test]
fn delete_reports_removed_item() {
    let (q, out) = session(QueueKind::Linear, 3, "1\n11\n1\n12\n2\n4\n");
    assert!(out.contains("Successfully deleted: 11"));
    assert_eq!(q.peek_all(), vec![12]);
}

#[test]
fn unknown_choice_and_bad_numbers_reprompt() {
    let (q, out) = session(QueueKind::Linear, 3, "9\nabc\n1\nxyz\n6\n4\n");
    assert!(out.contains("Enter a valid choice...!"));
    assert!(out.contains("Enter a valid number...!"));
    assert_eq!(q.peek_all(), vec![6]);
}

#[test]
fn end_of_input_ends_session() {
    let (q, out) = session(QueueKind::Circular, 2, "1\n3\n");
    assert!(out.contains("Successfully inserted: 3"));
    assert_eq!(q.peek_all(), vec![3]);
}

#[test]
fn end_of_input_during_growth_prompt_changes_nothing() {
    let (q, _) = session(QueueKind::Circular, 1, "1\n3\n1\n4\n");
    assert_eq!(q.capacity(), 1);
    assert_eq!(q.peek_all(), vec![3]);
}

#[test]
fn json_display_prints_snapshot() {
    let (_, out) = session_with(QueueKind::Linear, 2, "1\n5\n3\n4\n", true);
    let line = out
        .lines()
        .find_map(|l| l.find('{').map(|at| &l[at..]))
        .expect("json line");
    let value: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "kind": "linear",
            "capacity": 2,
            "front": 0,
            "rear": 0,
            "items": [5],
        })
    );
}

fn initial_capacity(input: &str) -> queue_lab::error::Result<usize> {
    Menu::new(Cursor::new(input.to_string()), Vec::new()).read_initial_capacity()
}

#[test]
fn initial_capacity_is_read_from_input() {
    assert_eq!(initial_capacity(" 4\n").unwrap(), 4);
}

#[test]
fn non_positive_initial_capacity_is_fatal() {
    // no second chance: the following "5" is never read
    assert!(matches!(initial_capacity("-3\n5\n"), Err(Error::InvalidCapacity(-3))));
    assert!(matches!(initial_capacity("0\n5\n"), Err(Error::InvalidCapacity(0))));
}

#[test]
fn unparsable_initial_capacity_is_fatal() {
    let err = initial_capacity("abc\n5\n").unwrap_err();
    assert!(matches!(err, Error::InvalidNumber(ref s) if s == "abc"));
}

#[test]
fn missing_initial_capacity_is_an_error() {
    let mut menu = Menu::new(Cursor::new(String::new()), Vec::new());
    assert!(matches!(menu.read_initial_capacity(), Err(Error::Io(_))));
}
