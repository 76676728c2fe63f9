use pawview_core::{History, HistoryError, HistoryItem};

fn history_of(urls: &[&str]) -> History {
    let mut history = History::new();
    for url in urls {
        history.record_new_item(*url, "Dog");
    }
    history
}

fn urls(history: &History) -> Vec<&str> {
    history.items().iter().map(|item| item.url.as_str()).collect()
}

#[test]
fn empty_history_has_no_cursor() {
    let history = History::new();
    assert_eq!(history.len(), 0);
    assert!(history.is_empty());
    assert_eq!(history.current_index(), None);
    assert_eq!(history.current(), None);
    assert!(history.is_at_start());
    assert!(!history.can_go_forward());
}

#[test]
fn recording_n_items_moves_cursor_to_last() {
    for n in 1..=12 {
        let mut history = History::new();
        for i in 0..n {
            let cursor = history.record_new_item(format!("{i}.png"), "Cat");
            assert_eq!(cursor, i);
        }
        assert_eq!(history.len(), n);
        assert_eq!(history.current_index(), Some(n - 1));
    }
}

#[test]
fn new_items_start_with_zero_likes() {
    let history = history_of(&["a.png"]);
    assert_eq!(
        history.item_at(0),
        Ok(&HistoryItem {
            url: "a.png".to_string(),
            provider: "Dog".to_string(),
            likes: 0,
        })
    );
}

#[test]
fn recording_after_stepping_back_discards_forward_branch() {
    let mut history = history_of(&["A", "B", "C"]);
    assert_eq!(history.current_index(), Some(2));

    assert_eq!(history.step_back(), Ok(1));
    assert_eq!(history.step_back(), Ok(0));
    let cursor = history.record_new_item("D", "Cat");

    assert_eq!(cursor, 1);
    assert_eq!(urls(&history), vec!["A", "D"]);
    assert_eq!(history.current_index(), Some(1));
    assert_eq!(history.step_forward(), Err(HistoryError::AtEnd));
}

#[test]
fn step_back_at_start_fails_and_leaves_state_unchanged() {
    let mut history = history_of(&["A", "B"]);
    history.step_back().unwrap();
    let before = history.clone();

    assert_eq!(history.step_back(), Err(HistoryError::AtStart));
    assert_eq!(history, before);
}

#[test]
fn step_back_on_empty_history_fails() {
    let mut history = History::new();
    assert_eq!(history.step_back(), Err(HistoryError::AtStart));
    assert_eq!(history.current_index(), None);
}

#[test]
fn step_forward_revisits_retained_items() {
    let mut history = history_of(&["A", "B", "C"]);
    history.step_back().unwrap();
    history.step_back().unwrap();
    assert!(history.can_go_forward());

    assert_eq!(history.step_forward(), Ok(1));
    assert_eq!(history.current().map(|item| item.url.as_str()), Some("B"));
    assert_eq!(history.step_forward(), Ok(2));
    assert_eq!(history.step_forward(), Err(HistoryError::AtEnd));
    assert_eq!(history.len(), 3);
}

#[test]
fn item_at_rejects_out_of_range_index() {
    let history = history_of(&["A"]);
    assert_eq!(
        history.item_at(1),
        Err(HistoryError::OutOfRange { index: 1, len: 1 })
    );
    assert_eq!(
        History::new().item_at(0),
        Err(HistoryError::OutOfRange { index: 0, len: 0 })
    );
}
