use super::*;

fn note(id: i64, title: &str) -> Note {
    Note {
        id,
        title: title.to_owned(),
        content: String::new(),
    }
}

// =============================================================
// Defaults and fetch
// =============================================================

#[test]
fn notes_state_default_is_loading_and_empty() {
    let state = NotesState::default();
    assert!(state.notes.is_empty());
    assert!(state.loading);
    assert!(state.editing.is_none());
    assert!(state.upgrade_notice.is_none());
}

#[test]
fn set_notes_replaces_cache_and_clears_loading() {
    let mut state = NotesState::default();
    state.set_notes(vec![note(1, "a"), note(2, "b")]);
    assert_eq!(state.notes.len(), 2);
    assert!(!state.loading);

    state.set_notes(vec![note(3, "c")]);
    assert_eq!(state.notes.len(), 1);
    assert_eq!(state.notes[0].id, 3);
}

#[test]
fn load_failed_only_clears_loading() {
    let mut state = NotesState::default();
    state.load_failed();
    assert!(!state.loading);
    assert!(state.notes.is_empty());
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn insert_appends_in_order() {
    let mut state = NotesState::default();
    state.set_notes(vec![note(1, "a")]);
    state.insert(note(2, "b"));
    assert_eq!(
        state.notes.iter().map(|n| n.id).collect::<Vec<_>>(),
        vec![1, 2]
    );
}

#[test]
fn insert_clears_upgrade_notice() {
    let mut state = NotesState::default();
    state.show_upgrade("limit reached".to_owned());
    state.insert(note(1, "a"));
    assert!(state.upgrade_notice.is_none());
}

#[test]
fn replace_swaps_matching_id_only() {
    let mut state = NotesState::default();
    state.set_notes(vec![note(1, "a"), note(2, "b")]);
    state.replace(note(2, "b2"));
    assert_eq!(state.notes[0].title, "a");
    assert_eq!(state.notes[1].title, "b2");
}

#[test]
fn replace_unknown_id_is_a_noop() {
    let mut state = NotesState::default();
    state.set_notes(vec![note(1, "a")]);
    state.replace(note(99, "ghost"));
    assert_eq!(state.notes.len(), 1);
    assert_eq!(state.notes[0].title, "a");
}

#[test]
fn remove_filters_by_id() {
    let mut state = NotesState::default();
    state.set_notes(vec![note(1, "a"), note(5, "b"), note(9, "c")]);
    state.remove(5);
    assert_eq!(
        state.notes.iter().map(|n| n.id).collect::<Vec<_>>(),
        vec![1, 9]
    );

    state.remove(5);
    assert_eq!(state.notes.len(), 2);
}

// =============================================================
// Edit mode and upgrade notice
// =============================================================

#[test]
fn start_and_cancel_edit() {
    let mut state = NotesState::default();
    state.start_edit(note(1, "a"));
    assert_eq!(state.editing.as_ref().map(|n| n.id), Some(1));
    state.cancel_edit();
    assert!(state.editing.is_none());
}

#[test]
fn show_upgrade_keeps_list_unchanged() {
    let mut state = NotesState::default();
    state.set_notes(vec![note(1, "a")]);
    state.show_upgrade("limit reached".to_owned());
    assert_eq!(state.upgrade_notice.as_deref(), Some("limit reached"));
    assert_eq!(state.notes.len(), 1);
}
