//! Notes list state for the notes page.
//!
//! The list is a local cache of the last known server response. Mutations
//! patch it optimistically from the server's reply (append / replace by id
//! / filter); there is no further reconciliation.

#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

use crate::net::types::Note;

/// State for the notes page: cached list, edit target, and plan-limit notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotesState {
    pub notes: Vec<Note>,
    pub loading: bool,
    pub editing: Option<Note>,
    pub upgrade_notice: Option<String>,
}

impl Default for NotesState {
    fn default() -> Self {
        Self {
            notes: Vec::new(),
            loading: true,
            editing: None,
            upgrade_notice: None,
        }
    }
}

impl NotesState {
    /// Replace the cache with a fresh server response.
    pub fn set_notes(&mut self, notes: Vec<Note>) {
        self.notes = notes;
        self.loading = false;
    }

    /// Stop showing the loading indicator after a failed fetch.
    pub fn load_failed(&mut self) {
        self.loading = false;
    }

    /// Append a newly created note; a successful create also means the plan
    /// limit is no longer blocking, so any notice is dropped.
    pub fn insert(&mut self, note: Note) {
        self.notes.push(note);
        self.upgrade_notice = None;
    }

    /// Replace the entry matching the updated note's id, if present.
    pub fn replace(&mut self, note: Note) {
        if let Some(slot) = self.notes.iter_mut().find(|n| n.id == note.id) {
            *slot = note;
        }
    }

    /// Drop the entry with the given id, if present.
    pub fn remove(&mut self, id: i64) {
        self.notes.retain(|n| n.id != id);
    }

    /// Enter edit mode for a note.
    pub fn start_edit(&mut self, note: Note) {
        self.editing = Some(note);
    }

    /// Leave edit mode without applying changes.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Show the plan-limit notice with the server-provided message.
    pub fn show_upgrade(&mut self, message: String) {
        self.upgrade_notice = Some(message);
    }
}
