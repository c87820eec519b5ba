//! Notes list with loading and empty states.

use leptos::prelude::*;

use crate::components::note_item::NoteItem;
use crate::net::types::Note;
use crate::state::notes::NotesState;

/// Renders the cached note list from context. Shows a spinner while the
/// initial fetch is in flight and an empty state when the tenant has no
/// notes yet.
#[component]
pub fn NoteList(on_edit: Callback<Note>, on_delete: Callback<i64>) -> impl IntoView {
    let notes = expect_context::<RwSignal<NotesState>>();

    view! {
        {move || {
            let state = notes.get();
            if state.loading {
                view! {
                    <div class="note-list__loading">
                        <span class="spinner spinner--dark"></span>
                        <p>"Loading notes..."</p>
                    </div>
                }
                    .into_any()
            } else if state.notes.is_empty() {
                view! {
                    <div class="empty-state">
                        <div class="empty-state__icon">"○"</div>
                        <h3 class="empty-state__title">"No notes yet"</h3>
                        <p class="empty-state__text">"Create your first note above"</p>
                    </div>
                }
                    .into_any()
            } else {
                view! {
                    <div class="note-list">
                        {state
                            .notes
                            .into_iter()
                            .map(|note| {
                                view! { <NoteItem note=note on_edit=on_edit on_delete=on_delete/> }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
