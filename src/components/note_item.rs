//! Single note card with edit/delete actions.

use leptos::prelude::*;

use crate::net::types::Note;
use crate::state::auth::AuthState;

/// One note in the list. The delete control is rendered for admins only;
/// this is display gating; the server rejects the call for everyone else.
#[component]
pub fn NoteItem(note: Note, on_edit: Callback<Note>, on_delete: Callback<i64>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let id = note.id;
    let edit_target = note.clone();
    let has_content = !note.content.is_empty();

    view! {
        <div class="note-card">
            <h3 class="note-card__title">{note.title.clone()}</h3>
            <Show when=move || has_content>
                <p class="note-card__content">{note.content.clone()}</p>
            </Show>
            <div class="note-card__actions">
                <button
                    class="btn btn--primary btn--sm"
                    on:click=move |_| on_edit.run(edit_target.clone())
                >
                    "Edit"
                </button>
                <Show when=move || auth.get().is_admin()>
                    <button
                        class="btn btn--danger btn--sm"
                        on:click=move |_| on_delete.run(id)
                    >
                        "Delete"
                    </button>
                </Show>
            </div>
        </div>
    }
}
