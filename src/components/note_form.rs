//! Create/edit note form.
//!
//! The field signals are owned by the notes page so the page controller can
//! fill them when editing starts and clear them after a successful create,
//! the same way the board-creation dialog shares its name signal.

use leptos::prelude::*;

/// Title and content inputs with a submit button that doubles as the
/// in-flight guard: it is disabled while a save is running or the title is
/// blank.
#[component]
pub fn NoteForm(
    title: RwSignal<String>,
    content: RwSignal<String>,
    editing: Signal<bool>,
    submitting: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let disabled = move || submitting.get() || title.get().trim().is_empty();

    let submit_label = move || {
        if submitting.get() {
            if editing.get() { "Updating..." } else { "Creating..." }
        } else if editing.get() {
            "Update"
        } else {
            "Create"
        }
    };

    view! {
        <form on:submit=move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            on_submit.run(());
        }>
            <div class="form-group">
                <label class="form-label">"Title"</label>
                <input
                    class="form-input"
                    type="text"
                    placeholder="Note title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                    required
                />
            </div>

            <div class="form-group">
                <label class="form-label">"Content"</label>
                <textarea
                    class="form-input"
                    placeholder="Write your note..."
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                    rows=4
                ></textarea>
            </div>

            <div class="form-actions">
                <button class="btn btn--primary" type="submit" disabled=disabled>
                    <Show when=move || submitting.get()>
                        <span class="spinner"></span>
                    </Show>
                    {submit_label}
                </button>

                <Show when=move || editing.get()>
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                </Show>
            </div>
        </form>
    }
}
