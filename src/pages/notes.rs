//! Notes page: page-level orchestration of the CRUD flows.
//!
//! Fetches the list on mount, then patches the local cache from each
//! mutation's server reply. A 401 from any call redirects to login; a 403
//! on create surfaces the plan-limit banner with the server message
//! verbatim; every other failure becomes a transient toast. In-flight
//! requests are not cancelled on logout or navigation; a superseded reply
//! may still land, which is accepted for this single-user page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::note_form::NoteForm;
use crate::components::note_list::NoteList;
use crate::components::upgrade_banner::UpgradeBanner;
use crate::net::http::ApiError;
use crate::net::notes_api;
use crate::net::types::{Note, NoteDraft};
use crate::state::auth::AuthState;
use crate::state::notes::NotesState;
use crate::state::toasts::{self, ToastState};

/// Authenticated notes page: header with session info, create/edit form,
/// optional upgrade banner, and the note list.
#[component]
pub fn NotesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notes = expect_context::<RwSignal<NotesState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    // Form fields are owned here so edit-start can fill them and a
    // successful create can clear them.
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let editing = Signal::derive(move || notes.get().editing.is_some());
    let submitting_signal: Signal<bool> = submitting.into();

    // Fetch the note list on mount.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match notes_api::list().await {
                    Ok(list) => notes.update(|s| s.set_notes(list)),
                    Err(ApiError::Unauthorized) => {
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(e) => {
                        notes.update(NotesState::load_failed);
                        toasts::error(toasts, e.user_message("Failed to load notes"));
                    }
                }
            });
        });
    }

    let on_submit = {
        let navigate = navigate.clone();
        Callback::new(move |()| {
            if submitting.get_untracked() {
                return;
            }
            let draft = NoteDraft {
                title: title.get_untracked().trim().to_owned(),
                content: content.get_untracked().trim().to_owned(),
            };
            if draft.title.is_empty() {
                return;
            }
            submitting.set(true);

            let edit_target = notes.get_untracked().editing;
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match edit_target {
                    None => match notes_api::create(&draft).await {
                        Ok(note) => {
                            notes.update(|s| s.insert(note));
                            toasts::success(toasts, "Note created");
                            title.set(String::new());
                            content.set(String::new());
                        }
                        Err(e) => {
                            toasts::error(toasts, e.user_message("Failed to create note"));
                            match e {
                                ApiError::Forbidden { message } => {
                                    notes.update(|s| s.show_upgrade(message));
                                }
                                ApiError::Unauthorized => {
                                    navigate("/login", NavigateOptions::default());
                                }
                                _ => {}
                            }
                        }
                    },
                    Some(original) => match notes_api::update(original.id, &draft).await {
                        Ok(updated) => {
                            notes.update(|s| {
                                s.replace(updated);
                                s.cancel_edit();
                            });
                            toasts::success(toasts, "Note updated");
                            title.set(String::new());
                            content.set(String::new());
                        }
                        Err(e) => {
                            toasts::error(toasts, e.user_message("Failed to update note"));
                            if matches!(e, ApiError::Unauthorized) {
                                navigate("/login", NavigateOptions::default());
                            }
                        }
                    },
                }
                submitting.set(false);
            });
        })
    };

    let on_edit = Callback::new(move |note: Note| {
        title.set(note.title.clone());
        content.set(note.content.clone());
        notes.update(|s| s.start_edit(note));
    });

    let on_cancel = Callback::new(move |()| {
        notes.update(NotesState::cancel_edit);
        title.set(String::new());
        content.set(String::new());
    });

    let on_delete = {
        let navigate = navigate.clone();
        Callback::new(move |id: i64| {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match notes_api::delete(id).await {
                    Ok(()) => {
                        notes.update(|s| s.remove(id));
                        toasts::success(toasts, "Note deleted");
                    }
                    Err(e) => {
                        toasts::error(toasts, e.user_message("Failed to delete note"));
                        if matches!(e, ApiError::Unauthorized) {
                            navigate("/login", NavigateOptions::default());
                        }
                    }
                }
            });
        })
    };

    let on_logout = move |_| {
        crate::state::auth::logout(auth);
        toasts::success(toasts, "Logged out");
        navigate("/login", NavigateOptions::default());
    };

    let session_info = move || {
        auth.get().user.map_or(String::new(), |user| {
            format!(
                "Tenant {} · {}",
                user.tenant_id,
                if user.is_admin() { "Admin" } else { "Member" }
            )
        })
    };

    view! {
        <div class="notes-page">
            <header class="notes-header">
                <div class="notes-header__content">
                    <div>
                        <h1>"Notes"</h1>
                        <p class="notes-header__info">{session_info}</p>
                    </div>
                    <button class="btn btn--outline" on:click=on_logout>
                        "Sign out"
                    </button>
                </div>
            </header>

            <div class="notes-container">
                {move || {
                    notes
                        .get()
                        .upgrade_notice
                        .map(|message| view! { <UpgradeBanner message=message/> })
                }}

                <div class="create-note-card">
                    <h2 class="create-note-card__title">
                        {move || if editing.get() { "Edit note" } else { "New note" }}
                    </h2>
                    <NoteForm
                        title=title
                        content=content
                        editing=editing
                        submitting=submitting_signal
                        on_submit=on_submit
                        on_cancel=on_cancel
                    />
                </div>

                <div class="section-header">
                    <h2 class="section-title">
                        "Your notes "
                        <span class="section-badge">{move || notes.get().notes.len()}</span>
                    </h2>
                </div>

                <NoteList on_edit=on_edit on_delete=on_delete/>
            </div>
        </div>
    }
}
