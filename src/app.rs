//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::require_auth::RequireAuth;
use crate::components::toast_stack::ToastStack;
use crate::pages::{login::LoginPage, notes::NotesPage, register::RegisterPage};
use crate::state::{auth::AuthState, notes::NotesState, toasts::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth, notes, and toast state contexts, runs the one-time
/// startup sequence, and sets up client-side routing. The notes route is
/// gated behind [`RequireAuth`]; everything else redirects to `/notes`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let notes = RwSignal::new(NotesState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(notes);
    provide_context(toasts);

    // One-time startup: base URL warning, session hydration from storage,
    // and the fire-and-forget backend probe.
    Effect::new(move || {
        crate::config::warn_if_unconfigured();
        crate::state::auth::init(auth);
        crate::net::probe::spawn_startup_probe();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/notes-web.css"/>
        <Title text="Notes"/>

        <ToastStack/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/notes"/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("notes")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <NotesPage/>
                            </RequireAuth>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
