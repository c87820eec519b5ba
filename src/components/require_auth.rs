//! Route guard for authenticated pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Gates children on authentication state.
///
/// While the startup storage check is pending, renders a neutral spinner.
/// Once resolved, renders the children if a user is present, otherwise
/// redirects to `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate(
                "/login",
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    view! {
        <Show
            when=move || {
                let state = auth.get();
                !state.loading && state.is_authenticated()
            }
            fallback=|| {
                view! {
                    <div class="route-placeholder">
                        <span class="spinner"></span>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
