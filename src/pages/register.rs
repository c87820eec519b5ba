//! Registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::toasts::{self, ToastState};

/// Registration page: like login, plus an optional invite code that joins
/// an existing tenant instead of starting a fresh one.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let invite_code = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let code = invite_code.get_untracked();
            let code = (!code.trim().is_empty()).then_some(code);
            let result = crate::state::auth::register(
                auth,
                &email.get_untracked(),
                &password.get_untracked(),
                code.as_deref(),
            )
            .await;
            match result {
                Ok(()) => {
                    toasts::success(toasts, "Account created");
                    navigate("/notes", NavigateOptions::default());
                }
                Err(e) => {
                    toasts::error(
                        toasts,
                        e.user_message("Registration failed. Please try again."),
                    );
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <header class="auth-card__header">
                    <h1 class="auth-card__title">"Create account"</h1>
                    <p class="auth-card__subtitle">"Start taking notes"</p>
                </header>

                <form on:submit=submit>
                    <div class="form-group">
                        <label class="form-label">"Email"</label>
                        <input
                            class="form-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label class="form-label">"Password"</label>
                        <div class="password-wrapper">
                            <input
                                class="form-input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="••••••••"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                                required
                            />
                            <button
                                class="password-toggle"
                                type="button"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "◠" } else { "◉" }}
                            </button>
                        </div>
                    </div>

                    <div class="form-group">
                        <label class="form-label">"Invite code (optional)"</label>
                        <input
                            class="form-input"
                            type="text"
                            placeholder="Enter code to join a team"
                            prop:value=move || invite_code.get()
                            on:input=move |ev| invite_code.set(event_target_value(&ev))
                        />
                    </div>

                    <button
                        class="btn btn--primary btn--full"
                        type="submit"
                        disabled=move || submitting.get()
                    >
                        <Show when=move || submitting.get()>
                            <span class="spinner"></span>
                        </Show>
                        {move || {
                            if submitting.get() { "Creating account..." } else { "Create account" }
                        }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    "Already have an account? " <a href="/login" class="link">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
