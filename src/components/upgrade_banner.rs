//! Informational banner shown when the tenant's note limit is reached.

use leptos::prelude::*;

const DEFAULT_MESSAGE: &str = "You have reached the note limit for the FREE plan. \
    Contact your administrator to upgrade to PRO for unlimited notes.";

/// Info-only banner: there is deliberately NO upgrade action here. Tenant
/// upgrade is a backend-only operation not exposed to this client.
#[component]
pub fn UpgradeBanner(message: String) -> impl IntoView {
    let text = if message.trim().is_empty() {
        DEFAULT_MESSAGE.to_owned()
    } else {
        message
    };

    view! {
        <div class="upgrade-banner">
            <p class="upgrade-banner__text">{text}</p>
        </div>
    }
}
