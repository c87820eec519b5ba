//! Startup connectivity probe.
//!
//! Fires one best-effort request at the backend when the app boots so that
//! an unreachable or misconfigured API shows up in the console immediately
//! instead of as a silent hang on first login. Outcome is logged only,
//! never fatal, and independent of the main request path.

/// Probe timeout. The main request path has no timeout; this cap applies
/// to the startup check only.
#[cfg(feature = "hydrate")]
const PROBE_TIMEOUT_MS: u64 = 5_000;

/// Spawn the backend probe as a fire-and-forget task.
pub fn spawn_startup_probe() {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(check_backend());
}

/// POST empty credentials at `/auth/login` and race the response against a
/// timeout. Any HTTP status (even 400/401) means the backend is reachable.
#[cfg(feature = "hydrate")]
async fn check_backend() {
    use futures::future::{Either, select};
    use leptos::logging::{log, warn};

    let body = serde_json::json!({"email": "", "password": ""});
    let request = match gloo_net::http::Request::post(&crate::config::url("/auth/login")).json(&body)
    {
        Ok(request) => request,
        Err(e) => {
            warn!("backend probe could not be built: {e}");
            return;
        }
    };

    let response = Box::pin(request.send());
    let timeout = Box::pin(gloo_timers::future::sleep(
        std::time::Duration::from_millis(PROBE_TIMEOUT_MS),
    ));

    match select(response, timeout).await {
        Either::Left((Ok(response), _)) => {
            log!("backend reachable (HTTP {})", response.status());
        }
        Either::Left((Err(e), _)) => {
            warn!("backend unreachable: {e}");
        }
        Either::Right(((), _)) => {
            warn!("backend probe timed out after {PROBE_TIMEOUT_MS}ms");
        }
    }
}
