//! HTTP gateway for the notes API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning a network error since the API is only reachable from the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Responses are classified once, here, into the closed [`ApiError`] enum:
//! 401 clears the stored session and maps to `Unauthorized`, 403 to
//! `Forbidden`, other non-2xx statuses to `RequestFailed` with the best
//! available message from the error body. Fetch-level failures map to
//! `Network`. No retries, no timeouts on this path.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

#[cfg(feature = "hydrate")]
use crate::util::session;

/// Failure taxonomy for API calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 401: the session has been cleared; the caller should redirect to login.
    #[error("Session expired. Please log in again.")]
    Unauthorized,
    /// 403: surfaced as the plan-limit notice on note creation.
    #[error("{message}")]
    Forbidden { message: String },
    /// Any other non-2xx response.
    #[error("{message}")]
    RequestFailed { status: u16, message: String },
    /// The request never produced an HTTP response.
    #[error("{message}")]
    Network { message: String },
}

impl ApiError {
    /// HTTP status carried by the error, when one exists.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Forbidden { .. } => Some(403),
            ApiError::RequestFailed { status, .. } => Some(*status),
            ApiError::Network { .. } => None,
        }
    }

    /// Text to show the user: the server-provided message for HTTP errors,
    /// `fallback` for transport failures that carry no useful message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Network { .. } => fallback.to_owned(),
            other => other.to_string(),
        }
    }
}

/// Pull a human-readable message out of a JSON error body.
/// Prefers `message`, then `error`; `None` means the caller should fall
/// back to the raw body text.
pub(crate) fn error_message_from_json(value: &serde_json::Value) -> Option<String> {
    for key in ["message", "error"] {
        if let Some(text) = value.get(key).and_then(serde_json::Value::as_str) {
            return Some(text.to_owned());
        }
    }
    None
}

/// Map a non-2xx status plus extracted message to an [`ApiError`].
pub(crate) fn classify_error(status: u16, message: String) -> ApiError {
    let message = if message.trim().is_empty() {
        format!("Request failed with status {status}")
    } else {
        message
    };
    match status {
        401 => ApiError::Unauthorized,
        403 => ApiError::Forbidden { message },
        _ => ApiError::RequestFailed { status, message },
    }
}

/// Whether a `Content-Type` header value declares a JSON body.
pub(crate) fn is_json(content_type: &str) -> bool {
    content_type.contains("application/json")
}

#[cfg(feature = "hydrate")]
fn builder(method: &str, path: &str) -> gloo_net::http::RequestBuilder {
    use gloo_net::http::Request;

    let url = crate::config::url(path);
    match method {
        "POST" => Request::post(&url),
        "PUT" => Request::put(&url),
        "DELETE" => Request::delete(&url),
        _ => Request::get(&url),
    }
}

/// Issue a request and classify the response status.
///
/// Attaches `Authorization: Bearer <token>` iff a token is stored. A 401
/// clears the stored session regardless of the response body.
#[cfg(feature = "hydrate")]
async fn send(
    method: &str,
    path: &str,
    body: Option<&serde_json::Value>,
) -> Result<gloo_net::http::Response, ApiError> {
    let mut builder = builder(method, path);

    if let Some(token) = session::load() {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }

    let request = match body {
        Some(value) => builder.json(value),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network { message: e.to_string() })?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network { message: e.to_string() })?;

    if response.status() == 401 {
        session::clear();
        return Err(ApiError::Unauthorized);
    }
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    Ok(response)
}

/// Extract the best message from an error response body.
#[cfg(feature = "hydrate")]
async fn error_from_response(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let content_type = response.headers().get("content-type");
    let message = if content_type.as_deref().is_some_and(is_json) {
        match response.json::<serde_json::Value>().await {
            Ok(value) => error_message_from_json(&value).unwrap_or_else(|| value.to_string()),
            Err(_) => String::new(),
        }
    } else {
        response.text().await.unwrap_or_default()
    };
    classify_error(status, message)
}

/// Request expecting a JSON response body.
pub async fn request_json<T: serde::de::DeserializeOwned>(
    method: &'static str,
    path: &str,
    body: Option<&serde_json::Value>,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = send(method, path, body).await?;
        let status = response.status();
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::RequestFailed {
                status,
                message: e.to_string(),
            })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(server_stub())
    }
}

/// Request expecting a plain-text response body (the auth endpoints).
pub async fn request_text(
    method: &'static str,
    path: &str,
    body: Option<&serde_json::Value>,
) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = send(method, path, body).await?;
        let status = response.status();
        response.text().await.map_err(|e| ApiError::RequestFailed {
            status,
            message: e.to_string(),
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(server_stub())
    }
}

/// Request where success carries no body (204 on delete).
pub async fn request_empty(method: &'static str, path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(method, path, None).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path);
        Err(server_stub())
    }
}

#[cfg(not(feature = "hydrate"))]
fn server_stub() -> ApiError {
    ApiError::Network {
        message: "not available on server".to_owned(),
    }
}
