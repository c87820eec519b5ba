//! Network layer: HTTP gateway, typed API clients, and wire types.
//!
//! DESIGN
//! ======
//! All requests flow through `http`, which attaches the bearer token and
//! classifies responses into the closed `ApiError` taxonomy once, at the
//! boundary. The `auth_api` and `notes_api` modules are thin typed wrappers
//! over specific endpoints.

pub mod auth_api;
pub mod http;
pub mod notes_api;
pub mod probe;
pub mod types;
