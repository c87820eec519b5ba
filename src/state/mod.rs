//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `notes`, `toasts`) so individual
//! components can depend on small focused models. Each state struct is a
//! plain value with pure transition methods, provided to the view tree as
//! an `RwSignal` context from the app root; the async orchestration lives
//! next to it as free functions over the signal. Everything runs on the
//! single browser event loop, so there is no locking; last write wins.

pub mod auth;
pub mod notes;
pub mod toasts;
