//! Token decoding and durable session storage.

pub mod session;
pub mod token;
