//! Top-level route pages.

pub mod login;
pub mod notes;
pub mod register;
