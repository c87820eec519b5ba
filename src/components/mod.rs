//! Reusable view components.

pub mod note_form;
pub mod note_item;
pub mod note_list;
pub mod require_auth;
pub mod toast_stack;
pub mod upgrade_banner;
