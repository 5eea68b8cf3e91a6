//! Page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the portfolio sections while reading/writing shared
//! state from Leptos context providers installed by `App`.

pub mod about;
pub mod back_to_top;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod skills;
pub mod theme_toggle;
