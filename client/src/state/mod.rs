//! Client-side state machines.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module owns one concern of the page and stays free of DOM access so
//! it can be driven directly from tests. Components hold these in signals
//! provided through Leptos context.

pub mod form;
pub mod nav;
pub mod projects;
pub mod reveal;
pub mod theme;
