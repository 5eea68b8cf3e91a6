//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from state and
//! component logic to improve reuse and testability.

pub mod dom;
pub mod preference_store;
pub mod reveal_observer;
pub mod ripple;
pub mod surface;
pub mod system_scheme;
pub mod throttle;
pub mod typewriter;
