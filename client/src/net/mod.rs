//! Networking for the contact form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `submit` defines the message payload and the submitter seam the form
//! calls into, plus the simulated and HTTP implementations.

pub mod submit;
