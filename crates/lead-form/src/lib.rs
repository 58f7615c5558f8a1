//! # lead-form — Multi-Step Form State Machine
//!
//! The client-side state of one lead form session: current step, accumulated
//! field values, per-field errors, and the submitting/completed flags.
//!
//! ## Design
//!
//! All mutation goes through [`FormAction`], a tagged-union command type
//! processed by the pure [`reduce`] function, so state changes are auditable
//! and testable as a reducer. [`MultiStepForm`] wraps the reducer with the
//! named operations the UI calls (`set_field`, `next_step`, `submit`, ...).
//!
//! The single suspension point is the network call inside `submit`; the
//! `is_submitting` flag gates re-entrancy (single-flight use — the UI must
//! not start a second submission while one is in flight).

pub mod endpoint;
pub mod machine;

pub use endpoint::{HttpSubmitEndpoint, SubmitEndpoint, SubmitError};
pub use machine::{reduce, FormAction, FormState, MultiStepForm};
