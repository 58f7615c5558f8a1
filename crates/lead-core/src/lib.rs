//! # lead-core — Foundational Types for the Lead Capture Stack
//!
//! Defines the data model of the multi-step lead form and the validation
//! rules that gate it. Every other crate in the workspace depends on
//! `lead-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed option sets as enums.** Country, company size bracket, and
//!    DPO status are Rust enums with exhaustive `match` everywhere — no bare
//!    strings for select values past the validation boundary.
//!
//! 2. **Raw capture vs. normalized record.** [`FormDraft`] holds whatever
//!    the user typed (all fields optional, unknown wire fields ignored);
//!    [`LeadForm`] only exists as the output of a successful full-form
//!    validation pass and carries typed, normalized values.
//!
//! 3. **Pure validators.** Every field rule is a free function from input
//!    to either a normalized value or a [`FieldError`] carrying a machine
//!    code and the user-facing German message.
//!
//! 4. **Step ownership is disjoint.** Each of the four form steps owns a
//!    fixed subset of fields; the review step is exactly the union of all
//!    steps plus the consent flag.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`.

pub mod draft;
pub mod fields;
pub mod schema;
pub mod validate;

pub use draft::{FieldValue, FormDraft, LeadForm};
pub use fields::{CompanySize, Country, DsbStatus, FieldKey, UnknownOption};
pub use schema::{validate_form, validate_step, FieldErrors, Step};
pub use validate::{FieldError, RuleCode};
