//! # lead-sheets — Spreadsheet Sink Adapter
//!
//! Append-only interface to the external row store (a Google Sheet). The
//! rest of the stack sees only the [`LeadSink`] trait and the closed
//! [`SinkErrorKind`] taxonomy; everything spreadsheet-specific stays here.
//!
//! ## Design
//!
//! - The client is an explicitly constructed, injectable handle
//!   ([`SheetsClient`]) built once from [`SheetsConfig`] — no module-level
//!   singleton. It is cheap to clone and safe for concurrent reuse.
//! - Append is the only write operation the pipeline uses; no partial-row
//!   writes exist at this boundary. Failures are never retried here.
//! - Header provisioning ([`SheetsClient::write_headers`]) and the access
//!   check are out-of-band setup operations for the operator CLI.

pub mod client;
pub mod config;
pub mod error;
pub mod row;

pub use client::{LeadSink, SheetsClient};
pub use config::{ConfigError, SheetsConfig};
pub use error::{SheetsError, SinkErrorKind};
pub use row::{LeadRow, HEADERS};
