//! # Route Modules
//!
//! One module per API surface area. Routers are assembled into the
//! application in `crate::app`.

pub mod submit;
