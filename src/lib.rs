//! sc2conv - batch front end for the `sc2-quantize` converter.
//!
//! File discovery, output naming, YAML profiles and PNG previews live here;
//! the conversion itself is in the `sc2-quantize` crate.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
