//! Common utilities for the Trellis converter.
//!
//! This crate provides shared infrastructure used by every Trellis component:
//! - **Warning System** - deduplicated diagnostics for values that fell back to a default

pub mod warning;
