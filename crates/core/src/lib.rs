//! Domain types for the network console UI modules.
//!
//! Pure data and validation only; no I/O and no framework types live here.

pub mod error;
pub mod role;
