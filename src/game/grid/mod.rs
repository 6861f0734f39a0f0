//! Grid engine.
//!
//! This module organizes tile storage, the simultaneous update pass and explosion propagation.

pub mod grid;
pub mod explosion;

pub use grid::*;
