//! Vexel Core
//!
//! This crate contains the shared foundation for the Vexel text stack:
//! math re-exports, geometry primitives, optimized collection aliases,
//! and logging setup.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
