//! Mathematical operations using SIMD-accelerated `glam` types.
//!
//! This module re-exports the types and functions from the [`glam`] crate.
//! Layout code mostly uses [`Vec2`] for positions, offsets, and sizes.
//!
//! # Examples
//!
//! ```
//! use vexel_core::math::Vec2;
//!
//! let pen = Vec2::new(12.0, 0.0);
//! let advanced = pen + Vec2::new(7.5, 0.0);
//! assert_eq!(advanced.x, 19.5);
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::*;
