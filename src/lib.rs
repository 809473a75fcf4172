#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants for magnetostatics in SI units.
pub mod constants;
/// Shared numerical primitives (vectors, sample spacing, spline interpolation).
pub mod math;
/// Error types shared across the crate.
pub mod errors;
/// Discretized coil filaments and their metadata.
pub mod filament;
/// Geometric transforms on filaments.
pub mod geometry;
/// Biot-Savart field evaluation.
pub mod field;
/// Ordered collections of filaments.
pub mod coilset;
/// File interchange formats for coil sets.
pub mod io;

/// Common exports for building coil workflows.
pub mod prelude;
