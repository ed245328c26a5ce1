//!
//! Problem model for laying out rectangular designs on a single print sheet.
//!
//! This crate holds everything about the problem that is not a search heuristic:
//! validated input entities, the occupancy bookkeeping, statistics, and the external
//! (JSON) representation of requests and results.
//! The heuristics themselves live in the `ffg` crate.
//!

/// Axis-aligned rectangles and right-angle rotations
pub mod geometry;

/// Entities to model a sheet layout problem and its solution
pub mod entities;

/// Tracking of the regions of the sheet that are already taken
pub mod occupancy;

/// Utilization statistics of an arrangement
pub mod stats;

/// Errors raised when a request is structurally invalid
pub mod error;

/// Importing requests into and exporting results out of this library
pub mod io;

/// Sheet size recommendations
pub mod suggest;

/// Helper functions which do not belong to any specific module
pub mod util;
