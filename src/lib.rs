//! # shift-routing
//!
//! Partitions pickup-and-delivery loads into driver schedules so that no
//! driver's drive time, with a reserved return to the origin, exceeds the
//! shift length. Uses a greedy nearest-neighbor heuristic; the driver count
//! is small but not guaranteed minimal.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Load, Schedule, Solution)
//! - [`distance`] — Euclidean distance and the default origin
//! - [`evaluation`] — Per-step feasibility and solution auditing
//! - [`constructive`] — The nearest-neighbor scheduler and its policies
//! - [`validation`] — Checks run on loads before scheduling
//! - [`config`] — Origin, shift length, and policy
//! - [`io`] — Load file parsing and schedule rendering
//! - [`fixtures`] — Seeded random load sets

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod fixtures;
pub mod io;
pub mod models;
pub mod validation;

pub use error::{Error, Result};
