//! Straight-line distances.
//!
//! Drive time equals distance throughout the crate (unit speed).

mod euclidean;

pub use euclidean::{euclidean, ORIGIN};
