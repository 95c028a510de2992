// src/curriculum/mod.rs

//! Course graph built from a validated curriculum file.
//!
//! - [`prereq`] parses the comma-separated `requires` attribute.
//! - [`graph`] holds courses in declaration order with prerequisite and
//!   dependent adjacency.

pub mod graph;
pub mod prereq;

pub use graph::{Course, Curriculum};
pub use prereq::parse_prerequisites;
