//! Step definitions for task reassignment scenarios.

pub mod then;
pub mod when;
pub mod world;
