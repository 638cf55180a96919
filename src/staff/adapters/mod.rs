//! Adapter implementations for the staff directory port.

pub mod memory;
